//! Oxide-Pong: Pong de dos paletas sobre un bitmap indexado de doble página.
//!
//! El núcleo es el bucle de frames: borrar alrededor de lo que se movió,
//! simular un paso, dibujar en la página oculta, esperar el VBlank y mostrarla.
//! El hardware (contador de scanline, selector de página, botones) entra
//! por los contratos de `oxide-core` y `oxid_input`.

pub mod config;
pub mod entities;
pub mod error;
pub mod frame;
pub mod palette;
pub mod redraw;
pub mod sim;
pub mod surface;
pub mod swap;


pub use config::PongConfig;
pub use error::PongError;
pub use frame::Pong;
pub use palette::{ColorIndex, Palette};
pub use sim::BallEvents;
pub use surface::Surface;
pub use swap::{SwapController, Visibility};
