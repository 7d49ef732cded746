// crates/systems/oxid_pong/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PongError {
    #[error("Pixel ({row}, {col}) out of bounds for {width}x{height} surface")]
    OutOfBounds {
        row: i32,
        col: i32,
        width: usize,
        height: usize,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Palette is full ({0} entries)")]
    PaletteFull(usize),
    #[error("Color channel {channel} = {value} out of range (0-31)")]
    ChannelOutOfRange { channel: char, value: u8 },
}
