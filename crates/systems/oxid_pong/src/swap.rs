// crates/systems/oxid_pong/src/swap.rs

use log::debug;
use oxide_core::{DisplayPort, Page};

/// Cuál de las dos páginas está en pantalla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    FrontVisible,
    BackVisible,
}

/// Prueba de que el LCD acaba de entrar en VBlank.
/// Solo `wait_for_vertical_blank` la construye, y `swap` la consume.
#[derive(Debug)]
pub struct VBlank {
    _private: (),
}

/// Controlador del doble buffer. Siempre se dibuja en la página que NO se ve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapController {
    state: Visibility,
}

impl SwapController {
    pub fn new() -> Self {
        Self { state: Visibility::FrontVisible }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn visible_page(&self) -> Page {
        match self.state {
            Visibility::FrontVisible => Page::Front,
            Visibility::BackVisible => Page::Back,
        }
    }

    /// La página fuera de pantalla, donde se dibuja este tick
    pub fn current_draw_target(&self) -> Page {
        self.visible_page().other()
    }

    /// Muestra la página recién dibujada y devuelve la nueva página de trabajo
    /// (la que estaba visible hasta ahora).
    pub fn swap(&mut self, _vblank: VBlank, display: &mut impl DisplayPort) -> Page {
        self.state = match self.state {
            Visibility::FrontVisible => Visibility::BackVisible,
            Visibility::BackVisible => Visibility::FrontVisible,
        };
        display.select_page(self.visible_page());
        debug!("swap -> {:?}", self.state);
        self.current_draw_target()
    }
}

impl Default for SwapController {
    fn default() -> Self {
        Self::new()
    }
}

/// Busy-wait hasta el comienzo del próximo VBlank.
///
/// Primero se deja terminar un VBlank en curso, después se espera a que el
/// contador pase la última línea visible. Así hay un solo tick por VBlank
/// aunque el frame anterior haya terminado dentro de la zona de blank.
/// Sin timeout: el hardware garantiza que el contador avanza.
pub fn wait_for_vertical_blank(display: &mut impl DisplayPort) -> VBlank {
    let visible = display.visible_lines();

    while display.scanline() >= visible {
        display.relax();
    }
    while display.scanline() < visible {
        display.relax();
    }

    VBlank { _private: () }
}
