// crates/oxid_display/src/lib.rs

use log::debug;
use minifb::{Key, Scale, ScaleMode, Window, WindowOptions};
use oxide_core::{shown_page, with_page, DisplayControl, DisplayPort, Page, TOTAL_LINES, VISIBLE_LINES};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

// ============================================================================
//  CONFIGURACIÓN Y ERRORES
// ============================================================================

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Window Error: {0}")]
    Window(#[from] minifb::Error),
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub scale: WindowScale,
    pub resizable: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Oxide-Pong".to_string(),
            width: 240,
            height: 160,
            scale: WindowScale::X4,
            resizable: false,
        }
    }
}

/// Abstracción de escalas para no depender directamente de los enums de minifb fuera de esta lib
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowScale {
    X1, X2, X4, X8, FitScreen,
}

impl WindowScale {
    /// Traduce un factor numérico (1, 2, 4, 8). Cualquier otro valor ajusta a pantalla.
    pub fn from_factor(factor: u8) -> Self {
        match factor {
            1 => WindowScale::X1,
            2 => WindowScale::X2,
            4 => WindowScale::X4,
            8 => WindowScale::X8,
            _ => WindowScale::FitScreen,
        }
    }
}

impl From<WindowScale> for Scale {
    fn from(s: WindowScale) -> Self {
        match s {
            WindowScale::X1 => Scale::X1,
            WindowScale::X2 => Scale::X2,
            WindowScale::X4 => Scale::X4,
            WindowScale::X8 => Scale::X8,
            WindowScale::FitScreen => Scale::FitScreen,
        }
    }
}

// ============================================================================
//  VENTANA (SCAN-OUT DEL HOST)
// ============================================================================

pub struct OxidDisplay {
    window: Window,

    // Dimensiones nativas del sistema (ej. 240x160)
    width: usize,
    height: usize,

    // Performance stats
    pub fps: usize,
    frame_count: usize,
    last_fps_check: Instant,
}

impl OxidDisplay {
    /// Crea una nueva ventana lista para renderizar
    pub fn new(config: DisplayConfig) -> Result<Self, DisplayError> {
        let opts = WindowOptions {
            scale: config.scale.into(),
            resize: config.resizable,
            scale_mode: ScaleMode::AspectRatioStretch, // Mantiene aspect ratio al estirar
            ..WindowOptions::default()
        };

        let mut window = Window::new(&config.title, config.width, config.height, opts)?;

        // El ritmo lo marca el VBlank (VBlankClock), no minifb
        window.limit_update_rate(None);

        Ok(Self {
            window,
            width: config.width,
            height: config.height,
            fps: 0,
            frame_count: 0,
            last_fps_check: Instant::now(),
        })
    }

    /// Presenta un frame ya convertido a 0x00RRGGBB.
    /// Devuelve `Some(fps)` cuando hay una medición nueva (una vez por segundo).
    pub fn update(&mut self, buffer: &[u32]) -> Result<Option<usize>, DisplayError> {
        self.window
            .update_with_buffer(buffer, self.width, self.height)?;

        // Calcular FPS reales
        self.frame_count += 1;
        if self.last_fps_check.elapsed().as_secs() >= 1 {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.last_fps_check = Instant::now();
            return Ok(Some(self.fps));
        }
        Ok(None)
    }

    /// Verifica si la ventana sigue abierta (para el loop principal)
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Cambiar título dinámicamente (ej. "Oxide-Pong - 3 : 1 - 60 FPS")
    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// Acceso a la ventana para que oxid_input lea el teclado
    pub fn window(&self) -> &Window {
        &self.window
    }
}

// ============================================================================
//  RELOJ DE VBLANK (DisplayPort DEL HOST)
// ============================================================================

/// Simula el contador de scanline del LCD a partir del tiempo real
/// y guarda el registro de control de display.
pub struct VBlankClock {
    origin: Instant,
    line_nanos: u128,
    control: DisplayControl,
}

impl VBlankClock {
    pub fn new(refresh_hz: f64) -> Self {
        Self {
            origin: Instant::now(),
            line_nanos: line_period_nanos(refresh_hz),
            control: DisplayControl::MODE4 | DisplayControl::BG2,
        }
    }

    /// Valor actual del registro de control
    pub fn control(&self) -> DisplayControl {
        self.control
    }

    /// Página que el LCD está mostrando
    pub fn visible_page(&self) -> Page {
        shown_page(self.control)
    }

    fn elapsed_nanos(&self) -> u128 {
        self.origin.elapsed().as_nanos()
    }
}

impl DisplayPort for VBlankClock {
    fn scanline(&mut self) -> u16 {
        scanline_at(self.elapsed_nanos(), self.line_nanos)
    }

    fn select_page(&mut self, page: Page) {
        self.control = with_page(self.control, page);
        debug!("DISPCNT = {:#06X} ({:?} visible)", self.control.bits(), page);
    }

    fn relax(&mut self) {
        // Dormir si falta bastante para el próximo borde (inicio o fin de VBlank),
        // y hacer spin-wait el último tramo para no perder precisión.
        let line = self.scanline();
        let next_edge = if line < VISIBLE_LINES { VISIBLE_LINES } else { TOTAL_LINES };
        let remaining = u128::from(next_edge - line) * self.line_nanos;
        if remaining > 1_000_000 {
            thread::sleep(Duration::from_nanos((remaining - 500_000) as u64));
        } else {
            std::hint::spin_loop();
        }
    }
}

/// Duración de una scanline en nanosegundos para un refresco dado
pub fn line_period_nanos(refresh_hz: f64) -> u128 {
    let hz = if refresh_hz > 0.0 { refresh_hz } else { oxide_core::NATIVE_REFRESH_HZ };
    ((1_000_000_000.0 / hz) / f64::from(TOTAL_LINES)).max(1.0) as u128
}

/// Línea que el LCD está escaneando tras `elapsed` nanosegundos
pub fn scanline_at(elapsed: u128, line_nanos: u128) -> u16 {
    ((elapsed / line_nanos.max(1)) % u128::from(TOTAL_LINES)) as u16
}

// ============================================================================
//  UTILIDADES DE PIXELES (HELPERS)
// ============================================================================

/// Convierte componentes RGB (0-255) a formato u32 compatible con minifb
#[inline(always)]
pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Convierte un color BGR555 (5 bits por canal) a 0x00RRGGBB
#[inline(always)]
pub fn rgb555(color: u16) -> u32 {
    // Expande 5 bits a 8 replicando los bits altos (31 -> 255)
    let expand = |c: u16| -> u8 {
        let c = (c & 0x1F) as u8;
        (c << 3) | (c >> 2)
    };
    rgb(expand(color), expand(color >> 5), expand(color >> 10))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb555_expansion() {
        assert_eq!(rgb555(0x0000), 0x000000);
        assert_eq!(rgb555(0x7FFF), 0xFFFFFF);
        assert_eq!(rgb555(0x001F), 0xFF0000); // rojo en los bits bajos
        assert_eq!(rgb555(0x7C00), 0x0000FF); // azul en los bits altos
        // Gris (15,15,15)
        assert_eq!(rgb555((15 << 10) | (15 << 5) | 15), rgb(0x7B, 0x7B, 0x7B));
    }

    #[test]
    fn test_scanline_wraps_every_frame() {
        let line = 1_000;
        assert_eq!(scanline_at(0, line), 0);
        assert_eq!(scanline_at(159 * line + 999, line), 159);
        assert_eq!(scanline_at(160 * line, line), 160);
        assert_eq!(scanline_at(228 * line, line), 0);
        assert_eq!(scanline_at(230 * line, line), 2);
    }

    #[test]
    fn test_line_period_matches_refresh() {
        // 60 Hz * 228 líneas -> ~73.1 us por línea
        assert_eq!(line_period_nanos(60.0), 73_099);
        assert_eq!(line_period_nanos(0.0), line_period_nanos(oxide_core::NATIVE_REFRESH_HZ));
    }

    #[test]
    fn test_clock_tracks_show_back() {
        let mut clock = VBlankClock::new(60.0);
        assert_eq!(clock.visible_page(), Page::Front);
        clock.select_page(Page::Back);
        assert_eq!(clock.visible_page(), Page::Back);
        assert!(clock.control().contains(DisplayControl::MODE4 | DisplayControl::BG2));
        clock.select_page(Page::Front);
        assert!(!clock.control().contains(DisplayControl::SHOW_BACK));
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(WindowScale::from_factor(2), WindowScale::X2);
        assert_eq!(WindowScale::from_factor(3), WindowScale::FitScreen);
    }
}
