use bitflags::bitflags;

// ============================================================================
//  TIMING DEL LCD
// ============================================================================

/// Líneas visibles por frame (la zona que el LCD escanea antes del VBlank)
pub const VISIBLE_LINES: u16 = 160;

/// Líneas totales por frame (160 visibles + 68 de VBlank)
pub const TOTAL_LINES: u16 = 228;

/// Refresco nativo del LCD en Hz (~59.73)
pub const NATIVE_REFRESH_HZ: f64 = 59.7275;

// ============================================================================
//  REGISTRO DE CONTROL DE DISPLAY
// ============================================================================

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DisplayControl: u32 {
        const MODE4     = 0x0004; // Bitmap de 8 bits indexado, dos páginas
        const SHOW_BACK = 0x0010; // Página visible: 0 = front, 1 = back
        const BG2       = 0x0400; // El bitmap vive en BG2
    }
}

/// Una de las dos páginas de video. Ninguna es "especial":
/// quién se ve y quién se dibuja lo decide el controlador de swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Front,
    Back,
}

impl Page {
    /// La otra página
    pub fn other(self) -> Self {
        match self {
            Page::Front => Page::Back,
            Page::Back => Page::Front,
        }
    }

    /// Índice estable (0 = front, 1 = back) para indexar arrays de páginas
    pub fn index(self) -> usize {
        match self {
            Page::Front => 0,
            Page::Back => 1,
        }
    }
}

// ============================================================================
//  CONTRACTS (TRAITS)
// ============================================================================

/// Las dos únicas superficies de hardware que toca el núcleo del juego:
/// el contador de scanline (lectura) y el selector de página visible (escritura).
///
/// Una implementación real lee/escribe registros mapeados en memoria;
/// el host lo simula con un reloj (ver `oxid_display::VBlankClock`).
pub trait DisplayPort {
    /// Contador de línea actual (0..TOTAL_LINES). >= VISIBLE_LINES significa VBlank.
    fn scanline(&mut self) -> u16;

    /// Ordena al LCD mostrar `page` a partir del próximo frame.
    fn select_page(&mut self, page: Page);

    /// Cantidad de líneas visibles del LCD
    fn visible_lines(&self) -> u16 {
        VISIBLE_LINES
    }

    /// Se llama en cada vuelta del busy-wait de VBlank.
    /// En hardware real es un spin; el host puede dormir.
    fn relax(&mut self) {
        std::hint::spin_loop();
    }
}

/// Aplica un cambio de página sobre el valor del registro de control.
pub fn with_page(ctrl: DisplayControl, page: Page) -> DisplayControl {
    let mut out = ctrl;
    out.set(DisplayControl::SHOW_BACK, page == Page::Back);
    out
}

/// Página que muestra un valor dado del registro de control.
pub fn shown_page(ctrl: DisplayControl) -> Page {
    if ctrl.contains(DisplayControl::SHOW_BACK) {
        Page::Back
    } else {
        Page::Front
    }
}
