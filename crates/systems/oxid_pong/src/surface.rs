// crates/systems/oxid_pong/src/surface.rs

use crate::entities::Rect;
use crate::error::PongError;
use crate::palette::{ColorIndex, PALETTE_SIZE};

/// Una página de video en modo 4: un índice de color por pixel,
/// empaquetados de a dos por unidad de 16 bits (la VRAM solo acepta escrituras de 16 bits).
///
/// El empaquetado es un detalle interno: afuera solo existen `set_pixel` y `fill_rect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: usize,
    height: usize,
    units: Vec<u16>,
}

impl Surface {
    /// Reserva una página completa (se hace una sola vez, al arrancar)
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            units: vec![0; (width * height).div_ceil(2)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Escribe un pixel. Fuera de rango es un error y el buffer queda intacto.
    pub fn set_pixel(&mut self, row: i32, col: i32, color: ColorIndex) -> Result<(), PongError> {
        if !self.contains(row, col) {
            return Err(PongError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        self.put(row as usize, col as usize, color);
        Ok(())
    }

    /// Read-modify-write de la unidad compartida, preservando la otra mitad.
    #[inline(always)]
    fn put(&mut self, row: usize, col: usize, color: ColorIndex) {
        let index = row * self.width + col;
        let unit = &mut self.units[index >> 1];
        if index & 1 == 1 {
            // Pixel impar -> byte alto
            *unit = ((color as u16) << 8) | (*unit & 0x00FF);
        } else {
            *unit = (*unit & 0xFF00) | (color as u16);
        }
    }

    /// Lee un pixel; `None` fuera de rango
    pub fn pixel(&self, row: i32, col: i32) -> Option<ColorIndex> {
        if !self.contains(row, col) {
            return None;
        }
        let index = row as usize * self.width + col as usize;
        let unit = self.units[index >> 1];
        Some(if index & 1 == 1 { (unit >> 8) as u8 } else { (unit & 0xFF) as u8 })
    }

    /// Pinta un rectángulo recortado a los bordes de la página.
    /// Lo que cae fuera de la pantalla simplemente no se escribe.
    pub fn fill_rect(&mut self, rect: Rect, color: ColorIndex) {
        let top = rect.top.max(0);
        let left = rect.left.max(0);
        let bottom = rect.bottom().min(self.height as i32);
        let right = rect.right().min(self.width as i32);

        for row in top..bottom {
            for col in left..right {
                self.put(row as usize, col as usize, color);
            }
        }
    }

    /// Pinta la página completa de un color
    pub fn clear(&mut self, color: ColorIndex) {
        let c = color as u16;
        self.units.fill((c << 8) | c);
    }

    /// Convierte la página a 0x00RRGGBB para el scan-out del host.
    /// `out` debe tener `width * height` elementos.
    pub fn render_rgb(&self, lut: &[u32; PALETTE_SIZE], out: &mut [u32]) {
        for (index, pixel) in out.iter_mut().take(self.width * self.height).enumerate() {
            let unit = self.units[index >> 1];
            let color = if index & 1 == 1 { unit >> 8 } else { unit & 0xFF };
            *pixel = lut[color as usize];
        }
    }
}
