// crates/systems/oxid_pong/src/palette.rs

use crate::error::PongError;
use oxid_display::rgb555;

/// Índice de color dentro de la paleta (un byte por pixel en modo 4)
pub type ColorIndex = u8;

/// Entradas disponibles en la paleta de fondo
pub const PALETTE_SIZE: usize = 256;

/// Valor máximo de un canal (5 bits)
pub const CHANNEL_MAX: u8 = 31;

/// Empaqueta un color de 5 bits por canal como BGR555 (rojo en los bits bajos)
#[inline(always)]
pub fn bgr555(r: u8, g: u8, b: u8) -> u16 {
    ((b as u16) << 10) | ((g as u16) << 5) | (r as u16)
}

/// Paleta append-only: cada color registrado recibe el siguiente índice libre.
/// Se llena una sola vez al arrancar.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<u16>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(PALETTE_SIZE),
        }
    }

    /// Agrega un color (canales 0-31) y devuelve su índice.
    pub fn register_color(&mut self, r: u8, g: u8, b: u8) -> Result<ColorIndex, PongError> {
        for (channel, value) in [('r', r), ('g', g), ('b', b)] {
            if value > CHANNEL_MAX {
                return Err(PongError::ChannelOutOfRange { channel, value });
            }
        }
        if self.entries.len() >= PALETTE_SIZE {
            return Err(PongError::PaletteFull(PALETTE_SIZE));
        }

        self.entries.push(bgr555(r, g, b));
        Ok((self.entries.len() - 1) as ColorIndex)
    }

    /// Color BGR555 registrado en `index`
    pub fn get(&self, index: ColorIndex) -> Option<u16> {
        self.entries.get(index as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tabla índice -> 0x00RRGGBB para el scan-out del host.
    /// Las entradas sin registrar quedan en negro.
    pub fn to_rgb_lut(&self) -> [u32; PALETTE_SIZE] {
        let mut lut = [0u32; PALETTE_SIZE];
        for (slot, &color) in lut.iter_mut().zip(&self.entries) {
            *slot = rgb555(color);
        }
        lut
    }
}
