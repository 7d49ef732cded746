// crates/systems/oxid_pong/src/config.rs

use crate::error::PongError;
use crate::palette::CHANNEL_MAX;

// ============================================================================
//  CONSTANTES POR DEFECTO
// ============================================================================

pub const DEFAULT_WIDTH: i32 = 240;
pub const DEFAULT_HEIGHT: i32 = 160;

/// Color en 5 bits por canal (0-31)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb5 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb5 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const GRAY: Rgb5 = Rgb5::new(15, 15, 15);
pub const BLACK: Rgb5 = Rgb5::new(0, 0, 0);

/// Colores de la escena, se registran en la paleta en este orden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub player: Rgb5,
    pub ai: Rgb5,
    pub ball: Rgb5,
    pub background: Rgb5,
    pub net: Rgb5,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            player: GRAY,
            ai: GRAY,
            ball: GRAY,
            background: BLACK,
            net: GRAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleSpec {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

// ============================================================================
//  CONFIGURACIÓN DEL JUEGO
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PongConfig {
    pub width: i32,
    pub height: i32,
    pub player: PaddleSpec,
    pub ai: PaddleSpec,
    pub ball_size: i32,
    pub ball_velocity: (i32, i32),
    pub halo: i32,
    pub edge_strip: i32,
    pub net_spacing: i32,
    pub colors: ColorScheme,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self::with_screen(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl PongConfig {
    /// Geometría estándar para una pantalla dada: el jugador a 20px del borde
    /// izquierdo, la IA a 15px del derecho, la pelota al centro.
    pub fn with_screen(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            player: PaddleSpec { x: 20, y: 60, width: 5, height: 25 },
            ai: PaddleSpec { x: width - 15, y: 10, width: 5, height: 30 },
            ball_size: 5,
            ball_velocity: (1, 1),
            halo: 3,
            edge_strip: 3,
            net_spacing: 4,
            colors: ColorScheme::default(),
        }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }

    /// Lo máximo que una entidad se mueve en un tick (paletas: 1px)
    pub fn max_step(&self) -> i32 {
        self.ball_velocity.0.abs().max(self.ball_velocity.1.abs()).max(1)
    }

    /// Verifica las precondiciones de la escena. Todo lo que el bucle de frames
    /// da por supuesto (geometría dentro de pantalla, halo suficiente) se chequea acá.
    pub fn validate(&self) -> Result<(), PongError> {
        let invalid = |msg: String| Err(PongError::InvalidConfig(msg));

        if self.width < 8 || self.height < 8 {
            return invalid(format!("screen {}x{} is too small", self.width, self.height));
        }

        for (name, p) in [("player", &self.player), ("ai", &self.ai)] {
            if p.width <= 0 || p.height <= 0 {
                return invalid(format!("{} paddle has empty size {}x{}", name, p.width, p.height));
            }
            if p.x < 0 || p.x + p.width > self.width || p.y < 0 || p.y + p.height > self.height {
                return invalid(format!(
                    "{} paddle {}x{} at ({}, {}) does not fit a {}x{} screen",
                    name, p.width, p.height, p.x, p.y, self.width, self.height
                ));
            }
        }

        if self.ball_size <= 0 {
            return invalid(format!("ball size must be positive, got {}", self.ball_size));
        }
        let (dx, dy) = self.ball_velocity;
        if dx == 0 || dy == 0 {
            return invalid(format!("ball velocity ({}, {}) has a zero component", dx, dy));
        }

        // El halo tiene que cubrir el desplazamiento de un tick
        if self.halo < self.max_step() {
            return invalid(format!(
                "halo {} is smaller than the per-tick movement {}",
                self.halo,
                self.max_step()
            ));
        }
        // Al anotar, la pelota salta al centro desde a lo sumo |dx| px del borde
        if self.edge_strip <= dx.abs() || self.edge_strip > self.width / 2 {
            return invalid(format!(
                "edge strip {} must be wider than |dx| = {} and at most half the screen",
                self.edge_strip,
                dx.abs()
            ));
        }
        if self.net_spacing <= 0 {
            return invalid(format!("net spacing must be positive, got {}", self.net_spacing));
        }

        let c = &self.colors;
        for color in [c.player, c.ai, c.ball, c.background, c.net] {
            if color.r > CHANNEL_MAX || color.g > CHANNEL_MAX || color.b > CHANNEL_MAX {
                return invalid(format!("color {:?} has a channel above {}", color, CHANNEL_MAX));
            }
        }

        Ok(())
    }
}
