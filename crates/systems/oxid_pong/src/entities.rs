// crates/systems/oxid_pong/src/entities.rs

use crate::palette::ColorIndex;
use oxid_input::{GamepadButtons, InputPort};

// ============================================================================
//  GEOMETRÍA
// ============================================================================

/// Rectángulo en pixeles, esquina superior izquierda + tamaño.
/// Puede salirse de la pantalla (los halos de borrado lo hacen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Columna siguiente al borde derecho (exclusiva)
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    /// Fila siguiente al borde inferior (exclusiva)
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// El mismo rectángulo agrandado `margin` pixeles por cada lado
    pub fn expand(&self, margin: i32) -> Self {
        Self {
            left: self.left - margin,
            top: self.top - margin,
            width: self.width + 2 * margin,
            height: self.height + 2 * margin,
        }
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.top && row < self.bottom() && col >= self.left && col < self.right()
    }
}

// ============================================================================
//  ENTIDADES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: ColorIndex,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: ColorIndex) -> Self {
        Self { x, y, width, height, color }
    }

    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Sentido de movimiento vertical de la paleta de la IA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn delta(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Paleta de la IA: la dirección es parte de la entidad y vive tanto como ella.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiPaddle {
    pub paddle: Paddle,
    pub direction: Direction,
}

impl AiPaddle {
    /// Arranca bajando
    pub fn new(paddle: Paddle) -> Self {
        Self { paddle, direction: Direction::Down }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub dx: i32,
    pub dy: i32,
    pub color: ColorIndex,
}

impl Ball {
    /// Caja completa `size x size` (la que cubre el halo de borrado)
    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    /// Lo que realmente se pinta: el pixel de referencia (x, y)
    pub fn marker(&self) -> Rect {
        Rect::new(self.x, self.y, 1, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

// ============================================================================
//  MOVIMIENTO DE PALETAS
// ============================================================================

/// Mueve la paleta del jugador un pixel según UP/DOWN.
/// Los dos chequeos son independientes: con ambos presionados el movimiento neto es cero.
pub fn apply_player_input(paddle: &mut Paddle, input: &impl InputPort, screen_height: i32) {
    if input.is_pressed(GamepadButtons::DOWN) && paddle.y + paddle.height < screen_height {
        paddle.y += 1;
    }
    if input.is_pressed(GamepadButtons::UP) && paddle.y > 0 {
        paddle.y -= 1;
    }
}

/// Avanza la paleta de la IA un pixel y rebota en los bordes.
///
/// Ambos chequeos corren siempre, en orden: si los dos se cumplen
/// (paleta tan alta como la pantalla) gana el segundo y la paleta sube.
pub fn update_ai_paddle(ai: &mut AiPaddle, screen_height: i32) {
    let paddle = &mut ai.paddle;
    paddle.y += ai.direction.delta();

    if paddle.y <= 0 {
        ai.direction = Direction::Down;
    }
    if paddle.y + paddle.height >= screen_height {
        ai.direction = Direction::Up;
    }

    paddle.y = paddle.y.clamp(0, (screen_height - paddle.height).max(0));
}
