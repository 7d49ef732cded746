// crates/systems/oxid_pong/src/redraw.rs

use crate::entities::{Ball, Paddle, Rect};
use crate::error::PongError;
use crate::palette::ColorIndex;
use crate::surface::Surface;

/// Parámetros del borrado incremental
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawStyle {
    pub background: ColorIndex,
    pub net: ColorIndex,
    /// Margen alrededor de cada entidad. Tiene que cubrir lo que una entidad
    /// se mueve en un tick, si no quedan rastros.
    pub halo: i32,
    /// Columnas que se limpian siempre en cada borde (restos de la pelota al anotar)
    pub edge_strip: i32,
    /// Una marca de la red cada `net_spacing` filas
    pub net_spacing: i32,
}

/// Pasada de borrado sobre la página que se va a reutilizar (contiene el frame N-2):
/// halos alrededor de las paletas y la pelota, franjas de los bordes y la red.
pub fn erase_and_draw_net(
    surface: &mut Surface,
    style: &RedrawStyle,
    player: &Paddle,
    ai: &Paddle,
    ball: &Ball,
) -> Result<(), PongError> {
    let width = surface.width() as i32;
    let height = surface.height() as i32;

    surface.fill_rect(player.footprint().expand(style.halo), style.background);
    surface.fill_rect(ai.footprint().expand(style.halo), style.background);
    surface.fill_rect(ball.footprint().expand(style.halo), style.background);

    // Bordes izquierdo y derecho, todas las filas
    surface.fill_rect(Rect::new(0, 0, style.edge_strip, height), style.background);
    surface.fill_rect(
        Rect::new(width - style.edge_strip, 0, style.edge_strip, height),
        style.background,
    );

    // Red punteada en la columna central
    let spacing = style.net_spacing.max(1) as usize;
    for row in (0..height).step_by(spacing) {
        surface.set_pixel(row, width / 2, style.net)?;
    }

    Ok(())
}

pub fn draw_paddle(surface: &mut Surface, paddle: &Paddle) {
    surface.fill_rect(paddle.footprint(), paddle.color);
}

/// La pelota se pinta como su pixel de referencia. Si quedó fuera de la
/// pantalla (pasada de una pared) no se pinta nada.
pub fn draw_ball(surface: &mut Surface, ball: &Ball) {
    surface.fill_rect(ball.marker(), ball.color);
}
