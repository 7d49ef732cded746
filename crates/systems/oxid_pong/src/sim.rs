// crates/systems/oxid_pong/src/sim.rs

use crate::entities::{Ball, Paddle, Score};
use bitflags::bitflags;

bitflags! {
    /// Lo que pasó durante un paso de la pelota
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BallEvents: u8 {
        const WALL          = 1 << 0; // Rebote arriba/abajo
        const AI_SCORED     = 1 << 1; // Salió por la izquierda
        const PLAYER_SCORED = 1 << 2; // Salió por la derecha
        const PLAYER_PADDLE = 1 << 3;
        const AI_PADDLE     = 1 << 4;
    }
}

/// Paleta del jugador (izquierda): solo el punto de referencia (x, y) de la pelota.
/// El tamaño de la pelota no participa.
pub fn hits_player_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x <= paddle.x + paddle.width
        && ball.x >= paddle.x
        && ball.y >= paddle.y
        && ball.y <= paddle.y + paddle.height
}

/// Paleta de la IA (derecha): el borde delantero usa `x + size`,
/// el resto del test sigue siendo sobre el punto de referencia.
pub fn hits_ai_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x + ball.size >= paddle.x
        && ball.x <= paddle.x + paddle.width
        && ball.y >= paddle.y
        && ball.y <= paddle.y + paddle.height
}

/// Un paso de la pelota: integrar, rebotar en paredes, anotar, rebotar en paletas.
///
/// No hay clamping ni cooldown: la posición puede pasarse de los bordes un pixel,
/// y si la pelota sigue dentro de una paleta el `dx` se invierte en cada tick.
pub fn simulate_ball(
    ball: &mut Ball,
    player: &Paddle,
    ai: &Paddle,
    score: &mut Score,
    width: i32,
    height: i32,
) -> BallEvents {
    let mut events = BallEvents::empty();

    // 1. Integrar
    ball.x += ball.dx;
    ball.y += ball.dy;

    // 2. Paredes superior/inferior
    if ball.y <= 0 || ball.y >= height {
        ball.dy = -ball.dy;
        events |= BallEvents::WALL;
    }

    // 3. Anotación (chequeos independientes, la velocidad se conserva)
    if ball.x <= 0 {
        score.ai += 1;
        ball.x = width / 2;
        ball.y = height / 2;
        events |= BallEvents::AI_SCORED;
    }
    if ball.x >= width {
        score.player += 1;
        ball.x = width / 2;
        ball.y = height / 2;
        events |= BallEvents::PLAYER_SCORED;
    }

    // 4. Paleta del jugador
    if hits_player_paddle(ball, player) {
        ball.dx = -ball.dx;
        events |= BallEvents::PLAYER_PADDLE;
    }

    // 5. Paleta de la IA
    if hits_ai_paddle(ball, ai) {
        ball.dx = -ball.dx;
        events |= BallEvents::AI_PADDLE;
    }

    events
}
