// crates/systems/oxid_pong/src/frame.rs

use crate::config::PongConfig;
use crate::entities::{apply_player_input, update_ai_paddle, AiPaddle, Ball, Paddle, Score};
use crate::error::PongError;
use crate::palette::Palette;
use crate::redraw::{draw_ball, draw_paddle, erase_and_draw_net, RedrawStyle};
use crate::sim::{simulate_ball, BallEvents};
use crate::surface::Surface;
use crate::swap::{wait_for_vertical_blank, SwapController};
use log::{info, trace};
use oxid_input::InputPort;
use oxide_core::{DisplayPort, Page};

/// El juego completo: dos páginas de video, el controlador de swap y la escena.
/// Todo se crea una vez al arrancar; cada tick solo muta posiciones y marcador.
pub struct Pong {
    config: PongConfig,
    pages: [Surface; 2],
    swap: SwapController,
    style: RedrawStyle,

    player: Paddle,
    ai: AiPaddle,
    ball: Ball,
    score: Score,

    ticks: u64,
}

impl Pong {
    /// Valida la configuración, registra los colores y limpia ambas páginas.
    pub fn new(config: PongConfig, palette: &mut Palette) -> Result<Self, PongError> {
        config.validate()?;

        let c = config.colors;
        let player_color = palette.register_color(c.player.r, c.player.g, c.player.b)?;
        let ai_color = palette.register_color(c.ai.r, c.ai.g, c.ai.b)?;
        let ball_color = palette.register_color(c.ball.r, c.ball.g, c.ball.b)?;
        let background = palette.register_color(c.background.r, c.background.g, c.background.b)?;
        let net = palette.register_color(c.net.r, c.net.g, c.net.b)?;

        let p = config.player;
        let a = config.ai;
        let (cx, cy) = config.center();
        let (dx, dy) = config.ball_velocity;

        let width = config.width as usize;
        let height = config.height as usize;
        let mut pages = [Surface::new(width, height), Surface::new(width, height)];
        for page in pages.iter_mut() {
            page.clear(background);
        }

        info!(
            "Pong {}x{}: player {:?}, ai {:?}, ball size {} velocity ({}, {})",
            config.width, config.height, p, a, config.ball_size, dx, dy
        );

        Ok(Self {
            style: RedrawStyle {
                background,
                net,
                halo: config.halo,
                edge_strip: config.edge_strip,
                net_spacing: config.net_spacing,
            },
            player: Paddle::new(p.x, p.y, p.width, p.height, player_color),
            ai: AiPaddle::new(Paddle::new(a.x, a.y, a.width, a.height, ai_color)),
            ball: Ball { x: cx, y: cy, size: config.ball_size, dx, dy, color: ball_color },
            score: Score::default(),
            pages,
            swap: SwapController::new(),
            config,
            ticks: 0,
        })
    }

    /// Programa el registro de display con la página visible inicial
    pub fn start(&self, display: &mut impl DisplayPort) {
        display.select_page(self.swap.visible_page());
    }

    /// Un tick completo:
    /// borrar + red -> input -> IA -> pelota -> dibujar -> esperar VBlank -> swap.
    pub fn tick(
        &mut self,
        display: &mut impl DisplayPort,
        input: &impl InputPort,
    ) -> Result<BallEvents, PongError> {
        let height = self.config.height;
        let surface = &mut self.pages[self.swap.current_draw_target().index()];

        erase_and_draw_net(surface, &self.style, &self.player, &self.ai.paddle, &self.ball)?;

        apply_player_input(&mut self.player, input, height);
        update_ai_paddle(&mut self.ai, height);
        let events = simulate_ball(
            &mut self.ball,
            &self.player,
            &self.ai.paddle,
            &mut self.score,
            self.config.width,
            height,
        );

        draw_paddle(surface, &self.player);
        draw_paddle(surface, &self.ai.paddle);
        draw_ball(surface, &self.ball);

        if events.intersects(BallEvents::AI_SCORED | BallEvents::PLAYER_SCORED) {
            info!(
                "Tick {}: {:?} -> player {} : ai {}",
                self.ticks, events, self.score.player, self.score.ai
            );
        }
        trace!("Tick {}: ball ({}, {}) events {:?}", self.ticks, self.ball.x, self.ball.y, events);

        let vblank = wait_for_vertical_blank(display);
        self.swap.swap(vblank, display);
        self.ticks += 1;

        Ok(events)
    }

    pub fn config(&self) -> &PongConfig {
        &self.config
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn ai(&self) -> &AiPaddle {
        &self.ai
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn style(&self) -> &RedrawStyle {
        &self.style
    }

    pub fn swap_controller(&self) -> &SwapController {
        &self.swap
    }

    pub fn surface(&self, page: Page) -> &Surface {
        &self.pages[page.index()]
    }

    /// La página en pantalla (la que se dibujó en el último tick)
    pub fn visible_surface(&self) -> &Surface {
        self.surface(self.swap.visible_page())
    }

    /// La página donde se va a dibujar el próximo tick
    pub fn draw_target(&self) -> &Surface {
        self.surface(self.swap.current_draw_target())
    }
}
