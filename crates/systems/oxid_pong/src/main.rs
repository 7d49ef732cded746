// crates/systems/oxid_pong/src/main.rs - Pong con doble buffer y VBlank
use anyhow::Context;
use clap::Parser;
use log::info;
use oxid_display::{DisplayConfig, OxidDisplay, VBlankClock, WindowScale};
use oxid_input::OxidInput;
use oxid_pong::{BallEvents, Palette, Pong, PongConfig};
use oxide_core::NATIVE_REFRESH_HZ;

#[derive(Parser, Debug)]
#[command(name = "oxid_pong", version, about = "Oxide-Pong: two-paddle ball game on a double-buffered mode 4 screen")]
struct Args {
    /// Ancho lógico de la pantalla
    #[arg(long, default_value_t = 240)]
    width: i32,

    /// Alto lógico de la pantalla
    #[arg(long, default_value_t = 160)]
    height: i32,

    /// Escala de la ventana (1, 2, 4, 8; otro valor ajusta a pantalla)
    #[arg(long, default_value_t = 4)]
    scale: u8,

    /// Refresco del LCD simulado en Hz
    #[arg(long, default_value_t = NATIVE_REFRESH_HZ)]
    refresh_hz: f64,
}

fn title(pong: &Pong, fps: usize) -> String {
    let score = pong.score();
    format!("Oxide-Pong - {} : {} - {} FPS", score.player, score.ai, fps)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = PongConfig::with_screen(args.width, args.height);
    let mut palette = Palette::new();
    let mut pong = Pong::new(config, &mut palette).context("Failed to set up the game")?;
    let lut = palette.to_rgb_lut();

    let mut display = OxidDisplay::new(DisplayConfig {
        width: args.width as usize,
        height: args.height as usize,
        scale: WindowScale::from_factor(args.scale),
        ..DisplayConfig::default()
    })
    .context("Failed to open the video window")?;

    let mut lcd = VBlankClock::new(args.refresh_hz);
    let mut input = OxidInput::new();
    let mut frame_buffer = vec![0u32; args.width as usize * args.height as usize];
    let mut fps = 0;

    info!("Running at {:.2} Hz (arrows/WS move, ESC quits)", args.refresh_hz);
    pong.start(&mut lcd);

    // Cerrar la ventana es el "power off": no hay otra salida del bucle
    while display.is_open() {
        input.update(display.window());

        let events = pong.tick(&mut lcd, &input)?;

        pong.visible_surface().render_rgb(&lut, &mut frame_buffer);
        let measured = display.update(&frame_buffer)?;

        let scored = events.intersects(BallEvents::AI_SCORED | BallEvents::PLAYER_SCORED);
        if let Some(m) = measured {
            fps = m;
        }
        if scored || measured.is_some() {
            display.set_title(&title(&pong, fps));
        }
    }

    let score = pong.score();
    info!("Done. {} ticks, final score {} : {}", pong.ticks(), score.player, score.ai);
    Ok(())
}
