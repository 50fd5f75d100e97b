mod autopilot;
mod config;
mod render;

use std::sync::{Arc, Mutex};

use clap::Parser;
use engine::config::ConfigManager;
use engine::game::{run_game_loop, GameSession, SessionRng};
use engine::{log, logger};

use autopilot::Autopilot;
use config::ConsoleConfig;
use render::TerminalRenderer;

#[derive(Parser)]
#[command(name = "led_snake")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = "led_snake.yaml")]
    config: String,

    /// Fixed RNG seed; a random one is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager: ConfigManager<_, ConsoleConfig, _> = ConfigManager::from_yaml_file(&args.config);
    let config = manager.get_config()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting {}x{} session with seed {}", config.game.grid_size, config.game.grid_size, rng.seed());

    let settings = config.game.clone();
    let session = Arc::new(Mutex::new(GameSession::new(&settings, rng)?));

    let input = Autopilot::new(Arc::clone(&session), SessionRng::from_random());
    let renderer = TerminalRenderer::new(settings.grid_size, config.color);

    let reason = run_game_loop(
        Arc::clone(&session),
        input,
        renderer,
        settings.tick_interval(),
    )
    .await;

    let score = session.lock().unwrap().score();
    log!("Session finished: {:?}, score {}", reason, score);
    Ok(())
}
