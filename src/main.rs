mod app;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ggez::event;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use wrap_snake::render::HUD_HEIGHT;
use wrap_snake::{GameConfig, GameEngine, JsonScoreStore, Overlay};

use crate::app::SnakeApp;

#[derive(Parser)]
#[command(name = "wrap-snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the board
    #[arg(long)]
    tile_count: Option<i16>,

    /// Pixels per cell
    #[arg(long)]
    cell_size: Option<i16>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where the best score is kept
    #[arg(long, default_value = "high_score.json")]
    score_file: PathBuf,

    #[arg(long, default_value = "wrap_snake.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(tile_count) = self.tile_count {
            config.tile_count = tile_count;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    WriteLogger::init(
        cli.log_level,
        Config::default(),
        File::create(&cli.log_file)
            .with_context(|| format!("Failed to create log file: {:?}", cli.log_file))?,
    )
    .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!("Starting wrap-snake with {:?}", config);

    let board = config.board_pixels();
    let window_setup = ggez::conf::WindowSetup::default()
        .title("Snake Game")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(board, board + HUD_HEIGHT)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("wrap_snake", "wrap_snake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()
        .map_err(|e| anyhow!("Failed to open game window: {}", e))?;

    let engine = GameEngine::new(config, JsonScoreStore::new(cli.score_file), Overlay::new());
    event::run(ctx, event_loop, SnakeApp::new(engine))
}
