mod control;
mod game_field_panel;

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;
use env_logger::Env;
use log::info;
use model::Game;

use game_field_panel::GameFieldPanel;

#[derive(Debug, Parser)]
#[command(author, version, about = "2048 sliding tile puzzle")]
struct Cli {
    /// Number of rows and columns on the board
    #[arg(long, default_value_t = 4, value_name = "N")]
    size: usize,

    /// Seed for tile spawns; each new game continues with seed+1, seed+2, ...
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Initial window width and height
    #[arg(long, default_value_t = 400.0, value_name = "PX")]
    window_size: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let game = Game::start(cli.size, cli.seed)?;
    info!("starting a {0}x{0} game", cli.size);

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(cli.window_size, cli.window_size)),
        ..Default::default()
    };
    let panel = GameFieldPanel::new(game, cli.seed);
    eframe::run_native(
        "2048 Game",
        options,
        Box::new(move |_cc: &eframe::CreationContext<'_>| -> Box<dyn eframe::App> {
            Box::new(panel)
        }),
    )
    .map_err(|e| anyhow!("window closed with error: {}", e))
}
