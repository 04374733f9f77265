mod frame_input;
mod game_layout;
mod ui_render;
mod window_config;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use app::app_loop::{AppMode, AppState};
use app::backdrop::Backdrop;
use app::outcome_label;
use app::seed::SeedChoice;
use app::ui_scale_file::UiScaleFile;
use clap::Parser;
use game_core::EngineConfig;
use macroquad::prelude::*;
use taffy::TaffyTree;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::frame_input::capture_frame_input;
use crate::game_layout::{compute_frame_layout, setup_layout};
use crate::ui_render::{backdrop_grid, cell_metrics, draw_frame};
use crate::window_config::{build_window_conf, runtime_ui_scale};

const EMBER_COUNT: usize = 60;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dungeon seed; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with engine settings
    #[arg(long)]
    config: Option<PathBuf>,
}

#[macroquad::main(build_window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run().await {
        error!("{err:#}");
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let seed = SeedChoice::from_cli(args.seed);
    info!(seed = seed.value(), from_cli = matches!(seed, SeedChoice::Cli(_)), "starting run");

    let scale_path = UiScaleFile::default_path();
    let saved_scale = scale_path.as_deref().and_then(UiScaleFile::load_scale);
    let mut app = AppState::new(seed.value(), config, runtime_ui_scale(saved_scale))
        .context("invalid engine config")?;

    let mut taffy = TaffyTree::new();
    let mut layout_scale = app.ui_scale;
    let mut nodes = setup_layout(&mut taffy, layout_scale.get()).context("building layout")?;
    let mut backdrop = Backdrop::new(0, 0, EMBER_COUNT, seed.value());

    loop {
        let input = capture_frame_input();
        app.tick(&input.keys, input.ui_scale_action);
        if app.mode == AppMode::Closed {
            info!(outcome = outcome_label(app.outcome()), "closing");
            return Ok(());
        }

        if app.ui_scale_dirty {
            app.ui_scale_dirty = false;
            if let Some(path) = &scale_path
                && let Err(err) = UiScaleFile::new(app.ui_scale).write_atomic(path)
            {
                warn!(path = %path.display(), error = %err, "could not save ui scale");
            }
        }
        if app.ui_scale != layout_scale {
            layout_scale = app.ui_scale;
            taffy = TaffyTree::new();
            nodes = setup_layout(&mut taffy, layout_scale.get()).context("rebuilding layout")?;
        }

        let layout = compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height())
            .context("computing layout")?;
        let frame = app.frame();
        let metrics = cell_metrics(layout.frame, frame.width(), frame.height(), layout_scale.get());
        let (columns, rows) = backdrop_grid(layout.frame, metrics);
        backdrop.resize(columns, rows);
        backdrop.update((get_frame_time() * 1000.0) as u32);

        clear_background(BLACK);
        draw_frame(&app, &backdrop, &layout);
        next_frame().await;
    }
}
