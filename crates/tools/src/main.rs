use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{EngineConfig, Frame, GameState, Key, Mode, RunOutcome, Session};
use serde::Serialize;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Play a scripted key sequence and print the result")]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Typed keys, one character each (e.g. "lljji>")
    #[arg(short, long, default_value = "")]
    keys: String,
    /// TOML file with engine settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print a JSON summary instead of the frame
    #[arg(long)]
    json: bool,
    /// Strip color escapes from the printed frame
    #[arg(long)]
    plain: bool,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    keys_sent: usize,
    turn: u64,
    floor: u8,
    mode: &'static str,
    outcome: Option<&'static str>,
    hp: i32,
    max_hp: i32,
    level: u32,
    gold: u32,
    kills: u32,
    snapshot_hash: String,
    log_tail: Vec<String>,
}

impl RunSummary {
    fn from_state(state: &GameState, keys_sent: usize) -> Self {
        Self {
            seed: state.seed,
            keys_sent,
            turn: state.turn,
            floor: state.floor,
            mode: mode_name(state.mode()),
            outcome: state.outcome().map(|outcome| match outcome {
                RunOutcome::Victory => "victory",
                RunOutcome::Defeat => "defeat",
            }),
            hp: state.player.stats.hp,
            max_hp: state.player.stats.max_hp,
            level: state.player.level,
            gold: state.player.gold,
            kills: state.kills,
            snapshot_hash: format!("0x{:016x}", state.snapshot_hash()),
            log_tail: state.log.recent(4).map(str::to_owned).collect(),
        }
    }
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Exploring => "exploring",
        Mode::InventoryOpen => "inventory",
        Mode::GameOver => "game_over",
        Mode::Victory => "victory",
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let (mut session, mut frame): (Session, Frame) =
        Session::start(args.seed, config).context("Engine rejected the config")?;

    let mut keys_sent = 0;
    for ch in args.keys.chars() {
        let key = Key::from_char(ch);
        if key == Key::Unknown {
            debug!(%ch, "skipping unmapped key");
            continue;
        }
        keys_sent += 1;
        frame = session.on_key(key);
        if session.quit_requested() {
            break;
        }
    }

    if args.json {
        let summary = RunSummary::from_state(session.state(), keys_sent);
        let json = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{json}");
    } else if args.plain {
        println!("{}", frame.plain_lines().join("\n"));
    } else {
        println!("{frame}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_the_session_state() {
        let (mut session, _) = Session::start(3, EngineConfig::default()).expect("start");
        session.on_key(Key::ToggleInventory);

        let summary = RunSummary::from_state(session.state(), 1);
        assert_eq!(summary.mode, "inventory");
        assert_eq!(summary.outcome, None);
        assert_eq!(summary.snapshot_hash.len(), 18);

        let json = serde_json::to_value(&summary).expect("encode");
        assert_eq!(json["floor"], 1);
        assert_eq!(json["keys_sent"], 1);
    }
}
