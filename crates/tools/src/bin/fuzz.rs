use std::io;

use anyhow::{Result, ensure};
use clap::Parser;
use game_core::render::width::display_width;
use game_core::{EngineConfig, GameState, Key, Session, TileKind};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

const KEYS: [Key; 12] = [
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::UpLeft,
    Key::UpRight,
    Key::DownLeft,
    Key::DownRight,
    Key::ToggleInventory,
    Key::Confirm,
    Key::SelectUp,
    Key::SelectDown,
];

#[derive(Parser)]
#[command(author, version, about = "Soak the engine with random keys and check invariants")]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Keys per run
    #[arg(short, long, default_value_t = 2000)]
    keys: u32,
    /// Runs, each on its own derived seed
    #[arg(short, long, default_value_t = 20)]
    runs: u32,
}

fn choose(rng: &mut ChaCha8Rng) -> Key {
    // Movement is doubled up so runs actually wander the map.
    let p = rng.next_u64() as usize % (KEYS.len() + 8);
    KEYS[if p >= KEYS.len() { p - KEYS.len() } else { p }]
}

fn check_invariants(state: &GameState, frame_width: usize, lines: &[String]) -> Result<()> {
    let player = &state.player;
    ensure!(
        (0..=player.stats.max_hp).contains(&player.stats.hp),
        "player hp {} outside 0..={}",
        player.stats.hp,
        player.stats.max_hp
    );
    ensure!(state.map.tile_at(player.pos) != TileKind::Wall, "player inside a wall");
    ensure!(
        player.inventory.len() <= state.config.inventory_capacity,
        "pack holds {} items",
        player.inventory.len()
    );
    for enemy in state.enemies.iter().filter(|enemy| enemy.alive) {
        ensure!(enemy.stats.hp > 0, "living {} with no hp", enemy.name);
        ensure!(state.map.tile_at(enemy.pos) != TileKind::Wall, "{} inside a wall", enemy.name);
        ensure!(enemy.pos != player.pos, "{} shares the player's tile", enemy.name);
    }
    let map = &state.map;
    let leaked = map.visible.iter().zip(&map.explored).any(|(vis, seen)| *vis && !*seen);
    ensure!(!leaked, "visible tile that was never explored");
    for line in lines {
        ensure!(display_width(line) == frame_width, "ragged frame line");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    println!("Fuzzing {} runs of {} keys from seed {}...", args.runs, args.keys, args.seed);
    for run in 0..args.runs {
        let run_seed = rng.next_u64();
        let (mut session, first) = Session::start(run_seed, EngineConfig::default())?;
        let width = first.width();

        for _ in 0..args.keys {
            let frame = session.on_key(choose(&mut rng));
            check_invariants(session.state(), width, &frame.lines)?;
            if session.state().is_finished() {
                break;
            }
        }

        let state = session.state();
        info!(
            run,
            run_seed,
            floor = state.floor,
            turn = state.turn,
            outcome = ?state.outcome(),
            "run finished"
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
