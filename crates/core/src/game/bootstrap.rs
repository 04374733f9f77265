//! Starting world construction and first-floor setup for a new run.

use slotmap::SlotMap;
use tracing::info;

use super::*;
use crate::config::EngineConfig;
use crate::rng::GameRng;
use crate::state::{Map, MessageLog};

impl GameState {
    /// Starts a run on the first floor. `config` is trusted as given; hosts
    /// validate it first (see [`EngineConfig::validate`]).
    pub fn new(seed: u64, config: EngineConfig) -> Self {
        let mut state = Self {
            map: Map::new(config.map_width, config.map_height),
            player: Player::new(Pos::new(0, 0)),
            enemies: Vec::new(),
            items: SlotMap::with_key(),
            floor: content::STARTING_FLOOR,
            over: false,
            won: false,
            log: MessageLog::new(config.log_capacity),
            turn: 0,
            kills: 0,
            inv_open: false,
            inv_selected: 0,
            seed,
            rng: GameRng::seed_from_u64(seed),
            config,
        };
        state.install_floor(content::STARTING_FLOOR);

        let name = &state.config.player_name;
        let greeting = format!(
            "Welcome, {name}. Reach floor {} and clear it to escape.",
            content::MAX_FLOORS
        );
        state.log.push(greeting);
        info!(seed, rooms = state.map.rooms.len(), "new run started");
        state
    }
}
