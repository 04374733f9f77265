//! Procedural floor generation split into coherent submodules.

pub mod model;

mod bsp;
mod generator;
mod grid;
mod layout;
mod spawns;

pub use generator::MapGenerator;
pub use grid::reachable_tiles;
pub use model::{EnemySpawn, GeneratedFloor, ItemSpawn};

use crate::config::EngineConfig;
use crate::rng::GameRng;

pub fn generate_floor(floor: u8, rng: &mut GameRng, config: &EngineConfig) -> GeneratedFloor {
    MapGenerator::new(config.map_width, config.map_height).generate(floor, rng)
}
