//! Public data models for generated floors, enemy spawns, and item spawns.

use crate::content::Species;
use crate::state::Map;
use crate::types::{Pickup, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemySpawn {
    pub species: Species,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpawn {
    pub pickup: Pickup,
    pub pos: Pos,
}

#[derive(Clone, Debug)]
pub struct GeneratedFloor {
    pub map: Map,
    pub player_start: Pos,
    pub stairs: Pos,
    pub enemies: Vec<EnemySpawn>,
    pub items: Vec<ItemSpawn>,
}
