//! Enemy and item selection and placement for a freshly carved floor.

use tracing::debug;

use crate::content::{self, Species};
use crate::rng::GameRng;
use crate::state::Map;
use crate::types::{Pickup, Pos, TileKind};

use super::grid::random_tile_in;
use super::model::{EnemySpawn, ItemSpawn};

/// Placement attempts per entity before it is dropped from the floor.
pub(super) const PLACEMENT_ATTEMPTS: usize = 50;

const CURRENT_TIER_PERCENT: u32 = 70;
const ITEM_ROLL_WEAPON_THRESHOLD: usize = 30;
const ITEM_ROLL_ARMOR_THRESHOLD: usize = 55;
const ITEM_ROLL_POTION_THRESHOLD: usize = 80;
/// Only the strongest few unlocked entries of a gear table can drop.
const ELIGIBLE_GEAR: usize = 3;

pub(super) struct SpawnContext<'a> {
    pub(super) floor: u8,
    pub(super) map: &'a Map,
    pub(super) player_start: Pos,
}

impl SpawnContext<'_> {
    fn is_open_floor(&self, pos: Pos) -> bool {
        self.map.tile_at(pos) == TileKind::Floor && pos != self.player_start
    }
}

pub(super) fn generate_enemy_spawns(
    context: &SpawnContext<'_>,
    rng: &mut GameRng,
) -> Vec<EnemySpawn> {
    let target = content::enemy_count(context.floor);
    let mut spawns: Vec<EnemySpawn> = Vec::with_capacity(target);
    let rooms = &context.map.rooms;
    if rooms.len() < 2 {
        debug!(floor = context.floor, "no rooms outside the start room; skipping enemies");
        return spawns;
    }

    for _ in 0..target {
        let species = pick_species(context.floor, rng);
        let placed = (0..PLACEMENT_ATTEMPTS).find_map(|_| {
            let room = &rooms[rng.range_usize(1, rooms.len() - 1)];
            let pos = random_tile_in(room, rng);
            let free = context.is_open_floor(pos) && !spawns.iter().any(|spawn| spawn.pos == pos);
            free.then_some(pos)
        });
        match placed {
            Some(pos) => spawns.push(EnemySpawn { species, pos }),
            None => {
                debug!(floor = context.floor, species = species.name, "enemy placement gave up");
            }
        }
    }
    spawns
}

pub(super) fn generate_item_spawns(
    context: &SpawnContext<'_>,
    enemies: &[EnemySpawn],
    rng: &mut GameRng,
) -> Vec<ItemSpawn> {
    let target = content::item_count(context.floor);
    let mut spawns: Vec<ItemSpawn> = Vec::with_capacity(target);
    let rooms = &context.map.rooms;
    if rooms.is_empty() {
        return spawns;
    }

    for _ in 0..target {
        let pickup = roll_pickup(context.floor, rng);
        let placed = (0..PLACEMENT_ATTEMPTS).find_map(|_| {
            let room = &rooms[rng.range_usize(0, rooms.len() - 1)];
            let pos = random_tile_in(room, rng);
            let free = context.is_open_floor(pos)
                && !spawns.iter().any(|spawn| spawn.pos == pos)
                && !enemies.iter().any(|spawn| spawn.pos == pos);
            free.then_some(pos)
        });
        match placed {
            Some(pos) => spawns.push(ItemSpawn { pickup, pos }),
            None => debug!(floor = context.floor, "item placement gave up"),
        }
    }
    spawns
}

fn pick_species(floor: u8, rng: &mut GameRng) -> Species {
    let tier = if rng.percent(CURRENT_TIER_PERCENT) {
        content::tier_species(floor)
    } else {
        content::previous_tier_species(floor)
    };
    tier[rng.range_usize(0, tier.len() - 1)]
}

fn roll_pickup(floor: u8, rng: &mut GameRng) -> Pickup {
    let roll = rng.range_usize(0, 99);
    let table = if roll < ITEM_ROLL_WEAPON_THRESHOLD {
        Vec::from(content::weapons())
    } else if roll < ITEM_ROLL_ARMOR_THRESHOLD {
        Vec::from(content::armors())
    } else if roll < ITEM_ROLL_POTION_THRESHOLD {
        Vec::from(content::potions())
    } else {
        let gold = rng.range_usize(3, 8) as u32 * u32::from(floor) + 2;
        return Pickup::Gold(gold);
    };

    let unlocked: Vec<_> = table.into_iter().filter(|entry| entry.min_floor <= floor).collect();
    let eligible = &unlocked[unlocked.len().saturating_sub(ELIGIBLE_GEAR)..];
    match rng.pick(eligible) {
        Some(entry) => Pickup::Item(entry.item.clone()),
        None => Pickup::Gold(u32::from(floor) + 2),
    }
}
