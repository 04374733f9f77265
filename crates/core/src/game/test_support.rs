//! Shared fixtures for the `game` submodule test suites.

use super::*;
use crate::config::EngineConfig;
use crate::rng::GameRng;
use crate::state::{Map, MapItem, MessageLog, Room};
use slotmap::SlotMap;

pub(super) fn open_room_fixture() -> (Map, Pos) {
    let mut map = Map::new(10, 10);
    map.tiles.fill(TileKind::Floor);
    (map, Pos { y: 5, x: 5 })
}

/// A one-tile corridor along row 5 with a single wall at x = 6.
pub(super) fn wall_occlusion_fixture() -> (Map, Pos) {
    let mut map = Map::new(11, 11);
    for x in 1..10 {
        map.set_tile(Pos { y: 5, x }, TileKind::Floor);
    }
    map.set_tile(Pos { y: 5, x: 6 }, TileKind::Wall);
    (map, Pos { y: 5, x: 3 })
}

/// A 30x20 walled arena with the player in the middle, nothing else on the
/// floor, and visibility already computed.
pub(super) fn arena_state() -> GameState {
    let config = EngineConfig::default();
    let mut map = Map::new(30, 20);
    let room = Room { x: 1, y: 1, w: 28, h: 18 };
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            map.set_tile(Pos::new(x as i32, y as i32), TileKind::Floor);
        }
    }
    map.rooms.push(room);

    let mut state = GameState {
        map,
        player: Player::new(Pos::new(15, 10)),
        enemies: Vec::new(),
        items: SlotMap::with_key(),
        floor: 1,
        over: false,
        won: false,
        log: MessageLog::new(config.log_capacity),
        turn: 0,
        kills: 0,
        inv_open: false,
        inv_selected: 0,
        seed: 0,
        rng: GameRng::seed_from_u64(0),
        config,
    };
    state.refresh_fov();
    state
}

/// A training dummy: `hp` hit points, 1 strength, no defence.
pub(super) fn add_enemy(state: &mut GameState, pos: Pos, hp: i32) -> usize {
    state.enemies.push(Enemy {
        pos,
        stats: Stats { hp, max_hp: hp, str: 1, def: 0 },
        name: "Dummy",
        glyph: 'd',
        xp_reward: 1,
        alive: true,
    });
    state.enemies.len() - 1
}

pub(super) fn place_item(state: &mut GameState, pos: Pos, pickup: Pickup) -> ItemId {
    let glyph = pickup.glyph();
    state.items.insert_with_key(|id| MapItem { id, pos, glyph, pickup })
}

pub(super) fn all_commands() -> Vec<Command> {
    vec![
        Command::Move { dx: 1, dy: 0 },
        Command::Move { dx: -1, dy: -1 },
        Command::OpenInventory,
        Command::SelectNext,
        Command::SelectPrev,
        Command::UseSelected,
        Command::CloseInventory,
        Command::Descend,
    ]
}
