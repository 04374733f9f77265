//! Tile-space queries used by stairs placement and spawning.

use std::collections::VecDeque;

use crate::rng::GameRng;
use crate::state::{Map, Room};
use crate::types::{Pos, TileKind, manhattan};

/// Index of the room whose center is farthest (Manhattan) from room 0's
/// center. The first room wins ties; room 0 is only returned when alone.
pub(super) fn farthest_room_from_start(rooms: &[Room]) -> usize {
    let Some(start) = rooms.first().map(|room| room.center()) else {
        return 0;
    };
    let mut best = 0;
    let mut best_distance = 0_u32;
    for (index, room) in rooms.iter().enumerate().skip(1) {
        let distance = manhattan(start, room.center());
        if best == 0 || distance > best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

pub(super) fn random_tile_in(room: &Room, rng: &mut GameRng) -> Pos {
    let x = rng.range_usize(room.x, room.right());
    let y = rng.range_usize(room.y, room.bottom());
    Pos::new(x as i32, y as i32)
}

/// Floor and Door tiles reachable from `start` by cardinal steps.
pub fn reachable_tiles(map: &Map, start: Pos) -> Vec<bool> {
    let mut seen = vec![false; map.width * map.height];
    let Some(start_idx) = map.index(start) else {
        return seen;
    };
    seen[start_idx] = true;
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = pos.offset(dx, dy);
            let Some(idx) = map.index(next) else {
                continue;
            };
            if seen[idx] || map.tile_at(next) == TileKind::Wall {
                continue;
            }
            seen[idx] = true;
            queue.push_back(next);
        }
    }
    seen
}
