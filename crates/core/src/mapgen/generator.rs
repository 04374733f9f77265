//! High-level floor generation: partition, carve, link, then place stairs and spawns.

use tracing::debug;

use crate::rng::GameRng;
use crate::state::Map;
use crate::types::TileKind;

use super::bsp::{Rect, partition};
use super::grid::farthest_room_from_start;
use super::layout::{carve_room, connect_subtrees, mark_doors};
use super::model::GeneratedFloor;
use super::spawns::{SpawnContext, generate_enemy_spawns, generate_item_spawns};

pub struct MapGenerator {
    width: usize,
    height: usize,
}

impl MapGenerator {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Never fails; entities that cannot be placed are dropped from the floor.
    pub fn generate(&self, floor: u8, rng: &mut GameRng) -> GeneratedFloor {
        let mut map = Map::new(self.width, self.height);
        let bounds = Rect {
            x: 1,
            y: 1,
            w: self.width.saturating_sub(2),
            h: self.height.saturating_sub(2),
        };
        let (tree, rooms) = partition(bounds, rng);

        for room in &rooms {
            carve_room(&mut map, room);
        }
        let carved = connect_subtrees(&mut map, &tree, &rooms, rng);
        map.rooms = rooms;
        mark_doors(&mut map, &carved);

        let player_start = map.rooms[0].center();
        let stairs = map.rooms[farthest_room_from_start(&map.rooms)].center();
        map.set_tile(stairs, TileKind::Stairs);

        let context = SpawnContext { floor, map: &map, player_start };
        let enemies = generate_enemy_spawns(&context, rng);
        let items = generate_item_spawns(&context, &enemies, rng);

        debug!(
            floor,
            rooms = map.rooms.len(),
            corridor_tiles = carved.len(),
            enemies = enemies.len(),
            items = items.len(),
            "generated floor"
        );

        GeneratedFloor { map, player_start, stairs, enemies, items }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::content;
    use crate::mapgen::grid::reachable_tiles;
    use crate::types::{Pos, manhattan};

    fn generate(seed: u64, floor: u8) -> GeneratedFloor {
        let mut rng = GameRng::seed_from_u64(seed);
        MapGenerator::new(80, 36).generate(floor, &mut rng)
    }

    fn assert_floor_invariants(generated: &GeneratedFloor) {
        let map = &generated.map;
        for room in &map.rooms {
            for y in room.y..=room.bottom() {
                for x in room.x..=room.right() {
                    let pos = Pos::new(x as i32, y as i32);
                    let tile = map.tile_at(pos);
                    let stairs = tile == TileKind::Stairs && pos == generated.stairs;
                    assert!(tile == TileKind::Floor || stairs, "room tile {pos:?} is {tile:?}");
                }
            }
        }

        let seen = reachable_tiles(map, generated.player_start);
        for room in &map.rooms {
            let idx = map.index(room.center()).expect("room centers are in bounds");
            assert!(seen[idx], "room {room:?} is unreachable from the start room");
        }

        let start = map.rooms[0].center();
        let stairs_distance = manhattan(start, generated.stairs);
        assert!(map.rooms.iter().all(|room| manhattan(start, room.center()) <= stairs_distance));
        assert_eq!(map.tile_at(generated.stairs), TileKind::Stairs);
        for x in 0..map.width {
            assert_eq!(map.tile_at(Pos::new(x as i32, 0)), TileKind::Wall);
            assert_eq!(map.tile_at(Pos::new(x as i32, map.height as i32 - 1)), TileKind::Wall);
        }
    }

    #[test]
    fn same_seed_produces_identical_floors() {
        let a = generate(77, 4);
        let b = generate(77, 4);
        assert_eq!(a.map.tiles, b.map.tiles);
        assert_eq!(a.map.rooms, b.map.rooms);
        assert_eq!(a.enemies, b.enemies);
        assert_eq!(a.items, b.items);
    }

    #[test]
    fn player_starts_in_room_zero_and_enemies_stay_out_of_it() {
        for seed in 0..20 {
            let generated = generate(seed, 1);
            let start_room = generated.map.rooms[0];
            assert_eq!(generated.player_start, start_room.center());
            assert!(generated.enemies.iter().all(|spawn| !start_room.contains(spawn.pos)));
            assert!(generated.enemies.len() <= content::enemy_count(1));
            assert!(generated.items.len() <= content::item_count(1));
        }
    }

    #[test]
    fn corridors_produce_at_least_one_door() {
        let with_doors = (0..20)
            .filter(|&seed| generate(seed, 2).map.tiles.contains(&TileKind::Door))
            .count();
        assert!(with_doors > 0);
    }

    #[test]
    fn minimum_sized_map_still_generates_a_valid_floor() {
        let mut rng = GameRng::seed_from_u64(3);
        let generated = MapGenerator::new(40, 24).generate(1, &mut rng);
        assert!(generated.map.rooms.len() >= 2);
        assert_floor_invariants(&generated);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_floors_are_connected_and_stairs_are_farthest(
            seed in any::<u64>(),
            floor in 1_u8..=10,
        ) {
            assert_floor_invariants(&generate(seed, floor));
        }
    }
}
