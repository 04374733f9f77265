//! Room carving, bottom-up corridor links between BSP siblings, and door marking.

use crate::rng::GameRng;
use crate::state::{Map, Room};
use crate::types::{Pos, TileKind};

use super::bsp::BspNode;

pub(super) fn carve_room(map: &mut Map, room: &Room) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            map.set_tile(Pos::new(x as i32, y as i32), TileKind::Floor);
        }
    }
}

/// Links the two halves of every split with one L-shaped corridor, deepest
/// splits first. Returns every tile that was rock before carving.
pub(super) fn connect_subtrees(
    map: &mut Map,
    node: &BspNode,
    rooms: &[Room],
    rng: &mut GameRng,
) -> Vec<Pos> {
    let mut carved = Vec::new();
    connect_node(map, node, rooms, rng, &mut carved);
    carved
}

fn connect_node(
    map: &mut Map,
    node: &BspNode,
    rooms: &[Room],
    rng: &mut GameRng,
    carved: &mut Vec<Pos>,
) {
    let BspNode::Split { left, right } = node else {
        return;
    };
    connect_node(map, left, rooms, rng, carved);
    connect_node(map, right, rooms, rng, carved);

    let left_rooms = left.rooms();
    let right_rooms = right.rooms();
    let (Some(&from), Some(&to)) = (rng.pick(&left_rooms), rng.pick(&right_rooms)) else {
        return;
    };
    let horizontal_first = rng.percent(50);
    carve_l_corridor(map, rooms[from].center(), rooms[to].center(), horizontal_first, carved);
}

fn carve_l_corridor(
    map: &mut Map,
    from: Pos,
    to: Pos,
    horizontal_first: bool,
    carved: &mut Vec<Pos>,
) {
    let corner = if horizontal_first { Pos::new(to.x, from.y) } else { Pos::new(from.x, to.y) };
    carve_line(map, from, corner, carved);
    carve_line(map, corner, to, carved);
}

/// Carves a straight horizontal or vertical run, endpoints included.
fn carve_line(map: &mut Map, from: Pos, to: Pos, carved: &mut Vec<Pos>) {
    let dx = (to.x - from.x).signum();
    let dy = (to.y - from.y).signum();
    let mut pos = from;
    loop {
        if map.tile_at(pos) == TileKind::Wall && map.in_bounds(pos) {
            map.set_tile(pos, TileKind::Floor);
            carved.push(pos);
        }
        if pos == to {
            break;
        }
        pos = pos.offset(dx, dy);
    }
}

/// Promotes carved corridor tiles that sit in a one-wide gap next to a room.
pub(super) fn mark_doors(map: &mut Map, carved: &[Pos]) {
    let doors: Vec<Pos> =
        carved.iter().copied().filter(|&pos| is_doorway(map, pos)).collect();
    for pos in doors {
        map.set_tile(pos, TileKind::Door);
    }
}

fn is_doorway(map: &Map, pos: Pos) -> bool {
    if map.tile_at(pos) != TileKind::Floor {
        return false;
    }
    let wall = |dx: i32, dy: i32| map.tile_at(pos.offset(dx, dy)) == TileKind::Wall;
    let open = |dx: i32, dy: i32| !wall(dx, dy);

    let walled_east_west = wall(-1, 0) && wall(1, 0) && open(0, -1) && open(0, 1);
    let walled_north_south = wall(0, -1) && wall(0, 1) && open(-1, 0) && open(1, 0);
    if !walled_east_west && !walled_north_south {
        return false;
    }

    [(1, 0), (-1, 0), (0, 1), (0, -1)]
        .into_iter()
        .any(|(dx, dy)| map.rooms.iter().any(|room| room.contains(pos.offset(dx, dy))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_map(rooms: &[Room]) -> Map {
        let mut map = Map::new(30, 12);
        for room in rooms {
            carve_room(&mut map, room);
        }
        map.rooms = rooms.to_vec();
        map
    }

    #[test]
    fn corridor_between_side_by_side_rooms_gets_doors_at_both_ends() {
        let left = Room { x: 2, y: 3, w: 5, h: 5 };
        let right = Room { x: 15, y: 3, w: 5, h: 5 };
        let mut map = open_map(&[left, right]);
        let mut carved = Vec::new();

        carve_l_corridor(&mut map, left.center(), right.center(), true, &mut carved);
        mark_doors(&mut map, &carved);

        let row = left.center().y;
        assert_eq!(carved.len(), 8, "only rock between the rooms is carved");
        assert_eq!(map.tile_at(Pos::new(7, row)), TileKind::Door);
        assert_eq!(map.tile_at(Pos::new(14, row)), TileKind::Door);
        for x in 8..14 {
            assert_eq!(map.tile_at(Pos::new(x, row)), TileKind::Floor, "x={x}");
        }
    }

    #[test]
    fn carving_never_touches_existing_room_tiles() {
        let room = Room { x: 3, y: 2, w: 6, h: 4 };
        let mut map = open_map(&[room]);
        let mut carved = Vec::new();

        carve_line(&mut map, Pos::new(1, 3), Pos::new(12, 3), &mut carved);

        assert!(carved.iter().all(|pos| !room.contains(*pos)));
        assert_eq!(carved.len(), 12 - room.w);
    }

    #[test]
    fn corridor_junction_is_not_a_door() {
        let room = Room { x: 2, y: 2, w: 4, h: 4 };
        let mut map = open_map(&[room]);
        let mut carved = Vec::new();
        carve_line(&mut map, Pos::new(6, 3), Pos::new(10, 3), &mut carved);
        carve_line(&mut map, Pos::new(6, 1), Pos::new(6, 6), &mut carved);

        mark_doors(&mut map, &carved);

        assert_eq!(map.tile_at(Pos::new(6, 3)), TileKind::Floor);
    }
}
