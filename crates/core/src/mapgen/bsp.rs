//! Binary space partitioning of the floor rectangle and one room per leaf.

use crate::rng::GameRng;
use crate::state::Room;

pub(super) const MAX_DEPTH: u32 = 5;
/// Smallest partition edge; a node splits only if it is twice this size.
pub(super) const MIN_NODE_SIZE: usize = 12;
pub(super) const MIN_ROOM_SIZE: usize = 4;
const LONGER_AXIS_PERCENT: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Rect {
    pub(super) x: usize,
    pub(super) y: usize,
    pub(super) w: usize,
    pub(super) h: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cut {
    Vertical,
    Horizontal,
}

#[derive(Debug)]
pub(super) enum BspNode {
    Leaf { rect: Rect, room: usize },
    Split { left: Box<BspNode>, right: Box<BspNode> },
}

impl BspNode {
    /// Room indices of every leaf under this node, in leaf order.
    pub(super) fn rooms(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_rooms(&mut out);
        out
    }

    fn collect_rooms(&self, out: &mut Vec<usize>) {
        match self {
            BspNode::Leaf { room, .. } => out.push(*room),
            BspNode::Split { left, right } => {
                left.collect_rooms(out);
                right.collect_rooms(out);
            }
        }
    }
}

/// Partitions `bounds` and carves out one room rectangle per leaf.
/// Rooms are numbered in left-to-right leaf order.
pub(super) fn partition(bounds: Rect, rng: &mut GameRng) -> (BspNode, Vec<Room>) {
    let mut rooms = Vec::new();
    let tree = split_node(bounds, 0, rng, &mut rooms);
    (tree, rooms)
}

fn split_node(rect: Rect, depth: u32, rng: &mut GameRng, rooms: &mut Vec<Room>) -> BspNode {
    let cut = if depth >= MAX_DEPTH { None } else { choose_cut(rect, rng) };
    let Some(cut) = cut else {
        rooms.push(place_room(rect, rng));
        return BspNode::Leaf { rect, room: rooms.len() - 1 };
    };

    let (first, second) = match cut {
        Cut::Vertical => {
            let offset = rng.range_usize(MIN_NODE_SIZE, rect.w - MIN_NODE_SIZE);
            (
                Rect { w: offset, ..rect },
                Rect { x: rect.x + offset, w: rect.w - offset, ..rect },
            )
        }
        Cut::Horizontal => {
            let offset = rng.range_usize(MIN_NODE_SIZE, rect.h - MIN_NODE_SIZE);
            (
                Rect { h: offset, ..rect },
                Rect { y: rect.y + offset, h: rect.h - offset, ..rect },
            )
        }
    };

    let left = split_node(first, depth + 1, rng, rooms);
    let right = split_node(second, depth + 1, rng, rooms);
    BspNode::Split { left: Box::new(left), right: Box::new(right) }
}

fn choose_cut(rect: Rect, rng: &mut GameRng) -> Option<Cut> {
    let can_cut_width = rect.w >= MIN_NODE_SIZE * 2;
    let can_cut_height = rect.h >= MIN_NODE_SIZE * 2;
    match (can_cut_width, can_cut_height) {
        (false, false) => None,
        (true, false) => Some(Cut::Vertical),
        (false, true) => Some(Cut::Horizontal),
        (true, true) => {
            let (longer, shorter) = if rect.w >= rect.h {
                (Cut::Vertical, Cut::Horizontal)
            } else {
                (Cut::Horizontal, Cut::Vertical)
            };
            Some(if rng.percent(LONGER_AXIS_PERCENT) { longer } else { shorter })
        }
    }
}

fn place_room(rect: Rect, rng: &mut GameRng) -> Room {
    let max_w = rect.w.saturating_sub(2).max(MIN_ROOM_SIZE);
    let max_h = rect.h.saturating_sub(2).max(MIN_ROOM_SIZE);
    let w = rng.range_usize(MIN_ROOM_SIZE, max_w);
    let h = rng.range_usize(MIN_ROOM_SIZE, max_h);
    let x = rect.x + 1 + rng.range_usize(0, max_w - w);
    let y = rect.y + 1 + rng.range_usize(0, max_h - h);
    Room { x, y, w, h }
}
