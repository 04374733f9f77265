//! Field-of-view and line-of-sight calculations for map visibility.
//! Visibility is rebuilt from scratch on every call; exploration only accumulates.

use super::*;
use crate::state::Map;

/// Recomputes `map.visible` around `viewer` and folds the result into
/// `map.explored`. A tile is seen when no Wall sits strictly between it and
/// the viewer on a Bresenham line, within a square window of `radius`.
pub fn compute_fov(map: &mut Map, viewer: Pos, radius: u32) {
    map.clear_visible();
    if !map.in_bounds(viewer) {
        return;
    }
    map.reveal(viewer);

    let radius = i32::try_from(radius).unwrap_or(i32::MAX);
    let min_y = viewer.y.saturating_sub(radius).max(0);
    let max_y = viewer.y.saturating_add(radius).min(map.height as i32 - 1);
    let min_x = viewer.x.saturating_sub(radius).max(0);
    let max_x = viewer.x.saturating_add(radius).min(map.width as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let target = Pos { y, x };
            if target != viewer && has_line_of_sight(map, viewer, target) {
                map.reveal(target);
            }
        }
    }
}

fn has_line_of_sight(map: &Map, origin: Pos, target: Pos) -> bool {
    BresenhamLine::new(origin, target)
        .skip(1)
        .take_while(|&pos| pos != target)
        .all(|pos| map.tile_at(pos) != TileKind::Wall)
}

/// Grid cells from `start` to `end`, both included.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    current: Pos,
    end: Pos,
    dx: i32,
    dy: i32,
    step_x: i32,
    step_y: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    pub fn new(start: Pos, end: Pos) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            step_x: (end.x - start.x).signum(),
            step_y: (end.y - start.y).signum(),
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.done {
            return None;
        }
        let out = self.current;
        if out == self.end {
            self.done = true;
            return Some(out);
        }
        let doubled = 2 * self.err;
        if doubled >= self.dy {
            self.err += self.dy;
            self.current.x += self.step_x;
        }
        if doubled <= self.dx {
            self.err += self.dx;
            self.current.y += self.step_y;
        }
        Some(out)
    }
}
