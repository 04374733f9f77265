//! The scrolling map viewport.

use crate::state::{GameState, Map};
use crate::types::{Item, Pickup, Pos, TileKind};

use super::paint::{Color, LineBuilder};

/// Top-left corner and size of the visible map window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub left: i32,
    pub top: i32,
    pub width: usize,
    pub height: usize,
}

impl Camera {
    /// Centres on `focus`, then slides back inside the map. Maps smaller than
    /// the window pin the camera at the origin.
    pub fn centered_on(focus: Pos, map: &Map, width: usize, height: usize) -> Self {
        let left = clamp_axis(focus.x - width as i32 / 2, map.width, width);
        let top = clamp_axis(focus.y - height as i32 / 2, map.height, height);
        Self { left, top, width, height }
    }
}

fn clamp_axis(start: i32, map_len: usize, view_len: usize) -> i32 {
    let max_start = map_len.saturating_sub(view_len) as i32;
    start.clamp(0, max_start)
}

pub(super) fn map_lines(state: &GameState, width: usize, height: usize) -> Vec<String> {
    let camera = Camera::centered_on(state.player.pos, &state.map, width, height);
    (0..height as i32)
        .map(|row| {
            let mut line = LineBuilder::default();
            for col in 0..width as i32 {
                let pos = Pos { y: camera.top + row, x: camera.left + col };
                let (glyph, color) = cell(state, pos);
                line.push(glyph, color);
            }
            line.finish()
        })
        .collect()
}

/// Player over enemy over item over terrain; remembered terrain is dimmed.
fn cell(state: &GameState, pos: Pos) -> (char, Color) {
    let map = &state.map;
    if map.is_visible(pos) {
        if pos == state.player.pos {
            return ('@', Color::BrightYellow);
        }
        if let Some(idx) = state.living_enemy_at(pos) {
            return (state.enemies[idx].glyph, Color::Red);
        }
        if let Some(item) = state.items.values().find(|item| item.pos == pos) {
            return (item.glyph, pickup_color(&item.pickup));
        }
        let tile = map.tile_at(pos);
        return (tile_glyph(tile), tile_color(tile));
    }
    if map.is_explored(pos) {
        return (tile_glyph(map.tile_at(pos)), Color::Dim);
    }
    (' ', Color::Default)
}

fn tile_glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Wall => '#',
        TileKind::Floor => '.',
        TileKind::Door => '+',
        TileKind::Stairs => '>',
    }
}

fn tile_color(tile: TileKind) -> Color {
    match tile {
        TileKind::Wall => Color::White,
        TileKind::Floor => Color::Gray,
        TileKind::Door => Color::Yellow,
        TileKind::Stairs => Color::BrightGreen,
    }
}

fn pickup_color(pickup: &Pickup) -> Color {
    match pickup {
        Pickup::Gold(_) => Color::BrightYellow,
        Pickup::Item(Item::Weapon { .. }) => Color::Cyan,
        Pickup::Item(Item::Armor { .. }) => Color::Blue,
        Pickup::Item(Item::Potion { .. }) => Color::Magenta,
    }
}
