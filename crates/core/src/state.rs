use std::collections::VecDeque;

use slotmap::SlotMap;

use crate::config::EngineConfig;
use crate::rng::GameRng;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Room {
    pub fn right(self) -> usize {
        self.x + self.w - 1
    }

    pub fn bottom(self) -> usize {
        self.y + self.h - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + self.h / 2) as i32, x: (self.x + self.w / 2) as i32 }
    }

    pub fn contains(self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let px = pos.x as usize;
        let py = pos.y as usize;
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

#[derive(Clone, Debug)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub explored: Vec<bool>,
    pub visible: Vec<bool>,
    pub rooms: Vec<Room>,
}

impl Map {
    /// A map of solid rock, ready to be carved.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; width * height],
            explored: vec![false; width * height],
            visible: vec![false; width * height],
            rooms: Vec::new(),
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-bounds positions read as Wall.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        match self.index(pos) {
            Some(idx) => self.tiles[idx],
            None => TileKind::Wall,
        }
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx] = tile;
        }
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|idx| self.visible[idx])
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|idx| self.explored[idx])
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    /// Marks a tile visible; visible tiles are always explored as well.
    pub fn reveal(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.visible[idx] = true;
            self.explored[idx] = true;
        }
    }

    pub fn index(&self, pos: Pos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as usize) * self.width + (pos.x as usize))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub str: i32,
    pub def: i32,
}

impl Stats {
    /// Applies damage and clamps hp into `0..=max_hp`.
    pub fn take_damage(&mut self, damage: i32) {
        self.hp = (self.hp - damage).clamp(0, self.max_hp);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    pub stats: Stats,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub gold: u32,
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub inventory: Vec<Item>,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub pos: Pos,
    pub stats: Stats,
    pub name: &'static str,
    pub glyph: char,
    pub xp_reward: u32,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct MapItem {
    pub id: ItemId,
    pub pos: Pos,
    pub glyph: char,
    pub pickup: Pickup,
}

/// Append-only message history; the oldest lines fall off past `capacity`.
#[derive(Clone, Debug)]
pub struct MessageLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self { lines: VecDeque::with_capacity(capacity), capacity: capacity.max(1) }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// The newest `count` lines, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &str> {
        let skip = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(skip).map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub map: Map,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub items: SlotMap<ItemId, MapItem>,
    pub floor: u8,
    pub over: bool,
    pub won: bool,
    pub log: MessageLog,
    pub turn: u64,
    pub kills: u32,
    pub inv_open: bool,
    pub inv_selected: usize,
    pub seed: u64,
    pub rng: GameRng,
    pub config: EngineConfig,
}

impl GameState {
    pub fn mode(&self) -> Mode {
        if self.won {
            Mode::Victory
        } else if self.over {
            Mode::GameOver
        } else if self.inv_open {
            Mode::InventoryOpen
        } else {
            Mode::Exploring
        }
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        if self.won {
            Some(RunOutcome::Victory)
        } else if self.over {
            Some(RunOutcome::Defeat)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.over || self.won
    }

    pub fn living_enemy_at(&self, pos: Pos) -> Option<usize> {
        self.enemies.iter().position(|enemy| enemy.alive && enemy.pos == pos)
    }

    pub fn living_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|enemy| enemy.alive).count()
    }

    pub fn item_at(&self, pos: Pos) -> Option<ItemId> {
        self.items.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_as_wall_and_is_never_visible() {
        let map = Map::new(5, 5);
        assert_eq!(map.tile_at(Pos::new(-1, 2)), TileKind::Wall);
        assert_eq!(map.tile_at(Pos::new(5, 0)), TileKind::Wall);
        assert!(!map.is_visible(Pos::new(9, 9)));
        assert!(!map.is_explored(Pos::new(-3, 0)));
    }

    #[test]
    fn damage_is_clamped_into_hp_range() {
        let mut stats = Stats { hp: 5, max_hp: 10, str: 1, def: 0 };
        stats.take_damage(12);
        assert_eq!(stats.hp, 0);
        assert!(stats.is_dead());
        stats.hp = 9;
        stats.take_damage(-5);
        assert_eq!(stats.hp, 10);
    }

    #[test]
    fn message_log_drops_oldest_lines_past_capacity() {
        let mut log = MessageLog::new(3);
        for line in ["a", "b", "c", "d"] {
            log.push(line);
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.recent(4).collect::<Vec<_>>(), vec!["b", "c", "d"]);
        assert_eq!(log.recent(2).collect::<Vec<_>>(), vec!["c", "d"]);
        assert_eq!(log.last(), Some("d"));
    }

    #[test]
    fn room_contains_its_corners_only() {
        let room = Room { x: 2, y: 3, w: 4, h: 5 };
        assert!(room.contains(Pos::new(2, 3)));
        assert!(room.contains(Pos::new(5, 7)));
        assert!(!room.contains(Pos::new(6, 7)));
        assert!(!room.contains(Pos::new(1, 3)));
        assert_eq!(room.center(), Pos::new(4, 5));
    }
}
