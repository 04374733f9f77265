use slotmap::new_key_type;

new_key_type! {
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

pub fn chebyshev(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    Door,
    Stairs,
}

impl TileKind {
    pub fn is_walkable(self) -> bool {
        self != TileKind::Wall
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PotionEffect {
    Hp,
    Str,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    Weapon { name: &'static str, atk: i32 },
    Armor { name: &'static str, def: i32 },
    Potion { name: &'static str, effect: PotionEffect, value: i32 },
}

impl Item {
    pub fn name(&self) -> &'static str {
        match self {
            Item::Weapon { name, .. } | Item::Armor { name, .. } | Item::Potion { name, .. } => {
                name
            }
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Item::Weapon { .. } => ')',
            Item::Armor { .. } => '[',
            Item::Potion { .. } => '!',
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Item::Weapon { name, atk } => format!("{name} (+{atk} atk)"),
            Item::Armor { name, def } => format!("{name} (+{def} def)"),
            Item::Potion { name, effect: PotionEffect::Hp, value } => {
                format!("{name} (heal {value})")
            }
            Item::Potion { name, effect: PotionEffect::Str, value } => {
                format!("{name} (+{value} str)")
            }
        }
    }
}

/// What lies on a floor tile waiting to be picked up.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pickup {
    Item(Item),
    Gold(u32),
}

impl Pickup {
    pub fn glyph(&self) -> char {
        match self {
            Pickup::Item(item) => item.glyph(),
            Pickup::Gold(_) => '$',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Move { dx: i32, dy: i32 },
    OpenInventory,
    CloseInventory,
    SelectNext,
    SelectPrev,
    UseSelected,
    Descend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Exploring,
    InventoryOpen,
    GameOver,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}
