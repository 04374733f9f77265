//! Static game content: enemy species per floor tier, gear and potion tables,
//! and per-floor spawn counts.

use crate::types::{Item, PotionEffect};

pub const MAX_FLOORS: u8 = 10;
pub const STARTING_FLOOR: u8 = 1;

const ENEMY_COUNT_BY_FLOOR: [usize; MAX_FLOORS as usize] = [4, 5, 5, 6, 6, 7, 7, 8, 8, 9];
const ITEM_COUNT_BY_FLOOR: [usize; MAX_FLOORS as usize] = [5, 5, 5, 6, 6, 6, 7, 7, 7, 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Species {
    pub name: &'static str,
    pub glyph: char,
    pub hp: i32,
    pub str: i32,
    pub def: i32,
    pub xp: u32,
}

const fn species(name: &'static str, glyph: char, hp: i32, str: i32, def: i32, xp: u32) -> Species {
    Species { name, glyph, hp, str, def, xp }
}

static SPECIES_BY_TIER: [[Species; 2]; MAX_FLOORS as usize] = [
    [species("Rat", 'r', 6, 3, 0, 5), species("Bat", 'b', 5, 3, 0, 4)],
    [species("Goblin", 'g', 10, 4, 1, 8), species("Kobold", 'k', 8, 4, 0, 7)],
    [species("Orc", 'o', 16, 6, 2, 14), species("Wolf", 'w', 12, 6, 1, 12)],
    [species("Skeleton", 's', 18, 7, 3, 18), species("Zombie", 'z', 24, 6, 2, 18)],
    [species("Ogre", 'O', 32, 9, 3, 28), species("Ghoul", 'G', 22, 9, 3, 24)],
    [species("Troll", 'T', 40, 11, 4, 38), species("Wraith", 'W', 28, 12, 3, 36)],
    [species("Minotaur", 'M', 50, 13, 5, 50), species("Vampire", 'V', 36, 14, 4, 48)],
    [species("Golem", 'X', 60, 14, 8, 62), species("Lich", 'L', 40, 17, 5, 64)],
    [species("Wyvern", 'Y', 64, 17, 6, 80), species("Demon", '&', 58, 18, 7, 82)],
    [species("Dragon", 'D', 90, 20, 8, 120), species("Death Knight", 'K', 75, 21, 9, 110)],
];

pub struct GearEntry {
    pub min_floor: u8,
    pub item: Item,
}

pub fn weapons() -> [GearEntry; 10] {
    [
        weapon(1, "Dagger", 2),
        weapon(1, "Short Sword", 3),
        weapon(2, "Mace", 4),
        weapon(3, "Long Sword", 5),
        weapon(4, "Battle Axe", 7),
        weapon(5, "War Hammer", 8),
        weapon(6, "Bastard Sword", 10),
        weapon(7, "Runed Blade", 12),
        weapon(8, "Dragonbone Axe", 14),
        weapon(9, "Sunforged Greatsword", 17),
    ]
}

pub fn armors() -> [GearEntry; 9] {
    [
        armor(1, "Leather Armor", 1),
        armor(2, "Studded Leather", 2),
        armor(3, "Chain Mail", 3),
        armor(4, "Scale Mail", 4),
        armor(5, "Brigandine", 5),
        armor(6, "Plate Armor", 6),
        armor(7, "Mithril Coat", 8),
        armor(8, "Dragon Scale", 10),
        armor(9, "Aegis Plate", 12),
    ]
}

pub fn potions() -> [GearEntry; 5] {
    [
        potion(1, "Minor Healing Potion", PotionEffect::Hp, 10),
        potion(1, "Strength Tonic", PotionEffect::Str, 1),
        potion(3, "Healing Potion", PotionEffect::Hp, 25),
        potion(5, "Giant's Draught", PotionEffect::Str, 3),
        potion(6, "Greater Healing Potion", PotionEffect::Hp, 50),
    ]
}

fn weapon(min_floor: u8, name: &'static str, atk: i32) -> GearEntry {
    GearEntry { min_floor, item: Item::Weapon { name, atk } }
}

fn armor(min_floor: u8, name: &'static str, def: i32) -> GearEntry {
    GearEntry { min_floor, item: Item::Armor { name, def } }
}

fn potion(min_floor: u8, name: &'static str, effect: PotionEffect, value: i32) -> GearEntry {
    GearEntry { min_floor, item: Item::Potion { name, effect, value } }
}

pub fn enemy_count(floor: u8) -> usize {
    ENEMY_COUNT_BY_FLOOR[floor_slot(floor)]
}

pub fn item_count(floor: u8) -> usize {
    ITEM_COUNT_BY_FLOOR[floor_slot(floor)]
}

/// Species of the floor's own tier; floors past the last tier reuse it.
pub fn tier_species(floor: u8) -> &'static [Species; 2] {
    &SPECIES_BY_TIER[floor_slot(floor)]
}

/// Species of the tier below, or the floor's own tier on the first floor.
pub fn previous_tier_species(floor: u8) -> &'static [Species; 2] {
    &SPECIES_BY_TIER[floor_slot(floor).saturating_sub(1)]
}

pub fn is_final_floor(floor: u8) -> bool {
    floor >= MAX_FLOORS
}

fn floor_slot(floor: u8) -> usize {
    (floor.saturating_sub(STARTING_FLOOR) as usize).min(MAX_FLOORS as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_past_the_last_tier_clamp_to_it() {
        assert_eq!(tier_species(10), tier_species(14));
        assert_eq!(enemy_count(12), enemy_count(10));
    }

    #[test]
    fn first_floor_has_no_lower_tier() {
        assert_eq!(previous_tier_species(1), tier_species(1));
        assert_eq!(previous_tier_species(4), tier_species(3));
    }

    #[test]
    fn gear_tables_unlock_in_floor_order() {
        for table in [&weapons()[..], &armors()[..], &potions()[..]] {
            assert!(table.windows(2).all(|pair| pair[0].min_floor <= pair[1].min_floor));
            assert_eq!(table[0].min_floor, STARTING_FLOOR);
        }
    }
}
