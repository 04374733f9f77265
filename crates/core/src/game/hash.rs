//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl GameState {
    /// Hash of everything a player could observe. Equal seeds fed equal
    /// commands always agree on this value.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u8(self.floor);
        hasher.write_u32(self.kills);
        hasher.write_u8(u8::from(self.over));
        hasher.write_u8(u8::from(self.won));
        hasher.write_u8(u8::from(self.inv_open));
        hasher.write_usize(self.inv_selected);

        let player = &self.player;
        write_pos(&mut hasher, player.pos);
        write_stats(&mut hasher, &player.stats);
        hasher.write_u32(player.level);
        hasher.write_u32(player.xp);
        hasher.write_u32(player.xp_to_next);
        hasher.write_u32(player.gold);
        write_slot(&mut hasher, player.weapon.as_ref());
        write_slot(&mut hasher, player.armor.as_ref());
        hasher.write_usize(player.inventory.len());
        for item in &player.inventory {
            write_item(&mut hasher, item);
        }

        hasher.write_usize(self.enemies.len());
        for enemy in &self.enemies {
            write_pos(&mut hasher, enemy.pos);
            write_stats(&mut hasher, &enemy.stats);
            hasher.write(enemy.name.as_bytes());
            hasher.write_u8(u8::from(enemy.alive));
        }

        let mut ground: Vec<_> = self.items.values().collect();
        ground.sort_by_key(|item| (item.pos.y, item.pos.x));
        hasher.write_usize(ground.len());
        for item in ground {
            write_pos(&mut hasher, item.pos);
            match &item.pickup {
                Pickup::Gold(amount) => {
                    hasher.write_u8(0);
                    hasher.write_u32(*amount);
                }
                Pickup::Item(inner) => {
                    hasher.write_u8(1);
                    write_item(&mut hasher, inner);
                }
            }
        }

        for (idx, tile) in self.map.tiles.iter().enumerate() {
            hasher.write_u8(*tile as u8);
            hasher.write_u8(u8::from(self.map.explored[idx]));
        }
        for line in self.log.recent(self.log.len()) {
            hasher.write(line.as_bytes());
            hasher.write_u8(b'\n');
        }
        hasher.finish()
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}

fn write_stats(hasher: &mut Xxh3, stats: &Stats) {
    hasher.write_i32(stats.hp);
    hasher.write_i32(stats.max_hp);
    hasher.write_i32(stats.str);
    hasher.write_i32(stats.def);
}

fn write_slot(hasher: &mut Xxh3, item: Option<&Item>) {
    match item {
        Some(item) => {
            hasher.write_u8(1);
            write_item(hasher, item);
        }
        None => hasher.write_u8(0),
    }
}

fn write_item(hasher: &mut Xxh3, item: &Item) {
    let (tag, value) = match item {
        Item::Weapon { atk, .. } => (0, *atk),
        Item::Armor { def, .. } => (1, *def),
        Item::Potion { effect: PotionEffect::Hp, value, .. } => (2, *value),
        Item::Potion { effect: PotionEffect::Str, value, .. } => (3, *value),
    };
    hasher.write_u8(tag);
    hasher.write_i32(value);
    hasher.write(item.name().as_bytes());
}
