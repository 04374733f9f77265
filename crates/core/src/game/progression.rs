//! Experience thresholds and the level-up loop.

use tracing::info;

use super::*;

const HP_PER_LEVEL: i32 = 8;
const STR_PER_LEVEL: i32 = 2;
const DEF_PER_LEVEL: i32 = 1;

pub fn xp_to_next(level: u32) -> u32 {
    level * 25 + 15
}

/// Spends banked xp on as many levels as it covers. Returns the levels gained.
pub fn apply_level_ups(player: &mut Player) -> u32 {
    let mut gained = 0;
    while player.xp >= player.xp_to_next {
        player.xp -= player.xp_to_next;
        player.level += 1;
        player.stats.max_hp += HP_PER_LEVEL;
        player.stats.hp = player.stats.max_hp;
        player.stats.str += STR_PER_LEVEL;
        player.stats.def += DEF_PER_LEVEL;
        player.xp_to_next = xp_to_next(player.level);
        gained += 1;
    }
    gained
}

impl GameState {
    pub(super) fn gain_xp(&mut self, amount: u32) {
        self.player.xp += amount;
        let gained = apply_level_ups(&mut self.player);
        if gained > 0 {
            let level = self.player.level;
            info!(level, gained, turn = self.turn, "player levelled up");
            self.log.push(format!("You reach level {level}! You feel stronger."));
        }
    }
}
