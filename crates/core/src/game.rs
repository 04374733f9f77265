//! Turn resolution: one [`Command`] in, one fully settled [`GameState`] out.
//!
//! `apply` owns the state for the duration of a turn and hands it back whole.
//! Nothing here reaches outside the state it is given, so two calls with equal
//! inputs always produce equal outputs.

mod bootstrap;
mod combat;
mod enemies;
mod floor_transition;
mod hash;
mod inventory;
mod progression;
#[cfg(test)]
mod test_support;
mod visibility;

pub use progression::{apply_level_ups, xp_to_next};
pub use visibility::{BresenhamLine, compute_fov};

use tracing::debug;

use crate::content;
use crate::state::{Enemy, GameState, Player, Stats};
use crate::types::*;

/// Resolves one command against `state`.
///
/// Terminal states absorb every command. Illegal or malformed commands (a move
/// into a wall, a use with an empty pack, a step larger than one tile) leave
/// the state untouched.
pub fn apply(mut state: GameState, command: Command) -> GameState {
    if state.is_finished() {
        return state;
    }

    match command {
        Command::Move { dx, dy } => {
            if !state.inv_open {
                state.move_player(dx, dy);
            }
        }
        Command::OpenInventory => state.open_inventory(),
        Command::CloseInventory => state.inv_open = false,
        Command::SelectNext => state.cycle_selection(1),
        Command::SelectPrev => state.cycle_selection(-1),
        Command::UseSelected => {
            if state.inv_open {
                state.use_selected();
            }
        }
        Command::Descend => {
            if !state.inv_open {
                state.descend();
            }
        }
    }
    state
}

impl GameState {
    fn move_player(&mut self, dx: i32, dy: i32) {
        if (dx, dy) == (0, 0) || dx.abs() > 1 || dy.abs() > 1 {
            return;
        }
        let target = self.player.pos.offset(dx, dy);

        if let Some(enemy_idx) = self.living_enemy_at(target) {
            self.player_attacks(enemy_idx);
            self.end_turn();
            return;
        }
        if !self.map.tile_at(target).is_walkable() {
            return;
        }

        self.player.pos = target;
        self.pick_up_at(target);
        self.end_turn();
    }

    /// Everything that follows a player action that consumed the turn.
    fn end_turn(&mut self) {
        self.turn += 1;
        self.run_enemy_phase();
        self.refresh_fov();
    }

    pub(crate) fn refresh_fov(&mut self) {
        compute_fov(&mut self.map, self.player.pos, self.config.fov_radius);
    }

    fn player_attacks(&mut self, enemy_idx: usize) {
        let power = self.player.attack_power();
        let target = &self.enemies[enemy_idx];
        let name = target.name;
        let defense = target.stats.def;
        let outcome = combat::roll_attack(&mut self.rng, power, defense);

        let enemy = &mut self.enemies[enemy_idx];
        enemy.stats.take_damage(outcome.damage);
        let killed = enemy.stats.is_dead();
        let reward = enemy.xp_reward;

        let mut line = combat::describe_player_attack(name, &outcome);
        if killed {
            enemy.alive = false;
            self.kills += 1;
            line.push_str(&format!(" The {name} dies. (+{reward} xp)"));
            debug!(enemy = name, floor = self.floor, turn = self.turn, "enemy killed");
        }
        self.log.push(line);
        if killed {
            self.gain_xp(reward);
        }
    }
}

impl Player {
    /// Starting character for a fresh run.
    pub fn new(pos: Pos) -> Self {
        let max_hp = 30;
        Self {
            pos,
            stats: Stats { hp: max_hp, max_hp, str: 5, def: 2 },
            level: 1,
            xp: 0,
            xp_to_next: xp_to_next(1),
            gold: 0,
            weapon: None,
            armor: None,
            inventory: Vec::new(),
        }
    }

    pub fn attack_power(&self) -> i32 {
        let bonus = match self.weapon {
            Some(Item::Weapon { atk, .. }) => atk,
            _ => 0,
        };
        self.stats.str + bonus
    }

    pub fn defense(&self) -> i32 {
        let bonus = match self.armor {
            Some(Item::Armor { def, .. }) => def,
            _ => 0,
        };
        self.stats.def + bonus
    }
}

impl Enemy {
    pub fn from_species(species: &content::Species, pos: Pos) -> Self {
        Self {
            pos,
            stats: Stats {
                hp: species.hp,
                max_hp: species.hp,
                str: species.str,
                def: species.def,
            },
            name: species.name,
            glyph: species.glyph,
            xp_reward: species.xp,
            alive: true,
        }
    }
}
