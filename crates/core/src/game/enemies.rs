//! The enemy half of a turn: chase and strike when the player is close and in
//! sight, otherwise wander now and then.
//!
//! Sight is read from the visibility grid left by the previous player turn.

use tracing::info;

use super::*;

const CARDINALS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl GameState {
    pub(super) fn run_enemy_phase(&mut self) {
        for idx in 0..self.enemies.len() {
            if self.over {
                break;
            }
            if !self.enemies[idx].alive {
                continue;
            }

            let enemy_pos = self.enemies[idx].pos;
            let distance = manhattan(enemy_pos, self.player.pos);
            let hunting = distance <= self.config.chase_range && self.map.is_visible(enemy_pos);
            if hunting {
                if distance == 1 {
                    self.enemy_attacks(idx);
                } else {
                    self.chase(idx);
                }
            } else if self.rng.percent(self.config.wander_chance) {
                self.wander(idx);
            }
        }
    }

    /// One step along the dominant axis, then the other axis if that is blocked.
    fn chase(&mut self, idx: usize) {
        let from = self.enemies[idx].pos;
        let dx = (self.player.pos.x - from.x).signum();
        let dy = (self.player.pos.y - from.y).signum();
        let x_dominant =
            (self.player.pos.x - from.x).abs() >= (self.player.pos.y - from.y).abs();
        let (primary, fallback) =
            if x_dominant { ((dx, 0), (0, dy)) } else { ((0, dy), (dx, 0)) };

        for (step_x, step_y) in [primary, fallback] {
            if (step_x, step_y) == (0, 0) {
                continue;
            }
            let dest = from.offset(step_x, step_y);
            if dest == self.player.pos {
                self.enemy_attacks(idx);
                return;
            }
            if self.map.tile_at(dest).is_walkable() && self.living_enemy_at(dest).is_none() {
                self.enemies[idx].pos = dest;
                return;
            }
        }
    }

    fn wander(&mut self, idx: usize) {
        let Some(&(dx, dy)) = self.rng.pick(&CARDINALS) else {
            return;
        };
        let dest = self.enemies[idx].pos.offset(dx, dy);
        if dest == self.player.pos {
            return;
        }
        let open = matches!(self.map.tile_at(dest), TileKind::Floor | TileKind::Door);
        if open && self.living_enemy_at(dest).is_none() {
            self.enemies[idx].pos = dest;
        }
    }

    fn enemy_attacks(&mut self, idx: usize) {
        let name = self.enemies[idx].name;
        let power = self.enemies[idx].stats.str;
        let outcome = combat::roll_attack(&mut self.rng, power, self.player.defense());
        self.player.stats.take_damage(outcome.damage);

        let mut line = combat::describe_enemy_attack(name, &outcome);
        if self.player.stats.is_dead() {
            self.over = true;
            line.push_str(" You die...");
            info!(killer = name, floor = self.floor, turn = self.turn, "player died");
        }
        self.log.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn adjacent_visible_enemy_attacks() {
        let mut state = arena_state();
        let idx_pos = state.player.pos.offset(0, 1);
        let idx = add_enemy(&mut state, idx_pos, 10);
        state.enemies[idx].stats.str = 50;
        let hp_before = state.player.stats.hp;

        let mut swings = 0;
        while state.player.stats.hp == hp_before && swings < 20 {
            state.run_enemy_phase();
            swings += 1;
        }

        assert!(state.player.stats.hp < hp_before);
        assert_eq!(state.enemies[idx].pos, state.player.pos.offset(0, 1));
    }

    #[test]
    fn chasing_enemy_closes_along_the_dominant_axis() {
        let mut state = arena_state();
        let start = state.player.pos.offset(4, 1);
        let idx = add_enemy(&mut state, start, 10);

        state.run_enemy_phase();

        assert_eq!(state.enemies[idx].pos, start.offset(-1, 0));
    }

    #[test]
    fn blocked_chase_falls_back_to_the_other_axis() {
        let mut state = arena_state();
        let start = state.player.pos.offset(3, 2);
        state.map.set_tile(start.offset(-1, 0), TileKind::Wall);
        state.refresh_fov();
        let idx = add_enemy(&mut state, start, 10);

        state.run_enemy_phase();

        assert_eq!(state.enemies[idx].pos, start.offset(0, -1));
    }

    #[test]
    fn enemies_out_of_range_never_attack() {
        let mut state = arena_state();
        let far = state.player.pos.offset(8, 0);
        let idx = add_enemy(&mut state, far, 10);
        state.enemies[idx].stats.str = 99;
        state.config.wander_chance = 100;

        state.run_enemy_phase();

        assert_eq!(state.player.stats.hp, state.player.stats.max_hp);
        assert_ne!(state.enemies[idx].pos, far, "a sure wanderer moves in an open room");
    }

    #[test]
    fn player_death_ends_the_phase_and_the_run() {
        let mut state = arena_state();
        state.player.stats.hp = 1;
        let first_pos = state.player.pos.offset(1, 0);
        let first = add_enemy(&mut state, first_pos, 10);
        let second_pos = state.player.pos.offset(-1, 0);
        let second = add_enemy(&mut state, second_pos, 10);
        state.enemies[first].stats.str = 200;
        state.enemies[second].stats.str = 200;

        while !state.over {
            state.run_enemy_phase();
        }

        assert_eq!(state.player.stats.hp, 0);
        assert_eq!(state.mode(), Mode::GameOver);
        assert!(state.log.last().is_some_and(|line| line.ends_with("You die...")));
        let after = apply(state, Command::Move { dx: 0, dy: 1 });
        assert_eq!(after.outcome(), Some(RunOutcome::Defeat));
        assert_eq!(after.turn, 0);
    }

    #[test]
    fn dead_enemies_stay_in_the_list_and_do_nothing() {
        let mut state = arena_state();
        let idx_pos = state.player.pos.offset(1, 0);
        let idx = add_enemy(&mut state, idx_pos, 10);
        state.enemies[idx].alive = false;
        state.enemies[idx].stats.str = 99;

        state.run_enemy_phase();

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.player.stats.hp, state.player.stats.max_hp);
    }
}
