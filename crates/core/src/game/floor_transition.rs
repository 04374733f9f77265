//! Taking the stairs: installing the next generated floor, or winning on the last one.

use tracing::info;

use super::*;
use crate::mapgen::{GeneratedFloor, generate_floor};
use crate::state::MapItem;

impl GameState {
    pub(super) fn descend(&mut self) {
        if self.map.tile_at(self.player.pos) != TileKind::Stairs {
            return;
        }

        if content::is_final_floor(self.floor) {
            let remaining = self.living_enemy_count();
            if remaining > 0 {
                self.log.push(format!(
                    "The way out is sealed while enemies remain ({remaining} left)."
                ));
                return;
            }
            self.won = true;
            self.log.push("You climb out of the depths. Victory!");
            info!(turn = self.turn, kills = self.kills, "run won");
            return;
        }

        let next = self.floor + 1;
        self.turn += 1;
        self.install_floor(next);
        self.log.push(format!("You descend to floor {next}."));
        info!(floor = next, turn = self.turn, "descended");
    }

    /// Replaces the map, enemies and ground items with a freshly generated
    /// floor. Player stats, pack, gold and counters carry over.
    pub(crate) fn install_floor(&mut self, floor: u8) {
        let generated = generate_floor(floor, &mut self.rng, &self.config);
        self.install_generated(floor, generated);
    }

    fn install_generated(&mut self, floor: u8, generated: GeneratedFloor) {
        let GeneratedFloor { map, player_start, enemies, items, .. } = generated;
        self.map = map;
        self.floor = floor;
        self.player.pos = player_start;
        self.enemies = enemies
            .iter()
            .map(|spawn| Enemy::from_species(&spawn.species, spawn.pos))
            .collect();
        self.items.clear();
        for spawn in items {
            let glyph = spawn.pickup.glyph();
            let pos = spawn.pos;
            let pickup = spawn.pickup;
            self.items.insert_with_key(|id| MapItem { id, pos, glyph, pickup });
        }
        self.refresh_fov();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn stand_on_stairs(state: &mut GameState) {
        let pos = state.player.pos;
        state.map.set_tile(pos, TileKind::Stairs);
    }

    #[test]
    fn descend_off_stairs_is_a_no_op() {
        let state = arena_state();
        let before = state.snapshot_hash();
        let state = apply(state, Command::Descend);
        assert_eq!(state.snapshot_hash(), before);
        assert_eq!(state.floor, 1);
    }

    #[test]
    fn descending_keeps_the_character_and_replaces_the_floor() {
        let mut state = arena_state();
        stand_on_stairs(&mut state);
        state.player.gold = 33;
        state.player.inventory.push(Item::Armor { name: "Chain Mail", def: 3 });
        state.kills = 4;
        state.turn = 17;
        add_enemy(&mut state, Pos::new(3, 3), 5);

        let state = apply(state, Command::Descend);

        assert_eq!(state.floor, 2);
        assert_eq!(state.player.gold, 33);
        assert_eq!(state.player.inventory.len(), 1);
        assert_eq!(state.kills, 4);
        assert_eq!(state.turn, 18);
        assert_eq!(state.map.width, state.config.map_width);
        assert_eq!(state.player.pos, state.map.rooms[0].center());
        assert!(state.enemies.iter().all(|enemy| enemy.alive && enemy.name != "Dummy"));
        assert!(state.map.is_visible(state.player.pos));
    }

    #[test]
    fn final_floor_exit_is_sealed_until_every_enemy_is_dead() {
        let mut state = arena_state();
        state.floor = content::MAX_FLOORS;
        stand_on_stairs(&mut state);
        let idx_pos = state.player.pos.offset(1, 0);
        let idx = add_enemy(&mut state, idx_pos, 2);
        let log_before = state.log.len();

        let mut state = apply(state, Command::Descend);
        assert!(!state.won);
        assert_eq!(state.log.len(), log_before + 1);
        assert!(state.log.last().is_some_and(|line| line.contains("1 left")));

        while state.enemies[idx].alive {
            state = apply(state, Command::Move { dx: 1, dy: 0 });
            assert!(state.turn < 50, "dummy never went down");
        }
        assert_eq!(state.enemies[idx].stats.hp, 0);
        let state = apply(state, Command::Descend);
        assert!(state.won);
        assert_eq!(state.mode(), Mode::Victory);
        assert_eq!(state.outcome(), Some(RunOutcome::Victory));
    }
}
