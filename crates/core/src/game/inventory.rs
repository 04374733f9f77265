//! Ground pickups, the pack, equipment swaps and potions.

use super::*;

impl GameState {
    /// Takes whatever lies at `pos`. Gold never touches the pack; items stay on
    /// the ground when the pack is full.
    pub(super) fn pick_up_at(&mut self, pos: Pos) {
        let Some(id) = self.item_at(pos) else {
            return;
        };
        let Some(ground) = self.items.get(id) else {
            return;
        };

        match &ground.pickup {
            Pickup::Gold(amount) => {
                let amount = *amount;
                self.player.gold += amount;
                self.items.remove(id);
                self.log.push(format!("You pick up {amount} gold."));
            }
            Pickup::Item(item) => {
                if self.player.inventory.len() >= self.config.inventory_capacity {
                    let name = item.name();
                    self.log.push(format!("Your pack is full. The {name} stays on the ground."));
                    return;
                }
                let item = item.clone();
                self.log.push(format!("You pick up the {}.", item.describe()));
                self.player.inventory.push(item);
                self.items.remove(id);
            }
        }
    }

    pub(super) fn open_inventory(&mut self) {
        self.inv_open = true;
        self.clamp_selection();
    }

    /// Moves the highlight with wrap-around. Ignored while the pack is closed.
    pub(super) fn cycle_selection(&mut self, step: isize) {
        let len = self.player.inventory.len();
        if !self.inv_open || len == 0 {
            return;
        }
        let len = len as isize;
        let current = self.inv_selected.min(len as usize - 1) as isize;
        self.inv_selected = (current + step).rem_euclid(len) as usize;
    }

    pub(super) fn use_selected(&mut self) {
        if self.inv_selected >= self.player.inventory.len() {
            self.clamp_selection();
            return;
        }
        let item = self.player.inventory.remove(self.inv_selected);
        let line = match item {
            Item::Weapon { name, .. } => {
                let previous = self.player.weapon.replace(item);
                self.stow(previous);
                format!("You wield the {name}.")
            }
            Item::Armor { name, .. } => {
                let previous = self.player.armor.replace(item);
                self.stow(previous);
                format!("You put on the {name}.")
            }
            Item::Potion { name, effect: PotionEffect::Hp, value } => {
                let stats = &mut self.player.stats;
                let healed = value.min(stats.max_hp - stats.hp).max(0);
                stats.hp += healed;
                format!("You drink the {name} and recover {healed} hp.")
            }
            Item::Potion { name, effect: PotionEffect::Str, value } => {
                self.player.stats.str += value;
                format!("You drink the {name}. Strength +{value}.")
            }
        };
        self.log.push(line);
        self.clamp_selection();
    }

    /// Swapped-out gear always returns to the pack, even past capacity.
    fn stow(&mut self, previous: Option<Item>) {
        if let Some(previous) = previous {
            self.player.inventory.push(previous);
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.player.inventory.len();
        self.inv_selected = if len == 0 { 0 } else { self.inv_selected.min(len - 1) };
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn potion(effect: PotionEffect, value: i32) -> Item {
        Item::Potion { name: "Test Potion", effect, value }
    }

    #[test]
    fn ninth_pickup_is_rejected_and_the_item_stays_put() {
        let mut state = arena_state();
        for _ in 0..8 {
            state.player.inventory.push(potion(PotionEffect::Hp, 5));
        }
        let target = state.player.pos.offset(1, 0);
        let mace = Item::Weapon { name: "Mace", atk: 4 };
        let id = place_item(&mut state, target, Pickup::Item(mace));
        let before = state.player.inventory.clone();

        let state = apply(state, Command::Move { dx: 1, dy: 0 });

        assert_eq!(state.player.pos, target);
        assert_eq!(state.player.inventory, before);
        assert!(state.items.contains_key(id));
        assert!(state.log.last().is_some_and(|line| line.contains("pack is full")));
    }

    #[test]
    fn gold_bypasses_a_full_pack() {
        let mut state = arena_state();
        for _ in 0..8 {
            state.player.inventory.push(potion(PotionEffect::Hp, 5));
        }
        let target = state.player.pos.offset(0, -1);
        let id = place_item(&mut state, target, Pickup::Gold(12));

        let state = apply(state, Command::Move { dx: 0, dy: -1 });

        assert_eq!(state.player.gold, 12);
        assert_eq!(state.player.inventory.len(), 8);
        assert!(!state.items.contains_key(id));
    }

    #[test]
    fn equip_swap_returns_old_gear_even_past_capacity() {
        let mut state = arena_state();
        state.player.weapon = Some(Item::Weapon { name: "Dagger", atk: 2 });
        for _ in 0..7 {
            state.player.inventory.push(potion(PotionEffect::Str, 1));
        }
        state.player.inventory.insert(0, Item::Weapon { name: "Mace", atk: 4 });
        state.inv_open = true;
        state.inv_selected = 0;

        state.use_selected();

        assert_eq!(state.player.weapon, Some(Item::Weapon { name: "Mace", atk: 4 }));
        assert_eq!(state.player.inventory.len(), 8);
        let dagger = Item::Weapon { name: "Dagger", atk: 2 };
        assert_eq!(state.player.inventory.last(), Some(&dagger));

        state.player.armor = Some(Item::Armor { name: "Leather Armor", def: 1 });
        state.player.inventory.insert(0, Item::Armor { name: "Chain Mail", def: 3 });
        state.use_selected();
        assert_eq!(state.player.inventory.len(), 9);
    }

    #[test]
    fn healing_potion_caps_at_max_hp_and_is_consumed() {
        let mut state = arena_state();
        state.player.stats.hp = state.player.stats.max_hp - 4;
        state.player.inventory.push(potion(PotionEffect::Hp, 25));
        state.inv_open = true;

        state.use_selected();

        assert_eq!(state.player.stats.hp, state.player.stats.max_hp);
        assert!(state.player.inventory.is_empty());
        assert!(state.log.last().is_some_and(|line| line.contains("recover 4 hp")));
    }

    #[test]
    fn strength_potion_adds_flat_strength() {
        let mut state = arena_state();
        let before = state.player.stats.str;
        state.player.inventory.push(potion(PotionEffect::Str, 3));
        state.inv_open = true;
        state.use_selected();
        assert_eq!(state.player.stats.str, before + 3);
    }

    #[test]
    fn selection_wraps_and_clamps_when_the_pack_shrinks() {
        let mut state = arena_state();
        for value in 1..=3 {
            state.player.inventory.push(potion(PotionEffect::Hp, value));
        }
        let state = apply(state, Command::OpenInventory);
        let state = apply(state, Command::SelectPrev);
        assert_eq!(state.inv_selected, 2);
        let state = apply(state, Command::SelectNext);
        assert_eq!(state.inv_selected, 0);
        let state = apply(state, Command::SelectPrev);

        let state = apply(state, Command::UseSelected);

        assert_eq!(state.player.inventory.len(), 2);
        assert_eq!(state.inv_selected, 1);
    }

    #[test]
    fn inventory_commands_are_ignored_while_closed_or_empty() {
        let mut state = arena_state();
        state.player.inventory.push(potion(PotionEffect::Hp, 5));
        let state = apply(state, Command::SelectNext);
        let state = apply(state, Command::UseSelected);
        assert_eq!(state.player.inventory.len(), 1);
        assert_eq!(state.inv_selected, 0);

        let mut state = apply(state, Command::OpenInventory);
        state.player.inventory.clear();
        let before = state.snapshot_hash();
        let state = apply(state, Command::UseSelected);
        let state = apply(state, Command::SelectNext);
        assert_eq!(state.snapshot_hash(), before);
    }
}
