//! Full-pane views that replace the map: the pack, death, and victory.

use crate::state::GameState;
use crate::types::Item;

use super::paint::{Color, paint};
use super::width::{center_to_width, pad_to_width};

pub(super) fn inventory_lines(state: &GameState, width: usize, height: usize) -> Vec<String> {
    let player = &state.player;
    let mut lines = vec![
        paint(
            &format!(
                "Pack ({}/{})",
                player.inventory.len(),
                state.config.inventory_capacity
            ),
            Color::Bold,
        ),
        String::new(),
    ];

    if player.inventory.is_empty() {
        lines.push(paint("  (empty)", Color::Dim));
    }
    // Title, gap and the three gear rows stay put; the list scrolls between them.
    let list_rows = height.saturating_sub(5).max(1);
    let first = (state.inv_selected + 1).saturating_sub(list_rows);
    let visible = player.inventory.iter().enumerate().skip(first).take(list_rows);
    for (idx, item) in visible {
        let entry = format!("{:>2}. {}", idx + 1, item.describe());
        if idx == state.inv_selected {
            lines.push(paint(&pad_to_width(&format!("> {entry}"), width), Color::Inverse));
        } else {
            lines.push(format!("  {entry}"));
        }
    }

    lines.push(String::new());
    lines.push(format!("Wielding: {}", equipped(player.weapon.as_ref())));
    lines.push(format!("Wearing:  {}", equipped(player.armor.as_ref())));
    lines.truncate(height);
    lines
}

pub(super) fn game_over_lines(state: &GameState, width: usize, height: usize) -> Vec<String> {
    let summary = [
        paint("YOU HAVE DIED", Color::Red),
        String::new(),
        format!("Slain on floor {}", state.floor),
        format!("Reached level {}", state.player.level),
        format!("Enemies slain: {}", state.kills),
        format!("Gold carried: {}", state.player.gold),
        format!("Turns survived: {}", state.turn),
        String::new(),
        paint("Press q to leave", Color::Dim),
    ];
    centered(&summary, width, height)
}

pub(super) fn victory_lines(state: &GameState, width: usize, height: usize) -> Vec<String> {
    let summary = [
        paint("VICTORY", Color::BrightYellow),
        String::new(),
        format!("{} escaped the dungeon", state.config.player_name),
        format!("Final level {}", state.player.level),
        format!("Enemies slain: {}", state.kills),
        format!("Gold carried: {}", state.player.gold),
        format!("Turns taken: {}", state.turn),
        String::new(),
        paint("Press q to leave", Color::Dim),
    ];
    centered(&summary, width, height)
}

fn centered(summary: &[String], width: usize, height: usize) -> Vec<String> {
    let top = height.saturating_sub(summary.len()) / 2;
    let mut lines = vec![String::new(); top];
    lines.extend(summary.iter().map(|line| center_to_width(line, width)));
    lines.truncate(height);
    lines
}

fn equipped(item: Option<&Item>) -> String {
    item.map_or_else(|| "nothing".to_string(), Item::describe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::render::width::{display_width, strip_ansi};
    use crate::types::PotionEffect;

    fn plain(lines: &[String]) -> Vec<String> {
        lines.iter().map(|line| strip_ansi(line)).collect()
    }

    #[test]
    fn inventory_highlights_the_selected_entry() {
        let mut state = GameState::new(6, EngineConfig::default());
        state.player.inventory = vec![
            Item::Weapon { name: "Mace", atk: 4 },
            Item::Potion { name: "Healing Potion", effect: PotionEffect::Hp, value: 25 },
        ];
        state.inv_selected = 1;

        let lines = inventory_lines(&state, 48, 18);
        let text = plain(&lines);

        assert_eq!(text[0], "Pack (2/8)");
        assert_eq!(text[2], "   1. Mace (+4 atk)");
        assert!(text[3].starts_with(">  2. Healing Potion (heal 25)"));
        assert!(lines[3].starts_with(&Color::Inverse.sgr()));
        assert_eq!(display_width(&lines[3]), 48);
    }

    #[test]
    fn long_packs_scroll_to_keep_the_selection_on_screen() {
        let config = EngineConfig { inventory_capacity: 20, ..Default::default() };
        let mut state = GameState::new(4, config);
        state.player.inventory = (1..=20).map(|atk| Item::Weapon { name: "Dagger", atk }).collect();
        state.inv_selected = 17;

        let text = plain(&inventory_lines(&state, 48, 16));

        assert_eq!(text.len(), 16);
        assert_eq!(text[0], "Pack (20/20)");
        assert!(text.iter().any(|line| line.starts_with("> 18. Dagger (+18 atk)")));
        assert!(!text.iter().any(|line| line.contains(" 1. Dagger")));
        assert!(text[15].starts_with("Wearing:"));
    }

    #[test]
    fn empty_pack_says_so() {
        let state = GameState::new(6, EngineConfig::default());
        let text = plain(&inventory_lines(&state, 48, 18));
        assert!(text.iter().any(|line| line.trim() == "(empty)"));
        assert!(text.iter().any(|line| line == "Wielding: nothing"));
    }

    #[test]
    fn summaries_are_vertically_centred() {
        let state = GameState::new(6, EngineConfig::default());
        let lines = plain(&game_over_lines(&state, 48, 18));
        let first = lines.iter().position(|line| line.contains("YOU HAVE DIED"));
        assert_eq!(first, Some((18 - 9) / 2));

        let won = plain(&victory_lines(&state, 48, 18));
        assert!(won.iter().any(|line| line.contains("Hero escaped the dungeon")));
    }
}
