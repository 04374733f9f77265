//! The stat panel to the right of the map pane.

use crate::content::MAX_FLOORS;
use crate::state::GameState;
use crate::types::{Item, Mode};

use super::PANEL_WIDTH;
use super::paint::{Color, paint};
use super::width::wrap_to_width;

/// Rows the panel needs; frames are never shorter than this.
pub(super) const MIN_ROWS: usize = 16;
/// Log rows at the minimum frame height; taller frames give the log the rest.
const LOG_LINES: usize = 4;
const HP_BAR_WIDTH: usize = 12;

pub(super) fn panel_lines(state: &GameState, rows: usize) -> Vec<String> {
    let player = &state.player;
    let stats = &player.stats;

    let mut lines = vec![
        format!(
            "{} {}",
            paint(&state.config.player_name, Color::Bold),
            paint(&format!("Lv {}", player.level), Color::Cyan)
        ),
        hp_bar(stats.hp, stats.max_hp),
        format!("STR {:<4} DEF {}", player.attack_power(), player.defense()),
        format!("Wpn {}", gear_name(player.weapon.as_ref())),
        format!("Arm {}", gear_name(player.armor.as_ref())),
        format!("Floor {}/{MAX_FLOORS}  Gold {}", state.floor, player.gold),
        format!("XP {}/{}", player.xp, player.xp_to_next),
        format!("Kills {}  Turn {}", state.kills, state.turn),
        format!("Foes left {}", state.living_enemy_count()),
        String::new(),
        paint("Log", Color::Dim),
    ];

    // Newest entries sit at the bottom; long entries wrap onto extra rows.
    let log_rows = LOG_LINES + rows.saturating_sub(MIN_ROWS);
    let wrapped: Vec<String> =
        state.log.recent(log_rows).flat_map(|line| wrap_to_width(line, PANEL_WIDTH)).collect();
    let skip = wrapped.len().saturating_sub(log_rows);
    let mut log = wrapped.into_iter().skip(skip);
    for _ in 0..log_rows {
        lines.push(log.next().unwrap_or_default());
    }
    lines.push(paint(key_hint(state.mode()), Color::Dim));

    lines.resize(rows.max(MIN_ROWS), String::new());
    lines
}

fn hp_bar(hp: i32, max_hp: i32) -> String {
    let max_hp = max_hp.max(1);
    let filled = (hp.max(0) as usize * HP_BAR_WIDTH).div_ceil(max_hp as usize).min(HP_BAR_WIDTH);
    let color = match hp * 100 / max_hp {
        0..=25 => Color::Red,
        26..=60 => Color::Yellow,
        _ => Color::Green,
    };
    format!(
        "HP [{}{}] {hp}/{max_hp}",
        paint(&"#".repeat(filled), color),
        ".".repeat(HP_BAR_WIDTH - filled)
    )
}

fn gear_name(item: Option<&Item>) -> String {
    item.map_or_else(|| "-".to_string(), Item::describe)
}

fn key_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Exploring => "i pack  > descend  q quit",
        Mode::InventoryOpen => "j/k pick  enter use  i close",
        Mode::GameOver | Mode::Victory => "q quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::render::width::strip_ansi;
    use crate::state::MessageLog;

    #[test]
    fn hp_bar_fills_proportionally() {
        assert_eq!(strip_ansi(&hp_bar(30, 30)), "HP [############] 30/30");
        assert_eq!(strip_ansi(&hp_bar(0, 30)), "HP [............] 0/30");
        assert_eq!(strip_ansi(&hp_bar(1, 30)), "HP [#...........] 1/30");
    }

    #[test]
    fn panel_shows_the_four_newest_log_lines() {
        let mut state = GameState::new(2, EngineConfig::default());
        for n in 0..6 {
            state.log.push(format!("event {n}"));
        }
        let lines: Vec<String> = panel_lines(&state, 16).iter().map(|l| strip_ansi(l)).collect();

        assert_eq!(lines.len(), 16);
        let log_start = lines.iter().position(|line| line == "Log").expect("log header") + 1;
        assert_eq!(&lines[log_start..log_start + 4], ["event 2", "event 3", "event 4", "event 5"]);
        assert!(lines[log_start + 4].starts_with("i pack"));
    }

    #[test]
    fn taller_panels_give_the_log_more_rows() {
        let mut state = GameState::new(2, EngineConfig::default());
        for n in 0..6 {
            state.log.push(format!("event {n}"));
        }
        let lines: Vec<String> = panel_lines(&state, 18).iter().map(|l| strip_ansi(l)).collect();
        let log_start = lines.iter().position(|line| line == "Log").expect("log header") + 1;
        assert_eq!(lines[log_start], "event 0");
        assert_eq!(lines[log_start + 5], "event 5");
    }

    #[test]
    fn long_entries_wrap_instead_of_being_cut() {
        let mut state = GameState::new(2, EngineConfig::default());
        state.log = MessageLog::new(state.config.log_capacity);
        state.log.push("older");
        state.log.push("You hit the Goblin for 3. The Goblin dies. (+8 xp)");
        let lines: Vec<String> = panel_lines(&state, 16).iter().map(|l| strip_ansi(l)).collect();
        let log_start = lines.iter().position(|line| line == "Log").expect("log header") + 1;

        assert_eq!(&lines[log_start..log_start + 4], [
            "older",
            "You hit the Goblin for 3. The",
            "Goblin dies. (+8 xp)",
            ""
        ]);
    }

    #[test]
    fn panel_reports_equipped_gear_and_effective_stats() {
        let mut state = GameState::new(2, EngineConfig::default());
        state.player.weapon = Some(Item::Weapon { name: "Mace", atk: 4 });
        let lines: Vec<String> = panel_lines(&state, 16).iter().map(|l| strip_ansi(l)).collect();
        assert!(lines[2].starts_with("STR 9"));
        assert_eq!(lines[3], "Wpn Mace (+4 atk)");
        assert_eq!(lines[4], "Arm -");
    }
}
