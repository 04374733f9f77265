pub mod app_loop;
pub mod backdrop;
pub mod key_input;
pub mod seed;
pub mod styled_text;
pub mod ui_scale;
pub mod ui_scale_file;

use game_core::RunOutcome;

pub const APP_NAME: &str = "Depths";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Short label for how a run ended, shown in the window title bar.
pub fn outcome_label(outcome: Option<RunOutcome>) -> &'static str {
    match outcome {
        None => "in progress",
        Some(RunOutcome::Victory) => "escaped",
        Some(RunOutcome::Defeat) => "slain",
    }
}
