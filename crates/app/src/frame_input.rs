//! Keyboard input collection for one rendered frame.

use app::key_input::{WATCHED_KEYS, engine_key};
use app::ui_scale::UiScaleAction;
use game_core::Key;
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

#[derive(Default)]
pub struct FrameInput {
    pub keys: Vec<Key>,
    pub ui_scale_action: Option<UiScaleAction>,
}

pub fn capture_frame_input() -> FrameInput {
    let ctrl_down = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    let shift_down = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);

    let ui_scale_action = if ctrl_down && is_key_pressed(KeyCode::Equal) {
        Some(UiScaleAction::Increase)
    } else if ctrl_down && is_key_pressed(KeyCode::Minus) {
        Some(UiScaleAction::Decrease)
    } else if ctrl_down && is_key_pressed(KeyCode::Key0) {
        Some(UiScaleAction::Reset)
    } else {
        None
    };

    let keys = if ctrl_down {
        Vec::new()
    } else {
        WATCHED_KEYS
            .into_iter()
            .filter(|code| is_key_pressed(*code))
            .filter_map(|code| engine_key(code, shift_down))
            .collect()
    };

    FrameInput { keys, ui_scale_action }
}
