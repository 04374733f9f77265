//! Translation from window key codes to engine keys.

use game_core::Key;
use macroquad::prelude::KeyCode;

/// Every key code the host listens for, in polling order.
pub const WATCHED_KEYS: [KeyCode; 26] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::H,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::Y,
    KeyCode::U,
    KeyCode::B,
    KeyCode::N,
    KeyCode::I,
    KeyCode::E,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Period,
    KeyCode::LeftBracket,
    KeyCode::RightBracket,
    KeyCode::PageUp,
    KeyCode::PageDown,
    KeyCode::Q,
];

/// `shifted` distinguishes `>` from `.` on the period key.
pub fn engine_key(code: KeyCode, shifted: bool) -> Option<Key> {
    let key = match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter | KeyCode::KpEnter => Key::Confirm,
        KeyCode::Period if shifted => Key::Confirm,
        KeyCode::PageUp => Key::SelectUp,
        KeyCode::PageDown => Key::SelectDown,
        other => Key::from_char(letter(other)?),
    };
    Some(key)
}

fn letter(code: KeyCode) -> Option<char> {
    let ch = match code {
        KeyCode::W => 'w',
        KeyCode::A => 'a',
        KeyCode::S => 's',
        KeyCode::D => 'd',
        KeyCode::H => 'h',
        KeyCode::J => 'j',
        KeyCode::K => 'k',
        KeyCode::L => 'l',
        KeyCode::Y => 'y',
        KeyCode::U => 'u',
        KeyCode::B => 'b',
        KeyCode::N => 'n',
        KeyCode::I => 'i',
        KeyCode::E => 'e',
        KeyCode::Q => 'q',
        KeyCode::LeftBracket => '[',
        KeyCode::RightBracket => ']',
        _ => return None,
    };
    Some(ch)
}
