//! The host-facing boundary: raw keys in, rendered frames out.
//!
//! A [`Session`] owns the authoritative [`GameState`] and replaces it whole on
//! every key. Keys that mean nothing in the current mode are dropped here, so
//! the engine only ever sees commands that make sense for the mode.

use tracing::{debug, info};

use crate::config::{ConfigError, EngineConfig};
use crate::game;
use crate::render::{Frame, render};
use crate::state::GameState;
use crate::types::{Command, Mode};

/// Keys a host can forward. Hosts translate their own key events into these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    ToggleInventory,
    Confirm,
    SelectUp,
    SelectDown,
    Quit,
    Unknown,
}

impl Key {
    /// Maps a typed character: WASD and hjkl move, yubn move diagonally.
    pub fn from_char(ch: char) -> Key {
        match ch.to_ascii_lowercase() {
            'w' | 'k' => Key::Up,
            's' | 'j' => Key::Down,
            'a' | 'h' => Key::Left,
            'd' | 'l' => Key::Right,
            'y' => Key::UpLeft,
            'u' => Key::UpRight,
            'b' => Key::DownLeft,
            'n' => Key::DownRight,
            'i' => Key::ToggleInventory,
            '\n' | '\r' | '>' | 'e' => Key::Confirm,
            '[' => Key::SelectUp,
            ']' => Key::SelectDown,
            'q' => Key::Quit,
            _ => Key::Unknown,
        }
    }

    fn step(self) -> Option<(i32, i32)> {
        match self {
            Key::Up => Some((0, -1)),
            Key::Down => Some((0, 1)),
            Key::Left => Some((-1, 0)),
            Key::Right => Some((1, 0)),
            Key::UpLeft => Some((-1, -1)),
            Key::UpRight => Some((1, -1)),
            Key::DownLeft => Some((-1, 1)),
            Key::DownRight => Some((1, 1)),
            _ => None,
        }
    }
}

/// The command a key issues in `mode`, if any.
pub fn command_for(key: Key, mode: Mode) -> Option<Command> {
    match mode {
        Mode::Exploring => match key {
            Key::ToggleInventory => Some(Command::OpenInventory),
            Key::Confirm => Some(Command::Descend),
            _ => key.step().map(|(dx, dy)| Command::Move { dx, dy }),
        },
        Mode::InventoryOpen => match key {
            Key::ToggleInventory => Some(Command::CloseInventory),
            Key::Confirm => Some(Command::UseSelected),
            Key::Up | Key::SelectUp => Some(Command::SelectPrev),
            Key::Down | Key::SelectDown => Some(Command::SelectNext),
            _ => None,
        },
        Mode::GameOver | Mode::Victory => None,
    }
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    quit_requested: bool,
}

impl Session {
    /// Validates `config`, builds floor 1 and returns the opening frame.
    pub fn start(seed: u64, config: EngineConfig) -> Result<(Session, Frame), ConfigError> {
        config.validate()?;
        let state = GameState::new(seed, config);
        info!(seed, "session started");
        let frame = render(&state);
        Ok((Session { state, quit_requested: false }, frame))
    }

    pub fn on_key(&mut self, key: Key) -> Frame {
        if key == Key::Quit {
            self.quit_requested = true;
        } else if !self.quit_requested
            && let Some(command) = command_for(key, self.state.mode())
        {
            debug!(?key, ?command, turn = self.state.turn, "key accepted");
            self.state = game::apply(self.state.clone(), command);
        }
        render(&self.state)
    }

    /// Ends the session and hands back the last frame.
    pub fn on_quit(self) -> Frame {
        info!(
            turn = self.state.turn,
            floor = self.state.floor,
            outcome = ?self.state.outcome(),
            "session closed"
        );
        render(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn frame(&self) -> Frame {
        render(&self.state)
    }
}
