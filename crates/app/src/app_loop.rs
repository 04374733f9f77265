//! Per-frame host logic, kept free of window calls so it can be tested.

use game_core::{ConfigError, EngineConfig, Frame, Key, RunOutcome, Session};
use tracing::info;

use crate::styled_text::{StyledSpan, parse_line};
use crate::ui_scale::{UiScale, UiScaleAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    /// The session was torn down; the last frame stays on screen.
    Closed,
}

pub struct AppState {
    pub mode: AppMode,
    pub run_seed: u64,
    pub ui_scale: UiScale,
    /// Set when the scale changed this frame and should be saved.
    pub ui_scale_dirty: bool,
    session: Option<Session>,
    frame: Frame,
    spans: Vec<Vec<StyledSpan>>,
    outcome: Option<RunOutcome>,
    snapshot_hash: u64,
}

impl AppState {
    pub fn new(seed: u64, config: EngineConfig, ui_scale: UiScale) -> Result<Self, ConfigError> {
        let (session, frame) = Session::start(seed, config)?;
        let snapshot_hash = session.state().snapshot_hash();
        let mut app = Self {
            mode: AppMode::Playing,
            run_seed: seed,
            ui_scale,
            ui_scale_dirty: false,
            session: Some(session),
            frame: Frame::default(),
            spans: Vec::new(),
            outcome: None,
            snapshot_hash,
        };
        app.show(frame);
        Ok(app)
    }

    /// Feeds one frame's worth of input through the session.
    pub fn tick(&mut self, keys: &[Key], scale_action: Option<UiScaleAction>) {
        if let Some(action) = scale_action {
            let next = self.ui_scale.apply(action);
            self.ui_scale_dirty = next != self.ui_scale;
            self.ui_scale = next;
        }

        for &key in keys {
            let Some(session) = self.session.as_mut() else {
                break;
            };
            let frame = session.on_key(key);
            self.outcome = session.state().outcome();
            self.snapshot_hash = session.state().snapshot_hash();
            if session.quit_requested() {
                self.close();
                break;
            }
            self.show(frame);
        }
    }

    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            let frame = session.on_quit();
            info!(seed = self.run_seed, "session torn down");
            self.show(frame);
        }
        self.mode = AppMode::Closed;
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The current frame split into colored runs, one vector per line.
    pub fn styled_lines(&self) -> &[Vec<StyledSpan>] {
        &self.spans
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn snapshot_hash(&self) -> u64 {
        self.snapshot_hash
    }

    fn show(&mut self, frame: Frame) {
        self.spans = frame.lines.iter().map(|line| parse_line(line)).collect();
        self.frame = frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(31, EngineConfig::default(), UiScale::default()).expect("valid config")
    }

    #[test]
    fn starting_parses_the_first_frame() {
        let app = app();
        assert_eq!(app.mode, AppMode::Playing);
        assert_eq!(app.styled_lines().len(), app.frame().height());
        assert_eq!(app.outcome(), None);
    }

    #[test]
    fn quit_tears_the_session_down_and_ignores_later_keys() {
        let mut app = app();
        app.tick(&[Key::Quit, Key::Right], None);
        assert_eq!(app.mode, AppMode::Closed);
        let frame = app.frame().clone();
        app.tick(&[Key::Right], None);
        assert_eq!(app.frame(), &frame);
    }

    #[test]
    fn scale_changes_are_flagged_for_saving() {
        let mut app = app();
        app.tick(&[], Some(UiScaleAction::Increase));
        assert!(app.ui_scale_dirty);
        app.tick(&[], Some(UiScaleAction::Reset));
        app.tick(&[], Some(UiScaleAction::Reset));
        assert!(!app.ui_scale_dirty);
    }

    #[test]
    fn keys_update_the_tracked_hash() {
        let mut app = app();
        let before = app.snapshot_hash();
        app.tick(&[Key::ToggleInventory], None);
        assert_ne!(app.snapshot_hash(), before);
    }
}
