//! Text frames: the map viewport (or a full-pane overlay) beside a stat panel.
//!
//! Rendering is a pure read of [`GameState`]. Every line of a [`Frame`] has
//! the same display width once color escapes are ignored.

mod map_view;
mod overlays;
pub mod paint;
mod panel;
pub mod width;

use std::fmt;

use crate::state::GameState;
use crate::types::Mode;

pub use map_view::Camera;
pub use paint::Color;

pub const PANEL_WIDTH: usize = 30;
const SEPARATOR: &str = " | ";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    /// Display width shared by every line.
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |line| width::display_width(line))
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The frame with all color escapes removed.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(|line| width::strip_ansi(line)).collect()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

pub fn render(state: &GameState) -> Frame {
    let pane_width = state.config.viewport_width.max(1);
    let rows = state.config.viewport_height.max(panel::MIN_ROWS);

    let pane = match state.mode() {
        Mode::Exploring => map_view::map_lines(state, pane_width, rows),
        Mode::InventoryOpen => overlays::inventory_lines(state, pane_width, rows),
        Mode::GameOver => overlays::game_over_lines(state, pane_width, rows),
        Mode::Victory => overlays::victory_lines(state, pane_width, rows),
    };
    let side = panel::panel_lines(state, rows);

    let lines = (0..rows)
        .map(|row| {
            let left = pane.get(row).map_or("", String::as_str);
            let right = side.get(row).map_or("", String::as_str);
            let mut line = width::pad_to_width(left, pane_width);
            line.push_str(SEPARATOR);
            line.push_str(&width::pad_to_width(right, PANEL_WIDTH));
            line
        })
        .collect();
    Frame { lines }
}
