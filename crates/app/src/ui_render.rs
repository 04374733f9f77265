//! Drawing for the status bar, the game frame and the backdrop.

use crate::game_layout::{FrameLayout, PanelRect};
use app::app_loop::{AppMode, AppState};
use app::backdrop::{Backdrop, EmberCell};
use app::{format_snapshot_hash, outcome_label};
use game_core::render::Color as FrameColor;
use game_core::render::width::char_width;
use macroquad::prelude::*;

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const BASE_FONT_SIZE: f32 = 18.0;
/// Width of one terminal column relative to the font size.
const COLUMN_ASPECT: f32 = 0.6;
const ROW_ASPECT: f32 = 1.15;
const TEXT_INSET: f32 = 8.0;

/// Size of one terminal cell on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    pub font_size: f32,
    pub width: f32,
    pub height: f32,
}

/// The largest cell that fits `columns` x `rows` into `panel`, never larger
/// than the scaled base font.
pub fn cell_metrics(panel: PanelRect, columns: usize, rows: usize, ui_scale: f32) -> CellMetrics {
    let inner_width = (panel.width - 2.0 * TEXT_INSET).max(1.0);
    let inner_height = (panel.height - 2.0 * TEXT_INSET).max(1.0);
    let by_width = inner_width / (columns.max(1) as f32 * COLUMN_ASPECT);
    let by_height = inner_height / (rows.max(1) as f32 * ROW_ASPECT);
    let font_size = (BASE_FONT_SIZE * ui_scale).min(by_width).min(by_height).max(4.0);
    CellMetrics { font_size, width: font_size * COLUMN_ASPECT, height: font_size * ROW_ASPECT }
}

/// Foreground and optional background for a frame color.
pub fn frame_colors(color: FrameColor) -> (Color, Option<Color>) {
    match color {
        FrameColor::Default => (LIGHTGRAY, None),
        FrameColor::Red => (RED, None),
        FrameColor::Green => (GREEN, None),
        FrameColor::Yellow => (GOLD, None),
        FrameColor::Blue => (SKYBLUE, None),
        FrameColor::Magenta => (MAGENTA, None),
        FrameColor::Cyan => (Color::from_rgba(80, 220, 220, 255), None),
        FrameColor::White => (WHITE, None),
        FrameColor::Gray => (GRAY, None),
        FrameColor::BrightGreen => (LIME, None),
        FrameColor::BrightYellow => (YELLOW, None),
        FrameColor::Dim => (DARKGRAY, None),
        FrameColor::Bold => (WHITE, None),
        FrameColor::Inverse => (BLACK, Some(LIGHTGRAY)),
    }
}

pub fn ember_color(cell: EmberCell) -> Color {
    let alpha = 0.08 + 0.07 * f32::from(cell.heat);
    Color { r: 1.0, g: 0.35 + 0.1 * f32::from(cell.heat), b: 0.1, a: alpha }
}

pub fn status_text(app: &AppState) -> String {
    let state = match app.mode {
        AppMode::Playing => outcome_label(app.outcome()),
        AppMode::Closed => "closed",
    };
    format!(
        "Seed {}  |  {}  |  Snapshot {}",
        app.run_seed,
        state,
        format_snapshot_hash(app.snapshot_hash())
    )
}

pub fn footer_text(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Playing => "Ctrl +/-/0 scale the text",
        AppMode::Closed => "Session closed. Close the window to exit.",
    }
}

pub fn draw_frame(app: &AppState, backdrop: &Backdrop, layout: &FrameLayout) {
    let ui_scale = app.ui_scale.get();
    let frame = app.frame();
    let metrics = cell_metrics(layout.frame, frame.width(), frame.height(), ui_scale);

    draw_backdrop(backdrop, layout.frame, metrics);
    for panel in [layout.status, layout.frame] {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            app.ui_scale.scaled(BORDER_THICKNESS),
            BORDER_COLOR,
        );
    }

    draw_text(
        &status_text(app),
        layout.status.x + app.ui_scale.scaled(TEXT_INSET),
        layout.status.y + layout.status.height * 0.7,
        app.ui_scale.scaled(18.0),
        WHITE,
    );
    draw_frame_lines(app, layout.frame, metrics);
    draw_text(
        footer_text(app.mode),
        layout.footer.x,
        layout.footer.y + layout.footer.height * 0.8,
        app.ui_scale.scaled(15.0),
        GRAY,
    );
}

fn draw_frame_lines(app: &AppState, panel: PanelRect, metrics: CellMetrics) {
    let origin_x = panel.x + TEXT_INSET;
    let origin_y = panel.y + TEXT_INSET;

    for (row, spans) in app.styled_lines().iter().enumerate() {
        let baseline = origin_y + (row as f32 + 0.8) * metrics.height;
        for span in spans {
            let (fg, bg) = frame_colors(span.color);
            let mut column = span.column;
            for ch in span.text.chars() {
                let x = origin_x + column as f32 * metrics.width;
                let cells = char_width(ch);
                if let Some(bg) = bg {
                    let top = origin_y + row as f32 * metrics.height;
                    draw_rectangle(x, top, cells as f32 * metrics.width, metrics.height, bg);
                }
                if ch != ' ' {
                    let mut buf = [0u8; 4];
                    draw_text(ch.encode_utf8(&mut buf), x, baseline, metrics.font_size, fg);
                }
                column += cells;
            }
        }
    }
}

fn draw_backdrop(backdrop: &Backdrop, panel: PanelRect, metrics: CellMetrics) {
    for cell in backdrop.cells() {
        let x = panel.x + TEXT_INSET + cell.column as f32 * metrics.width;
        let y = panel.y + TEXT_INSET + (cell.row as f32 + 0.8) * metrics.height;
        let mut buf = [0u8; 4];
        draw_text(cell.glyph.encode_utf8(&mut buf), x, y, metrics.font_size, ember_color(cell));
    }
}

/// Backdrop grid size that covers `panel` at the current cell size.
pub fn backdrop_grid(panel: PanelRect, metrics: CellMetrics) -> (usize, usize) {
    let columns = ((panel.width - 2.0 * TEXT_INSET) / metrics.width).max(0.0) as usize;
    let rows = ((panel.height - 2.0 * TEXT_INSET) / metrics.height).max(0.0) as usize;
    (columns, rows)
}
