//! ANSI SGR color tagging, emitted through crossterm's style commands.

use crossterm::style::{self, Attribute, SetAttribute, SetForegroundColor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightGreen,
    BrightYellow,
    Dim,
    Bold,
    Inverse,
}

impl Color {
    pub const ALL: [Color; 14] = [
        Color::Default,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::Dim,
        Color::Bold,
        Color::Inverse,
    ];

    /// The escape that switches a terminal to this color. Empty for `Default`.
    pub fn sgr(self) -> String {
        let foreground = match self {
            Color::Default => return String::new(),
            Color::Dim => return SetAttribute(Attribute::Dim).to_string(),
            Color::Bold => return SetAttribute(Attribute::Bold).to_string(),
            Color::Inverse => return SetAttribute(Attribute::Reverse).to_string(),
            Color::Red => style::Color::DarkRed,
            Color::Green => style::Color::DarkGreen,
            Color::Yellow => style::Color::DarkYellow,
            Color::Blue => style::Color::DarkBlue,
            Color::Magenta => style::Color::DarkMagenta,
            Color::Cyan => style::Color::DarkCyan,
            Color::White => style::Color::Grey,
            Color::Gray => style::Color::DarkGrey,
            Color::BrightGreen => style::Color::Green,
            Color::BrightYellow => style::Color::Yellow,
        };
        SetForegroundColor(foreground).to_string()
    }

    /// Inverse of [`Color::sgr`]; unknown escapes map to `Default`.
    pub fn from_sgr(escape: &str) -> Color {
        Color::ALL
            .into_iter()
            .find(|color| *color != Color::Default && color.sgr() == escape)
            .unwrap_or(Color::Default)
    }
}

/// Escape that clears both color and attributes.
pub fn reset() -> String {
    SetAttribute(Attribute::Reset).to_string()
}

pub fn paint(text: &str, color: Color) -> String {
    if color == Color::Default || text.is_empty() {
        return text.to_string();
    }
    format!("{}{text}{}", color.sgr(), reset())
}

/// Builds a line cell by cell, opening a new escape only when the color
/// actually changes.
#[derive(Debug, Default)]
pub struct LineBuilder {
    out: String,
    current: Option<Color>,
}

impl LineBuilder {
    pub fn push(&mut self, ch: char, color: Color) {
        let color = Some(color).filter(|color| *color != Color::Default);
        if color != self.current {
            if self.current.is_some() {
                self.out.push_str(&reset());
            }
            if let Some(color) = color {
                self.out.push_str(&color.sgr());
            }
            self.current = color;
        }
        self.out.push(ch);
    }

    pub fn finish(mut self) -> String {
        if self.current.is_some() {
            self.out.push_str(&reset());
        }
        self.out
    }
}
