//! Splits an ANSI-colored frame line back into colored runs for drawing.

use game_core::render::Color;
use game_core::render::width::char_width;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub color: Color,
    /// Terminal column where the span starts.
    pub column: usize,
}

impl StyledSpan {
    /// Terminal columns the span covers.
    pub fn columns(&self) -> usize {
        self.text.chars().map(char_width).sum()
    }
}

/// Parses `ESC[...m` sequences. Unknown codes fall back to the default color.
pub fn parse_line(line: &str) -> Vec<StyledSpan> {
    let mut spans = Vec::new();
    let mut current = StyledSpan { text: String::new(), color: Color::Default, column: 0 };
    let mut column = 0;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            let mut code = String::new();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
                code.push(next);
            }
            let color = Color::from_sgr(&format!("\u{1b}[{code}m"));
            if color != current.color {
                if !current.text.is_empty() {
                    spans.push(current);
                }
                current = StyledSpan { text: String::new(), color, column };
            }
            continue;
        }
        if current.text.is_empty() {
            current.column = column;
        }
        column += char_width(ch);
        current.text.push(ch);
    }
    if !current.text.is_empty() {
        spans.push(current);
    }
    spans
}
