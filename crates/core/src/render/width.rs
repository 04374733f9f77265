//! Display-width arithmetic for strings that may carry ANSI color escapes and
//! double-width glyphs.

use std::{iter, mem};

use super::paint::reset;

const ESC: char = '\u{1b}';

/// Columns a single glyph occupies in a monospace grid.
pub fn char_width(ch: char) -> usize {
    let code = ch as u32;
    let wide = matches!(
        code,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xA960..=0xA97F
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x20000..=0x2FFFD
            | 0x30000..=0x3FFFD
    );
    if wide { 2 } else { 1 }
}

/// Splits `text` into escape sequences and visible glyphs, in order.
fn segments(text: &str) -> impl Iterator<Item = Segment<'_>> {
    let mut rest = text;
    iter::from_fn(move || {
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        if first == ESC && rest[1..].starts_with('[') {
            // CSI: parameters, then one final byte in '@'..='~'.
            let end = rest[2..]
                .char_indices()
                .find(|(_, ch)| ('@'..='~').contains(ch))
                .map_or(rest.len(), |(idx, ch)| 2 + idx + ch.len_utf8());
            let (escape, tail) = rest.split_at(end);
            rest = tail;
            return Some(Segment::Escape(escape));
        }
        let split = first.len_utf8();
        rest = &rest[split..];
        Some(Segment::Glyph(first))
    })
}

enum Segment<'a> {
    Escape(&'a str),
    Glyph(char),
}

pub fn strip_ansi(text: &str) -> String {
    segments(text)
        .filter_map(|segment| match segment {
            Segment::Glyph(ch) => Some(ch),
            Segment::Escape(_) => None,
        })
        .collect()
}

pub fn display_width(text: &str) -> usize {
    segments(text)
        .map(|segment| match segment {
            Segment::Glyph(ch) => char_width(ch),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// Cuts `text` to at most `width` columns, keeping escape sequences intact.
/// A wide glyph that would straddle the limit is dropped. When anything was
/// cut from a colored string, a reset is appended.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    let mut saw_escape = false;
    let mut cut = false;
    for segment in segments(text) {
        match segment {
            Segment::Escape(escape) => {
                saw_escape = true;
                out.push_str(escape);
            }
            Segment::Glyph(ch) => {
                let glyph_width = char_width(ch);
                if used + glyph_width > width {
                    cut = true;
                    break;
                }
                used += glyph_width;
                out.push(ch);
            }
        }
    }
    if cut && saw_escape {
        out.push_str(&reset());
    }
    out
}

/// Truncates, then right-pads with spaces to exactly `width` columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let used = display_width(&out);
    out.extend(iter::repeat_n(' ', width - used));
    out
}

/// Centres `text` in `width` columns.
pub fn center_to_width(text: &str, width: usize) -> String {
    let used = display_width(text).min(width);
    let left = (width - used) / 2;
    let mut out = " ".repeat(left);
    out.push_str(text);
    pad_to_width(&out, width)
}

/// Greedy word wrap into rows of at most `width` columns. Words wider than a
/// row are broken between glyphs. Escapes are dropped.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let plain = strip_ansi(text);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;

    for word in plain.split_whitespace() {
        let word_width = display_width(word);
        if used > 0 && used + 1 + word_width <= width {
            row.push(' ');
            row.push_str(word);
            used += 1 + word_width;
            continue;
        }
        if used > 0 {
            rows.push(mem::take(&mut row));
            used = 0;
        }
        for ch in word.chars() {
            let glyph_width = char_width(ch);
            if used > 0 && used + glyph_width > width {
                rows.push(mem::take(&mut row));
                used = 0;
            }
            row.push(ch);
            used += glyph_width;
        }
    }
    if used > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows
}
