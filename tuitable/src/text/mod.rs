mod ansi;

use unicode_width::UnicodeWidthChar;

use crate::types::TextAlign;

pub use ansi::strip_ansi;

pub const ELLIPSIS: &str = "…";

/// Terminal columns occupied by `s`. Escape sequences count as zero.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).chars().map(char_width).sum()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Fit `s` into `max_width` columns.
///
/// Only the first line is kept; a cut line or an over-wide one ends in `…`.
/// Escape sequences before the cut are preserved and an open SGR style is
/// reset after the ellipsis.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let (line, multiline) = match s.find('\n') {
        Some(idx) => (&s[..idx], true),
        None => (s, false),
    };

    if !multiline && display_width(line) <= max_width {
        return line.to_string();
    }

    let target_width = max_width - 1;
    let mut result = String::with_capacity(line.len() + ELLIPSIS.len());
    let mut width = 0;
    let mut styled = false;
    let mut i = 0;

    while i < line.len() {
        if line.as_bytes()[i] == 0x1B {
            let end = ansi::sequence_end(line, i);
            let seq = &line[i..end];
            if seq.ends_with('m') && seq.starts_with("\x1b[") {
                styled = ansi::is_styling_sgr(seq);
            }
            result.push_str(seq);
            i = end;
            continue;
        }

        let Some(ch) = line[i..].chars().next() else {
            break;
        };
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
        i += ch.len_utf8();
    }

    result.push_str(ELLIPSIS);
    if styled {
        result.push_str(ansi::RESET);
    }
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Truncate `s` to `width` and pad it with spaces to exactly `width` columns.
pub fn fit(s: &str, width: usize, align: TextAlign) -> String {
    let text = truncate(s, width);
    let text_width = display_width(&text);
    let left = align_offset(text_width, width, align);
    let right = width.saturating_sub(text_width + left);

    let mut out = String::with_capacity(text.len() + left + right);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(&text);
    out.extend(std::iter::repeat(' ').take(right));
    out
}
