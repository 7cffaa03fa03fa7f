//! ANSI escape sequence scanning.
//!
//! Recognised forms:
//! - CSI: `ESC [` parameters, then a final byte in 0x40-0x7E
//! - OSC, DCS, PM, APC: `ESC ]`/`ESC P`/`ESC ^`/`ESC _`, terminated by BEL or `ESC \`
//! - anything else: `ESC` plus one character

use std::borrow::Cow;

pub const RESET: &str = "\x1b[0m";

/// Remove every escape sequence from `s`.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&0x1B) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut i = 0;

    while i < s.len() {
        if s.as_bytes()[i] == 0x1B {
            i = sequence_end(s, i);
        } else {
            let start = i;
            while i < s.len() && s.as_bytes()[i] != 0x1B {
                i += 1;
            }
            result.push_str(&s[start..i]);
        }
    }

    Cow::Owned(result)
}

/// Byte index just past the escape sequence starting at `pos`.
///
/// `pos` must point at an ESC byte. The returned index is always a char boundary.
pub fn sequence_end(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        _ => {
            let len = s[next..].chars().next().map_or(1, char::len_utf8);
            next + len
        }
    }
}

/// True for an SGR sequence that leaves some attribute switched on.
pub fn is_styling_sgr(seq: &str) -> bool {
    match seq.strip_prefix("\x1b[").and_then(|s| s.strip_suffix('m')) {
        Some(params) => !params.split(';').all(|p| p.is_empty() || p == "0"),
        None => false,
    }
}

fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;

    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        // abort on anything that can't be part of the sequence
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
        i += 1;
    }

    bytes.len()
}

fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;

    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            0x1B if i + 1 < bytes.len() && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }

    bytes.len()
}
