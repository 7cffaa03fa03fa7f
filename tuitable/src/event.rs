use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// A key together with the modifiers held while pressing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn char(c: char) -> Self {
        Self::key(Key::Char(c))
    }

    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

impl From<Key> for KeyCombo {
    fn from(key: Key) -> Self {
        Self::key(key)
    }
}

/// Parses strings like `"j"`, `"pgdown"` or `"shift+right"`.
impl FromStr for KeyCombo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidKey(s.to_string());

        // a trailing "+" is the plus key itself
        let (mods, key) = match s.strip_suffix("++") {
            Some(rest) => (Some(rest), "+"),
            None if s == "+" => (None, "+"),
            None => match s.rsplit_once('+') {
                Some((mods, key)) => (Some(mods), key),
                None => (None, s),
            },
        };

        let mut modifiers = Modifiers::NONE;
        for part in mods.into_iter().flat_map(|m| m.split('+')) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" | "meta" => modifiers.alt = true,
                _ => return Err(invalid()),
            }
        }

        let key = parse_key(key).ok_or_else(invalid)?;
        Ok(Self { key, modifiers })
    }
}

fn parse_key(name: &str) -> Option<Key> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(Key::Char(c));
    }

    let key = match name.to_ascii_lowercase().as_str() {
        "space" => Key::Char(' '),
        "enter" | "return" => Key::Enter,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "tab" => Key::Tab,
        "backtab" => Key::BackTab,
        "esc" | "escape" => Key::Escape,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pgup" | "pageup" => Key::PageUp,
        "pgdown" | "pagedown" => Key::PageDown,
        "insert" => Key::Insert,
        other => {
            let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
            if !(1..=24).contains(&n) {
                return None;
            }
            Key::F(n)
        }
    };
    Some(key)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => f.write_str("space"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Enter => f.write_str("enter"),
            Key::Backspace => f.write_str("backspace"),
            Key::Delete => f.write_str("delete"),
            Key::Tab => f.write_str("tab"),
            Key::BackTab => f.write_str("backtab"),
            Key::Escape => f.write_str("esc"),
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Home => f.write_str("home"),
            Key::End => f.write_str("end"),
            Key::PageUp => f.write_str("pgup"),
            Key::PageDown => f.write_str("pgdown"),
            Key::Insert => f.write_str("insert"),
            Key::F(n) => write!(f, "f{n}"),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Input delivered to a table by the host event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(KeyCombo),
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl From<KeyCombo> for Input {
    fn from(combo: KeyCombo) -> Self {
        Input::Key(combo)
    }
}

impl From<Key> for Input {
    fn from(key: Key) -> Self {
        Input::Key(key.into())
    }
}

/// Notifications produced by the most recent update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    HighlightedIndexChanged { previous: usize, current: usize },
    /// `row_index` points into the filtered and sorted rows.
    RowSelectToggled { row_index: usize, selected: bool },
    FilterInputFocused,
    FilterInputUnfocused,
}

// Conversion from crossterm types
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = Error;

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            other => return Err(Error::UnsupportedInput(format!("{other:?}"))),
        };
        Ok(key)
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl TryFrom<crossterm::event::KeyEvent> for KeyCombo {
    type Error = Error;

    fn try_from(event: crossterm::event::KeyEvent) -> Result<Self, Self::Error> {
        let key = Key::try_from(event.code)?;
        let mut modifiers = Modifiers::from(event.modifiers);
        // the character already carries the case
        if let Key::Char(_) = key {
            modifiers.shift = false;
        }
        Ok(Self { key, modifiers })
    }
}

impl TryFrom<crossterm::event::Event> for Input {
    type Error = Error;

    fn try_from(event: crossterm::event::Event) -> Result<Self, Self::Error> {
        use crossterm::event::{Event, KeyEventKind};
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Ok(Input::Key(KeyCombo::try_from(key)?))
            }
            Event::Resize(width, height) => Ok(Input::Resize { width, height }),
            other => Err(Error::UnsupportedInput(format!("{other:?}"))),
        }
    }
}
