//! Logical table actions and the keys that trigger them.

use crate::error::Result;
use crate::event::{Key, KeyCombo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RowDown,
    RowUp,
    RowSelectToggle,
    PageDown,
    PageUp,
    PageFirst,
    PageLast,
    Filter,
    FilterBlur,
    FilterClear,
    ScrollRight,
    ScrollLeft,
}

impl Action {
    /// Every action, in the order they are dispatched.
    pub const ALL: [Action; 12] = [
        Action::RowDown,
        Action::RowUp,
        Action::RowSelectToggle,
        Action::PageDown,
        Action::PageUp,
        Action::PageFirst,
        Action::PageLast,
        Action::Filter,
        Action::FilterBlur,
        Action::FilterClear,
        Action::ScrollRight,
        Action::ScrollLeft,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Action::RowDown => "move down",
            Action::RowUp => "move up",
            Action::RowSelectToggle => "select row",
            Action::PageDown => "next page",
            Action::PageUp => "previous page",
            Action::PageFirst => "first page",
            Action::PageLast => "last page",
            Action::Filter => "filter",
            Action::FilterBlur => "apply filter",
            Action::FilterClear => "clear filter",
            Action::ScrollRight => "scroll right",
            Action::ScrollLeft => "scroll left",
        }
    }
}

/// Key bindings for a focused table.
///
/// One key may be bound to several actions; all of them run, in
/// [`Action::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: Vec<(Action, Vec<KeyCombo>)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let shift = |key| KeyCombo::key(key).shift();
        Self::empty()
            .with_binding(Action::RowDown, vec![Key::Down.into(), KeyCombo::char('j')])
            .with_binding(Action::RowUp, vec![Key::Up.into(), KeyCombo::char('k')])
            .with_binding(
                Action::RowSelectToggle,
                vec![KeyCombo::char(' '), Key::Enter.into()],
            )
            .with_binding(
                Action::PageDown,
                vec![Key::Right.into(), KeyCombo::char('l'), Key::PageDown.into()],
            )
            .with_binding(
                Action::PageUp,
                vec![Key::Left.into(), KeyCombo::char('h'), Key::PageUp.into()],
            )
            .with_binding(Action::PageFirst, vec![Key::Home.into(), KeyCombo::char('g')])
            .with_binding(Action::PageLast, vec![Key::End.into(), KeyCombo::char('G')])
            .with_binding(Action::Filter, vec![KeyCombo::char('/')])
            .with_binding(Action::FilterBlur, vec![Key::Enter.into(), Key::Escape.into()])
            .with_binding(Action::FilterClear, vec![Key::Escape.into()])
            .with_binding(Action::ScrollRight, vec![shift(Key::Right)])
            .with_binding(Action::ScrollLeft, vec![shift(Key::Left)])
    }
}

impl KeyMap {
    /// A map with nothing bound.
    pub fn empty() -> Self {
        Self {
            bindings: Action::ALL.iter().map(|&a| (a, Vec::new())).collect(),
        }
    }

    /// Replace the keys bound to `action`.
    pub fn with_binding(mut self, action: Action, keys: Vec<KeyCombo>) -> Self {
        if let Some((_, bound)) = self.bindings.iter_mut().find(|(a, _)| *a == action) {
            *bound = keys;
        }
        self
    }

    /// Replace the keys bound to `action` from strings like `"shift+right"`.
    pub fn bind(self, action: Action, keys: &[&str]) -> Result<Self> {
        let combos = keys
            .iter()
            .map(|k| k.parse::<KeyCombo>())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_binding(action, combos))
    }

    pub fn keys(&self, action: Action) -> &[KeyCombo] {
        self.bindings
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, keys)| keys.as_slice())
            .unwrap_or(&[])
    }

    pub fn matches(&self, action: Action, combo: &KeyCombo) -> bool {
        self.keys(action).contains(combo)
    }

    /// Actions bound to `combo`, in dispatch order.
    pub fn actions_for(&self, combo: &KeyCombo) -> Vec<Action> {
        self.bindings
            .iter()
            .filter(|(_, keys)| keys.contains(combo))
            .map(|(action, _)| *action)
            .collect()
    }

    /// `("j/down", "move down")` style pairs for every bound action.
    pub fn help(&self) -> Vec<(String, &'static str)> {
        self.bindings
            .iter()
            .filter(|(_, keys)| !keys.is_empty())
            .map(|(action, keys)| {
                let keys: Vec<String> = keys.iter().map(ToString::to_string).collect();
                (keys.join("/"), action.description())
            })
            .collect()
    }
}
