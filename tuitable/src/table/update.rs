use std::sync::Arc;

use super::Table;
use crate::event::{Input, KeyCombo, TableEvent};
use crate::keys::Action;
use crate::text_input::TextEditResult;

impl Table {
    /// Handle one input and return the next state.
    ///
    /// Events from the previous update are discarded; read the new ones with
    /// [`Table::last_events`]. Key presses are ignored unless the table is focused.
    pub fn update(mut self, input: impl Into<Input>) -> Self {
        self.last_events.clear();

        match input.into() {
            Input::Resize { width, .. } => self.with_target_width(width as usize),
            Input::Key(combo) => {
                if !self.focused {
                    return self;
                }

                let previous = self.view.highlighted;
                if self.filter_input.is_focused() {
                    self.handle_filter_key(combo);
                } else {
                    for action in self.key_map.actions_for(&combo) {
                        self.apply(action);
                    }
                }

                let current = self.view.highlighted;
                if current != previous {
                    self.last_events
                        .push(TableEvent::HighlightedIndexChanged { previous, current });
                }
                self
            }
        }
    }

    pub fn page_down(mut self) -> Self {
        self.apply(Action::PageDown);
        self
    }

    pub fn page_up(mut self) -> Self {
        self.apply(Action::PageUp);
        self
    }

    pub fn page_first(mut self) -> Self {
        self.apply(Action::PageFirst);
        self
    }

    pub fn page_last(mut self) -> Self {
        self.apply(Action::PageLast);
        self
    }

    pub fn scroll_right(mut self) -> Self {
        self.apply(Action::ScrollRight);
        self
    }

    pub fn scroll_left(mut self) -> Self {
        self.apply(Action::ScrollLeft);
        self
    }

    fn handle_filter_key(&mut self, combo: KeyCombo) {
        if self.key_map.matches(Action::FilterBlur, &combo) {
            self.filter_input.blur();
            self.last_events.push(TableEvent::FilterInputUnfocused);
        } else if self.filter_input.handle_key(combo) == TextEditResult::Changed {
            self.refresh_rows();
        }

        self.reset_page();
    }

    fn apply(&mut self, action: Action) {
        let total = self.visible.len();
        let cursor = self.view.highlighted;

        match action {
            Action::RowDown if total > 0 => {
                self.view.highlighted = (cursor + 1) % total;
                self.view.paginator.follow(self.view.highlighted);
            }
            Action::RowUp if total > 0 => {
                self.view.highlighted = if cursor == 0 { total - 1 } else { cursor - 1 };
                self.view.paginator.follow(self.view.highlighted);
            }
            Action::RowSelectToggle => self.toggle_highlighted(),
            Action::PageDown => {
                self.view.highlighted = self.view.paginator.page_down(total, cursor);
            }
            Action::PageUp => {
                self.view.highlighted = self.view.paginator.page_up(total, cursor);
            }
            Action::PageFirst => self.reset_page(),
            Action::PageLast => {
                self.view.highlighted = self.view.paginator.last(total);
            }
            Action::Filter if self.filtered => {
                self.filter_input.focus();
                self.last_events.push(TableEvent::FilterInputFocused);
            }
            Action::FilterClear if !self.filter_input.value().is_empty() => {
                self.filter_input.reset();
                self.refresh_rows();
                self.reset_page();
            }
            Action::ScrollRight => self.view.scroller.scroll_right(),
            Action::ScrollLeft => self.view.scroller.scroll_left(),
            _ => {}
        }
    }

    /// Flip selection on the highlighted row without touching row lists that
    /// earlier states still share.
    fn toggle_highlighted(&mut self) {
        if !self.selectable {
            return;
        }
        let index = self.view.highlighted;
        let Some(id) = self.visible.get(index).map(|r| r.id()) else {
            return;
        };

        let mut selected = false;
        if let Some(row) = Arc::make_mut(&mut self.rows)
            .iter_mut()
            .find(|r| r.id() == id)
        {
            row.selected = !row.selected;
            selected = row.selected;
        }
        if let Some(row) = Arc::make_mut(&mut self.visible).get_mut(index) {
            row.selected = selected;
        }

        log::debug!("row {index} selected: {selected}");
        self.last_events.push(TableEvent::RowSelectToggled {
            row_index: index,
            selected,
        });
    }
}
