//! The interactive table value.
//!
//! A [`Table`] is immutable from the outside: every builder and every call to
//! [`Table::update`] consumes the table and hands back the next state.

mod query;
mod update;
mod view;

use std::fmt;
use std::sync::Arc;

use crate::cell::{Metadata, Value};
use crate::column::{Column, SELECT_COLUMN_KEY};
use crate::error::Result;
use crate::event::TableEvent;
use crate::keys::KeyMap;
use crate::layout::resolve_widths;
use crate::paginate::Paginator;
use crate::pipeline::{
    filter_contains, filter_fuzzy, filter_rows, sort_rows, FilterContext, FilterFn, SortColumn,
};
use crate::row::Row;
use crate::scroll::HorizontalScroller;
use crate::text::display_width;
use crate::text_input::TextInput;
use crate::types::{Border, Color, Style, TextAlign};

const DEFAULT_SELECTED_TEXT: &str = "[x]";
const DEFAULT_UNSELECTED_TEXT: &str = "[ ]";

/// Cursor, paging and scrolling state.
#[derive(Debug, Clone, Default)]
struct ViewState {
    /// Index into the filtered and sorted rows.
    highlighted: usize,
    paginator: Paginator,
    scroller: HorizontalScroller,
    target_width: usize,
    minimum_height: usize,
}

#[derive(Debug, Clone)]
struct Styles {
    base: Style,
    header: Style,
    highlight: Style,
    border: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            base: Style::new().align(TextAlign::Right),
            header: Style::default(),
            highlight: Style::new().background(Color::hex(0x333344)),
            border: Style::default(),
        }
    }
}

#[derive(Debug, Clone)]
struct MissingData {
    text: String,
    style: Style,
}

#[derive(Clone)]
pub struct Table {
    columns: Vec<Column>,
    widths: Vec<usize>,
    rows: Arc<Vec<Row>>,
    /// `rows` after filtering and sorting.
    visible: Arc<Vec<Row>>,
    view: ViewState,

    focused: bool,
    selectable: bool,
    header_visible: bool,
    footer_visible: bool,
    filtered: bool,
    filter_input: TextInput,
    filter_fn: FilterFn,
    sort: Vec<SortColumn>,

    styles: Styles,
    border: Border,
    selected_text: String,
    unselected_text: String,
    static_footer: String,
    missing_data: Option<MissingData>,
    key_map: KeyMap,
    metadata: Metadata,
    last_events: Vec<TableEvent>,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("widths", &self.widths)
            .field("rows", &self.rows.len())
            .field("visible", &self.visible.len())
            .field("view", &self.view)
            .field("focused", &self.focused)
            .field("filter", &self.filter_input)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns: Vec::new(),
            widths: Vec::new(),
            rows: Arc::new(Vec::new()),
            visible: Arc::new(Vec::new()),
            view: ViewState::default(),
            focused: false,
            selectable: false,
            header_visible: true,
            footer_visible: true,
            filtered: false,
            filter_input: TextInput::default(),
            filter_fn: Arc::new(filter_contains),
            sort: Vec::new(),
            styles: Styles::default(),
            border: Border::default(),
            selected_text: DEFAULT_SELECTED_TEXT.to_string(),
            unselected_text: DEFAULT_UNSELECTED_TEXT.to_string(),
            static_footer: String::new(),
            missing_data: None,
            key_map: KeyMap::default(),
            metadata: Metadata::new(),
            last_events: Vec::new(),
        }
        .with_columns(columns)
    }

    /// Replace all columns. The selection column is kept when rows are selectable.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns.into_iter().filter(|c| !c.is_select()).collect();
        if self.selectable {
            self.columns.insert(0, self.select_column());
        }
        self.recalculate_widths();
        self
    }

    /// Replace all rows. Selection state comes from the new rows.
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        log::debug!("table rows replaced with {} rows", rows.len());
        self.rows = Arc::new(rows);
        self.refresh_rows();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Toggle the leading selection column.
    pub fn selectable_rows(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        let has_select = self.columns.first().is_some_and(Column::is_select);
        if selectable && !has_select {
            self.columns.insert(0, self.select_column());
        } else if !selectable {
            self.columns.retain(|c| !c.is_select());
        }
        self.recalculate_widths();
        self
    }

    /// Markers shown in the selection column. The selected marker doubles as its title.
    pub fn with_selected_text(
        mut self,
        unselected: impl Into<String>,
        selected: impl Into<String>,
    ) -> Self {
        self.unselected_text = unselected.into();
        self.selected_text = selected.into();
        if self.columns.first().is_some_and(Column::is_select) {
            self.columns[0] = self.select_column();
            self.recalculate_widths();
        }
        self
    }

    pub fn with_all_rows_deselected(mut self) -> Self {
        if self.rows.iter().any(|r| r.selected) {
            for row in Arc::make_mut(&mut self.rows) {
                row.selected = false;
            }
            self.refresh_rows();
        }
        self
    }

    pub fn with_target_width(mut self, width: usize) -> Self {
        self.view.target_width = width;
        self.recalculate_widths();
        self
    }

    pub fn with_minimum_height(mut self, height: usize) -> Self {
        self.view.minimum_height = height;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.view.paginator.set_page_size(page_size);
        self.view.paginator.follow(self.view.highlighted);
        self
    }

    pub fn with_no_pagination(self) -> Self {
        self.with_page_size(0)
    }

    /// Jump to a 1-based page, clamped to the available pages.
    pub fn with_current_page(mut self, page: usize) -> Self {
        let total = self.visible.len();
        self.view.highlighted =
            self.view
                .paginator
                .set_page(page, total, self.view.highlighted);
        self
    }

    /// Whether paging past either end wraps around. On by default.
    pub fn with_pagination_wrapping(mut self, wrapping: bool) -> Self {
        self.view.paginator.set_wrapping(wrapping);
        self
    }

    /// Limit the rendered width, enabling horizontal scrolling. 0 removes the limit.
    pub fn with_max_total_width(mut self, width: usize) -> Self {
        self.view.scroller.set_max_total_width(width);
        self.view.scroller.recalculate(&self.widths);
        self
    }

    /// Keep the first `count` columns visible while scrolling horizontally.
    pub fn with_horizontal_freeze_column_count(mut self, count: usize) -> Self {
        self.view.scroller.set_frozen(count);
        self.view.scroller.recalculate(&self.widths);
        self
    }

    pub fn with_highlighted_row(mut self, index: usize) -> Self {
        self.view.highlighted = index.min(self.visible.len().saturating_sub(1));
        self.view.paginator.follow(self.view.highlighted);
        self
    }

    pub fn with_header_visibility(mut self, visible: bool) -> Self {
        self.header_visible = visible;
        self
    }

    pub fn with_footer_visibility(mut self, visible: bool) -> Self {
        self.footer_visible = visible;
        self
    }

    /// Fixed footer text, replacing the filter and page indicators.
    pub fn with_static_footer(mut self, footer: impl Into<String>) -> Self {
        self.static_footer = footer.into();
        self
    }

    /// Enable filtering through the filter input.
    pub fn filtered(mut self, filtered: bool) -> Self {
        self.filtered = filtered;
        if !filtered {
            self.filter_input.blur();
        }
        self.refresh_rows();
        self
    }

    pub fn with_filter_text(mut self, text: impl Into<String>) -> Self {
        self.filter_input.set_value(text);
        self.refresh_rows();
        self.reset_page();
        self
    }

    pub fn with_filter_func<F>(mut self, func: F) -> Self
    where
        F: Fn(&FilterContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.filter_fn = Arc::new(func);
        self.refresh_rows();
        self
    }

    pub fn with_fuzzy_filter(self) -> Self {
        self.with_filter_func(filter_fuzzy)
    }

    /// Sort by a single column, replacing any existing sort.
    pub fn sort_by_asc(mut self, key: impl Into<String>) -> Self {
        self.sort = vec![SortColumn::asc(key)];
        self.refresh_rows();
        self
    }

    pub fn sort_by_desc(mut self, key: impl Into<String>) -> Self {
        self.sort = vec![SortColumn::desc(key)];
        self.refresh_rows();
        self
    }

    /// Add a weaker tie-breaker below the existing sort keys.
    pub fn then_sort_by_asc(mut self, key: impl Into<String>) -> Self {
        self.sort.insert(0, SortColumn::asc(key));
        self.refresh_rows();
        self
    }

    pub fn then_sort_by_desc(mut self, key: impl Into<String>) -> Self {
        self.sort.insert(0, SortColumn::desc(key));
        self.refresh_rows();
        self
    }

    /// Style every cell inherits from. Right aligned by default.
    pub fn with_base_style(mut self, style: Style) -> Self {
        self.styles.base = style;
        self
    }

    pub fn with_header_style(mut self, style: Style) -> Self {
        self.styles.header = style;
        self
    }

    pub fn with_highlight_style(mut self, style: Style) -> Self {
        self.styles.highlight = style;
        self
    }

    pub fn with_border_style(mut self, style: Style) -> Self {
        self.styles.border = style;
        self
    }

    /// Use custom border glyphs, each of which must be one cell wide.
    pub fn with_border(mut self, border: Border) -> Result<Self> {
        border.validate()?;
        self.border = border;
        Ok(self)
    }

    /// Text shown in cells whose row has no value for the column.
    pub fn with_missing_data_indicator(self, text: impl Into<String>) -> Self {
        self.with_missing_data_indicator_styled(text, Style::default())
    }

    pub fn with_missing_data_indicator_styled(
        mut self,
        text: impl Into<String>,
        style: Style,
    ) -> Self {
        self.missing_data = Some(MissingData {
            text: text.into(),
            style,
        });
        self
    }

    /// Data passed through to every cell style function.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_metadata_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    fn select_column(&self) -> Column {
        let width = display_width(&self.selected_text).max(display_width(&self.unselected_text));
        Column::new(SELECT_COLUMN_KEY, self.selected_text.clone(), width)
    }

    fn recalculate_widths(&mut self) {
        self.widths = resolve_widths(&self.columns, self.view.target_width);
        self.view.scroller.recalculate(&self.widths);
    }

    fn active_filter(&self) -> &str {
        if self.filtered {
            self.filter_input.value()
        } else {
            ""
        }
    }

    /// Re-run filter and sort, then pull the cursor and page back into range.
    fn refresh_rows(&mut self) {
        let filtered = filter_rows(
            &self.rows,
            &self.columns,
            self.active_filter(),
            &self.filter_fn,
        );
        self.visible = Arc::new(sort_rows(&filtered, &self.sort));

        let total = self.visible.len();
        if self.view.highlighted >= total {
            self.view.highlighted = total.saturating_sub(1);
        }
        self.view.paginator.clamp(total);
    }

    fn reset_page(&mut self) {
        self.view.highlighted = self.view.paginator.first();
    }
}
