use super::Table;
use crate::event::TableEvent;
use crate::keys::KeyMap;
use crate::pipeline::SortColumn;
use crate::row::Row;

impl Table {
    /// Rows after filtering and sorting, across all pages.
    pub fn visible_rows(&self) -> &[Row] {
        &self.visible
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[Row] {
        let range = self.view.paginator.visible_range(self.visible.len());
        &self.visible[range]
    }

    pub fn highlighted_row(&self) -> Option<&Row> {
        self.visible.get(self.view.highlighted)
    }

    pub fn highlighted_index(&self) -> usize {
        self.view.highlighted
    }

    /// Selected rows in their original order, including filtered out ones.
    pub fn selected_rows(&self) -> Vec<&Row> {
        self.rows.iter().filter(|r| r.selected).collect()
    }

    /// Current page, starting at 1.
    pub fn current_page(&self) -> usize {
        self.view.paginator.page() + 1
    }

    pub fn max_pages(&self) -> usize {
        self.view.paginator.max_pages(self.visible.len())
    }

    /// Number of rows that pass the filter.
    pub fn total_rows(&self) -> usize {
        self.visible.len()
    }

    pub fn page_size(&self) -> usize {
        self.view.paginator.page_size()
    }

    pub fn column_sorting(&self) -> &[SortColumn] {
        &self.sort
    }

    pub fn can_filter(&self) -> bool {
        self.filtered
    }

    /// True when filtering is on and the filter text is not empty.
    pub fn is_filter_active(&self) -> bool {
        !self.active_filter().is_empty()
    }

    pub fn is_filter_input_focused(&self) -> bool {
        self.filter_input.is_focused()
    }

    pub fn current_filter(&self) -> &str {
        self.filter_input.value()
    }

    pub fn horizontal_scroll_offset(&self) -> usize {
        self.view.scroller.offset()
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    /// Width of the table with every column shown, borders included.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.widths.len() + 1
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Events produced by the most recent [`Table::update`].
    pub fn last_events(&self) -> &[TableEvent] {
        &self.last_events
    }
}
