use super::Table;
use crate::cell::CellValue;
use crate::render::{Grid, GridCell, Painter, PlainPainter, Renderer};
use crate::row::Row;
use crate::scroll::Slot;
use crate::types::{Style, TextAlign};

impl Table {
    /// Render without styling. The output never ends in a newline.
    pub fn view(&self) -> String {
        self.view_with(&PlainPainter)
    }

    pub fn view_with(&self, painter: &dyn Painter) -> String {
        let grid = self.grid();
        Renderer::new(&self.border, self.styles.border, painter).render(&grid)
    }

    fn grid(&self) -> Grid {
        let slots = self.view.scroller.slots(&self.widths);
        let widths = slots.iter().map(|s| s.width(&self.widths)).collect();

        let header = self
            .header_visible
            .then(|| slots.iter().map(|s| self.header_cell(*s)).collect());

        let range = self.view.paginator.visible_range(self.visible.len());
        let page_len = range.len();
        let mut rows: Vec<Vec<GridCell>> = range
            .map(|index| slots.iter().map(|s| self.body_cell(index, *s)).collect())
            .collect();

        let footer = self.footer_text().map(|text| GridCell::new(text, self.styles.base));

        for _ in 0..self.padding_rows(page_len, footer.is_some()) {
            rows.push(slots.iter().map(|s| self.padding_cell(*s)).collect());
        }

        Grid {
            widths,
            header,
            rows,
            footer,
        }
    }

    /// Blank rows needed to reach the minimum height.
    fn padding_rows(&self, page_len: usize, has_footer: bool) -> usize {
        let header: i64 = if self.header_visible { 3 } else { 1 };
        let footer: i64 = if has_footer { 2 } else { 0 };
        let chrome = header + footer;
        let padding = self.view.minimum_height as i64 - chrome - page_len as i64 - 1;

        if padding == 0 && page_len == 0 {
            1
        } else {
            padding.max(0) as usize
        }
    }

    fn header_cell(&self, slot: Slot) -> GridCell {
        match slot {
            Slot::Column(i) => {
                let column = &self.columns[i];
                let style = self
                    .styles
                    .base
                    .patch(column.style)
                    .patch(self.styles.header);
                GridCell::new(column.title.clone(), style)
            }
            Slot::OverflowLeft => GridCell::new("<", self.overflow_style(self.styles.header)),
            Slot::OverflowRight(_) => GridCell::new(">", self.overflow_style(self.styles.header)),
        }
    }

    fn overflow_style(&self, over: Style) -> Style {
        self.styles.base.patch(over).align(TextAlign::Right)
    }

    /// Highlight (when focused), then the row's own style.
    fn row_style(&self, index: usize, row: &Row) -> Style {
        let mut style = Style::default();
        if self.focused && index == self.view.highlighted {
            style = style.patch(self.styles.highlight);
        }
        match row.style {
            Some(row_style) => style.patch(row_style),
            None => style,
        }
    }

    fn body_cell(&self, index: usize, slot: Slot) -> GridCell {
        let row = &self.visible[index];
        let row_style = self.row_style(index, row);

        let i = match slot {
            Slot::Column(i) => i,
            Slot::OverflowLeft => return GridCell::new("<", self.overflow_style(row_style)),
            Slot::OverflowRight(_) => return GridCell::new(">", self.overflow_style(row_style)),
        };

        let column = &self.columns[i];
        let style = self.styles.base.patch(column.style).patch(row_style);

        if column.is_select() {
            let marker = if row.selected {
                &self.selected_text
            } else {
                &self.unselected_text
            };
            return GridCell::new(marker.clone(), style);
        }

        match row.get(&column.key) {
            Some(cell) => {
                let text = match &column.format {
                    Some(format) => format.apply(cell.value()),
                    None => cell.value().to_string(),
                };
                let style = match cell {
                    CellValue::Styled(styled) => {
                        style.patch(styled.resolve_style(column, row, &self.metadata))
                    }
                    CellValue::Scalar(_) => style,
                };
                GridCell::new(text, style)
            }
            None => match &self.missing_data {
                Some(missing) => GridCell::new(missing.text.clone(), style.patch(missing.style)),
                None => GridCell::new("", style),
            },
        }
    }

    fn padding_cell(&self, slot: Slot) -> GridCell {
        match slot {
            Slot::Column(i) => {
                GridCell::new("", self.styles.base.patch(self.columns[i].style))
            }
            Slot::OverflowLeft => GridCell::new("<", self.overflow_style(Style::default())),
            Slot::OverflowRight(_) => GridCell::new(">", self.overflow_style(Style::default())),
        }
    }

    fn has_footer(&self) -> bool {
        self.footer_visible
            && (!self.static_footer.is_empty()
                || self.view.paginator.is_paged()
                || self.shows_filter())
    }

    fn shows_filter(&self) -> bool {
        self.filtered
            && (self.filter_input.is_focused() || !self.filter_input.value().is_empty())
    }

    fn footer_text(&self) -> Option<String> {
        if !self.has_footer() {
            return None;
        }
        if !self.static_footer.is_empty() {
            return Some(self.static_footer.clone());
        }

        let mut sections = Vec::new();
        if self.shows_filter() {
            sections.push(format!("/{}", self.filter_input.value()));
        }
        if self.view.paginator.is_paged() {
            sections.push(format!("{}/{}", self.current_page(), self.max_pages()));
        }
        Some(sections.join(" "))
    }
}
