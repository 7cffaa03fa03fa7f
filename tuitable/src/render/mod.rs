//! Assembles the bordered text block from prepared cells.

mod painter;

pub use painter::{AnsiPainter, Painter, PlainPainter};

use crate::text::fit;
use crate::types::{Border, Style};

/// A cell ready to be drawn: raw text and its fully merged style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridCell {
    pub text: String,
    pub style: Style,
}

impl GridCell {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Width of each rendered slot, borders excluded.
    pub widths: Vec<usize>,
    /// Header cells, `None` when the header is hidden.
    pub header: Option<Vec<GridCell>>,
    /// Body lines, padding included.
    pub rows: Vec<Vec<GridCell>>,
    pub footer: Option<GridCell>,
}

impl Grid {
    /// Full width in cells, outer borders included.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.widths.len() + 1
    }
}

pub struct Renderer<'a> {
    border: &'a Border,
    border_style: Style,
    painter: &'a dyn Painter,
}

impl<'a> Renderer<'a> {
    pub fn new(border: &'a Border, border_style: Style, painter: &'a dyn Painter) -> Self {
        Self {
            border,
            border_style,
            painter,
        }
    }

    /// Render `grid` to text. The result never ends in a newline.
    pub fn render(&self, grid: &Grid) -> String {
        if grid.widths.is_empty() {
            return String::new();
        }

        let b = self.border;
        let has_rows = !grid.rows.is_empty();
        let has_footer = grid.footer.is_some();
        let rule = |left: &str, fill: &str, junction: &str, right: &str| {
            self.rule(&grid.widths, left, fill, junction, right)
        };
        let top = || rule(&b.top_left, &b.top, &b.top_junction, &b.top_right);
        let bottom = || rule(&b.bottom_left, &b.bottom, &b.bottom_junction, &b.bottom_right);
        let into_footer = || rule(&b.left_junction, &b.bottom, &b.bottom_junction, &b.right_junction);

        let mut lines = Vec::with_capacity(grid.rows.len() + 6);

        match &grid.header {
            Some(header) => {
                lines.push(top());
                lines.push(self.cells(&grid.widths, header));
                lines.push(if has_rows {
                    rule(&b.left_junction, &b.top, &b.inner_junction, &b.right_junction)
                } else if has_footer {
                    into_footer()
                } else {
                    bottom()
                });
            }
            None if has_rows => lines.push(top()),
            None if has_footer => {
                let inner = grid.total_width() - 2;
                lines.push(self.span(&b.top_left, &b.top, inner, &b.top_right));
            }
            None => return String::new(),
        }

        for row in &grid.rows {
            lines.push(self.cells(&grid.widths, row));
        }

        if has_rows {
            lines.push(if has_footer { into_footer() } else { bottom() });
        }

        if let Some(footer) = &grid.footer {
            let inner = grid.total_width() - 2;
            let text = fit(&footer.text, inner, footer.style.align.unwrap_or_default());
            lines.push(format!(
                "{}{}{}",
                self.edge(&b.left),
                self.painter.paint(&text, &footer.style),
                self.edge(&b.right)
            ));
            lines.push(self.span(&b.bottom_left, &b.bottom, inner, &b.bottom_right));
        }

        log::trace!(
            "rendered {} lines, {} cells wide",
            lines.len(),
            grid.total_width()
        );
        lines.join("\n")
    }

    fn edge(&self, glyph: &str) -> String {
        self.painter.paint(glyph, &self.border_style)
    }

    /// A horizontal rule with a junction above or below every divider.
    fn rule(
        &self,
        widths: &[usize],
        left: &str,
        fill: &str,
        junction: &str,
        right: &str,
    ) -> String {
        let segments: Vec<String> = widths.iter().map(|&w| fill.repeat(w)).collect();
        let line = format!("{left}{}{right}", segments.join(junction));
        self.edge(&line)
    }

    /// A horizontal rule without junctions.
    fn span(&self, left: &str, fill: &str, width: usize, right: &str) -> String {
        self.edge(&format!("{left}{}{right}", fill.repeat(width)))
    }

    fn cells(&self, widths: &[usize], cells: &[GridCell]) -> String {
        let mut line = self.edge(&self.border.left);
        let blank = GridCell::default();

        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.edge(&self.border.inner_divider));
            }
            let cell = cells.get(i).unwrap_or(&blank);
            let text = fit(&cell.text, width, cell.style.align.unwrap_or_default());
            line.push_str(&self.painter.paint(&text, &cell.style));
        }

        line.push_str(&self.edge(&self.border.right));
        line
    }
}
