use crate::error::Result;
use crate::format::Format;
use crate::types::Style;

/// Key of the synthetic column that shows row selection markers.
pub const SELECT_COLUMN_KEY: &str = "___select___";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Exact width in cells, excluding borders.
    Fixed(usize),
    /// Share of the space left over after fixed columns.
    Flex(usize),
}

#[derive(Debug, Clone)]
pub struct Column {
    pub key: String,
    pub title: String,
    pub width: ColumnWidth,
    pub filterable: bool,
    pub format: Option<Format>,
    pub style: Style,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>, width: usize) -> Self {
        Self::with_width(key, title, ColumnWidth::Fixed(width))
    }

    pub fn flex(key: impl Into<String>, title: impl Into<String>, factor: usize) -> Self {
        Self::with_width(key, title, ColumnWidth::Flex(factor))
    }

    pub fn with_width(key: impl Into<String>, title: impl Into<String>, width: ColumnWidth) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width,
            filterable: false,
            format: None,
            style: Style::default(),
        }
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Render values through a template like `"{:.1}%"`.
    pub fn with_format(mut self, template: &str) -> Result<Self> {
        self.format = Some(Format::parse(template)?);
        Ok(self)
    }

    pub fn is_flex(&self) -> bool {
        matches!(self.width, ColumnWidth::Flex(_))
    }

    pub fn is_select(&self) -> bool {
        self.key == SELECT_COLUMN_KEY
    }
}
