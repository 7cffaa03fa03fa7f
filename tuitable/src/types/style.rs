use super::{Color, TextAlign};

/// A bag of optional display attributes.
///
/// Unset attributes inherit from whatever layer sits below when styles are
/// combined with [`Style::patch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub dim: Option<bool>,
    pub strikethrough: Option<bool>,
    pub align: Option<TextAlign>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = Some(true);
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = Some(true);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Layer `over` on top of `self`; every attribute `over` sets wins.
    pub fn patch(self, over: Style) -> Self {
        Self {
            foreground: over.foreground.or(self.foreground),
            background: over.background.or(self.background),
            bold: over.bold.or(self.bold),
            italic: over.italic.or(self.italic),
            underline: over.underline.or(self.underline),
            dim: over.dim.or(self.dim),
            strikethrough: over.strikethrough.or(self.strikethrough),
            align: over.align.or(self.align),
        }
    }

    /// True when painting with this style would change nothing.
    pub fn is_plain(&self) -> bool {
        self.foreground.is_none()
            && self.background.is_none()
            && !self.bold.unwrap_or(false)
            && !self.italic.unwrap_or(false)
            && !self.underline.unwrap_or(false)
            && !self.dim.unwrap_or(false)
            && !self.strikethrough.unwrap_or(false)
    }
}
