use crate::error::{Error, Result};
use crate::text::display_width;

/// Glyphs used to draw the table frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub top: String,
    pub left: String,
    pub right: String,
    pub bottom: String,

    pub top_right: String,
    pub top_left: String,
    pub bottom_right: String,
    pub bottom_left: String,

    pub top_junction: String,
    pub left_junction: String,
    pub right_junction: String,
    pub bottom_junction: String,

    pub inner_junction: String,
    pub inner_divider: String,
}

impl Default for Border {
    fn default() -> Self {
        Self::thick()
    }
}

impl Border {
    pub fn thick() -> Self {
        Self::from_glyphs([
            "━", "┃", "┃", "━", "┓", "┏", "┛", "┗", "┳", "┣", "┫", "┻", "╋", "┃",
        ])
    }

    pub fn rounded() -> Self {
        Self::from_glyphs([
            "─", "│", "│", "─", "╮", "╭", "╯", "╰", "┬", "├", "┤", "┴", "┼", "│",
        ])
    }

    pub fn single() -> Self {
        Self::from_glyphs([
            "─", "│", "│", "─", "┐", "┌", "┘", "└", "┬", "├", "┤", "┴", "┼", "│",
        ])
    }

    pub fn double() -> Self {
        Self::from_glyphs([
            "═", "║", "║", "═", "╗", "╔", "╝", "╚", "╦", "╠", "╣", "╩", "╬", "║",
        ])
    }

    /// Plain ASCII frame for terminals without box drawing glyphs.
    pub fn ascii() -> Self {
        Self::from_glyphs([
            "-", "|", "|", "-", "+", "+", "+", "+", "+", "+", "+", "+", "+", "|",
        ])
    }

    fn from_glyphs(g: [&str; 14]) -> Self {
        Self {
            top: g[0].into(),
            left: g[1].into(),
            right: g[2].into(),
            bottom: g[3].into(),
            top_right: g[4].into(),
            top_left: g[5].into(),
            bottom_right: g[6].into(),
            bottom_left: g[7].into(),
            top_junction: g[8].into(),
            left_junction: g[9].into(),
            right_junction: g[10].into(),
            bottom_junction: g[11].into(),
            inner_junction: g[12].into(),
            inner_divider: g[13].into(),
        }
    }

    /// Check that every glyph is exactly one cell wide.
    pub fn validate(&self) -> Result<()> {
        let parts: [(&'static str, &str); 14] = [
            ("top", &self.top),
            ("left", &self.left),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("top right", &self.top_right),
            ("top left", &self.top_left),
            ("bottom right", &self.bottom_right),
            ("bottom left", &self.bottom_left),
            ("top junction", &self.top_junction),
            ("left junction", &self.left_junction),
            ("right junction", &self.right_junction),
            ("bottom junction", &self.bottom_junction),
            ("inner junction", &self.inner_junction),
            ("inner divider", &self.inner_divider),
        ];

        for (part, glyph) in parts {
            let width = display_width(glyph);
            if width != 1 {
                return Err(Error::InvalidBorderGlyph {
                    part,
                    glyph: glyph.to_string(),
                    width,
                });
            }
        }
        Ok(())
    }
}
