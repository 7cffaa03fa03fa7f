use crossterm::style::{Attribute, ContentStyle};

use crate::types::Style;

/// Turns text plus a [`Style`] into what ends up on screen.
pub trait Painter {
    fn paint(&self, text: &str, style: &Style) -> String;
}

/// Ignores styles entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, text: &str, _style: &Style) -> String {
        text.to_string()
    }
}

/// Emits SGR escape sequences through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, text: &str, style: &Style) -> String {
        if style.is_plain() || text.is_empty() {
            return text.to_string();
        }
        content_style(style).apply(text).to_string()
    }
}

fn content_style(style: &Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.foreground.map(Into::into);
    content.background_color = style.background.map(Into::into);

    let flags = [
        (style.bold, Attribute::Bold),
        (style.italic, Attribute::Italic),
        (style.underline, Attribute::Underlined),
        (style.dim, Attribute::Dim),
        (style.strikethrough, Attribute::CrossedOut),
    ];
    for (flag, attribute) in flags {
        if flag == Some(true) {
            content.attributes.set(attribute);
        }
    }
    content
}
