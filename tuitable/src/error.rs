//! Errors raised while configuring a table.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A key binding string could not be parsed, e.g. `"ctrl+"`.
    #[error("invalid key binding '{0}'")]
    InvalidKey(String),

    /// A terminal event with no table meaning, such as a mouse move.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("invalid format template '{template}': {reason}")]
    InvalidFormat { template: String, reason: String },

    /// Border glyphs must occupy exactly one terminal cell.
    #[error("border glyph '{glyph}' for {part} is {width} cells wide")]
    InvalidBorderGlyph {
        part: &'static str,
        glyph: String,
        width: usize,
    },
}
