mod border;
mod color;
mod enums;
mod style;

pub use border::Border;
pub use color::Color;
pub use enums::TextAlign;
pub use style::Style;
