pub mod cell;
pub mod column;
pub mod error;
pub mod event;
pub mod format;
pub mod keys;
pub mod layout;
pub mod paginate;
pub mod pipeline;
pub mod render;
pub mod row;
pub mod scroll;
pub mod table;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;

pub use cell::{CellStyle, CellValue, Metadata, StyleFnInput, StyledCell, Value};
pub use column::{Column, ColumnWidth, SELECT_COLUMN_KEY};
pub use error::{Error, Result};
pub use event::{Input, Key, KeyCombo, Modifiers, TableEvent};
pub use format::Format;
pub use keys::{Action, KeyMap};
pub use layout::resolve_widths;
pub use paginate::Paginator;
pub use pipeline::{FilterContext, SortColumn, SortDirection};
pub use render::{AnsiPainter, Painter, PlainPainter};
pub use row::{Row, RowId};
pub use scroll::{HorizontalScroller, Slot};
pub use table::Table;
pub use terminal::Terminal;
pub use text_input::TextInput;
pub use types::*;
