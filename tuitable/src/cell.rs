//! Cell values and per-cell styling.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;

use crate::column::Column;
use crate::row::Row;
use crate::types::Style;

/// Caller supplied data handed to every style function.
pub type Metadata = IndexMap<String, Value>;

/// Computes a cell style from the cell and its surroundings.
pub type StyleFn = Arc<dyn Fn(&StyleFnInput<'_>) -> Style + Send + Sync>;

/// A single datum stored in a row.
#[derive(Clone)]
pub enum Value {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
    Custom(Arc<dyn fmt::Display + Send + Sync>),
}

impl Value {
    pub fn custom(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Numeric view used for sorting. Text is never parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::UInt(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Duration(d) => Some(d.as_nanos() as f64),
            Value::Text(_) | Value::Bool(_) | Value::Custom(_) => None,
        }
    }

    /// Display with an optional precision, as used by format templates.
    pub(crate) fn format_with(&self, precision: Option<usize>) -> String {
        let Some(p) = precision else {
            return self.to_string();
        };
        match self {
            Value::Text(s) => format!("{s:.p$}"),
            Value::Int(n) => format!("{:.p$}", *n as f64),
            Value::UInt(n) => format!("{:.p$}", *n as f64),
            Value::Float(n) => format!("{n:.p$}"),
            Value::Bool(b) => format!("{b:.p$}"),
            Value::Duration(d) => format!("{d:.p$?}"),
            Value::Custom(c) => format!("{c:.p$}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Duration(d) => write!(f, "{d:?}"),
            Value::Custom(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Value::Custom(c) => f.debug_tuple("Custom").field(&c.to_string()).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// What a style function gets to look at.
pub struct StyleFnInput<'a> {
    pub value: &'a Value,
    pub column: &'a Column,
    pub row: &'a Row,
    pub metadata: &'a Metadata,
}

#[derive(Clone)]
pub enum CellStyle {
    Fixed(Style),
    Func(StyleFn),
}

impl fmt::Debug for CellStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellStyle::Fixed(style) => f.debug_tuple("Fixed").field(style).finish(),
            CellStyle::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// A value that carries its own style, which overrides row and column styles.
#[derive(Debug, Clone)]
pub struct StyledCell {
    pub value: Value,
    pub style: CellStyle,
}

impl StyledCell {
    pub fn new(value: impl Into<Value>, style: Style) -> Self {
        Self {
            value: value.into(),
            style: CellStyle::Fixed(style),
        }
    }

    pub fn with_style_func<F>(value: impl Into<Value>, func: F) -> Self
    where
        F: Fn(&StyleFnInput<'_>) -> Style + Send + Sync + 'static,
    {
        Self {
            value: value.into(),
            style: CellStyle::Func(Arc::new(func)),
        }
    }

    pub fn resolve_style(&self, column: &Column, row: &Row, metadata: &Metadata) -> Style {
        match &self.style {
            CellStyle::Fixed(style) => *style,
            CellStyle::Func(func) => func(&StyleFnInput {
                value: &self.value,
                column,
                row,
                metadata,
            }),
        }
    }
}

/// Contents of one cell in a row.
#[derive(Debug, Clone)]
pub enum CellValue {
    Scalar(Value),
    Styled(StyledCell),
}

impl CellValue {
    /// The underlying value, with any styling unwrapped.
    pub fn value(&self) -> &Value {
        match self {
            CellValue::Scalar(value) => value,
            CellValue::Styled(cell) => &cell.value,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        CellValue::Scalar(value)
    }
}

impl From<StyledCell> for CellValue {
    fn from(cell: StyledCell) -> Self {
        CellValue::Styled(cell)
    }
}

macro_rules! impl_value_from {
    ($variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }

            impl From<$t> for CellValue {
                fn from(v: $t) -> Self {
                    CellValue::Scalar(Value::from(v))
                }
            }
        )+
    };
}

impl_value_from!(Int as i64: i8, i16, i32, i64, isize);
impl_value_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_value_from!(Float as f64: f32, f64);

macro_rules! impl_value_from_with {
    ($t:ty, $v:ident => $e:expr) => {
        impl From<$t> for Value {
            fn from($v: $t) -> Self {
                $e
            }
        }

        impl From<$t> for CellValue {
            fn from(v: $t) -> Self {
                CellValue::Scalar(Value::from(v))
            }
        }
    };
}

impl_value_from_with!(bool, v => Value::Bool(v));
impl_value_from_with!(&str, v => Value::Text(v.to_string()));
impl_value_from_with!(String, v => Value::Text(v));
impl_value_from_with!(&String, v => Value::Text(v.clone()));
impl_value_from_with!(Duration, v => Value::Duration(v));
