use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

use crate::cell::CellValue;
use crate::types::Style;

/// Identity of a row, stable across filtering and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

impl RowId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

pub type RowData = IndexMap<String, CellValue>;

#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    pub data: RowData,
    pub style: Option<Style>,
    pub selected: bool,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    pub fn new() -> Self {
        Self::from_data(Vec::<(String, CellValue)>::new())
    }

    pub fn from_data<K, V>(data: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<CellValue>,
    {
        Self {
            id: RowId::new(),
            data: data.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            style: None,
            selected: false,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn with_cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.data.get(key)
    }
}
