use std::cmp::Ordering;

use crate::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortColumn {
    pub key: String,
    pub direction: SortDirection,
}

impl SortColumn {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Sort rows by each entry of `order` in turn with a stable sort, so the last
/// entry ends up as the primary key.
pub fn sort_rows(rows: &[Row], order: &[SortColumn]) -> Vec<Row> {
    let mut sorted = rows.to_vec();

    for column in order {
        sorted.sort_by(|a, b| {
            let ord = compare_cells(a, b, &column.key);
            match column.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    sorted
}

/// Numbers compare numerically, anything else by its display string.
fn compare_cells(a: &Row, b: &Row, key: &str) -> Ordering {
    let a = a.get(key);
    let b = b.get(key);

    let numbers = a
        .and_then(|c| c.value().as_number())
        .zip(b.and_then(|c| c.value().as_number()));
    if let Some((x, y)) = numbers {
        return x.total_cmp(&y);
    }

    let a = a.map(|c| c.to_string()).unwrap_or_default();
    let b = b.map(|c| c.to_string()).unwrap_or_default();
    a.cmp(&b)
}
