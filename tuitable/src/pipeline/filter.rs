use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::column::Column;
use crate::row::Row;

/// Everything a filter predicate may look at for one row.
pub struct FilterContext<'a> {
    pub columns: &'a [Column],
    pub row: &'a Row,
    pub filter: &'a str,
}

pub type FilterFn = Arc<dyn Fn(&FilterContext<'_>) -> bool + Send + Sync>;

/// Keep the rows accepted by `predicate`, preserving order.
///
/// An empty filter keeps every row without consulting the predicate.
pub fn filter_rows(rows: &[Row], columns: &[Column], filter: &str, predicate: &FilterFn) -> Vec<Row> {
    if filter.is_empty() {
        return rows.to_vec();
    }

    let kept: Vec<Row> = rows
        .iter()
        .filter(|row| {
            predicate(&FilterContext {
                columns,
                row,
                filter,
            })
        })
        .cloned()
        .collect();
    log::debug!("filter {filter:?} kept {} of {} rows", kept.len(), rows.len());
    kept
}

/// Case-insensitive substring match against any filterable column.
///
/// Tables without filterable columns match everything.
pub fn filter_contains(ctx: &FilterContext<'_>) -> bool {
    if ctx.filter.is_empty() {
        return true;
    }

    let mut any_filterable = false;
    let needle = ctx.filter.to_lowercase();

    for column in ctx.columns.iter().filter(|c| c.filterable) {
        any_filterable = true;
        let Some(cell) = ctx.row.get(&column.key) else {
            continue;
        };
        if cell.to_string().to_lowercase().contains(&needle) {
            return true;
        }
    }

    !any_filterable
}

/// Fuzzy match: each whitespace separated word of the filter must appear as
/// an ordered subsequence in the filterable values of the row.
pub fn filter_fuzzy(ctx: &FilterContext<'_>) -> bool {
    if ctx.filter.trim().is_empty() {
        return true;
    }

    let haystack = ctx
        .columns
        .iter()
        .filter(|c| c.filterable)
        .filter_map(|c| ctx.row.get(&c.key))
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if haystack.trim().is_empty() {
        return false;
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        ctx.filter,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    pattern
        .score(Utf32Str::new(&haystack, &mut buf), &mut matcher)
        .is_some()
}
