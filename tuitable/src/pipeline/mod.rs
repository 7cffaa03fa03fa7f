//! The row pipeline: filter, then sort.

mod filter;
mod sort;

pub use filter::{filter_contains, filter_fuzzy, filter_rows, FilterContext, FilterFn};
pub use sort::{sort_rows, SortColumn, SortDirection};
