use crate::column::{Column, ColumnWidth};

/// Resolve the rendered width of every column for a table `total_width`
/// cells wide, borders included.
///
/// Fixed columns keep their width. Flex columns split what is left in
/// proportion to their factors, the rounding remainder going one cell at a
/// time to flex columns from the left. Every column ends up at least one
/// cell wide, even when the space runs out.
pub fn resolve_widths(columns: &[Column], total_width: usize) -> Vec<usize> {
    let borders = columns.len() as i64 + 1;
    let available = total_width as i64 - borders;

    let fixed_total: i64 = columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w as i64,
            ColumnWidth::Flex(_) => 0,
        })
        .sum();
    let flex_available = available - fixed_total;

    let mut factor_total: i64 = columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Flex(f) => f as i64,
            ColumnWidth::Fixed(_) => 0,
        })
        .sum();

    // all flex factors zero: split evenly
    let zero_factors = factor_total == 0;
    if zero_factors {
        factor_total = columns.iter().filter(|c| c.is_flex()).count() as i64;
    }

    let factor_of = |width: ColumnWidth| match width {
        ColumnWidth::Flex(_) if zero_factors => 1,
        ColumnWidth::Flex(f) => f as i64,
        ColumnWidth::Fixed(_) => 0,
    };

    let mut widths: Vec<i64> = columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w as i64,
            ColumnWidth::Flex(_) if factor_total == 0 => 0,
            ColumnWidth::Flex(_) => (flex_available * factor_of(c.width)).div_euclid(factor_total),
        })
        .collect();

    let flex_assigned: i64 = columns
        .iter()
        .zip(&widths)
        .filter(|(c, _)| c.is_flex())
        .map(|(_, w)| w)
        .sum();
    let mut remainder = flex_available - flex_assigned;

    for (column, width) in columns.iter().zip(widths.iter_mut()) {
        if remainder <= 0 {
            break;
        }
        if column.is_flex() {
            *width += 1;
            remainder -= 1;
        }
    }

    let resolved: Vec<usize> = widths.into_iter().map(|w| w.max(1) as usize).collect();
    log::trace!("resolved column widths for {total_width}: {resolved:?}");
    resolved
}
