use tuitable::text::{display_width, strip_ansi};
use tuitable::{
    AnsiPainter, Border, Color, Column, Key, KeyCombo, Painter, Row, Style, StyledCell, Table,
};

fn three_by_three() -> Table {
    let columns = (1..=3)
        .map(|c| Column::new(c.to_string(), c.to_string(), 4))
        .collect();
    let rows = (1..=3)
        .map(|r| {
            (1..=3).fold(Row::new(), |row, c| {
                row.with_cell(c.to_string(), format!("{c},{r}"))
            })
        })
        .collect();
    Table::new(columns).with_rows(rows)
}

fn scroll_table(count: usize, frozen_name: bool) -> Table {
    let mut columns = Vec::new();
    let mut row = Row::new();
    if frozen_name {
        columns.push(Column::new("Name", "Name", 4));
        row = row.with_cell("Name", "A");
    }
    for i in 1..=count {
        columns.push(Column::new(i.to_string(), i.to_string(), 4));
        row = row.with_cell(i.to_string(), format!("x{i}"));
    }
    Table::new(columns).with_rows(vec![row]).focused(true)
}

#[test]
fn test_shows_all_headers_without_trailing_newline() {
    let table = Table::new(vec![
        Column::new("first-key", "First Title", 10),
        Column::new("second-key", "Second Title", 20),
    ]);
    let rendered = table.view();
    assert!(rendered.contains("First Title"));
    assert!(rendered.contains("Second Title"));
    assert!(!rendered.ends_with('\n'));
}

#[test]
fn test_no_columns_renders_nothing() {
    assert_eq!(Table::new(vec![]).view(), "");
}

#[test]
fn test_single_cell() {
    let table = Table::new(vec![Column::new("id", "ID", 4)]);
    assert_eq!(table.view(), "┏━━━━┓\n┃  ID┃\n┗━━━━┛");
}

#[test]
fn test_single_column() {
    let table = Table::new(vec![Column::new("id", "ID", 4)]).with_rows(vec![
        Row::new().with_cell("id", "1"),
        Row::new().with_cell("id", "2"),
    ]);
    let expected = "\
┏━━━━┓
┃  ID┃
┣━━━━┫
┃   1┃
┃   2┃
┗━━━━┛";
    assert_eq!(table.view(), expected);
}

#[test]
fn test_header_only_row() {
    let table = Table::new(vec![
        Column::new("1", "1", 4),
        Column::new("2", "2", 4),
        Column::new("3", "3", 4),
    ]);
    let expected = "\
┏━━━━┳━━━━┳━━━━┓
┃   1┃   2┃   3┃
┗━━━━┻━━━━┻━━━━┛";
    assert_eq!(table.view(), expected);
}

#[test]
fn test_simple_3x3() {
    let expected = "\
┏━━━━┳━━━━┳━━━━┓
┃   1┃   2┃   3┃
┣━━━━╋━━━━╋━━━━┫
┃ 1,1┃ 2,1┃ 3,1┃
┃ 1,2┃ 2,2┃ 3,2┃
┃ 1,3┃ 2,3┃ 3,3┃
┗━━━━┻━━━━┻━━━━┛";
    assert_eq!(three_by_three().view(), expected);
}

#[test]
fn test_selectable_defaults() {
    let expected = "\
┏━━━┳━━━━┳━━━━┳━━━━┓
┃[x]┃   1┃   2┃   3┃
┣━━━╋━━━━╋━━━━╋━━━━┫
┃[ ]┃ 1,1┃ 2,1┃ 3,1┃
┃[ ]┃ 1,2┃ 2,2┃ 3,2┃
┃[ ]┃ 1,3┃ 2,3┃ 3,3┃
┗━━━┻━━━━┻━━━━┻━━━━┛";
    assert_eq!(three_by_three().selectable_rows(true).view(), expected);
}

#[test]
fn test_selectable_custom_text_with_footer() {
    let table = three_by_three()
        .selectable_rows(true)
        .with_selected_text(" ", "✓")
        .with_static_footer("Footer");
    let expected = "\
┏━┳━━━━┳━━━━┳━━━━┓
┃✓┃   1┃   2┃   3┃
┣━╋━━━━╋━━━━╋━━━━┫
┃ ┃ 1,1┃ 2,1┃ 3,1┃
┃ ┃ 1,2┃ 2,2┃ 3,2┃
┃ ┃ 1,3┃ 2,3┃ 3,3┃
┣━┻━━━━┻━━━━┻━━━━┫
┃          Footer┃
┗━━━━━━━━━━━━━━━━┛";
    assert_eq!(table.view(), expected);
}

#[test]
fn test_selection_column_removed_when_not_selectable() {
    let table = three_by_three().selectable_rows(true).selectable_rows(false);
    assert_eq!(table.view(), three_by_three().view());
}

#[test]
fn test_selected_row_marker() {
    let table = three_by_three()
        .selectable_rows(true)
        .focused(true)
        .update(KeyCombo::char(' '));
    assert!(table.view().contains("┃[x]┃ 1,1┃"));
    assert!(table.view().contains("┃[ ]┃ 1,2┃"));
}

#[test]
fn test_horizontal_scrolling() {
    let unscrolled = "\
┏━━━━┳━━━━┳━━━━┳━┓
┃   1┃   2┃   3┃>┃
┣━━━━╋━━━━╋━━━━╋━┫
┃  x1┃  x2┃  x3┃>┃
┗━━━━┻━━━━┻━━━━┻━┛";
    let after = "\
┏━┳━━━━┳━━━━┳━━━━┓
┃<┃   2┃   3┃   4┃
┣━╋━━━━╋━━━━╋━━━━┫
┃<┃  x2┃  x3┃  x4┃
┗━┻━━━━┻━━━━┻━━━━┛";

    let shift_right = KeyCombo::key(Key::Right).shift();
    let shift_left = KeyCombo::key(Key::Left).shift();

    let table = scroll_table(4, false).with_max_total_width(18);
    assert_eq!(table.view(), unscrolled);

    let table = table.update(shift_right);
    assert_eq!(table.view(), after);
    assert_eq!(table.horizontal_scroll_offset(), 1);

    let table = table.update(shift_left);
    assert_eq!(table.view(), unscrolled);

    let table = table.update(shift_left);
    assert_eq!(table.view(), unscrolled);
}

#[test]
fn test_horizontal_scroll_with_footer() {
    let unscrolled = "\
┏━━━━┳━━━━┳━━━━┳━┓
┃   1┃   2┃   3┃>┃
┣━━━━╋━━━━╋━━━━╋━┫
┃  x1┃  x2┃  x3┃>┃
┣━━━━┻━━━━┻━━━━┻━┫
┃          Footer┃
┗━━━━━━━━━━━━━━━━┛";
    let after = "\
┏━┳━━━━┳━━━━┳━━━━┓
┃<┃   2┃   3┃   4┃
┣━╋━━━━╋━━━━╋━━━━┫
┃<┃  x2┃  x3┃  x4┃
┣━┻━━━━┻━━━━┻━━━━┫
┃          Footer┃
┗━━━━━━━━━━━━━━━━┛";

    let table = scroll_table(4, false)
        .with_static_footer("Footer")
        .with_max_total_width(18);
    assert_eq!(table.view(), unscrolled);

    let table = table.scroll_right();
    assert_eq!(table.view(), after);

    // already at the last offset
    let table = table.scroll_right();
    assert_eq!(table.view(), after);

    let table = table.scroll_left().scroll_left();
    assert_eq!(table.view(), unscrolled);
}

#[test]
fn test_horizontal_scroll_with_frozen_column() {
    let left = "\
┏━━━━┳━━━━┳━━━━┳━━━━┓
┃Name┃   1┃   2┃   >┃
┣━━━━╋━━━━╋━━━━╋━━━━┫
┃   A┃  x1┃  x2┃   >┃
┣━━━━┻━━━━┻━━━━┻━━━━┫
┃             Footer┃
┗━━━━━━━━━━━━━━━━━━━┛";
    let middle = "\
┏━━━━┳━┳━━━━┳━━━━┳━━┓
┃Name┃<┃   2┃   3┃ >┃
┣━━━━╋━╋━━━━╋━━━━╋━━┫
┃   A┃<┃  x2┃  x3┃ >┃
┣━━━━┻━┻━━━━┻━━━━┻━━┫
┃             Footer┃
┗━━━━━━━━━━━━━━━━━━━┛";
    let right = "\
┏━━━━┳━┳━━━━┳━━━━┓
┃Name┃<┃   3┃   4┃
┣━━━━╋━╋━━━━╋━━━━┫
┃   A┃<┃  x3┃  x4┃
┣━━━━┻━┻━━━━┻━━━━┫
┃          Footer┃
┗━━━━━━━━━━━━━━━━┛";

    let shift_right = KeyCombo::key(Key::Right).shift();
    let table = scroll_table(4, true)
        .with_static_footer("Footer")
        .with_max_total_width(21)
        .with_horizontal_freeze_column_count(1);
    assert_eq!(table.view(), left);

    let table = table.update(shift_right);
    assert_eq!(table.view(), middle);

    let table = table.update(shift_right);
    assert_eq!(table.view(), right);

    let table = table.update(shift_right);
    assert_eq!(table.view(), right);
}

#[test]
fn test_no_scrolling_when_everything_fits() {
    let expected = "\
┏━━━━┳━━━━┳━━━━┳━━━━┓
┃Name┃   1┃   2┃   3┃
┣━━━━╋━━━━╋━━━━╋━━━━┫
┃   A┃  x1┃  x2┃  x3┃
┣━━━━┻━━━━┻━━━━┻━━━━┫
┃             Footer┃
┗━━━━━━━━━━━━━━━━━━━┛";
    let table = scroll_table(3, true)
        .with_static_footer("Footer")
        .with_max_total_width(21)
        .with_horizontal_freeze_column_count(1);
    assert_eq!(table.view(), expected);
    assert_eq!(table.scroll_right().view(), expected);
}

#[test]
fn test_scrolling_stops_at_last_column() {
    for (max_width, expected) in [(30, vec!["8"]), (20, vec!["7", "8"])] {
        let mut columns = vec![Column::new("Name", "Name", 5)];
        let mut row = Row::new().with_cell("Name", "A");
        for i in 1..=8 {
            columns.push(Column::new(i.to_string(), i.to_string(), 3));
            row = row.with_cell(i.to_string(), i.to_string());
        }
        let mut table = Table::new(columns)
            .with_rows(vec![row])
            .with_static_footer("Footer")
            .with_max_total_width(max_width)
            .with_horizontal_freeze_column_count(1);
        for _ in 0..16 {
            table = table.scroll_right();
        }

        let rendered = table.view();
        assert!(!rendered.contains('>'), "{rendered}");
        for col in expected {
            assert!(rendered.contains(col), "missing column {col}");
        }
    }
}

#[test]
fn test_hidden_header() {
    let table = Table::new(vec![Column::new("id", "ID", 4)])
        .with_rows(vec![Row::new().with_cell("id", 1)])
        .with_header_visibility(false);
    assert_eq!(table.view(), "┏━━━━┓\n┃   1┃\n┗━━━━┛");
}

#[test]
fn test_hidden_header_without_rows() {
    let table = Table::new(vec![Column::new("id", "ID", 8)]).with_header_visibility(false);
    assert_eq!(table.view(), "");

    let table = table.with_static_footer("Footer");
    assert_eq!(table.view(), "┏━━━━━━━━┓\n┃  Footer┃\n┗━━━━━━━━┛");
}

#[test]
fn test_hidden_footer() {
    let table = three_by_three()
        .with_static_footer("Footer")
        .with_footer_visibility(false);
    assert_eq!(table.view(), three_by_three().view());
}

#[test]
fn test_minimum_height_pads_rows() {
    let table = Table::new(vec![Column::new("id", "ID", 4)])
        .with_rows(vec![Row::new().with_cell("id", 1)])
        .with_minimum_height(7);
    let expected = "\
┏━━━━┓
┃  ID┃
┣━━━━┫
┃   1┃
┃    ┃
┃    ┃
┗━━━━┛";
    assert_eq!(table.view(), expected);
    assert_eq!(table.view().lines().count(), 7);
}

#[test]
fn test_minimum_height_without_rows() {
    let table = Table::new(vec![Column::new("id", "ID", 4)]).with_minimum_height(5);
    let expected = "\
┏━━━━┓
┃  ID┃
┣━━━━┫
┃    ┃
┗━━━━┛";
    assert_eq!(table.view(), expected);
}

#[test]
fn test_page_footer() {
    let rows = (1..=3).map(|i| Row::new().with_cell("id", i)).collect();
    let table = Table::new(vec![Column::new("id", "ID", 4)])
        .with_rows(rows)
        .with_page_size(2);
    let expected = "\
┏━━━━┓
┃  ID┃
┣━━━━┫
┃   1┃
┃   2┃
┣━━━━┫
┃ 1/2┃
┗━━━━┛";
    assert_eq!(table.view(), expected);
    assert!(table.page_down().view().contains("┃ 2/2┃"));
}

#[test]
fn test_filter_footer_shows_filter_and_page() {
    let rows = (1..=3).map(|i| Row::new().with_cell("id", i)).collect();
    let table = Table::new(vec![Column::new("id", "ID", 10).filterable(true)])
        .with_rows(rows)
        .with_page_size(2)
        .filtered(true)
        .with_filter_text("2");
    assert!(table.view().contains("┃    /2 1/1┃"), "{}", table.view());
}

#[test]
fn test_static_footer_wins() {
    let rows = (1..=3).map(|i| Row::new().with_cell("id", i)).collect();
    let table = Table::new(vec![Column::new("id", "ID", 6)])
        .with_rows(rows)
        .with_page_size(2)
        .with_static_footer("Hi");
    assert!(table.view().contains("┃    Hi┃"));
    assert!(!table.view().contains("1/2"));
}

#[test]
fn test_cell_text_is_truncated() {
    let table = Table::new(vec![Column::new("t", "Title", 5)]).with_rows(vec![
        Row::new().with_cell("t", "hello\nall"),
        Row::new().with_cell("t", "直立した恐"),
    ]);
    let expected = "\
┏━━━━━┓
┃Title┃
┣━━━━━┫
┃hell…┃
┃直立…┃
┗━━━━━┛";
    assert_eq!(table.view(), expected);
}

#[test]
fn test_missing_data_indicator() {
    let table = Table::new(vec![
        Column::new("id", "ID", 4),
        Column::new("name", "Name", 4),
    ])
    .with_rows(vec![Row::new().with_cell("id", 1).with_cell("extra", "ignored")]);
    assert!(table.view().contains("┃   1┃    ┃"));
    assert!(!table.view().contains("ignored"));

    let table = table.with_missing_data_indicator("-");
    assert!(table.view().contains("┃   1┃   -┃"));
}

#[test]
fn test_column_format() {
    let table = Table::new(vec![Column::new("pct", "Pct", 6)
        .with_format("{:.1}%")
        .unwrap()])
    .with_rows(vec![Row::new().with_cell("pct", 12.345)]);
    assert!(table.view().contains("┃ 12.3%┃"));
}

#[test]
fn test_column_alignment() {
    let table = Table::new(vec![
        Column::new("l", "L", 4).with_style(Style::new().align(tuitable::TextAlign::Left)),
        Column::new("c", "C", 5).with_style(Style::new().align(tuitable::TextAlign::Center)),
    ])
    .with_rows(vec![Row::new().with_cell("l", "a").with_cell("c", "b")]);
    assert!(table.view().contains("┃L   ┃  C  ┃"));
    assert!(table.view().contains("┃a   ┃  b  ┃"));
}

#[test]
fn test_flex_columns_fill_target_width() {
    let table = Table::new(vec![
        Column::new("id", "ID", 4),
        Column::flex("name", "Name", 1),
    ])
    .with_target_width(20);
    assert_eq!(table.column_widths(), [4, 13]);
    assert_eq!(table.total_width(), 20);
    assert!(table.view().lines().all(|line| display_width(line) == 20));
}

#[test]
fn test_rounded_border() {
    let table = Table::new(vec![Column::new("id", "ID", 4)])
        .with_border(Border::rounded())
        .unwrap();
    assert_eq!(table.view(), "╭────╮\n│  ID│\n╰────╯");
}

#[test]
fn test_invalid_border_glyph() {
    let border = Border {
        top: "━━".to_string(),
        ..Border::default()
    };
    assert!(Table::new(vec![]).with_border(border).is_err());
}

#[test]
fn test_ansi_painter_keeps_layout() {
    let table = three_by_three()
        .focused(true)
        .with_header_style(Style::new().bold())
        .with_border_style(Style::new().foreground(Color::DarkGrey));
    let styled = table.view_with(&AnsiPainter);
    assert!(styled.contains('\x1b'));
    assert_eq!(strip_ansi(&styled), table.view());
}

#[test]
fn test_ansi_painter_plain_style_is_untouched() {
    assert_eq!(AnsiPainter.paint("abc", &Style::default()), "abc");
    let bold = AnsiPainter.paint("abc", &Style::new().bold());
    assert_eq!(strip_ansi(&bold), "abc");
    assert_ne!(bold, "abc");
}

#[test]
fn test_styled_cell_function_sees_metadata() {
    let cell = StyledCell::with_style_func(5, |input| {
        let limit = input
            .metadata
            .get("limit")
            .and_then(|v| v.as_number())
            .unwrap_or(0.0);
        match input.value.as_number() {
            Some(n) if n > limit => Style::new().foreground(Color::Red),
            _ => Style::default(),
        }
    });
    let table = Table::new(vec![Column::new("n", "N", 3)])
        .with_rows(vec![Row::new().with_cell("n", cell)])
        .with_metadata_value("limit", 3);
    let styled = table.view_with(&AnsiPainter);
    assert!(styled.contains('\x1b'));

    let table = table.with_metadata_value("limit", 10);
    assert_eq!(table.view_with(&AnsiPainter), table.view());
}

#[test]
fn test_cell_style_beats_row_and_column() {
    let red = Style::new().foreground(Color::Red);
    let blue = Style::new().foreground(Color::Blue);
    let green = Style::new().foreground(Color::Green);

    let table = Table::new(vec![Column::new("v", "V", 3).with_style(red)]).with_rows(vec![
        Row::new()
            .with_cell("v", StyledCell::new("x", green))
            .with_style(blue),
        Row::new().with_cell("v", "y").with_style(blue),
        Row::new().with_cell("v", "z"),
    ]);
    let styled = table.view_with(&AnsiPainter);

    assert!(styled.contains(&AnsiPainter.paint("  x", &green)));
    assert!(styled.contains(&AnsiPainter.paint("  y", &blue)));
    assert!(styled.contains(&AnsiPainter.paint("  z", &red)));
    assert!(!styled.contains(&AnsiPainter.paint("  x", &blue)));
    assert!(!styled.contains(&AnsiPainter.paint("  x", &red)));
}

#[test]
fn test_row_style_beats_highlight() {
    let highlight = Style::new().background(Color::DarkGrey);
    let row_background = Style::new().background(Color::Blue);

    let table = Table::new(vec![Column::new("v", "V", 3)])
        .with_rows(vec![
            Row::new().with_cell("v", "a").with_style(row_background),
            Row::new().with_cell("v", "b"),
        ])
        .with_highlight_style(highlight)
        .focused(true);
    let styled = table.view_with(&AnsiPainter);
    assert!(styled.contains(&AnsiPainter.paint("  a", &row_background)));
    assert!(!styled.contains(&AnsiPainter.paint("  a", &highlight)));

    // the highlight still applies to rows without their own style
    let styled = table.update(Key::Down).view_with(&AnsiPainter);
    assert!(styled.contains(&AnsiPainter.paint("  b", &highlight)));
    assert!(styled.contains(&AnsiPainter.paint("  a", &row_background)));
}

#[test]
fn test_highlight_beats_column_style() {
    let column = Style::new().background(Color::Red);
    let highlight = Style::new().background(Color::DarkGrey);

    let table = Table::new(vec![Column::new("v", "V", 3).with_style(column)])
        .with_rows(vec![Row::new().with_cell("v", "a")])
        .with_highlight_style(highlight);
    assert!(table.view_with(&AnsiPainter).contains(&AnsiPainter.paint("  a", &column)));

    let styled = table.focused(true).view_with(&AnsiPainter);
    assert!(styled.contains(&AnsiPainter.paint("  a", &highlight)));
}
