use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuitable::{
    AnsiPainter, Color, Column, Input, Key, Row, Style, StyledCell, Table, TableEvent, Terminal,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let (width, _) = term.size()?;
    let mut table = build_table().with_target_width(width as usize);
    let mut status = String::from("q to quit, / to filter, space to select");

    loop {
        let frame = format!("{}\n\n{status}", table.view_with(&AnsiPainter));
        term.draw(&frame)?;

        for event in term.poll(Some(Duration::from_millis(250)))? {
            let Ok(input) = Input::try_from(event) else {
                continue;
            };

            if let Input::Key(combo) = input {
                if combo.key == Key::Char('q') && !table.is_filter_input_focused() {
                    return Ok(());
                }
            }

            table = table.update(input);
            for event in table.last_events() {
                status = describe(&table, event);
            }
        }
    }
}

fn describe(table: &Table, event: &TableEvent) -> String {
    match event {
        TableEvent::HighlightedIndexChanged { current, .. } => {
            let name = table
                .highlighted_row()
                .and_then(|r| r.get("name"))
                .map(|c| c.to_string())
                .unwrap_or_default();
            format!("row {current}: {name}")
        }
        TableEvent::RowSelectToggled { .. } => {
            format!("{} rows selected", table.selected_rows().len())
        }
        TableEvent::FilterInputFocused => "filtering, enter to apply".to_string(),
        TableEvent::FilterInputUnfocused => format!("{} rows match", table.total_rows()),
    }
}

fn build_table() -> Table {
    let columns = vec![
        Column::new("id", "#", 4),
        Column::flex("name", "Name", 2).filterable(true),
        Column::new("element", "Element", 10).filterable(true),
        Column::flex("region", "Region", 1),
        Column::new("height", "Height", 8)
            .with_format("{:.1} m")
            .expect("valid format"),
    ];

    let monsters = [
        ("Bulbasaur", "Grass", "Kanto", 0.7),
        ("Charmander", "Fire", "Kanto", 0.6),
        ("Squirtle", "Water", "Kanto", 0.5),
        ("Pikachu", "Electric", "Kanto", 0.4),
        ("Chikorita", "Grass", "Johto", 0.9),
        ("Cyndaquil", "Fire", "Johto", 0.5),
        ("Totodile", "Water", "Johto", 0.6),
        ("Treecko", "Grass", "Hoenn", 0.5),
        ("Torchic", "Fire", "Hoenn", 0.4),
        ("Mudkip", "Water", "Hoenn", 0.4),
    ];

    let rows = monsters
        .iter()
        .enumerate()
        .map(|(i, (name, element, region, height))| {
            let color = match *element {
                "Fire" => Color::hex(0xF64C2F),
                "Water" => Color::hex(0x44A0E5),
                "Grass" => Color::hex(0x78C850),
                _ => Color::hex(0xF8D030),
            };
            Row::new()
                .with_cell("id", i + 1)
                .with_cell("name", *name)
                .with_cell("element", StyledCell::new(*element, Style::new().foreground(color)))
                .with_cell("region", *region)
                .with_cell("height", *height)
        })
        .collect();

    Table::new(columns)
        .with_rows(rows)
        .with_page_size(6)
        .filtered(true)
        .selectable_rows(true)
        .focused(true)
        .sort_by_asc("element")
        .then_sort_by_asc("name")
        .with_header_style(Style::new().bold().foreground(Color::Cyan))
        .with_border_style(Style::new().foreground(Color::DarkGrey))
}
