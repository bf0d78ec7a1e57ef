use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vigila_map::SynonymTable;
use vigila_model::CanonicalField;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Consolidated: {}", result.outputs.consolidated.display());
    println!("Summary:      {}", result.outputs.summary.display());

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Sources merged"), Cell::new(report.sources)]);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(report.rows_read)]);
    table.add_row(vec![
        Cell::new("Dropped: missing identifier"),
        drop_cell(report.rows_missing_identifier),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: identifier without digits"),
        drop_cell(report.rows_invalid_identifier),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: unparsable date"),
        drop_cell(report.rows_invalid_date),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: suspected classification"),
        drop_cell(report.rows_suspected),
    ]);
    table.add_row(vec![Cell::new("Episodes"), Cell::new(report.episodes)]);
    table.add_row(vec![
        Cell::new("Consolidated cases")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.consolidated).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.summary.is_empty() {
        return;
    }
    let mut events = Table::new();
    events.set_header(vec![header_cell("Event"), header_cell("Cases")]);
    apply_table_style(&mut events);
    align_column(&mut events, 1, CellAlignment::Right);
    for entry in &result.summary {
        let code = if entry.event_code.is_empty() {
            Cell::new("(no event code)").fg(Color::DarkGrey)
        } else {
            Cell::new(&entry.event_code)
        };
        events.add_row(vec![code, Cell::new(entry.count)]);
    }
    println!();
    println!("Cases per event:");
    println!("{events}");
}

pub fn print_fields_table(synonyms: &SynonymTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Required"),
        header_cell("Accepted synonyms"),
    ]);
    apply_table_style(&mut table);
    for field in CanonicalField::ALL {
        let accepted = synonyms
            .synonyms_for(field)
            .map_or_else(|| "-".to_string(), |list| list.join(", "));
        table.add_row(vec![
            Cell::new(field.description()),
            Cell::new(field.column_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(if field.is_required() { "yes" } else { "no" }),
            Cell::new(accepted),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn drop_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
