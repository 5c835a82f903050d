use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Dataset: {}", result.dataset.display());
    if let Some(path) = &result.audit_log {
        println!("Audit log: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![Cell::new("Participants"), Cell::new(result.participants)]);
    table.add_row(vec![Cell::new("Unique ids"), Cell::new(result.unique_ids)]);
    table.add_row(vec![
        Cell::new("Documents rendered"),
        Cell::new(result.rendered),
    ]);
    table.add_row(vec![Cell::new("Delivered"), Cell::new(result.delivered)]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
