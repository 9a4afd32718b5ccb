use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use finpivot_cli::types::{ConsolidationResult, PivotResult};
use finpivot_model::{ColumnGroups, SlotFamily};

pub fn print_consolidation(result: &ConsolidationResult) {
    if result.dry_run {
        println!("Dry run: no files written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    if let Some(path) = &result.consolidated {
        println!("Consolidated: {}", path.display());
    }
    if let Some(path) = &result.pivoted {
        println!("Pivoted: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, rows) in &result.summary.rows_by_type {
        table.add_row(vec![Cell::new(label), Cell::new(rows)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.summary.total_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let mut details = Table::new();
    apply_table_style(&mut details);
    details.add_row(vec![
        Cell::new("Distinct cost centers"),
        optional_cell(result.summary.distinct_cost_centers),
    ]);
    details.add_row(vec![
        Cell::new("Ratios capped at paid"),
        count_cell(result.corrected_ratios, Color::Yellow),
    ]);
    details.add_row(vec![
        Cell::new("Date columns normalized"),
        Cell::new(result.normalized_date_columns.len()),
    ]);
    details.add_row(vec![Cell::new("Pivoted rows"), optional_cell(result.pivot_rows)]);
    align_column(&mut details, 1, CellAlignment::Right);
    println!("{details}");
}

pub fn print_pivot(result: &PivotResult) {
    println!("Input: {}", result.input.display());
    match (&result.output, result.output_rows) {
        (Some(path), Some(rows)) => {
            println!("Output: {}", path.display());
            println!("Rows: {} -> {rows}", result.source_rows);
        }
        _ => println!(
            "Nothing to pivot: {} label columns, {} value columns",
            result.groups.label_columns.len(),
            result.groups.value_columns.len()
        ),
    }
}

pub fn print_columns(groups: &ColumnGroups) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Role")]);
    apply_table_style(&mut table);
    for family in [SlotFamily::Label, SlotFamily::Value] {
        for name in groups.columns(family) {
            table.add_row(vec![Cell::new(name), role_cell(&family.to_string())]);
        }
    }
    for name in &groups.identity_columns {
        table.add_row(vec![Cell::new(name), dim_cell("identity")]);
    }
    println!("{table}");
    if !groups.is_pivotable() {
        println!("Not pivotable: label and value columns are both required");
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn role_cell(role: &str) -> Cell {
    Cell::new(role).fg(Color::Green)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<usize>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
