//! Table rendering for column queries and the standards summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use oed_model::{ColumnSchema, RangeMember, ValueRange};
use oed_standards::VerifySummary;

/// Enumerations longer than this are abbreviated.
const MAX_LISTED_MEMBERS: usize = 6;

pub fn query_table(columns: &[&ColumnSchema]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Field Name"),
        header_cell("Required"),
        header_cell("Blank"),
        header_cell("Data Type"),
        header_cell("SQL Type"),
        header_cell("Default"),
        header_cell("Range"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for column in columns {
        table.add_row(vec![
            Cell::new(column.entity),
            Cell::new(&column.field_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            required_cell(column),
            Cell::new(if column.nullable { "Yes" } else { "No" }),
            optional_cell(column.data_type.map(|t| t.to_string())),
            optional_cell(column.sql_type.clone()),
            optional_cell(column.default.as_ref().map(ToString::to_string)),
            optional_cell(column.effective_range().map(range_summary)),
        ]);
    }
    table
}

pub fn standards_table(summary: &VerifySummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File Type"), header_cell("Columns")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total = 0usize;
    for (entity, count) in &summary.column_counts {
        total += count;
        table.add_row(vec![Cell::new(entity), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Short text form of a range: `[low, high]`, `[start, stop)` or the
/// enumerated members.
pub fn range_summary(range: &ValueRange) -> String {
    match range {
        ValueRange::Interval { low, high } => format!("[{low}, {high}]"),
        ValueRange::HalfOpen { start, stop } => format!("[{start}, {stop})"),
        ValueRange::Discrete(members) => {
            let listed: Vec<String> = members
                .iter()
                .take(MAX_LISTED_MEMBERS)
                .map(|member| match member {
                    RangeMember::Int(code) => code.to_string(),
                    RangeMember::Str(token) => token.clone(),
                })
                .collect();
            if members.len() > MAX_LISTED_MEMBERS {
                format!("{};... ({} values)", listed.join(";"), members.len())
            } else {
                listed.join(";")
            }
        }
    }
}

fn required_cell(column: &ColumnSchema) -> Cell {
    let cell = Cell::new(column.required.as_code());
    if column.required.is_required() {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
