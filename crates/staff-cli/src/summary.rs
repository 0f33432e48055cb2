use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use staff_output::format_hour;

use crate::types::RunReport;

/// Prints the run summary, and the skipped rows if any, to stderr.
pub fn print_summary(report: &RunReport) {
    eprintln!("{}", summary_table(report));
    if !report.skipped.is_empty() {
        eprintln!("{}", skipped_table(report));
    }
}

fn summary_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);

    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(report.input.display()),
    ]);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(report.rows_read)]);
    table.add_row(vec![Cell::new("Records accepted"), Cell::new(report.accepted)]);
    table.add_row(vec![
        Cell::new("Rows skipped"),
        count_cell(report.skipped.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Utilization"),
        utilization_cell(report.utilization, report.effective_utilization),
    ]);
    match report.peak {
        Some((hour, agents)) => {
            table.add_row(vec![Cell::new("Peak hour"), Cell::new(format_hour(hour))]);
            table.add_row(vec![
                Cell::new("Peak agents"),
                Cell::new(agents).add_attribute(Attribute::Bold),
            ]);
        }
        None => {
            table.add_row(vec![Cell::new("Peak hour"), dim_cell("-")]);
            table.add_row(vec![Cell::new("Peak agents"), dim_cell(0)]);
        }
    }
    table.add_row(vec![Cell::new("Agent-hours"), Cell::new(report.agent_hours)]);
    if let Some(path) = &report.csv_path {
        table.add_row(vec![Cell::new("CSV output"), Cell::new(path.display())]);
    }
    table.add_row(vec![
        Cell::new("Elapsed"),
        dim_cell(format!("{} ms", report.elapsed.as_millis())),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

fn skipped_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for diagnostic in &report.skipped {
        table.add_row(vec![
            Cell::new(diagnostic.row_index),
            Cell::new(&diagnostic.error).fg(Color::Yellow),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn utilization_cell(configured: f64, effective: f64) -> Cell {
    if configured == effective {
        Cell::new(format!("{configured:.2}"))
    } else {
        Cell::new(format!("{configured:.2} (using {effective:.2})")).fg(Color::Yellow)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
