use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{Bucket, HourlyRecord, Summary};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn value_cell<T: Display>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value).set_alignment(CellAlignment::Right),
        None => Cell::new("—").add_attribute(Attribute::Dim).set_alignment(CellAlignment::Right),
    }
}

pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.add_row(vec![Cell::new("Total consumption"), value_cell(summary.total_energy)]);
    table.add_row(vec![Cell::new("Total bill"), value_cell(summary.total_bill)]);
    table.add_row(vec![Cell::new("Average price"), value_cell(summary.average_price)]);
    table.add_row(vec![Cell::new("Average temperature"), value_cell(summary.average_temperature)]);
    table
}

/// The four aggregated series side by side, one bucket per row. Price and
/// bill are colored against the period average.
pub fn build_buckets_table(buckets: &[Bucket]) -> Table {
    let summary = Summary::over(buckets);

    let mut table = new_table();
    table.set_header(vec!["Time", "Energy", "Price", "Bill", "Temperature"]);
    for bucket in buckets {
        table.add_row(vec![
            Cell::new(bucket.start.format("%Y-%m-%d %H:%M")),
            Cell::new(bucket.total_energy).set_alignment(CellAlignment::Right),
            Cell::new(bucket.average_price).set_alignment(CellAlignment::Right).fg(
                if Some(bucket.average_price) >= summary.average_price {
                    Color::Red
                } else {
                    Color::Green
                },
            ),
            Cell::new(bucket.total_bill).set_alignment(CellAlignment::Right).fg(
                if Some(bucket.total_bill) >= summary.total_bill {
                    Color::Red
                } else {
                    Color::Green
                },
            ),
            value_cell(bucket.average_temperature),
        ]);
    }
    table
}

pub fn build_records_table(records: &[HourlyRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Energy", "Price", "Bill", "Temperature"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.time.format("%Y-%m-%d %H:%M")),
            Cell::new(record.energy).set_alignment(CellAlignment::Right),
            Cell::new(record.price).set_alignment(CellAlignment::Right),
            Cell::new(record.bill).set_alignment(CellAlignment::Right),
            value_cell(record.temperature),
        ]);
    }
    table
}
