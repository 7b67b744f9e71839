use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use osm_audit::AuditReport;
use osm_core::LoadSummary;
use osm_normalize::{RULE_TABLE, Rule};

pub fn print_load_summary(summary: &LoadSummary) {
    println!("Output: {}", summary.sink.destination);
    println!("{}", load_summary_table(summary));
}

pub fn load_summary_table(summary: &LoadSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    let read = &summary.read;
    let build = &summary.build;
    let rows: [(&str, &str, usize, Option<Color>); 9] = [
        ("Read", "Nodes and ways", read.elements, None),
        ("Read", "Skipped elements", read.skipped, None),
        ("Read", "Tags", read.tags, None),
        ("Build", "Fields written", build.fields, None),
        ("Build", "Dropped keys", build.dropped_keys, Some(Color::Yellow)),
        ("Build", "Reserved keys", build.reserved_keys, Some(Color::Yellow)),
        ("Build", "Collisions", build.collisions, Some(Color::Yellow)),
        ("Build", "Overwrites", build.overwrites, Some(Color::Yellow)),
        ("Build", "Malformed values", build.malformed_values, Some(Color::Red)),
    ];
    for (stage, metric, count, color) in rows {
        table.add_row(vec![stage_cell(stage), Cell::new(metric), count_cell(count, color)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("Records written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.sink.records).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_audit_report(report: &AuditReport) {
    println!("{}", report.title);
    if report.is_empty() {
        println!("No findings.");
        return;
    }
    println!("{}", audit_table(report));
}

pub fn audit_table(report: &AuditReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(report.headers[0]), header_cell(report.headers[1])]);
    apply_table_style(&mut table);
    for (label, value) in &report.rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

/// One row per keyed rule.
pub fn rules_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Rule"), header_cell("Corrections")]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (key, rule) in RULE_TABLE {
        let corrections = match rule.corrections() {
            Some(pairs) => Cell::new(pairs.len()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(*key).add_attribute(Attribute::Bold),
            Cell::new(rule.describe()),
            corrections,
        ]);
    }
    table
}

/// Every correction pair, grouped by key.
pub fn corrections_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("From"), header_cell("To")]);
    apply_table_style(&mut table);
    for (key, rule) in RULE_TABLE {
        let pairs = match rule {
            Rule::StreetSuffix => osm_normalize::tables::STREET_SUFFIXES,
            _ => rule.corrections().unwrap_or_default(),
        };
        for (from, to) in pairs {
            table.add_row(vec![Cell::new(*key), Cell::new(*from), Cell::new(*to)]);
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
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

fn stage_cell(stage: &str) -> Cell {
    Cell::new(stage)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, highlight: Option<Color>) -> Cell {
    match highlight {
        Some(color) if count > 0 => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        Some(_) => dim_cell(count),
        None => Cell::new(count),
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
