use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::driver::RunSummary;
use crate::models::PackageRecord;

/// Print the package table and a one-line summary of the run.
pub fn render(summary: &RunSummary) {
    let total = summary.records.len();
    let missing = summary.missing_licenses();

    println!(
        "\n {} v{}",
        "notice-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Notice: {}\n", summary.output.display());

    if total > 0 {
        println!("{}", build_table(&summary.records));
        println!();
    }

    let missing_str = if missing > 0 {
        missing.to_string().yellow()
    } else {
        missing.to_string().green()
    };
    println!(
        " Packages: {}  Without license file: {}",
        total.to_string().bold(),
        missing_str
    );
}

fn build_table(records: &[PackageRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Package").add_attribute(Attribute::Bold),
            Cell::new("Repository").add_attribute(Attribute::Bold),
            Cell::new("License file").add_attribute(Attribute::Bold),
        ]);

    for (i, record) in records.iter().enumerate() {
        let (license_str, license_color) = if record.has_license_file {
            ("✓ found", Color::Green)
        } else {
            ("⚠ missing", Color::Yellow)
        };

        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&record.name),
            Cell::new(record.display_url().unwrap_or("-")),
            Cell::new(license_str)
                .fg(license_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    table
}
