use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::logging::redact_value;
use crate::types::RunResult;

/// How many flagged claims the summary lists by name.
const TOP_CANDIDATES: usize = 3;

pub fn print_summary(result: &RunResult) {
    println!("Reference date: {}", result.reference_date);
    match &result.output_path {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: skipped (dry run)"),
    }

    let metrics = &result.metrics;
    let mut totals = Table::new();
    totals.set_header(vec![header_cell("Counter"), header_cell("Claims")]);
    apply_table_style(&mut totals);
    align_column(&mut totals, 1, CellAlignment::Right);
    totals.add_row(vec![Cell::new("From Alpha"), Cell::new(metrics.claims_from_alpha)]);
    totals.add_row(vec![Cell::new("From Beta"), Cell::new(metrics.claims_from_beta)]);
    totals.add_row(vec![
        Cell::new("Total raw records"),
        Cell::new(metrics.total_claims_processed),
    ]);
    totals.add_row(vec![
        Cell::new("Normalized"),
        Cell::new(metrics.normalized_claims),
    ]);
    totals.add_row(vec![
        Cell::new("Dropped at normalization"),
        count_cell(metrics.dropped_records(), comfy_table::Color::Red),
    ]);
    totals.add_row(vec![
        Cell::new("Flagged for resubmission").add_attribute(Attribute::Bold),
        Cell::new(metrics.claims_flagged)
            .fg(comfy_table::Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    totals.add_row(vec![
        Cell::new("Excluded"),
        count_cell(metrics.claims_excluded, comfy_table::Color::Yellow),
    ]);
    println!("{totals}");

    if !metrics.exclusion_reasons.is_empty() {
        let mut reasons = Table::new();
        reasons.set_header(vec![header_cell("Exclusion reason"), header_cell("Claims")]);
        apply_table_style(&mut reasons);
        align_column(&mut reasons, 1, CellAlignment::Right);
        for (reason, count) in &metrics.exclusion_reasons {
            reasons.add_row(vec![Cell::new(reason), Cell::new(count)]);
        }
        println!();
        println!("Exclusions:");
        println!("{reasons}");
    }

    if !result.candidates.is_empty() {
        let mut top = Table::new();
        top.set_header(vec![
            header_cell("Claim"),
            header_cell("Source"),
            header_cell("Patient"),
            header_cell("Reason"),
            header_cell("Recommended action"),
        ]);
        apply_table_style(&mut top);
        for candidate in result.candidates.iter().take(TOP_CANDIDATES) {
            top.add_row(vec![
                Cell::new(candidate.claim_id.as_deref().unwrap_or("-")),
                Cell::new(candidate.source_system),
                Cell::new(redact_value(candidate.patient_id.as_deref().unwrap_or("-"))),
                Cell::new(&candidate.resubmission_reason),
                Cell::new(&candidate.recommended_changes),
            ]);
        }
        println!();
        println!("Top candidates:");
        println!("{top}");
    }

    if !result.dropped_records.is_empty() {
        eprintln!("Dropped records:");
        for message in &result.dropped_records {
            eprintln!("- {message}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: comfy_table::Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(comfy_table::Color::DarkGrey)
    }
}
