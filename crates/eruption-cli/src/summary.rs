//! Terminal tables for layouts, recaps and record history.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eruption_core::{PatientRecord, Quadrant, Recap, SubmissionOutcome, ToothStatus};

pub fn print_layout() {
    let mut table = new_table(vec!["Quadrant", "Teeth"]);
    for quadrant in Quadrant::ALL {
        let teeth: Vec<String> = quadrant.teeth().map(|id| id.to_string()).collect();
        table.add_row(vec![Cell::new(quadrant.label()), Cell::new(teeth.join("  "))]);
    }
    println!("{table}");

    let mut options = new_table(vec!["Keyword", "Status"]);
    for status in ToothStatus::ALL {
        options.add_row(vec![Cell::new(status.keyword()), status_cell(status)]);
    }
    println!("{options}");
}

pub fn print_outcome(outcome: &SubmissionOutcome, export_path: Option<&Path>) {
    println!("{}", outcome.notice());
    println!();
    print_recap(&outcome.recap);
    match export_path {
        Some(path) => println!("Export written: {}", path.display()),
        None => println!(
            "Export available: {} ({})",
            outcome.export.file_name, outcome.export.mime_type
        ),
    }
}

pub fn print_recap(recap: &Recap) {
    println!("{}", recap.patient_line());
    println!("Exam date: {}", recap.exam_date_display());

    if recap.has_rows() {
        let mut table = new_table(vec!["Tooth", "Status"]);
        align_column(&mut table, 0, CellAlignment::Right);
        for row in &recap.rows {
            table.add_row(vec![Cell::new(row.tooth), status_cell(row.status)]);
        }
        println!("{table}");
    }

    if let Some(comments) = &recap.comments {
        println!("Comments: {comments}");
    }
}

pub fn print_history(records: &[PatientRecord]) {
    if records.is_empty() {
        println!("No records");
        return;
    }

    let mut table = new_table(vec!["#", "Name", "Identifier", "Comment", "Saved (UTC)"]);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.name),
            Cell::new(&record.identifier),
            Cell::new(&record.comment),
            Cell::new(&record.created_at).fg(Color::DarkGrey),
        ]);
    }
    println!("{table}");
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: ToothStatus) -> Cell {
    let color = match status {
        ToothStatus::Unset => Color::DarkGrey,
        ToothStatus::NoEruption => Color::Red,
        ToothStatus::PartialEruption => Color::Yellow,
        ToothStatus::CompleteEruption => Color::Green,
    };
    Cell::new(status.label()).fg(color)
}
