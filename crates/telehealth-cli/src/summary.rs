use std::collections::BTreeSet;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use telehealth_model::{HistoryEntry, HistorySummary, SeverityLevel, SymptomSeverity};

use crate::types::{ProfileResult, ReshapeResult};

const DISCLAIMER: &str = "Educational use only. Do not self-medicate.";

pub fn print_reshape_summary(result: &ReshapeResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Diseases"), header_cell("Associations")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new(result.diseases), Cell::new(result.pairs)]);
    println!("{table}");
}

pub fn print_symptoms(disease: &str, symptoms: &[String]) {
    if symptoms.is_empty() {
        println!("No symptoms recorded for '{disease}'.");
        return;
    }
    print_name_list(&format!("Symptoms of {disease}"), symptoms.iter());
}

pub fn print_diseases(symptoms: &[String], diseases: &BTreeSet<String>) {
    if diseases.is_empty() {
        println!("No diseases recorded for: {}", symptoms.join(", "));
        return;
    }
    print_name_list("Possible diseases", diseases.iter());
}

pub fn print_search(query: &str, matches: &[String]) {
    if matches.is_empty() {
        println!("No diseases match '{query}'.");
        return;
    }
    print_name_list("Matching diseases", matches.iter());
}

pub fn print_profile(result: &ProfileResult) {
    let profile = &result.profile;
    println!("Disease: {}", profile.disease);
    if profile.symptoms.is_empty() {
        println!("No symptoms recorded.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Symptom"),
            header_cell("Weight"),
            header_cell("Severity"),
        ]);
        apply_profile_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Center);
        for symptom in &profile.symptoms {
            table.add_row(vec![
                Cell::new(&symptom.symptom),
                weight_cell(symptom),
                severity_cell(symptom.level),
            ]);
        }
        println!("{table}");
    }
    if profile.requires_urgent_care() {
        eprintln!("WARNING: severe symptoms detected. Seek immediate medical help.");
    }

    println!();
    println!("Description:");
    println!("  {}", profile.description_or_default());

    println!();
    println!("Precautions:");
    if profile.precautions.is_empty() {
        println!("  -");
    }
    for precaution in &profile.precautions {
        println!("  - {precaution}");
    }

    println!();
    println!("{DISCLAIMER}");
    if let Some(path) = &result.saved_to {
        println!("Saved to history: {}", path.display());
    }
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No history found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Disease"),
        header_cell("Symptoms"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(&entry.disease),
            Cell::new(entry.symptom_count),
        ]);
    }
    println!("{table}");
}

pub fn print_history_summary(summary: &HistorySummary) {
    if summary.is_empty() {
        println!("No data to analyze yet.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Disease"), header_cell("Lookups")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (disease, count) in &summary.counts {
        table.add_row(vec![Cell::new(disease), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_name_list<'a>(title: &str, names: impl Iterator<Item = &'a String>) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(title)]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, name) in names.enumerate() {
        table.add_row(vec![dim_cell(idx + 1), Cell::new(name)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_profile_table_style(table: &mut Table) {
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

fn severity_cell(level: SeverityLevel) -> Cell {
    let cell = Cell::new(level.label()).fg(severity_color(level));
    if level.is_severe() {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn severity_color(level: SeverityLevel) -> Color {
    match level {
        SeverityLevel::Severe => Color::Red,
        SeverityLevel::Moderate => Color::Yellow,
        SeverityLevel::Mild => Color::Green,
    }
}

fn weight_cell(symptom: &SymptomSeverity) -> Cell {
    match symptom.weight {
        Some(weight) => Cell::new(weight),
        None => dim_cell("-"),
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
