//! Terminal rendering of command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rahnuma_model::University;
use rahnuma_report::AnalyticsReport;

use crate::types::{FeeQuote, OverviewResult, ProgramRow, SearchResult};

pub fn print_search(result: &SearchResult) {
    println!("Found {} matching programs", result.count);
    if result.programs.is_empty() {
        println!("No programs match the current filters.");
        return;
    }
    println!("{}", program_table(&result.programs));
}

pub fn print_overview(result: &OverviewResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Universities"),
        header_cell("Programs"),
        header_cell("Matches"),
        header_cell("Saved"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.metrics.universities),
        Cell::new(result.metrics.programs),
        Cell::new(result.metrics.matches),
        Cell::new(result.metrics.saved),
    ]);
    println!("{table}");

    if result.featured.is_empty() {
        println!("No programs match the current filters.");
        return;
    }
    println!();
    println!("Featured programs:");
    println!("{}", program_table(&result.featured));
}

pub fn print_fee_quote(quote: &FeeQuote) {
    println!(
        "{} at {} ({})",
        quote.program.program, quote.program.university, quote.website
    );
    let cost = &quote.cost;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Amount (PKR)")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Tuition (per year)"), money_cell(cost.tuition_fee)]);
    table.add_row(vec![Cell::new("Hostel (per year)"), money_cell(cost.hostel_fee)]);
    table.add_row(vec![Cell::new("Books (per year)"), money_cell(cost.books)]);
    table.add_row(vec![Cell::new("Transport (per year)"), money_cell(cost.transport)]);
    table.add_row(vec![Cell::new("Miscellaneous (per year)"), money_cell(cost.misc)]);
    table.add_row(vec![Cell::new("Admission (one-time)"), money_cell(cost.admission_fee)]);
    table.add_row(vec![
        Cell::new("Annual cost")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        money_cell(cost.annual_cost).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(format!("Total for {} years", cost.duration_years))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        money_cell(cost.total_cost).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_universities(universities: &[University]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("City"),
        header_cell("Website"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for university in universities {
        table.add_row(vec![
            Cell::new(university.id),
            Cell::new(&university.name),
            Cell::new(university.university_type),
            Cell::new(&university.city),
            dim_cell(&university.website),
        ]);
    }
    println!("{table}");
}

pub fn print_analytics(report: &AnalyticsReport) {
    println!("Universities by type:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Universities")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (university_type, count) in &report.university_type_counts {
        table.add_row(vec![Cell::new(university_type), Cell::new(count)]);
    }
    println!("{table}");

    println!();
    println!("Average tuition by university (ascending):");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("University"),
        header_cell("Average tuition (PKR)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &report.average_tuition_by_university {
        table.add_row(vec![
            Cell::new(&entry.university_name),
            money_cell(entry.average_tuition.round() as u64),
        ]);
    }
    println!("{table}");

    println!();
    println!("Programs by city:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("City"), header_cell("Programs")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (city, count) in &report.programs_by_city {
        table.add_row(vec![Cell::new(city), Cell::new(count)]);
    }
    println!("{table}");

    println!();
    println!("Tuition distribution:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tuition range (PKR)"),
        header_cell("Programs"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bin in &report.tuition_histogram {
        let range = format!("{} - {}", format_rupees(bin.lower), format_rupees(bin.upper));
        let count = if bin.count == 0 {
            dim_cell(bin.count)
        } else {
            Cell::new(bin.count)
        };
        table.add_row(vec![Cell::new(range), count]);
    }
    println!("{table}");
}

fn program_table(programs: &[ProgramRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Program"),
        header_cell("University"),
        header_cell("City"),
        header_cell("Degree"),
        header_cell("Years"),
        header_cell("Tuition (PKR)"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for row in programs {
        table.add_row(vec![
            Cell::new(row.program_id),
            Cell::new(&row.program)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&row.university),
            Cell::new(&row.city),
            Cell::new(&row.degree),
            Cell::new(row.duration_years),
            money_cell(row.tuition_fee),
            Cell::new(row.min_percentage),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
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
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn money_cell(amount: u64) -> Cell {
    Cell::new(format_rupees(amount)).fg(Color::Green)
}

/// Render a rupee amount with comma-separated thousands groups.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::format_rupees;

    #[test]
    fn rupee_amounts_group_thousands() {
        assert_eq!(format_rupees(0), "0");
        assert_eq!(format_rupees(999), "999");
        assert_eq!(format_rupees(1_000), "1,000");
        assert_eq!(format_rupees(120_000), "120,000");
        assert_eq!(format_rupees(1_234_567), "1,234,567");
    }
}
