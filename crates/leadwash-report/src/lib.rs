//! Terminal rendering of cleaning statistics.
//!
//! Pure presentation over [`CleanSummary`]: an overview of validity
//! counts, the top dialing codes, and the lead-source distribution.
//! Frequency tables carry a proportional bar column so the distribution
//! reads at a glance.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use leadwash_model::CleanSummary;

/// Dialing codes shown in the frequency table.
const TOP_DDD_LIMIT: usize = 10;

/// Width of the proportional bar column.
const BAR_WIDTH: usize = 24;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Proportional bar for a frequency row.
fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max).min(BAR_WIDTH).max(1);
    "█".repeat(width)
}

/// Overview of validity counts.
pub fn overview_table(summary: &CleanSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Valid"),
        header_cell("Invalid"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Phones"),
        count_cell(summary.valid_phones, Color::Green),
        count_cell(summary.invalid_phones, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Emails"),
        count_cell(summary.valid_emails, Color::Green),
        count_cell(summary.invalid_emails, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Rows").add_attribute(Attribute::Bold),
        Cell::new(summary.retained_rows).add_attribute(Attribute::Bold),
        count_cell(summary.dropped_rows(), Color::Red),
    ]);
    table
}

/// Top dialing codes among retained rows.
pub fn ddd_table(summary: &CleanSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("DDD"),
        header_cell("Leads"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let top = summary.top_ddds(TOP_DDD_LIMIT);
    let max = top.first().map_or(0, |(_, count)| *count);
    for (code, count) in top {
        table.add_row(vec![
            Cell::new(code).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(count),
            Cell::new(bar(count, max)).fg(Color::Green),
        ]);
    }
    table
}

/// Lead-source distribution among retained rows.
pub fn source_table(summary: &CleanSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Leads"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let sources = summary.sources_by_count();
    let max = sources.first().map_or(0, |(_, count)| *count);
    for (source, count) in sources {
        table.add_row(vec![
            Cell::new(source),
            Cell::new(count),
            Cell::new(bar(count, max)).fg(Color::Green),
        ]);
    }
    table
}

/// Print the full report to stdout.
pub fn print_summary(summary: &CleanSummary) {
    println!(
        "Rows: {} loaded, {} retained, {} dropped",
        summary.input_rows,
        summary.retained_rows,
        summary.dropped_rows()
    );
    println!("{}", overview_table(summary));
    if !summary.ddd_counts.is_empty() {
        println!();
        println!("Top dialing codes:");
        println!("{}", ddd_table(summary));
    }
    if !summary.source_counts.is_empty() {
        println!();
        println!("Lead sources:");
        println!("{}", source_table(summary));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> CleanSummary {
        let mut summary = CleanSummary {
            input_rows: 10,
            retained_rows: 8,
            valid_phones: 8,
            invalid_phones: 2,
            valid_emails: 6,
            invalid_emails: 2,
            ..CleanSummary::default()
        };
        summary.ddd_counts.insert("11".to_string(), 5);
        summary.ddd_counts.insert("21".to_string(), 3);
        summary.source_counts.insert("Facebook".to_string(), 6);
        summary.source_counts.insert("Desconhecido".to_string(), 2);
        summary
    }

    #[test]
    fn overview_shows_counts() {
        let rendered = overview_table(&sample_summary()).to_string();
        assert!(rendered.contains("Phones"));
        assert!(rendered.contains('8'));
        assert!(rendered.contains('2'));
    }

    #[test]
    fn ddd_table_orders_by_frequency() {
        let rendered = ddd_table(&sample_summary()).to_string();
        let pos_11 = rendered.find("11").expect("DDD 11 present");
        let pos_21 = rendered.find("21").expect("DDD 21 present");
        assert!(pos_11 < pos_21);
    }

    #[test]
    fn source_table_lists_all_sources() {
        let rendered = source_table(&sample_summary()).to_string();
        assert!(rendered.contains("Facebook"));
        assert!(rendered.contains("Desconhecido"));
    }

    #[test]
    fn bar_scales_with_count() {
        assert_eq!(bar(0, 10), "");
        assert!(bar(1, 10).chars().count() >= 1);
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert!(bar(5, 10).chars().count() < BAR_WIDTH);
    }

    #[test]
    fn rendering_does_not_mutate_the_summary() {
        let summary = sample_summary();
        let before = summary.clone();
        let _ = overview_table(&summary);
        let _ = ddd_table(&summary);
        let _ = source_table(&summary);
        assert_eq!(summary, before);
    }
}
