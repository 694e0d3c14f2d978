use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scout_model::{BuyerCard, SourceStatus};

use scout_match::SearchOutcome;

pub fn print_search_summary(outcome: &SearchOutcome) {
    print_source_statuses(&outcome.statuses);
    println!();
    if outcome.buyers.is_empty() {
        println!(
            "No results ({} records considered, {} matched). Try a different industry or add an HS code.",
            outcome.considered, outcome.matched
        );
        return;
    }
    println!(
        "{} buyer candidates ({} records considered, {} above threshold)",
        outcome.buyers.len(),
        outcome.considered,
        outcome.matched
    );
    print_buyers(&outcome.buyers);
}

pub fn print_source_statuses(statuses: &[SourceStatus]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Cols"),
        header_cell("Encoding"),
        header_cell("Delim"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);
    for status in statuses {
        match status {
            SourceStatus::Loaded {
                source,
                path,
                rows,
                columns,
                encoding,
                delimiter,
            } => {
                table.add_row(vec![
                    Cell::new(source),
                    Cell::new("loaded")
                        .fg(Color::Green)
                        .add_attribute(Attribute::Bold),
                    Cell::new(rows),
                    Cell::new(columns),
                    Cell::new(encoding),
                    Cell::new(printable_delimiter(*delimiter)),
                    dim_cell(path.display()),
                ]);
            }
            SourceStatus::Missing { source, detail } => {
                table.add_row(vec![
                    Cell::new(source),
                    Cell::new("missing").fg(Color::Yellow),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(detail),
                ]);
            }
            SourceStatus::Failed { source, message } => {
                table.add_row(vec![
                    Cell::new(source),
                    Cell::new("failed")
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(message),
                ]);
            }
        }
    }
    println!("{table}");
}

fn print_buyers(buyers: &[BuyerCard]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Company"),
        header_cell("Domain"),
        header_cell("Email"),
        header_cell("Contact"),
        header_cell("Country"),
        header_cell("Product"),
        header_cell("HS"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, buyer) in buyers.iter().enumerate() {
        let contact_badge = if buyer.has_contact() {
            Cell::new(&buyer.contact_person).fg(Color::Green)
        } else {
            dim_cell(&buyer.contact_person)
        };
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&buyer.company_name).add_attribute(Attribute::Bold),
            Cell::new(&buyer.domain),
            email_cell(buyer),
            contact_badge,
            Cell::new(&buyer.raw_country),
            Cell::new(truncate(&buyer.raw_product_text, 40)),
            Cell::new(&buyer.raw_hs),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn email_cell(buyer: &BuyerCard) -> Cell {
    if buyer.email.is_empty() {
        dim_cell("-")
    } else if buyer.has_email() {
        Cell::new(&buyer.email)
    } else {
        dim_cell(&buyer.email)
    }
}

fn printable_delimiter(delimiter: char) -> String {
    match delimiter {
        '\t' => "\\t".to_string(),
        other => other.to_string(),
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let head: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{head}…")
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
