//! Output formatting utilities for CLI commands

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use intake_db::Customer;

/// Placeholder for NULL values in console output.
pub const MISSING: &str = "-";

/// Build a table with cyan headers.
pub fn build_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Print a table with headers and rows
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    println!("{}", build_table(headers, rows));
}

/// One dump line for a stored customer.
///
/// NULL fields print as `-` rather than a raw null marker, so a missing
/// value is never mistaken for text a user typed.
pub fn dump_line(customer: &Customer) -> String {
    let show = |value: &Option<String>| value.as_deref().unwrap_or(MISSING).to_string();
    format!(
        "Name: {}, Birthday: {}, Email: {}, Phone: {}, Address: {}, Preferred Contact: {}, Created At: {}",
        customer.name,
        show(&customer.birthday),
        show(&customer.email),
        show(&customer.phone),
        show(&customer.address),
        show(&customer.preferred_contact),
        show(&customer.created_at),
    )
}
