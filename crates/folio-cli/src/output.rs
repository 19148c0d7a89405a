//! Output formatting utilities.

use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Formats a currency amount with thousands separators.
///
/// Whole amounts drop the decimals; fractional amounts keep two.
pub fn format_amount(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };

    // Round to cents first so carries propagate into the whole part.
    let cents = (value.abs() * 100.0).round() as u128;
    let grouped = group_thousands(cents / 100);

    match cents % 100 {
        0 => format!("{sign}{grouped}"),
        frac => format!("{sign}{grouped}.{frac:02}"),
    }
}

fn group_thousands(mut value: u128) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();
    groups.join(",")
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an informational message.
pub fn print_info(message: &str) {
    println!("{} {}", "→".blue(), message);
}
