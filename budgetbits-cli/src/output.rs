//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format an amount with the currency symbol and thousands grouping
pub fn format_amount(symbol: &str, amount: i64) -> String {
    if amount < 0 {
        format!("-{}{}", symbol, group_thousands(amount.unsigned_abs()))
    } else {
        format!("{}{}", symbol, group_thousands(amount.unsigned_abs()))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount("₱", 0), "₱0");
        assert_eq!(format_amount("₱", 500), "₱500");
        assert_eq!(format_amount("₱", 3500), "₱3,500");
        assert_eq!(format_amount("$", 1234567), "$1,234,567");
    }

    #[test]
    fn test_format_amount_keeps_the_sign_outside_the_symbol() {
        assert_eq!(format_amount("₱", -500), "-₱500");
        assert_eq!(format_amount("₱", -1000), "-₱1,000");
    }
}
