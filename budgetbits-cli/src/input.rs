//! Input parsing and normalization helpers
//!
//! These mirror the conventions the stored data already follows: whole
//! currency units with optional comma grouping, and title-cased names.

use budgetbits_core::{DomainResult, Error};
use regex::Regex;

/// Parse a user-entered amount in whole currency units
///
/// Accepts plain digits ("3500") and strict comma grouping ("3,500").
/// Signs, decimals, and misplaced commas are rejected.
pub fn parse_amount(raw: &str) -> DomainResult<i64> {
    let trimmed = raw.trim();
    let pattern = Regex::new(r"^(\d+|\d{1,3}(,\d{3})+)$").unwrap();
    if !pattern.is_match(trimmed) {
        return Err(Error::invalid_amount(format!(
            "'{}' is not a valid amount; use digits with optional comma grouping, e.g. 1,500",
            trimmed
        )));
    }

    let digits: String = trimmed.chars().filter(|c| *c != ',').collect();
    let amount: i64 = digits
        .parse()
        .map_err(|_| Error::invalid_amount(format!("'{}' is out of range", trimmed)))?;
    if amount <= 0 {
        return Err(Error::invalid_amount("amount must be greater than zero"));
    }

    Ok(amount)
}

/// Normalize a person or category name to title case
///
/// "robert lewandowski" becomes "Robert Lewandowski"; runs of whitespace
/// collapse to single spaces. Empty input is rejected.
pub fn normalize_name(raw: &str) -> DomainResult<String> {
    let normalized = raw
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.is_empty() {
        return Err(Error::invalid_input("name cannot be empty"));
    }
    Ok(normalized)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_plain_and_grouped_digits() {
        assert_eq!(parse_amount("3500").unwrap(), 3500);
        assert_eq!(parse_amount("3,500").unwrap(), 3500);
        assert_eq!(parse_amount("1,234,567").unwrap(), 1234567);
        assert_eq!(parse_amount(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_amount_rejects_bad_shapes() {
        for bad in ["", "abc", "-5", "+5", "3.50", "35,00", "1,23,456", ",500", "3500,"] {
            assert!(
                parse_amount(bad).is_err(),
                "'{}' should not parse as an amount",
                bad
            );
        }
    }

    #[test]
    fn test_parse_amount_rejects_zero() {
        let err = parse_amount("0").unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
    }

    #[test]
    fn test_normalize_name_title_cases_each_word() {
        assert_eq!(
            normalize_name("robert lewandowski").unwrap(),
            "Robert Lewandowski"
        );
        assert_eq!(normalize_name("MARIA").unwrap(), "Maria");
        assert_eq!(normalize_name("  dela   cruz  ").unwrap(), "Dela Cruz");
    }

    #[test]
    fn test_normalize_name_rejects_blank_input() {
        assert!(normalize_name("").is_err());
        assert!(normalize_name("   ").is_err());
    }
}
