//! Expense ledger domain model

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single recorded spend: the amount and a free-form note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub amount: i64,
    pub notes: String,
}

/// One flattened ledger line, for listings and CSV export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRow {
    pub category: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub notes: String,
}

/// Categorized expense history
///
/// Two levels of mapping (category, then day) ending in the entries recorded
/// on that day. Every level keeps insertion order, so listings replay the
/// exact order expenses were recorded in. Serializes to
/// `{"Food": {"2026-08-01": [{"amount": 500, "notes": "lunch"}]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    categories: IndexMap<String, IndexMap<NaiveDate, Vec<ExpenseEntry>>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under `category`/`date`, creating both levels as needed
    pub fn record(&mut self, category: &str, date: NaiveDate, entry: ExpenseEntry) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .entry(date)
            .or_default()
            .push(entry);
    }

    /// True when nothing has ever been recorded
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Total number of recorded entries across all categories and days
    pub fn entry_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|days| days.values())
            .map(|entries| entries.len())
            .sum()
    }

    /// Sum of all recorded amounts
    pub fn total(&self) -> i64 {
        self.categories
            .values()
            .flat_map(|days| days.values())
            .flatten()
            .map(|entry| entry.amount)
            .sum()
    }

    /// Flatten to rows: categories, then days within a category, then entries
    /// within a day, all in recorded order
    pub fn rows(&self) -> Vec<ExpenseRow> {
        let mut rows = Vec::with_capacity(self.entry_count());
        for (category, days) in &self.categories {
            for (date, entries) in days {
                for entry in entries {
                    rows.push(ExpenseRow {
                        category: category.clone(),
                        date: *date,
                        amount: entry.amount,
                        notes: entry.notes.clone(),
                    });
                }
            }
        }
        rows
    }

    /// Entries recorded under `category` on `date`, in append order
    pub fn entries(&self, category: &str, date: NaiveDate) -> Option<&[ExpenseEntry]> {
        self.categories
            .get(category)
            .and_then(|days| days.get(&date))
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn entry(amount: i64, notes: &str) -> ExpenseEntry {
        ExpenseEntry {
            amount,
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_record_creates_intermediate_containers() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger.record("Food", day(16), entry(500, "lunch"));

        assert!(!ledger.is_empty());
        assert_eq!(ledger.entry_count(), 1);
        assert_eq!(ledger.entries("Food", day(16)).unwrap().len(), 1);
    }

    #[test]
    fn test_same_day_entries_accumulate_in_append_order() {
        let mut ledger = Ledger::new();
        ledger.record("Food", day(16), entry(500, "lunch"));
        ledger.record("Food", day(16), entry(120, "coffee"));
        ledger.record("Food", day(16), entry(60, "candy"));

        let entries = ledger.entries("Food", day(16)).unwrap();
        let notes: Vec<&str> = entries.iter().map(|e| e.notes.as_str()).collect();
        assert_eq!(notes, ["lunch", "coffee", "candy"]);
    }

    #[test]
    fn test_rows_follow_insertion_order_across_levels() {
        let mut ledger = Ledger::new();
        ledger.record("Transport", day(2), entry(45, "bus"));
        ledger.record("Food", day(1), entry(500, "groceries"));
        ledger.record("Transport", day(1), entry(200, "fuel"));
        ledger.record("Food", day(3), entry(80, "snacks"));

        let rows = ledger.rows();
        let flattened: Vec<(String, NaiveDate, i64)> = rows
            .iter()
            .map(|r| (r.category.clone(), r.date, r.amount))
            .collect();

        // Transport was recorded first, so it lists first; within Transport
        // the day-2 bucket predates the day-1 bucket
        assert_eq!(
            flattened,
            [
                ("Transport".to_string(), day(2), 45),
                ("Transport".to_string(), day(1), 200),
                ("Food".to_string(), day(1), 500),
                ("Food".to_string(), day(3), 80),
            ]
        );
    }

    #[test]
    fn test_total_sums_all_entries() {
        let mut ledger = Ledger::new();
        ledger.record("Food", day(1), entry(500, ""));
        ledger.record("Food", day(2), entry(250, ""));
        ledger.record("Bills", day(5), entry(1000, ""));

        assert_eq!(ledger.total(), 1750);
        assert_eq!(ledger.entry_count(), 3);
    }

    #[test]
    fn test_serialized_shape() {
        let mut ledger = Ledger::new();
        ledger.record("Food", day(1), entry(500, "lunch"));

        let value = serde_json::to_value(&ledger).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Food": {
                    "2026-08-01": [{"amount": 500, "notes": "lunch"}]
                }
            })
        );

        let restored: Ledger = serde_json::from_value(value).unwrap();
        assert_eq!(restored, ledger);
    }
}
