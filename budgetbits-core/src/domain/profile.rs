//! Budget profile domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::ledger::{ExpenseEntry, ExpenseRow, Ledger};
use crate::domain::result::{Error, Result};
use crate::domain::rollover::RolloverPolicy;

/// The balance floor no expense may cross
///
/// A recorded expense has to leave at least this much behind, so a budget
/// can never be spent down to exactly zero.
pub const MIN_REMAINING_BALANCE: i64 = 1;

/// Per-user financial record: identity, monthly budget, running balance,
/// and the categorized expense history
///
/// Amounts are whole minor currency units. `remaining_balance` only ever
/// moves through `record_expense` and `rollover`; it is never re-derived
/// from the ledger, so the two drifting apart indicates a bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProfile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub monthly_budget: i64,
    pub expenses: Ledger,
    pub remaining_balance: i64,
    /// Last calendar day a mutation touched this profile. Rollover policies
    /// compare it against today.
    pub date: NaiveDate,
}

impl BudgetProfile {
    /// Create a fresh profile with a full balance and an empty ledger
    pub fn new(
        username: &str,
        first_name: &str,
        last_name: &str,
        monthly_budget: i64,
        today: NaiveDate,
    ) -> Result<Self> {
        let profile = Self {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            monthly_budget,
            expenses: Ledger::new(),
            remaining_balance: monthly_budget,
            date: today,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Rehydrate a persisted record, re-running all field validation
    ///
    /// A stored record that violates an invariant fails to load instead of
    /// being silently coerced.
    pub fn from_record(record: JsonValue) -> Result<Self> {
        let profile: Self = serde_json::from_value(record)
            .map_err(|e| Error::invalid_field(format!("malformed profile record: {}", e)))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Field-level invariants, applied at construction and on load
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::invalid_field("username cannot be empty"));
        }
        if self.first_name.trim().is_empty() {
            return Err(Error::invalid_field("first name cannot be empty"));
        }
        if self.last_name.trim().is_empty() {
            return Err(Error::invalid_field("last name cannot be empty"));
        }
        if self.monthly_budget <= 0 {
            return Err(Error::invalid_field("monthly budget must be positive"));
        }
        if self.remaining_balance < MIN_REMAINING_BALANCE {
            return Err(Error::invalid_field("remaining balance must be positive"));
        }
        Ok(())
    }

    /// Record one expense under a category for the given day
    ///
    /// Validation happens before any field changes: a bad amount or a breach
    /// of the balance floor leaves the profile untouched. On success the
    /// entry is appended at `expenses[category][today]` and the updated
    /// profile is returned for the caller to persist.
    pub fn record_expense(
        &mut self,
        category: &str,
        amount: i64,
        notes: &str,
        today: NaiveDate,
    ) -> Result<BudgetProfile> {
        if amount <= 0 {
            return Err(Error::invalid_amount(format!(
                "expense amount must be positive, got {}",
                amount
            )));
        }
        let balance_after = self
            .remaining_balance
            .checked_sub(amount)
            .ok_or_else(|| Error::invalid_amount("expense amount is out of range"))?;
        if balance_after < MIN_REMAINING_BALANCE {
            return Err(Error::BudgetExceeded {
                amount,
                remaining: self.remaining_balance,
            });
        }

        self.remaining_balance = balance_after;
        self.expenses.record(
            category,
            today,
            ExpenseEntry {
                amount,
                notes: notes.to_string(),
            },
        );
        self.date = today;
        Ok(self.clone())
    }

    /// Apply the monthly rollover if the policy says it is due
    ///
    /// Returns `Ok(None)` on a quiet day. When due, both the budget and the
    /// balance reset to `new_budget`; the ledger is kept so history spans
    /// months.
    pub fn rollover(
        &mut self,
        new_budget: i64,
        today: NaiveDate,
        policy: &dyn RolloverPolicy,
    ) -> Result<Option<BudgetProfile>> {
        if !policy.should_rollover(today, self.date) {
            return Ok(None);
        }
        if new_budget <= 0 {
            return Err(Error::invalid_amount(format!(
                "new monthly budget must be positive, got {}",
                new_budget
            )));
        }

        self.monthly_budget = new_budget;
        self.remaining_balance = new_budget;
        self.date = today;
        Ok(Some(self.clone()))
    }

    /// Read-only monthly overview; calling it never changes the profile
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            username: self.username.clone(),
            full_name: self.full_name(),
            month: self.date.format("%B").to_string(),
            monthly_budget: self.monthly_budget,
            total_spent: self.total_spent(),
            remaining_balance: self.remaining_balance,
        }
    }

    /// Flatten the ledger for display
    ///
    /// `None` means nothing has ever been recorded, which callers report
    /// differently from a listing that happens to be short.
    pub fn expense_rows(&self) -> Option<Vec<ExpenseRow>> {
        if self.expenses.is_empty() {
            None
        } else {
            Some(self.expenses.rows())
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Spent so far this month, derived from the two balance figures
    pub fn total_spent(&self) -> i64 {
        self.monthly_budget - self.remaining_balance
    }
}

/// Monthly overview projection of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub username: String,
    pub full_name: String,
    pub month: String,
    pub monthly_budget: i64,
    pub total_spent: i64,
    pub remaining_balance: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rollover::{Always, FirstOfMonth, Never};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn profile(budget: i64) -> BudgetProfile {
        BudgetProfile::new("liza", "Liza", "Reyes", budget, day(16)).unwrap()
    }

    #[test]
    fn test_new_profile_starts_with_full_balance() {
        let p = profile(3000);
        assert_eq!(p.monthly_budget, 3000);
        assert_eq!(p.remaining_balance, 3000);
        assert!(p.expenses.is_empty());
        assert_eq!(p.date, day(16));
        assert_eq!(p.full_name(), "Liza Reyes");
    }

    #[test]
    fn test_construction_validates_fields() {
        let cases = [
            BudgetProfile::new("", "Liza", "Reyes", 3000, day(1)),
            BudgetProfile::new("liza", "  ", "Reyes", 3000, day(1)),
            BudgetProfile::new("liza", "Liza", "\t", 3000, day(1)),
            BudgetProfile::new("liza", "Liza", "Reyes", 0, day(1)),
            BudgetProfile::new("liza", "Liza", "Reyes", -50, day(1)),
        ];
        for result in cases {
            assert!(matches!(result.unwrap_err(), Error::InvalidField(_)));
        }
    }

    #[test]
    fn test_record_expense_decrements_and_appends() {
        let mut p = profile(3000);
        let snapshot = p.record_expense("Food", 500, "lunch", day(16)).unwrap();

        assert_eq!(snapshot.remaining_balance, 2500);
        assert_eq!(p.remaining_balance, 2500);
        assert_eq!(snapshot, p, "the snapshot mirrors the mutated profile");

        let entries = p.expenses.entries("Food", day(16)).unwrap();
        assert_eq!(entries.last().unwrap().amount, 500);
        assert_eq!(entries.last().unwrap().notes, "lunch");
    }

    #[test]
    fn test_record_expense_rejects_non_positive_amounts() {
        let mut p = profile(3000);
        for amount in [0, -1, -500] {
            let err = p.record_expense("Food", amount, "", day(16)).unwrap_err();
            assert!(matches!(err, Error::InvalidAmount(_)));
        }
        assert_eq!(p.remaining_balance, 3000);
        assert!(p.expenses.is_empty());
    }

    #[test]
    fn test_spending_to_exactly_zero_is_rejected() {
        let mut p = profile(3000);
        p.record_expense("Food", 500, "lunch", day(16)).unwrap();

        // 2500 - 2500 = 0, which crosses the balance floor
        let err = p.record_expense("Food", 2500, "", day(16)).unwrap_err();
        assert!(matches!(
            err,
            Error::BudgetExceeded {
                amount: 2500,
                remaining: 2500
            }
        ));

        // No partial mutation
        assert_eq!(p.remaining_balance, 2500);
        assert_eq!(p.expenses.entry_count(), 1);
    }

    #[test]
    fn test_spending_down_to_the_floor_is_allowed() {
        let mut p = profile(3000);
        let snapshot = p
            .record_expense("Food", 3000 - MIN_REMAINING_BALANCE, "", day(16))
            .unwrap();
        assert_eq!(snapshot.remaining_balance, MIN_REMAINING_BALANCE);
    }

    #[test]
    fn test_record_expense_updates_the_stored_date() {
        let mut p = profile(3000);
        p.record_expense("Food", 100, "", day(20)).unwrap();
        assert_eq!(p.date, day(20));
    }

    #[test]
    fn test_from_record_applies_validation() {
        let record = serde_json::json!({
            "username": "maria",
            "firstName": "Maria",
            "lastName": "Santos",
            "monthlyBudget": 3500,
            "expenses": {},
            "remainingBalance": 3150,
            "date": "2026-08-15"
        });
        let p = BudgetProfile::from_record(record).unwrap();
        assert_eq!(p.total_spent(), 350);

        let bad = serde_json::json!({
            "username": "maria",
            "firstName": "Maria",
            "lastName": "Santos",
            "monthlyBudget": 3500,
            "expenses": {},
            "remainingBalance": 0,
            "date": "2026-08-15"
        });
        let err = BudgetProfile::from_record(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidField(_)));
    }

    #[test]
    fn test_from_record_rejects_malformed_records() {
        let err = BudgetProfile::from_record(serde_json::json!("not an object")).unwrap_err();
        assert!(matches!(err, Error::InvalidField(_)));

        let err = BudgetProfile::from_record(serde_json::json!({"username": "x"})).unwrap_err();
        assert!(matches!(err, Error::InvalidField(_)));
    }

    #[test]
    fn test_summary_is_idempotent() {
        let mut p = profile(3000);
        p.record_expense("Food", 500, "lunch", day(16)).unwrap();

        let first = p.summary();
        let second = p.summary();
        assert_eq!(first, second);
        assert_eq!(first.total_spent, 500);
        assert_eq!(first.remaining_balance, 2500);
        assert_eq!(first.month, "August");
    }

    #[test]
    fn test_expense_rows_sentinel() {
        let mut p = profile(3000);
        assert!(p.expense_rows().is_none(), "an untouched ledger is None");

        p.record_expense("Food", 500, "lunch", day(16)).unwrap();
        let rows = p.expense_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Food");
    }

    #[test]
    fn test_rollover_fires_only_when_policy_says_so() {
        let mut p = profile(3000);
        p.record_expense("Food", 500, "", day(16)).unwrap();

        assert!(p.rollover(4000, day(2), &FirstOfMonth).unwrap().is_none());
        assert!(p.rollover(4000, day(1), &Never).unwrap().is_none());
        assert_eq!(p.monthly_budget, 3000, "a skipped rollover changes nothing");

        let snapshot = p.rollover(4000, day(1), &FirstOfMonth).unwrap().unwrap();
        assert_eq!(snapshot.monthly_budget, 4000);
        assert_eq!(snapshot.remaining_balance, 4000);
        assert_eq!(snapshot.date, day(1));
        assert_eq!(
            snapshot.expenses.entry_count(),
            1,
            "history survives the rollover"
        );
    }

    #[test]
    fn test_rollover_validates_the_new_budget() {
        let mut p = profile(3000);
        let err = p.rollover(0, day(16), &Always).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
        assert_eq!(p.monthly_budget, 3000);
        assert_eq!(p.remaining_balance, 3000);
    }

    #[test]
    fn test_persisted_shape_round_trips() {
        let mut p = profile(3000);
        p.record_expense("Food", 500, "lunch", day(16)).unwrap();

        let value = serde_json::to_value(&p).unwrap();
        assert!(value.get("firstName").is_some(), "fields are camelCase");
        assert!(value.get("remainingBalance").is_some());

        let restored = BudgetProfile::from_record(value).unwrap();
        assert_eq!(restored, p);
    }
}
