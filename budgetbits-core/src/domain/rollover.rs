//! Monthly budget rollover policies
//!
//! Whether a rollover is due is a pluggable predicate over today's date and
//! the date the profile was last touched. The active policy is picked by
//! name in settings.json and can be forced through `BUDGETBITS_ROLLOVER`.

use chrono::{Datelike, NaiveDate};

/// Name of the policy used when none is configured
pub const DEFAULT_POLICY_NAME: &str = "first-of-month";

/// Decides when the monthly budget resets
pub trait RolloverPolicy: Send + Sync {
    /// Whether a rollover is due, given today's date and the profile's
    /// stored last-touched date
    fn should_rollover(&self, today: NaiveDate, last_updated: NaiveDate) -> bool;

    /// Policy name as it appears in configuration
    fn name(&self) -> &'static str;
}

/// Fires on the first day of each month, whatever the stored date says
pub struct FirstOfMonth;

impl RolloverPolicy for FirstOfMonth {
    fn should_rollover(&self, today: NaiveDate, _last_updated: NaiveDate) -> bool {
        today.day() == 1
    }

    fn name(&self) -> &'static str {
        "first-of-month"
    }
}

/// Fires once today falls in a later month than the stored date
pub struct NewMonth;

impl RolloverPolicy for NewMonth {
    fn should_rollover(&self, today: NaiveDate, last_updated: NaiveDate) -> bool {
        (today.year(), today.month()) > (last_updated.year(), last_updated.month())
    }

    fn name(&self) -> &'static str {
        "new-month"
    }
}

/// Fires whenever asked, for manual-rollover workflows
pub struct Always;

impl RolloverPolicy for Always {
    fn should_rollover(&self, _today: NaiveDate, _last_updated: NaiveDate) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "always"
    }
}

/// Disables rollover entirely
pub struct Never;

impl RolloverPolicy for Never {
    fn should_rollover(&self, _today: NaiveDate, _last_updated: NaiveDate) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "never"
    }
}

/// Look up a policy by its configured name
pub fn policy_by_name(name: &str) -> Option<Box<dyn RolloverPolicy>> {
    match name {
        "first-of-month" => Some(Box::new(FirstOfMonth)),
        "new-month" => Some(Box::new(NewMonth)),
        "always" => Some(Box::new(Always)),
        "never" => Some(Box::new(Never)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_of_month() {
        let policy = FirstOfMonth;
        let stored = date(2026, 7, 20);

        assert!(policy.should_rollover(date(2026, 8, 1), stored));
        assert!(!policy.should_rollover(date(2026, 8, 2), stored));
        assert!(!policy.should_rollover(date(2026, 8, 31), stored));
        // The stored date has no say
        assert!(policy.should_rollover(date(2026, 8, 1), date(2026, 8, 1)));
    }

    #[test]
    fn test_new_month() {
        let policy = NewMonth;

        assert!(policy.should_rollover(date(2026, 8, 15), date(2026, 7, 30)));
        assert!(policy.should_rollover(date(2027, 1, 2), date(2026, 12, 31)));
        assert!(!policy.should_rollover(date(2026, 8, 31), date(2026, 8, 1)));
        // A stored date in the future never triggers
        assert!(!policy.should_rollover(date(2026, 8, 1), date(2026, 9, 1)));
    }

    #[test]
    fn test_always_and_never() {
        let today = date(2026, 8, 17);
        let stored = date(2026, 8, 17);

        assert!(Always.should_rollover(today, stored));
        assert!(!Never.should_rollover(today, stored));
    }

    #[test]
    fn test_policy_by_name() {
        for name in ["first-of-month", "new-month", "always", "never"] {
            let policy = policy_by_name(name).unwrap();
            assert_eq!(policy.name(), name);
        }
        assert!(policy_by_name("fortnightly").is_none());
        assert!(policy_by_name(DEFAULT_POLICY_NAME).is_some());
    }
}
