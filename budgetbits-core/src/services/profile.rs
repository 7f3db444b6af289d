//! Profile service - budget profiles, expenses, and monthly rollover

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::result::{Error, Result};
use crate::domain::rollover::RolloverPolicy;
use crate::domain::{BudgetProfile, ExpenseRow, ProfileSummary};
use crate::ports::{DocumentStore, JsonDocument};

/// Document key for the profile map
pub const PROFILES_KEY: &str = "profiles";

/// Owns the profile document and applies domain operations to it
///
/// Records stay as raw JSON in memory and are rehydrated per operation, so
/// one malformed profile only fails requests that touch it. Every mutation
/// writes the full document back before returning.
pub struct ProfileService {
    store: Arc<dyn DocumentStore>,
    profiles: JsonDocument,
    policy: Box<dyn RolloverPolicy>,
}

impl ProfileService {
    /// Load the profile document and bind the rollover policy
    pub fn load(store: Arc<dyn DocumentStore>, policy: Box<dyn RolloverPolicy>) -> Result<Self> {
        let profiles = store.load(PROFILES_KEY)?;
        Ok(Self {
            store,
            profiles,
            policy,
        })
    }

    /// Look up a profile; `Ok(None)` means no record exists for the username
    pub fn get(&self, username: &str) -> Result<Option<BudgetProfile>> {
        match self.profiles.get(username) {
            Some(record) => Ok(Some(BudgetProfile::from_record(record.clone())?)),
            None => Ok(None),
        }
    }

    pub fn exists(&self, username: &str) -> bool {
        self.profiles.contains_key(username)
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Create and persist a fresh profile
    pub fn create(
        &mut self,
        username: &str,
        first_name: &str,
        last_name: &str,
        monthly_budget: i64,
        today: NaiveDate,
    ) -> Result<BudgetProfile> {
        if self.exists(username) {
            return Err(Error::invalid_input(format!(
                "a profile for '{}' already exists",
                username
            )));
        }
        let profile = BudgetProfile::new(username, first_name, last_name, monthly_budget, today)?;
        self.put(&profile)?;
        Ok(profile)
    }

    /// Record an expense and persist the updated profile
    pub fn record_expense(
        &mut self,
        username: &str,
        category: &str,
        amount: i64,
        notes: &str,
        today: NaiveDate,
    ) -> Result<BudgetProfile> {
        let mut profile = self.require(username)?;
        let updated = profile.record_expense(category, amount, notes, today)?;
        self.put(&updated)?;
        Ok(updated)
    }

    /// Apply the monthly rollover when due; `Ok(None)` on a quiet day
    pub fn rollover(
        &mut self,
        username: &str,
        new_budget: i64,
        today: NaiveDate,
    ) -> Result<Option<BudgetProfile>> {
        let mut profile = self.require(username)?;
        match profile.rollover(new_budget, today, self.policy.as_ref())? {
            Some(updated) => {
                self.put(&updated)?;
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// Whether the policy would fire today, without changing anything
    pub fn rollover_due(&self, username: &str, today: NaiveDate) -> Result<bool> {
        let profile = self.require(username)?;
        Ok(self.policy.should_rollover(today, profile.date))
    }

    pub fn summary(&self, username: &str) -> Result<ProfileSummary> {
        Ok(self.require(username)?.summary())
    }

    /// Flattened expense rows; `Ok(None)` when the ledger is empty
    pub fn expense_rows(&self, username: &str) -> Result<Option<Vec<ExpenseRow>>> {
        Ok(self.require(username)?.expense_rows())
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    fn require(&self, username: &str) -> Result<BudgetProfile> {
        self.get(username)?
            .ok_or_else(|| Error::UnknownUsername(username.to_string()))
    }

    fn put(&mut self, profile: &BudgetProfile) -> Result<()> {
        let record = serde_json::to_value(profile)?;
        self.profiles.insert(profile.username.clone(), record);
        self.store.save(PROFILES_KEY, &self.profiles)
    }
}
