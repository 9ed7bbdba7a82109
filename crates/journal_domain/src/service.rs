use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::{
    catalog::HabitCatalog,
    insights::{self, RangeInsights},
    leaderboard::{self, LeaderboardEntry},
    period::{self, PeriodError},
    progress::{self, ProgressReport},
    record::JournalRecord,
    snapshot::JournalSnapshot,
    streak::{self, StreakResult},
};

/// Thread-safe registry of journal entries keyed by (user, date), plus a
/// façade over the pure aggregation functions. Reads clone a snapshot of
/// the relevant records; derived values are never cached.
pub struct JournalService {
    catalog: HabitCatalog,
    records: RwLock<HashMap<(String, NaiveDate), JournalRecord>>,
}

pub struct JournalServiceBuilder {
    catalog: HabitCatalog,
    seed: Vec<JournalRecord>,
}

impl JournalServiceBuilder {
    pub fn new() -> Self {
        Self {
            catalog: HabitCatalog::default(),
            seed: Vec::new(),
        }
    }

    pub fn catalog(mut self, catalog: HabitCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn add_record(mut self, record: JournalRecord) -> Self {
        self.seed.push(record);
        self
    }

    pub fn add_records(mut self, records: impl IntoIterator<Item = JournalRecord>) -> Self {
        self.seed.extend(records);
        self
    }

    /// Seed records sharing a (user, date) key resolve last-wins, keeping
    /// the one-entry-per-day invariant.
    pub fn build(self) -> JournalService {
        let service = JournalService {
            catalog: self.catalog,
            records: RwLock::new(HashMap::new()),
        };
        for record in self.seed {
            service.upsert_entry(record);
        }
        service
    }
}

impl Default for JournalServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalService {
    pub fn builder() -> JournalServiceBuilder {
        JournalServiceBuilder::new()
    }

    pub fn catalog(&self) -> &HabitCatalog {
        &self.catalog
    }

    /// Insert or replace the entry for the record's (user, date) pair.
    pub fn upsert_entry(&self, record: JournalRecord) {
        tracing::debug!(user = %record.user, date = %record.date, "upsert journal entry");
        self.records
            .write()
            .insert((record.user.clone(), record.date), record);
    }

    pub fn delete_entry(&self, user: &str, date: NaiveDate) -> Result<JournalRecord> {
        tracing::debug!(%user, %date, "delete journal entry");
        self.records
            .write()
            .remove(&(user.to_string(), date))
            .ok_or_else(|| anyhow!("no journal entry for {} on {}", user, date))
    }

    pub fn record_for(&self, user: &str, date: NaiveDate) -> Option<JournalRecord> {
        self.records.read().get(&(user.to_string(), date)).cloned()
    }

    /// All entries for one user, oldest first.
    pub fn records_for(&self, user: &str) -> Vec<JournalRecord> {
        let mut records: Vec<JournalRecord> = self
            .records
            .read()
            .values()
            .filter(|record| record.user == user)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.date);
        records
    }

    pub fn all_records(&self) -> Vec<JournalRecord> {
        let mut records: Vec<JournalRecord> = self.records.read().values().cloned().collect();
        records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.user.cmp(&b.user)));
        records
    }

    pub fn users(&self) -> Vec<String> {
        let records = self.records.read();
        let mut users: Vec<String> = records.values().map(|record| record.user.clone()).collect();
        users.sort();
        users.dedup();
        users
    }

    /// Week-to-date progress; monthly habits stay out of week-scoped views.
    pub fn week_report(&self, user: &str, today: NaiveDate) -> ProgressReport {
        let window = period::week_to_date(today);
        progress::aggregate(&self.records_for(user), &window, &self.catalog, false)
    }

    pub fn month_report(&self, user: &str, today: NaiveDate) -> ProgressReport {
        let window = period::month_to_date(today);
        progress::aggregate(&self.records_for(user), &window, &self.catalog, true)
    }

    pub fn range_report(
        &self,
        user: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ProgressReport, PeriodError> {
        let window = period::custom_range(start, end)?;
        Ok(progress::aggregate(
            &self.records_for(user),
            &window,
            &self.catalog,
            true,
        ))
    }

    pub fn streaks(&self, user: &str, today: NaiveDate) -> StreakResult {
        streak::streaks(&self.records_for(user), &self.catalog, today)
    }

    pub fn weekly_leaderboard(&self, today: NaiveDate) -> Vec<LeaderboardEntry> {
        let window = period::week_to_date(today);
        leaderboard::rank(&self.all_records(), &window, &self.catalog, false)
    }

    pub fn monthly_leaderboard(&self, today: NaiveDate) -> Vec<LeaderboardEntry> {
        let window = period::month_to_date(today);
        leaderboard::rank(&self.all_records(), &window, &self.catalog, true)
    }

    pub fn range_insights(
        &self,
        user: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeInsights, PeriodError> {
        let window = period::custom_range(start, end)?;
        Ok(insights::range_insights(
            &self.records_for(user),
            &window,
            &self.catalog,
        ))
    }

    pub fn snapshot(&self) -> JournalSnapshot {
        JournalSnapshot {
            catalog: self.catalog.clone(),
            records: self.all_records(),
        }
    }
}
