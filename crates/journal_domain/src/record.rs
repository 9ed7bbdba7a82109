use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user's journal entry for one calendar day. The persistence layer
/// guarantees at most one record exists per (user, date) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalRecord {
    pub user: String,
    pub date: NaiveDate,
    pub completions: BTreeMap<String, bool>,
    pub note: Option<String>,
}

impl JournalRecord {
    pub fn new(user: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            user: user.into(),
            date,
            completions: BTreeMap::new(),
            note: None,
        }
    }

    pub fn with_completion(mut self, habit: impl Into<String>, done: bool) -> Self {
        self.completions.insert(habit.into(), done);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Habits absent from the completions map read as not completed.
    pub fn completed(&self, habit: &str) -> bool {
        self.completions.get(habit).copied().unwrap_or(false)
    }
}
