use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{catalog::HabitCatalog, record::JournalRecord};

/// Materialized view of the loaded journal, exchanged with the persistence
/// and export collaborators as JSON. Completions travel as plain booleans;
/// any 0/1 integer encoding is the storage adapter's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalSnapshot {
    pub catalog: HabitCatalog,
    pub records: Vec<JournalRecord>,
}

impl JournalSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
