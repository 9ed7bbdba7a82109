use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::{catalog::HabitCatalog, record::JournalRecord};

/// Current consecutive-day streak per daily habit. Recomputed from the full
/// history on every call.
pub type StreakResult = BTreeMap<String, u32>;

/// Walks one user's records backward from the most recent entry and counts
/// unbroken consecutive-day completions per daily habit. The whole result
/// zeroes out when the log has gone stale (no entry for today or yesterday).
pub fn streaks(records: &[JournalRecord], catalog: &HabitCatalog, today: NaiveDate) -> StreakResult {
    let mut result: StreakResult = catalog
        .daily_habits()
        .map(|habit| (habit.name.clone(), 0))
        .collect();
    if records.is_empty() {
        return result;
    }

    let mut sorted: Vec<&JournalRecord> = records.iter().collect();
    sorted.sort_by_key(|record| std::cmp::Reverse(record.date));

    let last_date = sorted[0].date;
    if last_date < today - Duration::days(1) {
        return result;
    }

    for habit in catalog.daily_habits() {
        if !sorted[0].completed(&habit.name) {
            continue;
        }
        let mut count = 0u32;
        let mut expected = last_date;
        for record in &sorted {
            if record.date == expected && record.completed(&habit.name) {
                count += 1;
                expected -= Duration::days(1);
            } else {
                break;
            }
        }
        result.insert(habit.name.clone(), count);
    }
    result
}
