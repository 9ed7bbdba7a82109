use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{catalog::HabitCatalog, period::PeriodWindow, progress, record::JournalRecord};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub user: String,
    /// Overall completion percentage, rounded to two decimals.
    pub percentage: f64,
}

/// Ranks every user with at least one record inside the window by overall
/// completion percentage, descending, ties broken ascending by user name.
/// Users without a record in the window do not appear.
pub fn rank(
    records: &[JournalRecord],
    window: &PeriodWindow,
    catalog: &HabitCatalog,
    include_monthly: bool,
) -> Vec<LeaderboardEntry> {
    let mut by_user: BTreeMap<&str, Vec<JournalRecord>> = BTreeMap::new();
    for record in records.iter().filter(|record| window.contains(record.date)) {
        by_user
            .entry(record.user.as_str())
            .or_default()
            .push(record.clone());
    }

    let mut entries: Vec<LeaderboardEntry> = by_user
        .into_iter()
        .map(|(user, group)| {
            let report = progress::aggregate(&group, window, catalog, include_monthly);
            LeaderboardEntry {
                user: user.to_string(),
                percentage: round_percentage(report.overall_percentage()),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.user.cmp(&b.user))
    });
    entries
}

fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HabitDefinition;
    use crate::period::week_to_date;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> HabitCatalog {
        HabitCatalog::new([
            HabitDefinition::daily("Prayer"),
            HabitDefinition::weekly("Sport", 3),
        ])
    }

    fn entry(user: &str, day: u32, prayer: bool, sport: bool) -> JournalRecord {
        JournalRecord::new(user, date(2025, 3, day))
            .with_completion("Prayer", prayer)
            .with_completion("Sport", sport)
    }

    #[test]
    fn orders_by_percentage_descending() {
        let records = vec![
            entry("amir", 10, true, true),
            entry("amir", 11, true, false),
            entry("bilal", 10, true, false),
        ];
        let window = week_to_date(date(2025, 3, 12));
        let ranked = rank(&records, &window, &catalog(), false);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].user, "amir");
        // 3 of 10 vs 1 of 10.
        assert_eq!(ranked[0].percentage, 30.0);
        assert_eq!(ranked[1].percentage, 10.0);
    }

    #[test]
    fn equal_percentages_order_alphabetically() {
        let records = vec![
            entry("hamza", 10, true, false),
            entry("bilal", 11, true, false),
        ];
        let window = week_to_date(date(2025, 3, 12));
        let ranked = rank(&records, &window, &catalog(), false);
        assert_eq!(ranked[0].user, "bilal");
        assert_eq!(ranked[1].user, "hamza");
        assert_eq!(ranked[0].percentage, ranked[1].percentage);
    }

    #[test]
    fn users_without_records_in_the_window_are_absent() {
        let records = vec![
            entry("amir", 10, true, false),
            // Sunday before the window opens.
            entry("bilal", 9, true, true),
        ];
        let window = week_to_date(date(2025, 3, 12));
        let ranked = rank(&records, &window, &catalog(), false);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].user, "amir");
    }

    #[test]
    fn zero_target_user_ranks_with_zero_percent() {
        let degenerate = HabitCatalog::new([HabitDefinition::weekly("Sport", 0)]);
        let records = vec![entry("amir", 10, false, true)];
        let window = week_to_date(date(2025, 3, 12));
        let ranked = rank(&records, &window, &degenerate, false);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].percentage, 0.0);
    }

    #[test]
    fn percentages_are_rounded_to_two_decimals() {
        // 1 of 3 weekly sessions: 33.333...%
        let sport_only = HabitCatalog::new([HabitDefinition::weekly("Sport", 3)]);
        let records = vec![entry("amir", 10, false, true)];
        let window = week_to_date(date(2025, 3, 12));
        let ranked = rank(&records, &window, &sport_only, false);
        assert_eq!(ranked[0].percentage, 33.33);
    }

    #[test]
    fn empty_input_yields_an_empty_leaderboard() {
        let window = week_to_date(date(2025, 3, 12));
        assert!(rank(&[], &window, &catalog(), false).is_empty());
    }
}
