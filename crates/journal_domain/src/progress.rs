use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Cadence, HabitCatalog, HabitDefinition},
    period::PeriodWindow,
    record::JournalRecord,
};

/// Progress of a single habit inside one window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitProgress {
    pub habit: String,
    pub actual: u32,
    pub target: f64,
    pub percentage: f64,
}

/// Derived per query, in catalog order. Never cached by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressReport {
    pub per_habit: Vec<HabitProgress>,
    pub total_actual: u32,
    pub total_target: f64,
}

impl ProgressReport {
    pub fn overall_percentage(&self) -> f64 {
        percentage_of(self.total_actual, self.total_target)
    }
}

/// Pro-rated completion target for one habit inside a window. Monthly
/// targets stay flat regardless of how much of the month has elapsed.
pub fn habit_target(habit: &HabitDefinition, window: &PeriodWindow) -> f64 {
    match habit.cadence {
        Cadence::Daily => f64::from(window.target_days),
        Cadence::Weekly => f64::from(habit.target) * window.weekly_units,
        Cadence::Monthly => f64::from(habit.target),
    }
}

/// Counts completions over the window and pairs them with pro-rated
/// targets. Monthly habits are skipped when `include_monthly` is false; a
/// week-scoped window cannot hold a meaningful monthly target.
pub fn aggregate(
    records: &[JournalRecord],
    window: &PeriodWindow,
    catalog: &HabitCatalog,
    include_monthly: bool,
) -> ProgressReport {
    let in_window: Vec<&JournalRecord> = records
        .iter()
        .filter(|record| window.contains(record.date))
        .collect();

    let mut report = ProgressReport::default();
    for habit in catalog.iter() {
        if habit.cadence == Cadence::Monthly && !include_monthly {
            continue;
        }
        let actual = in_window
            .iter()
            .filter(|record| record.completed(&habit.name))
            .count() as u32;
        let target = habit_target(habit, window);
        report.per_habit.push(HabitProgress {
            habit: habit.name.clone(),
            actual,
            target,
            percentage: percentage_of(actual, target),
        });
        report.total_actual += actual;
        report.total_target += target;
    }
    report
}

/// Zero targets map to 0% rather than dividing.
fn percentage_of(actual: u32, target: f64) -> f64 {
    if target > 0.0 {
        f64::from(actual) / target * 100.0
    } else {
        0.0
    }
}
