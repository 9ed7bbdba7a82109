use serde::{Deserialize, Serialize};

use crate::{catalog::HabitCatalog, period::PeriodWindow, record::JournalRecord};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitCount {
    pub habit: String,
    pub count: u32,
}

/// Completion totals per habit over a window, most performed first. Equal
/// counts keep catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeInsights {
    pub counts: Vec<HabitCount>,
}

impl RangeInsights {
    pub fn most_performed(&self) -> Option<&HabitCount> {
        self.counts.first()
    }

    pub fn least_performed(&self) -> Option<&HabitCount> {
        self.counts.last()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// How often each habit was performed inside the window. A window with no
/// records yields empty insights rather than all-zero rows.
pub fn range_insights(
    records: &[JournalRecord],
    window: &PeriodWindow,
    catalog: &HabitCatalog,
) -> RangeInsights {
    let in_window: Vec<&JournalRecord> = records
        .iter()
        .filter(|record| window.contains(record.date))
        .collect();
    if in_window.is_empty() {
        return RangeInsights::default();
    }

    let mut counts: Vec<HabitCount> = catalog
        .iter()
        .map(|habit| HabitCount {
            habit: habit.name.clone(),
            count: in_window
                .iter()
                .filter(|record| record.completed(&habit.name))
                .count() as u32,
        })
        .collect();
    counts.sort_by_key(|entry| std::cmp::Reverse(entry.count));
    RangeInsights { counts }
}
