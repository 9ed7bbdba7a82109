use serde::{Deserialize, Serialize};

/// How often a habit is expected to be performed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitDefinition {
    pub name: String,
    pub cadence: Cadence,
    /// Expected completions per cadence period. Always 1 for daily habits.
    pub target: u32,
}

impl HabitDefinition {
    pub fn daily(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cadence: Cadence::Daily,
            target: 1,
        }
    }

    pub fn weekly(name: impl Into<String>, target: u32) -> Self {
        Self {
            name: name.into(),
            cadence: Cadence::Weekly,
            target,
        }
    }

    pub fn monthly(name: impl Into<String>, target: u32) -> Self {
        Self {
            name: name.into(),
            cadence: Cadence::Monthly,
            target,
        }
    }
}

/// Immutable, insertion-ordered set of habits defined once per deployment.
/// Habit names are unique keys; a later definition with a name already in
/// the catalog is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitCatalog {
    habits: Vec<HabitDefinition>,
}

impl HabitCatalog {
    pub fn new(habits: impl IntoIterator<Item = HabitDefinition>) -> Self {
        let mut catalog = Self::default();
        for habit in habits {
            catalog.push(habit);
        }
        catalog
    }

    pub fn push(&mut self, habit: HabitDefinition) {
        if self.get(&habit.name).is_none() {
            self.habits.push(habit);
        }
    }

    pub fn get(&self, name: &str) -> Option<&HabitDefinition> {
        self.habits.iter().find(|habit| habit.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HabitDefinition> {
        self.habits.iter()
    }

    /// The subset the streak engine tracks.
    pub fn daily_habits(&self) -> impl Iterator<Item = &HabitDefinition> {
        self.habits
            .iter()
            .filter(|habit| habit.cadence == Cadence::Daily)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
