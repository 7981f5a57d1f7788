use serde::{Deserialize, Serialize};
use std::fmt;

/// Workout categories offered by the category menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cardio,
    Strength,
    Flexibility,
    #[serde(rename = "HIIT")]
    Hiit,
    Other,
}

impl Category {
    /// Categories in menu order; `Other` is the fallback and has no menu entry
    pub const MENU: [Category; 4] = [
        Category::Cardio,
        Category::Strength,
        Category::Flexibility,
        Category::Hiit,
    ];

    /// Map a 1-based menu choice to a category. Anything outside 1..=4 is `Other`.
    pub fn from_menu_choice(choice: i64) -> Self {
        match choice {
            1 => Category::Cardio,
            2 => Category::Strength,
            3 => Category::Flexibility,
            4 => Category::Hiit,
            _ => Category::Other,
        }
    }

    /// Display label, also used as the key in the accent configuration
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cardio => "Cardio",
            Category::Strength => "Strength",
            Category::Flexibility => "Flexibility",
            Category::Hiit => "HIIT",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Completion state of a workout. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkoutStatus {
    #[default]
    Paused,
    Completed,
}

impl WorkoutStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, WorkoutStatus::Completed)
    }
}

/// One logged workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Free-text workout name
    pub name: String,

    /// Free-form date text, conventionally `MM-DD`. Never validated.
    pub date: String,

    /// Duration in minutes. Sign and range are not checked.
    pub duration_minutes: i64,

    /// Paused until marked completed
    pub status: WorkoutStatus,

    /// Menu-selected category
    pub category: Category,
}

impl WorkoutRecord {
    /// Create a paused workout
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        duration_minutes: i64,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            duration_minutes,
            status: WorkoutStatus::Paused,
            category,
        }
    }

    /// Builder-style helper for records that are already completed
    pub fn completed(mut self) -> Self {
        self.status = WorkoutStatus::Completed;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}
