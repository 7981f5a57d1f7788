//! In-memory workout store
//!
//! Holds the records for one session in insertion order together with the
//! running counters the statistics report is built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{WorkoutRecord, WorkoutStatus};

/// Which durations feed the numerator of the average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageBasis {
    /// Cumulative duration of every record, divided by the completed count
    #[default]
    AllRecords,
    /// Duration of completed records only, divided by the completed count
    CompletedOnly,
}

/// Running counters, updated at insert and on the Paused -> Completed transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStats {
    pub total_workouts: usize,
    pub total_duration_minutes: i64,
    pub completed_workouts: usize,
}

/// Aggregate statistics for the statistics report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStatistics {
    pub total_workouts: usize,
    pub total_duration_minutes: i64,
    pub completed_workouts: usize,
    /// `None` while nothing is completed
    pub average_duration_minutes: Option<Decimal>,
    pub average_basis: AverageBasis,
}

/// Ordered workout store for a single session
#[derive(Debug, Default)]
pub struct WorkoutTracker {
    records: Vec<WorkoutRecord>,
    stats: TrackerStats,
}

impl WorkoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and update the counters
    pub fn add_record(&mut self, record: WorkoutRecord) {
        self.stats.total_workouts += 1;
        self.stats.total_duration_minutes = self
            .stats
            .total_duration_minutes
            .saturating_add(record.duration_minutes);
        if record.is_completed() {
            self.stats.completed_workouts += 1;
        }

        info!(
            name = %record.name,
            date = %record.date,
            duration = record.duration_minutes,
            category = %record.category,
            "Workout added"
        );
        self.records.push(record);
    }

    /// Mark the record at `index` completed.
    ///
    /// Returns `true` only when the record was paused; the completed counter
    /// moves on that transition and nowhere else after insertion.
    pub fn complete(&mut self, index: usize) -> bool {
        let Some(record) = self.records.get_mut(index) else {
            debug!(index, "Completion requested for unknown record");
            return false;
        };

        if record.is_completed() {
            debug!(index, name = %record.name, "Workout already completed");
            return false;
        }

        record.status = WorkoutStatus::Completed;
        self.stats.completed_workouts += 1;
        info!(index, name = %record.name, "Workout completed");
        true
    }

    /// Records whose date text equals `date` exactly, in insertion order
    pub fn by_date<'a>(&'a self, date: &'a str) -> impl Iterator<Item = &'a WorkoutRecord> + 'a {
        self.records.iter().filter(move |record| record.date == date)
    }

    /// Indices of paused records on `date`, in insertion order
    pub fn paused_indices_on(&self, date: &str) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.date == date && !record.is_completed())
            .map(|(index, _)| index)
            .collect()
    }

    /// Every record in insertion order
    pub fn all(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&WorkoutRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current counters
    pub fn stats(&self) -> TrackerStats {
        self.stats
    }

    /// Completed count recomputed from record state
    pub fn derived_completed_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_completed()).count()
    }

    /// Build the statistics report
    pub fn statistics(&self, basis: AverageBasis) -> WorkoutStatistics {
        let numerator = match basis {
            AverageBasis::AllRecords => self.stats.total_duration_minutes,
            AverageBasis::CompletedOnly => self
                .records
                .iter()
                .filter(|r| r.is_completed())
                .fold(0i64, |sum, r| sum.saturating_add(r.duration_minutes)),
        };

        let average_duration_minutes = if self.stats.completed_workouts == 0 {
            None
        } else {
            Decimal::from(numerator)
                .checked_div(Decimal::from(self.stats.completed_workouts))
                .map(|avg| avg.round_dp(2).normalize())
        };

        debug!(
            total = self.stats.total_workouts,
            completed = self.stats.completed_workouts,
            basis = ?basis,
            average = ?average_duration_minutes,
            "Statistics computed"
        );

        WorkoutStatistics {
            total_workouts: self.stats.total_workouts,
            total_duration_minutes: self.stats.total_duration_minutes,
            completed_workouts: self.stats.completed_workouts,
            average_duration_minutes,
            average_basis: basis,
        }
    }
}
