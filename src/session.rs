//! One interactive logging session: enter workouts, pick today's date,
//! review and complete the day's workouts, then print the reports.

use chrono::Local;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

use crate::completion::{run_completion_flow, CompletionOutcome};
use crate::config::AppConfig;
use crate::error::{Result, TrainlogError};
use crate::input::{
    parse_add_another, parse_category_choice, parse_date, parse_duration, Console, ParseOutcome,
};
use crate::models::{Category, WorkoutRecord};
use crate::report::{render_day_table, render_full_table, render_statistics, ReportStyle};
use crate::tracker::{AverageBasis, WorkoutStatistics, WorkoutTracker};

const CATEGORY_MENU_PROMPT: &str = "Enter your choice (1-4): ";
const TODAY_PROMPT: &str = "Enter today's date (MM-DD): ";

/// What happened during a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub records_added: usize,
    pub today: Option<String>,
    pub completion: Option<CompletionOutcome>,
    pub statistics: WorkoutStatistics,
}

/// Session state: the store plus the injected report settings
#[derive(Debug)]
pub struct Session {
    tracker: WorkoutTracker,
    style: ReportStyle,
    average_basis: AverageBasis,
}

impl Session {
    pub fn new(style: ReportStyle, average_basis: AverageBasis) -> Self {
        Self {
            tracker: WorkoutTracker::new(),
            style,
            average_basis,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            ReportStyle::from_settings(&config.display)?,
            config.statistics.average_basis,
        ))
    }

    pub fn tracker(&self) -> &WorkoutTracker {
        &self.tracker
    }

    /// Run the full session. Input closing early ends the current phase and
    /// still prints the reports that can be produced.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<SessionSummary> {
        tolerate_end_of_input(self.collect_workouts(console))?;
        let records_added = self.tracker.len();

        let today = match console.ask_until(TODAY_PROMPT, parse_today) {
            Ok(date) => Some(date),
            Err(e) if e.is_end_of_input() => {
                warn!("{}", e.user_message());
                None
            }
            Err(e) => return Err(e),
        };

        let mut completion = None;
        if let Some(date) = &today {
            console.print(&render_day_table(self.tracker.by_date(date), &self.style))?;

            let emoji = self.style.markers.emoji;
            match run_completion_flow(&mut self.tracker, date, console, emoji) {
                Ok(outcome) => completion = Some(outcome),
                Err(e) if e.is_end_of_input() => warn!("{}", e.user_message()),
                Err(e) => return Err(e),
            }
        }

        console.print(&render_full_table(self.tracker.all(), &self.style))?;
        let statistics = self.tracker.statistics(self.average_basis);
        console.print(&render_statistics(&statistics))?;

        info!(
            records = records_added,
            today = ?today,
            completed = statistics.completed_workouts,
            "Session finished"
        );

        Ok(SessionSummary {
            records_added,
            today,
            completion,
            statistics,
        })
    }

    /// Entry loop: one workout, then repeat while the answer is `y`
    fn collect_workouts<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            let record = input_workout(console)?;
            self.tracker.add_record(record);
            console.println("Workout added successfully!")?;

            let answer = console.ask("Do you want to add another workout? (y/n): ")?;
            if !parse_add_another(&answer) {
                return Ok(());
            }
        }
    }
}

/// Prompt for every field of one workout
pub fn input_workout<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<WorkoutRecord> {
    let name = console.ask("Enter workout name: ")?;
    let date = console.ask_until("Enter workout date (MM-DD): ", parse_date)?;
    let duration = console.ask_until("Enter workout duration (in minutes): ", parse_duration)?;

    console.println("Select workout category:")?;
    for (position, category) in Category::MENU.iter().enumerate() {
        console.println(&format!("{}. {}", position + 1, category))?;
    }
    let answer = console.ask(CATEGORY_MENU_PROMPT)?;
    let category = parse_category_choice(&answer);

    Ok(WorkoutRecord::new(name, date, duration, category))
}

/// Today's date answer; a blank line means the local calendar date
fn parse_today(line: &str) -> ParseOutcome<String> {
    if line.trim().is_empty() {
        return ParseOutcome::Valid(today_token());
    }
    parse_date(line)
}

/// Local date as `MM-DD`
pub fn today_token() -> String {
    Local::now().format("%m-%d").to_string()
}

fn tolerate_end_of_input(result: Result<()>) -> Result<()> {
    match result {
        Err(TrainlogError::EndOfInput { prompt }) => {
            warn!(prompt = prompt.trim(), "Input closed during workout entry");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_input_workout_reads_all_fields() {
        let mut console = console("Morning Run\n05-01\n30\n1\n");
        let record = input_workout(&mut console).unwrap();

        assert_eq!(record, WorkoutRecord::new("Morning Run", "05-01", 30, Category::Cardio));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("1. Cardio\n2. Strength\n3. Flexibility\n4. HIIT\n"));
    }

    #[test]
    fn test_input_workout_retries_bad_duration() {
        let mut console = console("Plank\n05-02\nten\n10\n9\n");
        let record = input_workout(&mut console).unwrap();

        assert_eq!(record.duration_minutes, 10);
        assert_eq!(record.category, Category::Other);
    }

    #[test]
    fn test_today_token_shape() {
        let token = today_token();
        assert_eq!(token.len(), 5);
        assert_eq!(token.as_bytes()[2], b'-');
    }

    #[test]
    fn test_blank_today_uses_local_date() {
        assert_eq!(parse_today("  "), ParseOutcome::Valid(today_token()));
        assert_eq!(parse_today("05-01"), ParseOutcome::Valid("05-01".to_string()));
    }

    #[test]
    fn test_entry_cut_short_keeps_finished_records() {
        let mut session = Session::new(ReportStyle::plain(), AverageBasis::AllRecords);
        let mut console = console("Run\n05-01\n30\n1\ny\nLift\n05-01\n");

        let summary = session.run(&mut console).unwrap();
        assert_eq!(summary.records_added, 1);
        assert_eq!(session.tracker().len(), 1);
        assert_eq!(summary.today, None);
        assert_eq!(summary.statistics.total_workouts, 1);
    }
}
