//! Interactive completion flow
//!
//! Walks the paused workouts of one date in insertion order and asks whether
//! each one is done. A pause answer ends the whole flow.

use std::io::{BufRead, Write};
use tracing::{info, instrument};

use crate::error::Result;
use crate::input::{parse_completion_choice, CompletionChoice, Console};
use crate::tracker::WorkoutTracker;

pub const NO_WORKOUTS_TO_START: &str = "No workouts to start on this date.";

/// How the completion flow ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// No paused workout on the date
    NothingToStart,
    /// Every matching workout was completed
    Finished { completed: usize },
    /// The user paused; later matches were not visited
    Paused { completed: usize },
}

/// Run the completion flow for `date`
#[instrument(skip(tracker, console))]
pub fn run_completion_flow<R: BufRead, W: Write>(
    tracker: &mut WorkoutTracker,
    date: &str,
    console: &mut Console<R, W>,
    emoji: bool,
) -> Result<CompletionOutcome> {
    let pending = tracker.paused_indices_on(date);
    if pending.is_empty() {
        console.println(NO_WORKOUTS_TO_START)?;
        return Ok(CompletionOutcome::NothingToStart);
    }

    let mut completed = 0;
    for index in pending {
        let Some(record) = tracker.get(index) else {
            continue;
        };
        let name = record.name.clone();

        console.println(&format!(
            "Starting workout: {} ({} mins)",
            name, record.duration_minutes
        ))?;
        let choice = console.ask_until(
            "Press 'y' to mark this workout as completed, or 'n' to pause the workout.\n",
            parse_completion_choice,
        )?;

        match choice {
            CompletionChoice::Complete => {
                if tracker.complete(index) {
                    completed += 1;
                }
                if emoji {
                    console.println(&format!("🎉 Great job! You've completed: {} 🎉", name))?;
                } else {
                    console.println(&format!("Great job! You've completed: {}", name))?;
                }
            }
            CompletionChoice::Pause => {
                console.println("Workout paused.")?;
                info!(date, name = %name, completed, "Completion flow paused");
                return Ok(CompletionOutcome::Paused { completed });
            }
        }
    }

    info!(date, completed, "Completion flow finished");
    Ok(CompletionOutcome::Finished { completed })
}
