//! Text reports: the day table, the full table and the statistics block
//!
//! Rendering is pure. Records are turned into sanitized cell strings first and
//! the table functions only lay those out in fixed-width columns.

use colored::{Color, Colorize};
use std::collections::HashMap;
use std::fmt::Write;

use crate::config::{parse_color, DisplaySettings};
use crate::error::{ConfigError, Result};
use crate::models::{Category, WorkoutRecord, WorkoutStatus};
use crate::tracker::WorkoutStatistics;

pub const NAME_WIDTH: usize = 12;
pub const DURATION_WIDTH: usize = 15;
pub const DATE_WIDTH: usize = 10;

pub const NO_WORKOUTS_FOUND: &str = "No workouts found on this date.";

/// Category -> terminal color mapping used for the category column
#[derive(Debug, Clone, PartialEq)]
pub struct AccentPalette {
    accents: HashMap<Category, Color>,
    neutral: Option<Color>,
    enabled: bool,
}

impl AccentPalette {
    /// Palette that never emits color escapes
    pub fn plain() -> Self {
        Self {
            accents: HashMap::new(),
            neutral: None,
            enabled: false,
        }
    }

    /// Build from display settings. Labels that name no category are ignored.
    pub fn from_settings(settings: &DisplaySettings) -> Result<Self> {
        let mut accents = HashMap::new();
        for category in Category::MENU.iter().chain(std::iter::once(&Category::Other)) {
            let Some(name) = settings.accents.get(category.label()) else {
                continue;
            };
            let color = parse_color(name).map_err(|_| ConfigError::UnknownColor {
                label: category.label().to_string(),
                color: name.clone(),
            })?;
            if let Some(color) = color {
                accents.insert(*category, color);
            }
        }

        let neutral = parse_color(&settings.neutral_accent).map_err(|_| {
            ConfigError::UnknownColor {
                label: "neutral accent".to_string(),
                color: settings.neutral_accent.clone(),
            }
        })?;

        Ok(Self {
            accents,
            neutral,
            enabled: settings.use_color,
        })
    }

    /// Color for `category`, falling back to the neutral accent
    pub fn accent_for(&self, category: Category) -> Option<Color> {
        self.accents.get(&category).copied().or(self.neutral)
    }

    /// Category label wrapped in its accent
    pub fn paint(&self, category: Category) -> String {
        let label = category.label();
        match self.accent_for(category) {
            Some(color) if self.enabled => label.color(color).to_string(),
            _ => label.to_string(),
        }
    }
}

impl Default for AccentPalette {
    fn default() -> Self {
        // the built-in settings always parse
        Self::from_settings(&DisplaySettings::default()).unwrap_or_else(|_| Self::plain())
    }
}

/// Status markers for the status columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMarkers {
    pub emoji: bool,
}

impl StatusMarkers {
    pub fn day_status(&self, status: WorkoutStatus) -> &'static str {
        match (status, self.emoji) {
            (WorkoutStatus::Completed, true) => "Completed ✅",
            (WorkoutStatus::Paused, true) => "Paused ⏸️",
            (WorkoutStatus::Completed, false) => "Completed",
            (WorkoutStatus::Paused, false) => "Paused",
        }
    }

    pub fn completed_flag(&self, status: WorkoutStatus) -> &'static str {
        match (status, self.emoji) {
            (WorkoutStatus::Completed, true) => "Yes ✅",
            (WorkoutStatus::Paused, true) => "No ❌",
            (WorkoutStatus::Completed, false) => "Yes",
            (WorkoutStatus::Paused, false) => "No",
        }
    }
}

impl Default for StatusMarkers {
    fn default() -> Self {
        Self { emoji: true }
    }
}

/// Everything the renderer needs besides the records
#[derive(Debug, Clone, Default)]
pub struct ReportStyle {
    pub palette: AccentPalette,
    pub markers: StatusMarkers,
}

impl ReportStyle {
    pub fn from_settings(settings: &DisplaySettings) -> Result<Self> {
        Ok(Self {
            palette: AccentPalette::from_settings(settings)?,
            markers: StatusMarkers {
                emoji: settings.show_emoji,
            },
        })
    }

    /// No colors, no emoji. Handy for exact-output tests.
    pub fn plain() -> Self {
        Self {
            palette: AccentPalette::plain(),
            markers: StatusMarkers { emoji: false },
        }
    }
}

/// Make user text safe for a pipe table: `|` becomes `/`, control characters are dropped
pub fn sanitize_cell(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == '|' { '/' } else { c })
        .collect()
}

/// One row of the day table, already sanitized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub name: String,
    pub duration: String,
    pub status: String,
    pub category: String,
}

/// One row of the full table, already sanitized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullRow {
    pub date: String,
    pub name: String,
    pub duration: String,
    pub completed: String,
    pub category: String,
}

impl DayRow {
    pub fn from_record(record: &WorkoutRecord, style: &ReportStyle) -> Self {
        Self {
            name: sanitize_cell(&record.name),
            duration: record.duration_minutes.to_string(),
            status: style.markers.day_status(record.status).to_string(),
            category: style.palette.paint(record.category),
        }
    }
}

impl FullRow {
    pub fn from_record(record: &WorkoutRecord, style: &ReportStyle) -> Self {
        Self {
            date: sanitize_cell(&record.date),
            name: sanitize_cell(&record.name),
            duration: record.duration_minutes.to_string(),
            completed: style.markers.completed_flag(record.status).to_string(),
            category: style.palette.paint(record.category),
        }
    }
}

/// Lay out the day table. An empty row set yields the not-found message instead of rows.
pub fn format_day_table(rows: &[DayRow]) -> String {
    let mut out = String::new();
    out.push_str("\n*Today's Workout:*\n");
    out.push_str("| Workout Name | Duration (mins) | Status | Category |\n");
    out.push_str("|---|---|---|---|\n");

    for row in rows {
        let _ = writeln!(
            out,
            "| {:>name_w$} | {:>dur_w$} | {} | {} |",
            row.name,
            row.duration,
            row.status,
            row.category,
            name_w = NAME_WIDTH,
            dur_w = DURATION_WIDTH,
        );
    }

    if rows.is_empty() {
        out.push_str(NO_WORKOUTS_FOUND);
        out.push('\n');
    }
    out
}

/// Lay out the full table
pub fn format_full_table(rows: &[FullRow]) -> String {
    let mut out = String::new();
    out.push_str("\n*All Workouts:*\n");
    out.push_str("| Date | Workout Name | Duration (mins) | Completed | Category |\n");
    out.push_str("|---|---|---|---|---|\n");

    for row in rows {
        let _ = writeln!(
            out,
            "| {:>date_w$} | {:>name_w$} | {:>dur_w$} | {} | {} |",
            row.date,
            row.name,
            row.duration,
            row.completed,
            row.category,
            date_w = DATE_WIDTH,
            name_w = NAME_WIDTH,
            dur_w = DURATION_WIDTH,
        );
    }
    out
}

/// Day table for the records matching one date
pub fn render_day_table<'a, I>(records: I, style: &ReportStyle) -> String
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    let rows: Vec<DayRow> = records
        .into_iter()
        .map(|record| DayRow::from_record(record, style))
        .collect();
    format_day_table(&rows)
}

/// Full table over every record
pub fn render_full_table<'a, I>(records: I, style: &ReportStyle) -> String
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    let rows: Vec<FullRow> = records
        .into_iter()
        .map(|record| FullRow::from_record(record, style))
        .collect();
    format_full_table(&rows)
}

/// Statistics block
pub fn render_statistics(stats: &WorkoutStatistics) -> String {
    let mut out = String::new();
    out.push_str("\n*Workout Statistics:*\n");
    let _ = writeln!(out, "Total Workouts: {}", stats.total_workouts);
    let _ = writeln!(out, "Total Duration: {} mins", stats.total_duration_minutes);
    let _ = writeln!(out, "Completed Workouts: {}", stats.completed_workouts);
    match stats.average_duration_minutes {
        Some(average) => {
            let _ = writeln!(out, "Average Duration: {} mins", average);
        }
        None => out.push_str("Average Duration: N/A (No workouts completed)\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::AverageBasis;
    use rust_decimal_macros::dec;

    fn run() -> WorkoutRecord {
        WorkoutRecord::new("Run", "05-01", 30, Category::Cardio)
    }

    #[test]
    fn test_sanitize_cell() {
        assert_eq!(sanitize_cell("Legs | Core"), "Legs / Core");
        assert_eq!(sanitize_cell("Tab\there\n"), "Tabhere");
        assert_eq!(sanitize_cell("Plain"), "Plain");
    }

    #[test]
    fn test_day_table_plain() {
        let style = ReportStyle::plain();
        let records = vec![run().completed()];
        let table = render_day_table(&records, &style);

        let expected = "\n*Today's Workout:*\n\
            | Workout Name | Duration (mins) | Status | Category |\n\
            |---|---|---|---|\n\
            |          Run |              30 | Completed | Cardio |\n";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_day_table_empty_reports_not_found() {
        let table = render_day_table(std::iter::empty::<&WorkoutRecord>(), &ReportStyle::default());
        assert!(table.ends_with("No workouts found on this date.\n"));
        assert!(!table.contains("|  "));
    }

    #[test]
    fn test_full_table_plain() {
        let style = ReportStyle::plain();
        let records = vec![run(), WorkoutRecord::new("Stretch|Roll", "05-02", 15, Category::Other)];
        let table = render_full_table(&records, &style);

        assert!(table.contains("|      05-01 |          Run |              30 | No | Cardio |\n"));
        assert!(table.contains("|      05-02 | Stretch/Roll |              15 | No | Other |\n"));
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn test_emoji_markers() {
        let markers = StatusMarkers::default();
        assert_eq!(markers.day_status(WorkoutStatus::Paused), "Paused ⏸️");
        assert_eq!(markers.completed_flag(WorkoutStatus::Completed), "Yes ✅");
        assert_eq!(markers.completed_flag(WorkoutStatus::Paused), "No ❌");
    }

    #[test]
    fn test_palette_defaults() {
        let palette = AccentPalette::default();
        assert_eq!(palette.accent_for(Category::Cardio), Some(Color::Green));
        assert_eq!(palette.accent_for(Category::Strength), Some(Color::Blue));
        assert_eq!(palette.accent_for(Category::Flexibility), Some(Color::Yellow));
        assert_eq!(palette.accent_for(Category::Hiit), Some(Color::Red));
        assert_eq!(palette.accent_for(Category::Other), None);
        assert_eq!(palette.paint(Category::Other), "Other");
    }

    #[test]
    fn test_palette_injected_mapping() {
        let mut settings = DisplaySettings::default();
        settings.accents.clear();
        settings.accents.insert("Other".to_string(), "cyan".to_string());
        settings.neutral_accent = "white".to_string();

        let palette = AccentPalette::from_settings(&settings).unwrap();
        assert_eq!(palette.accent_for(Category::Other), Some(Color::Cyan));
        assert_eq!(palette.accent_for(Category::Cardio), Some(Color::White));
    }

    #[test]
    fn test_palette_disabled_paints_plain() {
        let mut settings = DisplaySettings::default();
        settings.use_color = false;
        let palette = AccentPalette::from_settings(&settings).unwrap();
        assert_eq!(palette.paint(Category::Cardio), "Cardio");
    }

    #[test]
    fn test_statistics_block() {
        let stats = WorkoutStatistics {
            total_workouts: 2,
            total_duration_minutes: 75,
            completed_workouts: 1,
            average_duration_minutes: Some(dec!(75)),
            average_basis: AverageBasis::AllRecords,
        };
        let text = render_statistics(&stats);
        assert!(text.contains("Total Workouts: 2\n"));
        assert!(text.contains("Total Duration: 75 mins\n"));
        assert!(text.contains("Completed Workouts: 1\n"));
        assert!(text.contains("Average Duration: 75 mins\n"));

        let stats = WorkoutStatistics {
            completed_workouts: 0,
            average_duration_minutes: None,
            ..stats
        };
        assert!(render_statistics(&stats).contains("Average Duration: N/A (No workouts completed)"));
    }
}
