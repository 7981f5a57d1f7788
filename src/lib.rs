// Library interface for trainlog modules
// This allows integration tests to drive whole sessions

pub mod completion;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod report;
pub mod session;
pub mod tracker;

// Re-export commonly used types for convenience
pub use models::*;
pub use completion::{run_completion_flow, CompletionOutcome};
pub use config::AppConfig;
pub use error::{Result, TrainlogError};
pub use input::{Console, ParseOutcome};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use report::{AccentPalette, ReportStyle};
pub use session::{Session, SessionSummary};
pub use tracker::{AverageBasis, WorkoutStatistics, WorkoutTracker};
