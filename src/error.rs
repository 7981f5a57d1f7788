//! Error types for trainlog
//!
//! The workout domain itself has no fatal conditions. Errors here come from
//! the terminal (closed or failing streams) and from configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all trainlog operations
#[derive(Debug, Error)]
pub enum TrainlogError {
    /// Standard input closed while a prompt was waiting for an answer
    #[error("Input ended while waiting for: {prompt}")]
    EndOfInput { prompt: String },

    /// IO errors on the terminal streams or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Cannot read config file {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    /// Config file is not valid TOML for this schema
    #[error("Invalid config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// Accent color name not understood by the terminal colorizer
    #[error("Unknown accent color '{color}' for {label}")]
    UnknownColor { label: String, color: String },
}

/// Result type alias for trainlog operations
pub type Result<T> = std::result::Result<T, TrainlogError>;

impl TrainlogError {
    pub fn end_of_input(prompt: impl Into<String>) -> Self {
        TrainlogError::EndOfInput {
            prompt: prompt.into(),
        }
    }

    /// Input ending early is an expected way for a session to stop
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TrainlogError::EndOfInput { .. })
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrainlogError::EndOfInput { .. } => ErrorSeverity::Warning,
            TrainlogError::Configuration(_) => ErrorSeverity::Error,
            TrainlogError::Io(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainlogError::EndOfInput { prompt } => {
                format!("Input closed before answering \"{}\". Ending session.", prompt.trim())
            }
            TrainlogError::Configuration(ConfigError::UnknownColor { label, color }) => {
                format!(
                    "Color '{}' for {} is not supported. Try green, blue, yellow, red, magenta, cyan, white or none.",
                    color, label
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Session cannot continue
    Critical,
    /// Operation failed
    Error,
    /// Session ends or continues with reduced output
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
