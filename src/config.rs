use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ConfigError, Result};
use crate::logging::LogConfig;
use crate::models::Category;
use crate::tracker::AverageBasis;

/// Color name meaning "no accent"
pub const NEUTRAL_COLOR: &str = "none";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Table and accent settings
    pub display: DisplaySettings,

    /// Statistics report settings
    pub statistics: StatisticsSettings,

    /// Logging settings
    pub logging: LogConfig,
}

/// Report display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Emit color escapes around category names
    pub use_color: bool,

    /// Use emoji status markers (✅ ⏸️ ❌ 🎉)
    pub show_emoji: bool,

    /// Accent for categories without an entry in `accents`
    pub neutral_accent: String,

    /// Category label -> color name
    pub accents: BTreeMap<String, String>,
}

/// Statistics report settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsSettings {
    /// Numerator used for the average duration
    pub average_basis: AverageBasis,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let accents = [
            (Category::Cardio, "green"),
            (Category::Strength, "blue"),
            (Category::Flexibility, "yellow"),
            (Category::Hiit, "red"),
        ]
        .into_iter()
        .map(|(category, color)| (category.label().to_string(), color.to_string()))
        .collect();

        DisplaySettings {
            use_color: true,
            show_emoji: true,
            neutral_accent: NEUTRAL_COLOR.to_string(),
            accents,
        }
    }
}

/// Parse a color name. `Ok(None)` is the neutral accent.
pub fn parse_color(name: &str) -> std::result::Result<Option<colored::Color>, ()> {
    let name = name.trim();
    if name.eq_ignore_ascii_case(NEUTRAL_COLOR) || name.eq_ignore_ascii_case("default") {
        return Ok(None);
    }
    colored::Color::from_str(name).map(Some)
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that every accent names a known color
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        let entries = display
            .accents
            .iter()
            .map(|(label, color)| (label.as_str(), color.as_str()))
            .chain(std::iter::once(("neutral accent", display.neutral_accent.as_str())));

        for (label, color) in entries {
            if parse_color(color).is_err() {
                return Err(ConfigError::UnknownColor {
                    label: label.to_string(),
                    color: color.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
