//! Page configuration.
//!
//! The page may embed a JSON block
//! (`<script type="application/json" id="portfolio-config">`) to override the
//! typing titles, particle look, storage key, and log level. Every field has
//! a default, so an absent block or an empty object yields [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_TITLES: [&str; 6] = [
    "Senior .NET Developer",
    "Azure Cloud Engineer",
    "Angular Developer",
    "Camunda Workflow Engineer",
    "Microservices Architect",
    "Clean Architecture Advocate",
];
pub const DEFAULT_PALETTE: [&str; 4] = ["#6366f1", "#8b5cf6", "#ec4899", "#06b6d4"];
pub const DEFAULT_PARTICLE_COUNT: usize = 30;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_SENDING_LABEL: &str = "Sending...";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Titles cycled by the typing animator, in order.
    pub titles: Vec<String>,
    /// Number of particles created at startup.
    pub particle_count: usize,
    /// Colors particles pick from.
    pub particle_palette: Vec<String>,
    /// Local storage key holding the theme preference.
    pub theme_storage_key: String,
    /// Text shown next to the spinner while the contact form submits.
    pub sending_label: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            titles: DEFAULT_TITLES.iter().map(|t| (*t).to_owned()).collect(),
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            sending_label: DEFAULT_SENDING_LABEL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a config block.
    ///
    /// At least one title must be non-empty (the typewriter skips empty ones),
    /// and the palette must be non-empty. An empty or whitespace-only block
    /// means "all defaults".
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.titles.iter().all(String::is_empty) {
            return Err(ConfigError::NoTitles);
        }
        if self.particle_palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        self.log_level()?;
        Ok(())
    }

    /// The configured log level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
