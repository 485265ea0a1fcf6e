//! Error types.
//!
//! Nothing here is fatal to the page: `boot` logs each behavior's error and
//! carries on with the next one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Page configuration could not be used; callers fall back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The inline config block is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    /// No non-empty typing titles remain after filtering.
    #[error("config has no typing titles")]
    NoTitles,
    /// The particle palette has no colors.
    #[error("config particle palette is empty")]
    EmptyPalette,
    /// `logLevel` is not a recognized level name.
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// A behavior could not attach to the page.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// No global `window` (not running in a browser).
    #[error("no browser window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// An element the behavior requires is not in the page.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// An element exists but is not the expected kind.
    #[error("element {0} is not an HTML element")]
    NotHtmlElement(String),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The behavior's configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MountError {
    /// Whether this error only means the page opted out of the behavior.
    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// The theme preference could not be written.
#[derive(Debug, thiserror::Error)]
#[error("could not persist preference {key}: {reason}")]
pub struct StorageError {
    pub key: String,
    pub reason: String,
}
