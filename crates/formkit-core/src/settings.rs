//! Engine settings.
//!
//! [`EngineSettings`] holds the knobs an embedding application may want to
//! tune without touching code: logging, the placeholder options seeded into
//! new choice fields, and an optional cap on option-list length. Settings
//! load from TOML with defaults for anything left unspecified.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// Configuration for one form engine instance.
///
/// # Examples
///
/// ```
/// use formkit_core::settings::EngineSettings;
///
/// let settings = EngineSettings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.placeholder_options, vec!["Option 1", "Option 2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Whether debug mode is enabled (controls log formatting).
    pub debug: bool,
    /// The tracing filter directive (e.g. "debug", "info", "formkit=debug").
    pub log_level: String,
    /// Options seeded into a freshly created choice field.
    pub placeholder_options: Vec<String>,
    /// Upper bound on option-list length; `None` means unlimited. Lists
    /// longer than the cap are truncated on update.
    pub max_options: Option<usize>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            placeholder_options: vec!["Option 1".to_string(), "Option 2".to_string()],
            max_options: None,
        }
    }
}

impl EngineSettings {
    /// Sets debug mode.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the log filter directive.
    #[must_use]
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Sets the placeholder options for new choice fields.
    #[must_use]
    pub fn placeholder_options(mut self, options: Vec<String>) -> Self {
        self.placeholder_options = options;
        self
    }

    /// Sets the option-list cap.
    #[must_use]
    pub const fn max_options(mut self, max: usize) -> Self {
        self.max_options = Some(max);
        self
    }

    /// Loads settings from a TOML string. Missing keys keep their defaults.
    pub fn from_toml_str(toml_str: &str) -> FormResult<Self> {
        toml::from_str(toml_str)
            .map_err(|e| FormError::Config(format!("failed to parse settings TOML: {e}")))
    }

    /// Loads settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> FormResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            FormError::Config(format!(
                "failed to read {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }
}
