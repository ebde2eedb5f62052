use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::CoreError;
use crate::models::settings::Settings;

/// JSON-backed settings document.
///
/// Corruption never surfaces to the caller: a missing or unparsable
/// document falls back to `Settings::default()` (and logs a warning).
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying JSON document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings, falling back to defaults when the document is
    /// missing, unreadable, or corrupt.
    #[must_use]
    pub fn load(&self) -> Settings {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read settings, using defaults");
                return Settings::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt settings document, using defaults");
                Settings::default()
            }
        }
    }

    /// Persist the settings, overwriting any prior document.
    pub fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
