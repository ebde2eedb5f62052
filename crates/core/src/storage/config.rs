use std::path::PathBuf;

/// Where the reading log and the settings document live on disk.
///
/// Passed explicitly to `ChargeTracker::new` — there is no process-wide
/// default location.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// CSV file holding the reading log
    pub data_path: PathBuf,

    /// JSON document holding the form-default settings
    pub settings_path: PathBuf,
}

impl StorageConfig {
    pub fn new(data_path: impl Into<PathBuf>, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            settings_path: settings_path.into(),
        }
    }

    /// Conventional file names (`data.csv`, `settings.json`) inside a
    /// data directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            data_path: dir.join("data.csv"),
            settings_path: dir.join("settings.json"),
        }
    }
}
