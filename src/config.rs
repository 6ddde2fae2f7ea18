use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "fa_tracker.json";

/// Startup settings. Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the `{hitters|pitchers}_{YY}*.csv` exports.
    pub data_dir: PathBuf,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("."),
            window_size: [1200.0, 800.0],
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Settings from `path` if it exists; defaults when it is absent or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No {} found, using defaults", path.display());
            return AppConfig::default();
        }
        match AppConfig::from_file(path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {e:#}");
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "data_dir": "/srv/fa" }"#).unwrap();

        let config = AppConfig::load_or_default(&path);
        assert_eq!(config.data_dir, PathBuf::from("/srv/fa"));
        assert_eq!(config.window_size, [1200.0, 800.0]);
    }

    #[test]
    fn test_missing_or_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());

        std::fs::write(&path, "not json").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }
}
