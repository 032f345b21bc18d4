//! Runtime configuration
//!
//! Values come from an optional YAML settings file, then environment
//! variables override individual fields. Everything falls back to sensible
//! defaults when neither is set.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Simulated latency in ms. Override with `CRYPTO_PREDICT_DELAY_MS`.
pub const DELAY_ENV: &str = "CRYPTO_PREDICT_DELAY_MS";
/// Log directory. Override with `CRYPTO_PREDICT_LOG_DIR`.
pub const LOG_DIR_ENV: &str = "CRYPTO_PREDICT_LOG_DIR";
/// Fixed RNG seed for reproducible runs. Override with `CRYPTO_PREDICT_SEED`.
pub const SEED_ENV: &str = "CRYPTO_PREDICT_SEED";
/// Settings file path. Override with `CRYPTO_PREDICT_SETTINGS`.
pub const SETTINGS_ENV: &str = "CRYPTO_PREDICT_SETTINGS";

/// Settings schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default = "default_animations")]
    pub animations: bool,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Seed for the generator; entropy when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_delay_ms() -> u64 {
    1500
}
fn default_animations() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    80
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_delay_ms(),
            animations: default_animations(),
            tick_rate_ms: default_tick_rate_ms(),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from file and environment
    pub fn load() -> Self {
        let mut settings = Self::load_file(&settings_path());
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    /// Read a settings file; a missing or malformed file yields defaults
    pub fn load_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => {
                info!("Settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        // An empty file is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(DELAY_ENV) {
            match raw.trim().parse() {
                Ok(ms) => self.simulated_delay_ms = ms,
                Err(_) => warn!("{} is not a number: {:?}", DELAY_ENV, raw),
            }
        }
        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!("{} is not a number: {:?}", SEED_ENV, raw),
            }
        }
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

/// Settings file location
pub fn settings_path() -> PathBuf {
    if let Ok(path) = std::env::var(SETTINGS_ENV) {
        return PathBuf::from(path);
    }
    // Try XDG config dir first
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("crypto-predict").join("settings.yaml");
    }
    PathBuf::from(".crypto-predict-settings.yaml")
}

/// Directory the log file is written to
pub fn log_dir() -> PathBuf {
    std::env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
}

/// Path to the log file
pub fn log_file() -> PathBuf {
    log_dir().join("crypto-predict.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.simulated_delay(), Duration::from_millis(1500));
        assert!(settings.animations);
        assert_eq!(settings.tick_rate(), Duration::from_millis(80));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_file(&dir.path().join("nope.yaml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "animations: false\n").unwrap();

        let settings = Settings::load_file(&path);
        assert!(!settings.animations);
        assert_eq!(settings.simulated_delay_ms, 1500);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "simulated_delay_ms: [not, a, number]\n").unwrap();

        assert_eq!(Settings::load_file(&path), Settings::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "").unwrap();

        assert_eq!(Settings::load_file(&path), Settings::default());
    }

    #[test]
    fn test_written_file_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let settings = Settings {
            simulated_delay_ms: 250,
            animations: false,
            tick_rate_ms: 50,
            seed: Some(7),
        };

        fs::write(&path, serde_yaml::to_string(&settings).unwrap()).unwrap();
        assert_eq!(Settings::load_file(&path), settings);
    }

    #[test]
    fn test_env_override() {
        let mut settings = Settings::default();
        settings.apply_env(|key| (key == DELAY_ENV).then(|| "300".to_string()));
        assert_eq!(settings.simulated_delay_ms, 300);

        settings.apply_env(|_| Some("soon".to_string()));
        assert_eq!(settings.simulated_delay_ms, 300);
        assert_eq!(settings.seed, None);

        settings.apply_env(|key| (key == SEED_ENV).then(|| "42".to_string()));
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_tick_rate_floor() {
        let settings = Settings {
            tick_rate_ms: 0,
            ..Settings::default()
        };
        assert_eq!(settings.tick_rate(), Duration::from_millis(10));
    }
}
