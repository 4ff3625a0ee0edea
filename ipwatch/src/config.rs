//! User configuration.
//!
//! Settings live in `<config_dir>/ipwatch/config.toml`. Every field is
//! optional; a missing file means defaults.
//!
//! ```toml
//! include_ipv6 = true
//! include_loopback = false
//! refresh_interval_ms = 500
//! title = "Car 3"
//! banner = "F1/10"
//! mode_label = "Mode: Manual"
//! ```

use log::debug;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Result;
use crate::api::models::{EnumerateOptions, WatchError};
use crate::types::constants::{display, paths, timing};

/// Settings for the address list and the status window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    pub include_ipv6: bool,
    pub include_loopback: bool,
    pub refresh_interval_ms: u64,
    pub title: String,
    pub banner: String,
    pub mode_label: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        let options = EnumerateOptions::default();
        Self {
            include_ipv6: options.include_ipv6,
            include_loopback: options.include_loopback,
            refresh_interval_ms: timing::REFRESH_INTERVAL_MS,
            title: display::WINDOW_TITLE.to_string(),
            banner: display::BANNER.to_string(),
            mode_label: display::MODE_LABEL.to_string(),
        }
    }
}

impl WatchConfig {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(paths::CONFIG_DIR).join(paths::CONFIG_FILE))
    }

    /// Loads the config from [`default_path`](Self::default_path).
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads and validates the config at `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = Self::parse(&contents)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that `refresh_interval_ms` is within `1..=u32::MAX`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=timing::MAX_REFRESH_INTERVAL_MS).contains(&self.refresh_interval_ms) {
            return Err(WatchError::InvalidInterval(self.refresh_interval_ms));
        }
        Ok(())
    }

    pub fn options(&self) -> EnumerateOptions {
        EnumerateOptions::default()
            .with_ipv6(self.include_ipv6)
            .with_loopback(self.include_loopback)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_baseline() {
        let config = WatchConfig::default();
        assert!(!config.include_ipv6);
        assert!(config.include_loopback);
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
        assert_eq!(config.title, "F1/10 GUI");
        assert_eq!(config.options(), EnumerateOptions::default());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(WatchConfig::parse("").unwrap(), WatchConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = WatchConfig::parse("include_ipv6 = true\nrefresh_interval_ms = 250\n").unwrap();
        assert!(config.include_ipv6);
        assert_eq!(config.refresh_interval(), Duration::from_millis(250));
        assert_eq!(config.banner, "F1/10");
        assert!(config.options().include_ipv6);
    }

    #[test]
    fn zero_interval_rejected() {
        let err = WatchConfig::parse("refresh_interval_ms = 0").unwrap_err();
        assert!(matches!(err, WatchError::InvalidInterval(0)));
    }

    #[test]
    fn interval_beyond_u32_millis_rejected() {
        let err = WatchConfig::parse("refresh_interval_ms = 4294967296").unwrap_err();
        assert!(matches!(err, WatchError::InvalidInterval(4_294_967_296)));
    }

    #[test]
    fn largest_u32_interval_accepted() {
        let config = WatchConfig::parse("refresh_interval_ms = 4294967295").unwrap();
        assert_eq!(config.refresh_interval_ms, u64::from(u32::MAX));
    }

    #[test]
    fn malformed_document_rejected() {
        let err = WatchConfig::parse("include_ipv6 = \"yes\"").unwrap_err();
        assert!(matches!(err, WatchError::Config(_)));
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(WatchConfig::parse("colour = \"red\"").is_err());
    }
}
