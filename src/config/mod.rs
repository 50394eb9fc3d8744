//! Configuration management.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::observability::{LogFormat, LoggingConfig};
use crate::services::DEFAULT_PAGE_SIZE;
use crate::{Error, Result};

/// Default settling delay before a page is appended.
pub const DEFAULT_SETTLE_INTERVAL: Duration = Duration::from_millis(500);

/// Default distance from the bottom of the document that triggers a load.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 1000.0;

/// Default capacity of the discovery event bus.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV: &str = "CREATORSCOPE_PAGE_SIZE";

/// Environment variable overriding the settling delay, in milliseconds.
pub const SETTLE_MS_ENV: &str = "CREATORSCOPE_SETTLE_MS";

/// Main configuration for the discovery engine.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Records revealed per page.
    pub page_size: usize,
    /// Delay between a load-more trigger and the page append.
    pub settle_interval: Duration,
    /// Scroll distance from the bottom that counts as near-bottom.
    pub scroll_threshold_px: f64,
    /// Buffer size of the event bus.
    pub event_capacity: usize,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Page size.
    pub page_size: Option<usize>,
    /// Settling delay in milliseconds.
    pub settle_ms: Option<u64>,
    /// Scroll threshold in pixels.
    pub scroll_threshold_px: Option<f64>,
    /// Event bus capacity.
    pub event_capacity: Option<usize>,
    /// Logging section.
    pub logging: Option<ConfigFileLogging>,
}

/// Logging section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileLogging {
    /// `"pretty"` or `"json"`.
    pub format: Option<String>,
    /// `EnvFilter` directive, e.g. `"creatorscope=debug"`.
    pub filter: Option<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            settle_interval: DEFAULT_SETTLE_INTERVAL,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            logging: LoggingConfig::default(),
        }
    }
}

impl DiscoveryConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting values are invalid.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for [`ConfigFile`], or
    /// if the resulting values are invalid.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
        let config = Self::from_config_file(file);
        config.validate()?;
        Ok(config)
    }

    /// Converts a `ConfigFile` to `DiscoveryConfig`.
    #[must_use]
    pub fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(page_size) = file.page_size {
            config.page_size = page_size;
        }
        if let Some(settle_ms) = file.settle_ms {
            config.settle_interval = Duration::from_millis(settle_ms);
        }
        if let Some(threshold) = file.scroll_threshold_px {
            config.scroll_threshold_px = threshold;
        }
        if let Some(capacity) = file.event_capacity {
            config.event_capacity = capacity;
        }
        if let Some(logging) = file.logging {
            if let Some(format) = logging.format {
                config.logging.format = LogFormat::parse(&format);
            }
            if let Some(filter) = logging.filter {
                config.logging.filter = filter;
            }
        }

        config
    }

    /// Applies `CREATORSCOPE_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is set but not a valid number.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            self.page_size = parse_env(PAGE_SIZE_ENV, &raw)?;
        }
        if let Some(raw) = lookup(SETTLE_MS_ENV) {
            self.settle_interval = Duration::from_millis(parse_env(SETTLE_MS_ENV, &raw)?);
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a zero page size, zero event capacity or
    /// a negative scroll threshold.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        if self.event_capacity == 0 {
            return Err(Error::Config("event_capacity must be at least 1".to_string()));
        }
        if self.scroll_threshold_px.is_nan() || self.scroll_threshold_px < 0.0 {
            return Err(Error::Config(
                "scroll_threshold_px must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the settling delay.
    #[must_use]
    pub const fn with_settle_interval(mut self, interval: Duration) -> Self {
        self.settle_interval = interval;
        self
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} must be a number, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_discovery_page() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.settle_interval, Duration::from_millis(500));
        assert!((config.scroll_threshold_px - 1000.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_overrides_fields() {
        let config = DiscoveryConfig::from_toml(
            r#"
            page_size = 24
            settle_ms = 0

            [logging]
            format = "json"
            filter = "creatorscope=debug"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.page_size, 24);
        assert_eq!(config.settle_interval, Duration::ZERO);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.filter, "creatorscope=debug");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = DiscoveryConfig::from_toml("page_size = 0").expect_err("invalid config");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(DiscoveryConfig::from_toml("page_size = \"many\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("creatorscope.toml");
        std::fs::write(&path, "scroll_threshold_px = 250.0\n").expect("write config");

        let config = DiscoveryConfig::load_from_file(&path).expect("valid config");
        assert!((config.scroll_threshold_px - 250.0).abs() < f64::EPSILON);
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_missing_file_is_operation_failed() {
        let err = DiscoveryConfig::load_from_file(Path::new("/nonexistent/creatorscope.toml"))
            .expect_err("missing file");
        assert!(matches!(err, Error::OperationFailed { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(PAGE_SIZE_ENV, "6"), (SETTLE_MS_ENV, "25")].into();
        let config = DiscoveryConfig::default()
            .with_overrides(|key| env.get(key).map(ToString::to_string))
            .expect("valid overrides");
        assert_eq!(config.page_size, 6);
        assert_eq!(config.settle_interval, Duration::from_millis(25));
    }

    #[test]
    fn test_env_override_must_be_numeric() {
        let err = DiscoveryConfig::default()
            .with_overrides(|key| (key == PAGE_SIZE_ENV).then(|| "lots".to_string()))
            .expect_err("invalid override");
        assert!(matches!(err, Error::Config(_)));
    }
}
