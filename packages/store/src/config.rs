//! # Application configuration: `agrifuture.toml`
//!
//! The launchers embed `agrifuture.toml` at build time and parse it into an
//! [`AppConfig`]. It controls where the session record is stored, how long each
//! simulated delay lasts, and the log level.
//!
//! ## Structure
//!
//! ```toml
//! [session]
//! storage_key = "user"   # localStorage key / file name of the record
//!
//! [timing]
//! splash_ms = 1000       # loading screen before the router mounts
//! weather_ms = 1000      # mock weather fetch on the dashboard
//! analysis_ms = 3000     # mock crop analysis
//! notice_ms = 3000       # how long upload rejections stay visible
//!
//! [logging]
//! level = "info"
//! ```
//!
//! All structs derive `Default` so that a missing or empty file is equivalent to
//! the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_STORAGE_KEY;

/// Top-level configuration stored in `agrifuture.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

/// Simulated latencies, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_splash_ms")]
    pub splash_ms: u64,
    #[serde(default = "default_weather_ms")]
    pub weather_ms: u64,
    #[serde(default = "default_analysis_ms")]
    pub analysis_ms: u64,
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,
}

fn default_splash_ms() -> u64 {
    1000
}

fn default_weather_ms() -> u64 {
    1000
}

fn default_analysis_ms() -> u64 {
    3000
}

fn default_notice_ms() -> u64 {
    3000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_ms: default_splash_ms(),
            weather_ms: default_weather_ms(),
            analysis_ms: default_analysis_ms(),
            notice_ms: default_notice_ms(),
        }
    }
}

impl TimingConfig {
    pub fn splash(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn weather(&self) -> Duration {
        Duration::from_millis(self.weather_ms)
    }

    pub fn analysis(&self) -> Duration {
        Duration::from_millis(self.analysis_ms)
    }

    pub fn notice(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level. Unknown names fall back to `INFO`.
    pub fn level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "agrifuture.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse, falling back to defaults (with a warning) when the file is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}: {}", Self::filename(), e);
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.storage_key, "user");
        assert_eq!(config.timing.splash(), Duration::from_secs(1));
        assert_eq!(config.timing.analysis(), Duration::from_secs(3));
        assert_eq!(config.logging.level(), tracing::Level::INFO);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [timing]
            analysis_ms = 10

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.timing.analysis_ms, 10);
        assert_eq!(config.timing.notice_ms, 3000);
        assert_eq!(config.logging.level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_falls_back() {
        let config = AppConfig::from_toml_or_default("[timing]\nsplash_ms = \"soon\"");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_level() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
        };
        assert_eq!(logging.level(), tracing::Level::INFO);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.session.storage_key = "agrifuture.user".to_string();
        let parsed = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
