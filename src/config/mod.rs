//! Runtime options: threshold, headerless mode and the optional file target.
//!
//! `Config` is a plain serde struct so an embedding application can fill it from
//! whatever format it already reads. The crate itself only reads environment
//! variables.

use crate::internal;
use crate::level::Level;
use serde::Deserialize;

/// Threshold name, e.g. `debug`.
pub const ENV_LEVEL: &str = "SEVLOG_LEVEL";
/// `1`, `true`, `yes` or `on` enables headerless mode.
pub const ENV_HEADERLESS: &str = "SEVLOG_HEADERLESS";
/// Append to this file instead of stdout.
pub const ENV_FILE: &str = "SEVLOG_FILE";

/// An empty config still yields a working stdout logger at `info`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Threshold name; parsed when the logger is built.
    pub level: String,
    /// Suppress level and timestamp decoration.
    pub headerless: bool,
    /// File target; `None` logs to stdout.
    pub path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::default().as_str().to_string(),
            headerless: false,
            path: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `SEVLOG_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `SEVLOG_*` keys.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LEVEL) {
            config.level = level;
        }
        if let Some(flag) = lookup(ENV_HEADERLESS) {
            config.headerless = parse_flag(&flag);
        }
        if let Some(path) = lookup(ENV_FILE).filter(|p| !p.is_empty()) {
            config.path = Some(path);
        }
        config
    }

    /// The configured threshold, or `info` when the name is not a level.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        Level::from_name(&self.level).unwrap_or_else(|| {
            internal::warn(&format!(
                "unknown level '{}' in config, using info",
                self.level
            ));
            Level::Info
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
