//! Logger construction from a [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Builds a logger from config values; an unknown level name falls back to `info`.
    ///
    /// # Errors
    /// Fails when the configured file cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let level = config.parse_level();
        internal::debug(&format!(
            "building logger: level={level}, headerless={}",
            config.headerless
        ));

        let builder = LoggerBuilder::new()
            .level(level)
            .headerless(config.headerless);

        let builder = match &config.path {
            Some(path) => {
                internal::debug(&format!("output: file {path}"));
                builder.file(path)
            }
            None => {
                internal::debug("output: stdout");
                builder.stdout()
            }
        };

        builder.build()
    }
}
