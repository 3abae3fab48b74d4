//! Stepwise construction for everything `Logger::new` does not expose: threshold,
//! headerless mode, a custom formatter or a custom sink.

use super::Logger;
use crate::fmt::Formatter;
use crate::level::Level;
use crate::sink::{ConsoleSink, FileSink, Sink};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Where the built logger writes.
enum Target {
    Stdout,
    File(PathBuf),
    Custom(Box<dyn Sink>),
}

/// Nothing is opened until [`build`](Self::build), so a builder can be assembled
/// and discarded without touching the filesystem.
pub struct LoggerBuilder {
    threshold: Level,
    headerless: bool,
    formatter: Formatter,
    target: Target,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Stdout, threshold `info`, default line format.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Level::Info,
            headerless: false,
            formatter: Formatter::default(),
            target: Target::Stdout,
        }
    }

    /// Initial threshold. Defaults to `info`.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Emit the assembled message only, without level and timestamp.
    #[must_use]
    pub const fn headerless(mut self, enabled: bool) -> Self {
        self.headerless = enabled;
        self
    }

    /// Replaces the default `<level> [<timestamp>] <message>` layout.
    #[must_use]
    pub fn formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(Level, &DateTime<Local>, &str) -> String + Send + Sync + 'static,
    {
        self.formatter = Formatter::new(f);
        self
    }

    /// Writes to stdout. This is the default.
    #[must_use]
    pub fn stdout(mut self) -> Self {
        self.target = Target::Stdout;
        self
    }

    /// Appends to the file at `path`, opened by [`build`](Self::build).
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = Target::File(path.into());
        self
    }

    /// Any destination the two built-ins don't cover.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.target = Target::Custom(Box::new(sink));
        self
    }

    /// # Errors
    /// Fails when a file target cannot be opened or the separator line cannot be written.
    pub fn build(self) -> Result<Logger, crate::Error> {
        let sink: Box<dyn Sink> = match self.target {
            Target::Stdout => Box::new(ConsoleSink::stdout()),
            Target::File(path) => Box::new(FileSink::open(path)?),
            Target::Custom(sink) => sink,
        };

        Ok(Logger {
            threshold: self.threshold,
            sink,
            formatter: self.formatter,
            headerless: self.headerless,
        })
    }
}
