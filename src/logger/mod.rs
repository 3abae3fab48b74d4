//! The leveled logger: threshold check, message assembly, formatting, one sink write.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::fmt::Formatter;
use crate::level::Level;
use crate::part::{self, Part};
use crate::sink::{ConsoleSink, FileSink, Sink};
use chrono::{DateTime, Local};
use std::path::Path;

/// Result of a log call: `Some(line)` when written, `None` when filtered out.
pub type LogResult = Result<Option<String>, crate::Error>;

/// Owns a threshold, a formatter and a sink.
///
/// Every call runs inline: the filter check, message assembly and the sink write
/// all happen before it returns.
pub struct Logger {
    threshold: Level,
    sink: Box<dyn Sink>,
    formatter: Formatter,
    headerless: bool,
}

impl Logger {
    /// Logs to `target` if given, otherwise to stdout.
    ///
    /// A file target is opened in append mode and a blank separator line is written
    /// immediately.
    ///
    /// # Errors
    /// Fails when the file cannot be opened or written. There is no fallback to stdout.
    pub fn new(target: Option<&Path>) -> Result<Self, crate::Error> {
        match target {
            Some(path) => Ok(Self::with_sink(FileSink::open(path)?)),
            None => Ok(Self::with_sink(ConsoleSink::stdout())),
        }
    }

    /// Default threshold and formatter around an already-built sink.
    #[must_use]
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self {
            threshold: Level::default(),
            sink: Box::new(sink),
            formatter: Formatter::default(),
            headerless: false,
        }
    }

    /// Starts a [`LoggerBuilder`] with stdout, threshold `info` and the default format.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Sets the threshold by name. Unknown names leave it untouched and return `false`.
    pub fn set_level(&mut self, name: &str) -> bool {
        match Level::from_name(name) {
            Some(level) => {
                self.threshold = level;
                true
            }
            None => false,
        }
    }

    /// Typed counterpart of [`set_level`](Self::set_level).
    pub const fn set_threshold(&mut self, level: Level) {
        self.threshold = level;
    }

    /// The current threshold.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.threshold
    }

    /// Whether lines carry only the assembled message.
    #[must_use]
    pub const fn is_headerless(&self) -> bool {
        self.headerless
    }

    /// Runs the configured formatter. Pure in its three inputs.
    #[must_use]
    pub fn format(&self, level: Level, timestamp: &DateTime<Local>, message: &str) -> String {
        self.formatter.format(level, timestamp, message)
    }

    /// Central entry point.
    ///
    /// If the first part is text exactly equal to a level name, it selects the
    /// level and is dropped from the message. Otherwise the call logs at the
    /// current threshold, which always passes the filter. Use
    /// [`log_at`](Self::log_at) to log text that could be mistaken for a level.
    ///
    /// # Errors
    /// Propagates the sink's write error.
    pub fn log(&self, parts: &[Part]) -> LogResult {
        let sniffed = parts.split_first().and_then(|(first, rest)| {
            first
                .as_text()
                .and_then(Level::from_name)
                .map(|level| (level, rest))
        });
        let (level, rest) = sniffed.unwrap_or((self.threshold, parts));
        self.emit(level, rest)
    }

    /// Logs `parts` at an explicit level without looking at the first part.
    ///
    /// # Errors
    /// Propagates the sink's write error.
    pub fn log_at(&self, level: Level, parts: &[Part]) -> LogResult {
        self.emit(level, parts)
    }

    /// # Errors
    /// Propagates the sink's write error.
    pub fn fatal(&self, parts: &[Part]) -> LogResult {
        self.log_at(Level::Fatal, parts)
    }

    /// # Errors
    /// Propagates the sink's write error.
    pub fn error(&self, parts: &[Part]) -> LogResult {
        self.log_at(Level::Error, parts)
    }

    /// # Errors
    /// Propagates the sink's write error.
    pub fn warn(&self, parts: &[Part]) -> LogResult {
        self.log_at(Level::Warn, parts)
    }

    /// # Errors
    /// Propagates the sink's write error.
    pub fn info(&self, parts: &[Part]) -> LogResult {
        self.log_at(Level::Info, parts)
    }

    /// # Errors
    /// Propagates the sink's write error.
    pub fn debug(&self, parts: &[Part]) -> LogResult {
        self.log_at(Level::Debug, parts)
    }

    /// # Errors
    /// Returns the sink's flush error.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }

    fn emit(&self, level: Level, parts: &[Part]) -> LogResult {
        if !level.passes(self.threshold) {
            return Ok(None);
        }

        let message = part::assemble(parts);
        let line = if self.headerless {
            message
        } else {
            // Timestamp taken only once the call is admitted
            self.format(level, &Local::now(), &message)
        };

        let mut out = String::with_capacity(line.len() + 1);
        out.push_str(&line);
        out.push('\n');
        self.sink.accept(&out)?;

        Ok(Some(line))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("headerless", &self.headerless)
            .finish_non_exhaustive()
    }
}
