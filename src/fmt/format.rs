//! Line formatting strategy.
//!
//! The logger never hardcodes the line layout; it holds a [`Formatter`] and the
//! caller may swap in any closure with the same shape.

use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt;
use std::sync::Arc;

/// strftime pattern for the timestamp in the default line, e.g.
/// `Sat Jun 12 2010 01:12:05 GMT-0400`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

type FormatFn = dyn Fn(Level, &DateTime<Local>, &str) -> String + Send + Sync;

/// Maps `(level, timestamp, message)` to the line written to the sink.
///
/// Cheap to clone; the closure is shared.
#[derive(Clone)]
pub struct Formatter {
    inner: Arc<FormatFn>,
}

impl Formatter {
    /// Wraps a custom formatting closure.
    ///
    /// ```
    /// use sevlog::fmt::Formatter;
    /// use sevlog::Level;
    ///
    /// let f = Formatter::new(|level, _ts, msg| format!("{}:{msg}", level.as_str().to_uppercase()));
    /// assert_eq!(f.format(Level::Warn, &chrono::Local::now(), " disk"), "WARN: disk");
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Level, &DateTime<Local>, &str) -> String + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    #[must_use]
    pub fn format(&self, level: Level, timestamp: &DateTime<Local>, message: &str) -> String {
        (self.inner)(level, timestamp, message)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(default_format)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter").finish_non_exhaustive()
    }
}

/// `<level> [<timestamp>] <message>` with nothing else between the pieces.
#[must_use]
pub fn default_format(level: Level, timestamp: &DateTime<Local>, message: &str) -> String {
    format!(
        "{level} [{}] {message}",
        timestamp.format(DEFAULT_TIMESTAMP_FORMAT)
    )
}
