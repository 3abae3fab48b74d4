//! `sevlog` - minimal leveled logging to stdout or an append-only file.
//!
//! Five fixed levels, most severe first: `fatal`, `error`, `warn`, `info`,
//! `debug`. A call is written when its level is at least as severe as the
//! logger's threshold (default `info`).
//!
//! # Example
//!
//! ```
//! use sevlog::{Logger, MemorySink, parts};
//! use serde_json::json;
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::builder().headerless(true).sink(sink.clone()).build()?;
//!
//! assert_eq!(logger.log(&parts!["info", "user", json!({"id": 7})])?.as_deref(), Some(" user { id: 7 }"));
//! assert_eq!(logger.debug(&parts!["hidden"])?, None);
//!
//! assert!(logger.set_level("debug"));
//! assert!(logger.debug(&parts!["shown"])?.is_some());
//! assert_eq!(sink.writes(), 2);
//! # Ok::<(), sevlog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `sevlog` binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod part;
pub mod sink;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{Formatter, Node, inspect};
pub use level::{Level, ParseLevelError};
pub use logger::{LogResult, Logger, LoggerBuilder};
pub use part::Part;
pub use sink::{ConsoleSink, FileSink, MemorySink, Sink};

/// Same as [`Logger::new`]: a file logger when `target` is given, stdout otherwise.
///
/// # Errors
/// Fails when the file cannot be opened or written.
pub fn create_logger(target: Option<&std::path::Path>) -> Result<Logger, Error> {
    Logger::new(target)
}
