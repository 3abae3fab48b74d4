//! Sevlog's own diagnostic logger, writing to stderr so it never mixes with the
//! lines a caller sends to stdout.
//!
//! Uses `OnceLock` so the logger is initialized exactly once. Until `init` is
//! called every diagnostic is dropped.

use crate::level::Level;
use crate::logger::Logger;
use crate::part::Part;
use crate::sink::ConsoleSink;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Only the first call takes effect; later calls keep the existing threshold.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let mut logger = Logger::with_sink(ConsoleSink::stderr());
        logger.set_threshold(level);
        logger
    });
    if !was_init {
        debug(&format!("internal logger ready at {level}"));
    }
}

/// Pre-init calls silently vanish, and a failing stderr is not worth reporting.
fn log(level: Level, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        let _ = logger.log_at(level, &[Part::from("sevlog:"), Part::from(msg)]);
    }
}

/// Reports at `debug`, shown only when `init` was given `Level::Debug`.
pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

/// Reports at `info`.
pub fn info(msg: &str) {
    log(Level::Info, msg);
}

/// Reports at `warn`.
pub fn warn(msg: &str) {
    log(Level::Warn, msg);
}

/// Reports at `error`.
pub fn error(msg: &str) {
    log(Level::Error, msg);
}
