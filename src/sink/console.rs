//! Console destination. The default sink when no file path is given.

use super::Sink;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each line to a standard stream as soon as it is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    /// The default destination of a logger without a file target.
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    /// Used by the crate's own diagnostics so they never mix into stdout output.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Sink for ConsoleSink {
    fn accept(&self, line: &str) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            Stream::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
