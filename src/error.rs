//! Unified error type for all sevlog operations.

/// Error type for sevlog operations.
#[derive(Debug)]
pub enum Error {
    /// The sink could not be opened or written.
    Io(std::io::Error),
    /// Unknown level name.
    InvalidLevel(String),
    /// Path could not be resolved (e.g. `~` without a home directory).
    InvalidPath(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidLevel(_) | Self::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.name().to_string())
    }
}
