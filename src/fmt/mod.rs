//! Turning a call's level and parts into the final line.

mod format;
pub mod inspect;
mod node;

pub use format::{DEFAULT_TIMESTAMP_FORMAT, Formatter, default_format};
pub use inspect::inspect;
pub use node::{CaptureError, Node};
