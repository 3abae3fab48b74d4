//! Where finished lines go. The logger only knows the [`Sink`] trait, so the
//! console and append-file destinations are interchangeable with anything a
//! caller writes.

mod console;
mod file;
mod memory;

pub use console::ConsoleSink;
pub use file::{FileSink, normalize_path};
pub use memory::MemorySink;

/// `Send + Sync` so a logger can be moved or shared behind the caller's own lock.
///
/// The logger performs no locking of its own. A sink shared between threads is
/// responsible for keeping each line intact.
pub trait Sink: Send + Sync {
    /// Writes one finished line, trailing newline included.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn accept(&self, line: &str) -> Result<(), crate::Error>;

    /// Pushes anything the underlying stream buffers.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
