//! Append-only file destination.

use super::Sink;
use crate::internal;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Separates sessions when several runs append to the same file.
const SESSION_SEPARATOR: &str = "\n";

/// An append-mode UTF-8 text file, opened once and kept for the logger's lifetime.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Normalizes `path`, opens it for appending (creating it if needed) and
    /// writes the session separator.
    ///
    /// # Errors
    /// `Error::InvalidPath` if `~` cannot be expanded, `Error::Io` if the file
    /// cannot be opened or the separator cannot be written.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = normalize_path(path.as_ref())?;
        internal::debug(&format!("opening log file {}", path.display()));

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }

        let mut file = match options.open(&path) {
            Ok(file) => file,
            Err(e) => {
                internal::error(&format!("failed to open {}: {e}", path.display()));
                return Err(e.into());
            }
        };
        file.write_all(SESSION_SEPARATOR.as_bytes())?;

        Ok(Self { path, file })
    }

    /// The normalized path actually opened.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn accept(&self, line: &str) -> Result<(), crate::Error> {
        // Single write per line so appends from one logger keep call order
        (&self.file).write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (&self.file).flush()?;
        Ok(())
    }
}

/// Expands a leading `~` and resolves `.` and `..` lexically.
///
/// The filesystem is not consulted, so symlinks are left alone and the path
/// need not exist yet.
///
/// # Errors
/// `Error::InvalidPath` when the path starts with `~` but no home directory is known.
pub fn normalize_path(path: &Path) -> Result<PathBuf, crate::Error> {
    let expanded = match path.to_str() {
        Some(s) if s == "~" || s.starts_with("~/") => {
            let expanded = shellexpand::tilde(s);
            if expanded.starts_with('~') {
                return Err(crate::Error::InvalidPath(format!(
                    "could not resolve home directory in {s}"
                )));
            }
            PathBuf::from(expanded.into_owned())
        }
        _ => path.to_path_buf(),
    };

    let mut out = PathBuf::new();
    for component in expanded.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => out.push(".."),
            },
            other => out.push(other),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    Ok(out)
}
