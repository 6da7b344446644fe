//! File sink implementation

use crate::core::{ReadableError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only file sink
///
/// Lines are handed to the OS unbuffered, one `write_all` per line, so a
/// `fatal` that exits right after writing loses nothing.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for appending, creating it if missing
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use readable::sinks::FileSink;
    /// use readable::Logger;
    ///
    /// let sink = FileSink::open("/var/log/app.log").unwrap();
    /// let logger = Logger::new().with_output(sink);
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                ReadableError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        (&self.file).write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (&self.file).flush()
    }

    fn name(&self) -> &str {
        "file"
    }
}
