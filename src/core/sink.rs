//! Sink trait for log output destinations

use std::io;

/// A writable byte destination
///
/// Writes go through `&self` so a sink can be shared by any number of
/// loggers; implementations decide how (or whether) concurrent writers are
/// kept apart.
pub trait Sink: Send + Sync {
    fn write_all(&self, buf: &[u8]) -> io::Result<()>;
    fn flush(&self) -> io::Result<()>;
    fn name(&self) -> &str;
}
