//! Adapter for arbitrary `io::Write` values

use crate::core::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Wraps any writer so it can serve as a shared sink
///
/// The writer sits behind its own mutex, which only keeps single `write_all`
/// calls whole; ordering across loggers is still the caller's concern.
pub struct WriterSink<W> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: name.into(),
        }
    }

    /// Unwrap the inner writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.writer.lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
