//! Line-writer: decorates a composed line and hands it to the sink

use super::flags::Flags;
use super::sink::Sink;
use chrono::Utc;
use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A sink handle bound to a set of decoration flags
///
/// Cloning produces a new writer that shares the sink target.
#[derive(Clone)]
pub struct LineWriter {
    sink: Arc<dyn Sink>,
    flags: Flags,
}

impl LineWriter {
    pub fn new(sink: Arc<dyn Sink>, flags: Flags) -> Self {
        Self { sink, flags }
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Write `line` with its header and a trailing newline in one call
    pub fn write_line(&self, line: &str, caller: &Location<'_>) -> io::Result<()> {
        let mut buf = self.flags.header(Utc::now(), caller);
        buf.reserve(line.len() + 1);
        buf.push_str(line);
        if !line.ends_with('\n') {
            buf.push('\n');
        }
        self.sink.write_all(buf.as_bytes())
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("sink", &self.sink.name())
            .field("flags", &self.flags)
            .finish()
    }
}
