//! Console sinks

use crate::core::Sink;
use std::io::{self, Write};

/// Process standard error, the default sink
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }

    fn name(&self) -> &str {
        "stderr"
    }
}

/// Process standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
