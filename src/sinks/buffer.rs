//! In-memory capture sink

use crate::core::Sink;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Cloneable in-memory sink; clones share the same buffer
///
/// Handy for capturing output in tests or for handing recent lines to a
/// status endpoint.
///
/// ```
/// use readable::sinks::BufferSink;
/// use readable::{tokens, Flags, Logger};
///
/// let buf = BufferSink::new();
/// let logger = Logger::new().with_output(buf.clone()).with_flags(Flags::empty());
/// logger.log(&tokens!["k", "v"]);
/// assert_eq!(buf.to_string_lossy(), "k=v\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.inner.lock().clone()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.inner.lock().extend_from_slice(buf);
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}
