//! Sink implementations

pub mod buffer;
pub mod console;
pub mod file;
pub mod writer;

pub use buffer::BufferSink;
pub use console::{StderrSink, StdoutSink};
pub use file::FileSink;
pub use writer::WriterSink;

pub use crate::core::Sink;
