//! Core logger types and traits

pub mod error;
pub mod flags;
pub mod formatter;
pub mod line_writer;
pub mod logger;
pub mod settings;
pub mod sink;
pub mod token;

pub use error::{ReadableError, Result};
pub use flags::Flags;
pub use formatter::Formatter;
pub use line_writer::LineWriter;
pub use logger::{Logger, FATAL_EXIT_CODE};
pub use settings::{OutputTarget, Settings};
pub use sink::Sink;
pub use token::Token;
