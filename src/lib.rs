//! # Readable
//!
//! A small key/value line logger loosely following the 12 Factor Logs idea:
//! every call writes one human-readable line such as
//! `2015/08/21 20:01:48 server listener=:3000`.
//!
//! ## Features
//!
//! - **Derivable configurations**: `with_*` builders return independent
//!   loggers, `set_*` setters change one in place
//! - **Pluggable formatters**: `key=value` by default, `key: value` via
//!   [`formatter::join`], or any `fn(&[Token]) -> String`
//! - **Two write paths**: lock-free [`Logger::log`] and process-wide
//!   serialized [`Logger::log_safe`]
//! - **Default logger**: free functions mirroring every logger method
//!
//! ```
//! use readable::{tokens, Flags, Logger};
//!
//! let logger = Logger::new().with_prefix("logger").with_flags(Flags::empty());
//! let debugger = logger.with_debug(true).with_prefix("debugger");
//!
//! logger.log(&tokens!["type", "log"]);
//! logger.debug(&tokens!["type", "debug"]);
//! //=> logger type=log
//!
//! debugger.log(&tokens!["type", "log"]);
//! debugger.debug(&tokens!["type", "debug"]);
//! //=> debugger type=log
//! //=> debugger type=debug
//! ```

pub mod bridge;
pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub use crate::core::formatter;

pub mod prelude {
    pub use crate::core::{
        Flags, Formatter, LineWriter, Logger, OutputTarget, ReadableError, Result, Settings, Sink,
        Token, FATAL_EXIT_CODE,
    };
    pub use crate::sinks::{BufferSink, FileSink, StderrSink, StdoutSink, WriterSink};
    pub use crate::tokens;
}

pub use crate::core::{
    Flags, Formatter, LineWriter, Logger, OutputTarget, ReadableError, Result, Settings, Sink,
    Token, FATAL_EXIT_CODE,
};
pub use bridge::{install as install_log_bridge, LogBridge};
pub use global::{
    clear_prefix, current, debug, fatal, is_debug, log, log_safe, panic, print, reset, set_debug,
    set_flags, set_formatter, set_output, set_prefix, try_log, try_log_safe,
};
pub use sinks::{BufferSink, FileSink, StderrSink, StdoutSink, WriterSink};
