//! Main logger implementation
//!
//! A [`Logger`] is a small configuration value: sink, prefix, formatter,
//! debug switch and decoration flags. Two builder families exist for every
//! attribute:
//!
//! - `with_*(&self, ..)` returns a new, independent logger and leaves the
//!   receiver untouched. It only reads the receiver, so any number of threads
//!   may derive from a shared logger at once.
//! - `set_*(&mut self, ..)` changes the receiver in place and returns it for
//!   chaining.
//!
//! Emission comes in two flavours. [`Logger::log`] writes straight to the sink
//! with no locking. [`Logger::log_safe`] writes while holding one lock shared
//! by every `log_safe` call in the process, whichever logger it goes through,
//! so safe lines never interleave with each other. Mixing the two on one sink
//! gives no protection to the `log` lines.

use super::{
    error::{ReadableError, Result},
    flags::Flags,
    formatter::{self, Formatter},
    line_writer::LineWriter,
    sink::Sink,
    token::Token,
};
use crate::sinks::StderrSink;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Arc;

/// Serializes every `log_safe` emission in the process
static SAFE_EMIT: Mutex<()> = parking_lot::const_mutex(());

/// Exit status used by [`Logger::fatal`]
pub const FATAL_EXIT_CODE: i32 = 1;

#[derive(Clone)]
pub struct Logger {
    writer: LineWriter,
    prefix: Option<Token>,
    formatter: Formatter,
    debug: bool,
}

impl Logger {
    /// Logger writing to stderr with [`Flags::STD`], no prefix, the
    /// key/value formatter and debug lines off
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: LineWriter::new(Arc::new(StderrSink), Flags::STD),
            prefix: None,
            formatter: formatter::key_value,
            debug: false,
        }
    }

    // ---- derivative builders -------------------------------------------

    /// New logger with `prefix` in front of every line
    ///
    /// # Example
    ///
    /// ```
    /// use readable::{tokens, Flags, Logger};
    /// use readable::sinks::BufferSink;
    ///
    /// let buf = BufferSink::new();
    /// let base = Logger::new().with_output(buf.clone()).with_flags(Flags::empty());
    /// let svc = base.with_prefix("svc");
    ///
    /// svc.log(&tokens!["k", "v"]);
    /// base.log(&tokens!["k", "v"]);
    /// assert_eq!(buf.to_string_lossy(), "svc k=v\nk=v\n");
    /// ```
    #[must_use = "with_* returns a new logger and leaves the receiver unchanged"]
    pub fn with_prefix(&self, prefix: impl Into<Token>) -> Self {
        let mut derived = self.clone();
        derived.set_prefix(prefix);
        derived
    }

    /// New logger writing to `sink`
    #[must_use = "with_* returns a new logger and leaves the receiver unchanged"]
    pub fn with_output<S: Sink + 'static>(&self, sink: S) -> Self {
        let mut derived = self.clone();
        derived.set_output(sink);
        derived
    }

    /// New logger using `formatter` for the line body
    #[must_use = "with_* returns a new logger and leaves the receiver unchanged"]
    pub fn with_formatter(&self, formatter: Formatter) -> Self {
        let mut derived = self.clone();
        derived.set_formatter(formatter);
        derived
    }

    /// New logger with debug lines switched on or off
    #[must_use = "with_* returns a new logger and leaves the receiver unchanged"]
    pub fn with_debug(&self, debug: bool) -> Self {
        let mut derived = self.clone();
        derived.set_debug(debug);
        derived
    }

    /// New logger with different decoration flags
    #[must_use = "with_* returns a new logger and leaves the receiver unchanged"]
    pub fn with_flags(&self, flags: Flags) -> Self {
        let mut derived = self.clone();
        derived.set_flags(flags);
        derived
    }

    // ---- in-place setters ----------------------------------------------

    pub fn set_prefix(&mut self, prefix: impl Into<Token>) -> &mut Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Remove the prefix
    pub fn clear_prefix(&mut self) -> &mut Self {
        self.prefix = None;
        self
    }

    /// Point the logger at `sink`, rebuilding its line-writer
    pub fn set_output<S: Sink + 'static>(&mut self, sink: S) -> &mut Self {
        self.writer = LineWriter::new(Arc::new(sink), self.writer.flags());
        self
    }

    pub fn set_formatter(&mut self, formatter: Formatter) -> &mut Self {
        self.formatter = formatter;
        self
    }

    pub fn set_debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    /// Change decoration flags, rebuilding the line-writer
    pub fn set_flags(&mut self, flags: Flags) -> &mut Self {
        self.writer = LineWriter::new(Arc::clone(self.writer.sink()), flags);
        self
    }

    // ---- accessors -----------------------------------------------------

    pub fn prefix(&self) -> Option<&Token> {
        self.prefix.as_ref()
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn flags(&self) -> Flags {
        self.writer.flags()
    }

    pub fn output(&self) -> &Arc<dyn Sink> {
        self.writer.sink()
    }

    // ---- emission ------------------------------------------------------

    /// Compose the line body: `[prefix ]formatter(tokens)`
    pub fn line(&self, tokens: &[Token]) -> String {
        let body = (self.formatter)(tokens);
        match &self.prefix {
            Some(prefix) if !prefix.is_blank() => format!("{} {}", prefix, body),
            _ => body,
        }
    }

    /// Write one line without any locking
    ///
    /// A failed write is reported on the process stderr; use
    /// [`try_log`](Self::try_log) to get the error instead.
    #[track_caller]
    pub fn log(&self, tokens: &[Token]) {
        self.report(self.emit(tokens, Location::caller()));
    }

    /// Alias for [`log`](Self::log)
    #[track_caller]
    pub fn print(&self, tokens: &[Token]) {
        self.report(self.emit(tokens, Location::caller()));
    }

    /// Like [`log`](Self::log), returning the sink error
    #[track_caller]
    pub fn try_log(&self, tokens: &[Token]) -> Result<()> {
        self.emit(tokens, Location::caller())
    }

    /// Write one line while holding the process-wide safe-emission lock
    ///
    /// No two `log_safe` lines, from any logger, interleave their bytes.
    #[track_caller]
    pub fn log_safe(&self, tokens: &[Token]) {
        let caller = Location::caller();
        let result = {
            let _guard = SAFE_EMIT.lock();
            self.emit(tokens, caller)
        };
        self.report(result);
    }

    /// Like [`log_safe`](Self::log_safe), returning the sink error
    #[track_caller]
    pub fn try_log_safe(&self, tokens: &[Token]) -> Result<()> {
        let caller = Location::caller();
        let _guard = SAFE_EMIT.lock();
        self.emit(tokens, caller)
    }

    /// [`log`](Self::log) when debug lines are on, otherwise nothing
    #[track_caller]
    pub fn debug(&self, tokens: &[Token]) {
        if !self.debug {
            return;
        }
        self.report(self.emit(tokens, Location::caller()));
    }

    /// Write the line, flush the sink and exit the process with status 1
    #[track_caller]
    pub fn fatal(&self, tokens: &[Token]) -> ! {
        self.report(self.emit(tokens, Location::caller()));
        if let Err(e) = self.writer.flush() {
            report_failure(self.writer.sink().name(), "flush", &e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write the line, then panic with it as the payload
    ///
    /// The payload is the composed line as a `String`, recoverable with
    /// [`std::panic::catch_unwind`].
    #[track_caller]
    pub fn panic(&self, tokens: &[Token]) -> ! {
        let line = self.line(tokens);
        self.report(self.write_composed(&line, Location::caller()));
        std::panic::panic_any(line)
    }

    fn emit(&self, tokens: &[Token], caller: &Location<'_>) -> Result<()> {
        let line = self.line(tokens);
        self.write_composed(&line, caller)
    }

    fn write_composed(&self, line: &str, caller: &Location<'_>) -> Result<()> {
        self.writer.write_line(line, caller).map_err(|e| {
            ReadableError::io_operation(
                "writing log line",
                format!("sink '{}' rejected the write", self.writer.sink().name()),
                e,
            )
        })
    }

    fn report(&self, result: Result<()>) {
        if let Err(ReadableError::IoOperation { source, .. }) = &result {
            report_failure(self.writer.sink().name(), "write", source);
        }
    }
}

/// Last-resort diagnostics; never panics even when stderr itself is gone
fn report_failure(sink: &str, operation: &str, err: &io::Error) {
    let _ = writeln!(
        io::stderr(),
        "[LOGGER ERROR] Sink '{}' {} failed: {}",
        sink,
        operation,
        err
    );
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("writer", &self.writer)
            .field("prefix", &self.prefix)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
