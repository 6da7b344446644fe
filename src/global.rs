//! Process-wide default logger
//!
//! One [`Logger`] is created on first use and lives until the process exits.
//! Every free function here operates on that single instance, mirroring the
//! method of the same name on [`Logger`].
//!
//! There is no free `with_*`: derive an owned logger from [`current`]
//! instead.
//!
//! Emission works on a snapshot taken from [`current`], so no lock on the
//! default logger is held while formatters and sinks run. A sink may call
//! back into this module, `set_*` included.
//!
//! ```
//! use readable::tokens;
//!
//! readable::set_prefix("server");
//! readable::log(&tokens!["listener", ":3000"]);
//! //=> 2015/08/21 20:01:48 server listener=:3000
//!
//! let worker = readable::current().with_prefix("worker");
//! worker.log(&tokens!["job", 7]);
//! # readable::reset();
//! ```

use crate::core::{Flags, Formatter, Logger, Result, Sink, Token};
use parking_lot::RwLock;
use std::sync::OnceLock;

static DEFAULT: OnceLock<RwLock<Logger>> = OnceLock::new();

fn instance() -> &'static RwLock<Logger> {
    DEFAULT.get_or_init(|| RwLock::new(Logger::new()))
}

/// Snapshot of the default logger, independent of later changes
pub fn current() -> Logger {
    instance().read().clone()
}

/// Put the default logger back to `Logger::new()`
///
/// Meant for tests that change the default between cases.
pub fn reset() {
    *instance().write() = Logger::new();
}

pub fn set_prefix(prefix: impl Into<Token>) {
    instance().write().set_prefix(prefix);
}

pub fn clear_prefix() {
    instance().write().clear_prefix();
}

pub fn set_output<S: Sink + 'static>(sink: S) {
    instance().write().set_output(sink);
}

pub fn set_formatter(formatter: Formatter) {
    instance().write().set_formatter(formatter);
}

pub fn set_debug(debug: bool) {
    instance().write().set_debug(debug);
}

pub fn set_flags(flags: Flags) {
    instance().write().set_flags(flags);
}

pub fn is_debug() -> bool {
    instance().read().is_debug()
}

#[track_caller]
pub fn log(tokens: &[Token]) {
    current().log(tokens);
}

#[track_caller]
pub fn print(tokens: &[Token]) {
    current().print(tokens);
}

#[track_caller]
pub fn try_log(tokens: &[Token]) -> Result<()> {
    current().try_log(tokens)
}

#[track_caller]
pub fn log_safe(tokens: &[Token]) {
    current().log_safe(tokens);
}

#[track_caller]
pub fn try_log_safe(tokens: &[Token]) -> Result<()> {
    current().try_log_safe(tokens)
}

#[track_caller]
pub fn debug(tokens: &[Token]) {
    current().debug(tokens);
}

/// Write through the default logger, then exit with status 1
///
/// Does not take the `log_safe` lock.
#[track_caller]
pub fn fatal(tokens: &[Token]) -> ! {
    current().fatal(tokens)
}

/// Write through the default logger, then panic with the line
///
/// Does not take the `log_safe` lock.
#[track_caller]
pub fn panic(tokens: &[Token]) -> ! {
    current().panic(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter;
    use crate::sinks::BufferSink;
    use crate::tokens;
    use parking_lot::{Mutex, MutexGuard};

    static SERIAL: Mutex<()> = parking_lot::const_mutex(());

    /// Hold for the whole test; the default logger is shared process state
    fn exclusive() -> MutexGuard<'static, ()> {
        let guard = SERIAL.lock();
        reset();
        guard
    }

    fn capture() -> BufferSink {
        let buf = BufferSink::new();
        set_output(buf.clone());
        set_flags(Flags::empty());
        buf
    }

    #[test]
    fn test_set_debug() {
        let _serial = exclusive();
        assert!(!is_debug());

        set_debug(true);
        assert!(is_debug());

        set_debug(false);
        assert!(!is_debug());
    }

    #[test]
    fn test_set_prefix() {
        let _serial = exclusive();
        set_prefix("prefix");
        assert_eq!(current().prefix(), Some(&Token::from("prefix")));

        clear_prefix();
        assert!(current().prefix().is_none());
    }

    #[test]
    fn test_set_formatter() {
        let _serial = exclusive();
        let buf = capture();

        set_formatter(formatter::join);
        log(&tokens!["foo", "bar"]);
        assert_eq!(buf.to_string_lossy(), "foo: bar\n");
    }

    #[test]
    fn test_log_with_std_flags() {
        let _serial = exclusive();
        let buf = BufferSink::new();
        set_output(buf.clone());

        log(&tokens!["foo", "bar"]);
        // 20 bytes of date and time plus "foo=bar\n"
        assert_eq!(buf.len(), 28);
    }

    #[test]
    fn test_debug_rechecks_flag() {
        let _serial = exclusive();
        let buf = capture();

        debug(&tokens!["type", "debug"]);
        assert!(buf.is_empty());

        set_debug(true);
        debug(&tokens!["type", "debug"]);
        assert_eq!(buf.to_string_lossy(), "type=debug\n");
    }

    #[test]
    fn test_current_is_a_snapshot() {
        let _serial = exclusive();
        let buf = capture();

        let snapshot = current().with_prefix("snap");
        set_prefix("live");

        snapshot.log(&tokens!["k", "v"]);
        log(&tokens!["k", "v"]);
        assert_eq!(buf.to_string_lossy(), "snap k=v\nlive k=v\n");
    }

    #[test]
    fn test_panic_through_default() {
        let _serial = exclusive();
        let buf = capture();
        set_prefix("svc");

        let result = std::panic::catch_unwind(|| {
            panic(&tokens!["a", "b"]);
        });
        let payload = result.expect_err("panic must unwind");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("svc a=b"));
        assert_eq!(buf.to_string_lossy(), "svc a=b\n");

        // The default logger stays usable after the unwind
        set_prefix("after");
        log(&tokens!["k", "v"]);
        assert_eq!(buf.to_string_lossy(), "svc a=b\nafter k=v\n");
    }

    struct Reentrant(BufferSink);

    impl Sink for Reentrant {
        fn write_all(&self, buf: &[u8]) -> std::io::Result<()> {
            set_debug(true);
            self.0.write_all(buf)
        }

        fn flush(&self) -> std::io::Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "reentrant"
        }
    }

    #[test]
    fn test_sink_may_call_back_into_default() {
        let _serial = exclusive();
        let buf = BufferSink::new();
        set_output(Reentrant(buf.clone()));
        set_flags(Flags::empty());

        log(&tokens!["k", "v"]);
        log_safe(&tokens!["k", "w"]);
        assert!(is_debug());
        assert_eq!(buf.to_string_lossy(), "k=v\nk=w\n");
    }

    #[test]
    fn test_reset() {
        let _serial = exclusive();
        set_prefix("prefix");
        set_debug(true);
        set_flags(Flags::empty());

        reset();
        let fresh = current();
        assert!(fresh.prefix().is_none());
        assert!(!fresh.is_debug());
        assert_eq!(fresh.flags(), Flags::STD);
    }
}
