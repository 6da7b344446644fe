//! Macros for building token sequences and emitting them.
//!
//! # Examples
//!
//! ```
//! use readable::{debug, log, log_safe, tokens, Logger};
//!
//! let logger = Logger::new();
//!
//! // Build a token array by hand
//! logger.log(&tokens!["listener", ":3000"]);
//!
//! // Or let the macros do it
//! let port = 8080;
//! log!(logger, "listener", port);
//! log_safe!(logger, "worker", 3, "state", "idle");
//! debug!(logger, "hidden", true);
//! ```

/// Build a `[Token; N]` from heterogeneous values.
///
/// Each value goes through `Token::from`, so anything with a `From` impl
/// (strings, numbers, bools, options, ...) can be mixed freely.
///
/// # Examples
///
/// ```
/// use readable::{formatter, tokens, Token};
///
/// let parts = tokens!["status", 200, "cached", false];
/// assert_eq!(parts[1], Token::Int(200));
/// assert_eq!(formatter::key_value(&parts), "status=200 cached=false");
/// ```
#[macro_export]
macro_rules! tokens {
    () => {{
        let empty: [$crate::Token; 0] = [];
        empty
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::Token::from($value)),+]
    };
}

/// Emit a line through `logger.log`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log(&$crate::tokens![$($value),+])
    };
}

/// Emit a line through `logger.log_safe`.
#[macro_export]
macro_rules! log_safe {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.log_safe(&$crate::tokens![$($value),+])
    };
}

/// Emit a debug-gated line through `logger.debug`.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.debug(&$crate::tokens![$($value),+])
    };
}
