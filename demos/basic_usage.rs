//! Basic logger usage example
//!
//! Demonstrates the default logger, derived loggers and debug gating.
//!
//! Run with: cargo run --example basic_usage

use readable::prelude::*;

fn main() {
    println!("=== Readable - Basic Usage Example ===\n");

    // The default logger writes to stderr with date and time
    println!("1. Default logger:");
    readable::set_prefix("server");
    readable::log(&tokens!["listener", ":3000"]);

    // Derived loggers are independent copies
    println!("\n2. Derived loggers:");
    let logger = Logger::new().with_prefix("logger").with_flags(Flags::empty());
    let debugger = logger.with_debug(true).with_prefix("debugger");

    logger.log(&tokens!["type", "log"]);
    logger.debug(&tokens!["type", "debug"]);
    debugger.log(&tokens!["type", "log"]);
    debugger.debug(&tokens!["type", "debug"]);

    // Swapping the formatter
    println!("\n3. Join formatter:");
    let joined = logger.with_formatter(readable::formatter::join);
    joined.log(&tokens!["package", "server", "listener", ":3000"]);

    println!("\n=== Example completed successfully! ===");
}
