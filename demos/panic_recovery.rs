//! Panic recovery example
//!
//! `panic` writes its line before unwinding; `catch_unwind` gets the line
//! back as the panic payload.
//!
//! Run with: cargo run --example panic_recovery

use readable::prelude::*;
use std::panic::{self, AssertUnwindSafe};

fn main() {
    println!("=== Readable - Panic Recovery Example ===\n");

    let logger = Logger::new().with_prefix("panic").with_flags(Flags::empty());

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        logger.panic(&tokens!["stage", "template", "error", "file not found"]);
    }));

    if let Err(payload) = result {
        if let Some(line) = payload.downcast_ref::<String>() {
            logger.log(&tokens!["recovered", line.as_str()]);
        }
    }

    println!("\n=== Example completed successfully! ===");
}
