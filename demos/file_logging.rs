//! File logging example
//!
//! Demonstrates sharing one file between several loggers and building a
//! logger from settings.
//!
//! Run with: cargo run --example file_logging

use readable::prelude::*;

fn main() -> Result<()> {
    println!("=== Readable - File Logging Example ===\n");

    let path = std::env::temp_dir().join("readable_demo.log");
    let sink = FileSink::open(&path)?;

    let base = Logger::new().with_output(sink);
    let api = base.with_prefix("api");
    let db = base.with_prefix("db");

    api.log_safe(&tokens!["method", "GET", "path", "/json", "status", 200]);
    db.log_safe(&tokens!["query", "select 1", "rows", 1]);

    let settings = Settings::from_json(r#"{ "prefix": "settings", "flags": "" }"#)?;
    Logger::from_settings(&settings)?.log(&tokens!["loaded", true]);

    println!("Log written to: {}", path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
