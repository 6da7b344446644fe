//! Bridge from the `log` facade to the default logger
//!
//! After [`install`], `log::info!` and friends anywhere in the process land in
//! the default logger as `level=INFO target=<module> msg=<text>` lines.
//! `Trace` and `Debug` records only appear while the default logger has debug
//! lines switched on; everything else is written with `log_safe`.

use crate::core::{ReadableError, Result, Sink};
use crate::global;
use crate::tokens;
use log::{Level, LevelFilter, Metadata, Record};

static BRIDGE: LogBridge = LogBridge;

/// `log::Log` implementation backed by the default logger
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        match metadata.level() {
            Level::Trace | Level::Debug => global::is_debug(),
            _ => true,
        }
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        global::log_safe(&tokens![
            "level",
            record.level().as_str(),
            "target",
            record.target(),
            "msg",
            *record.args()
        ]);
    }

    fn flush(&self) {
        let _ = global::current().output().flush();
    }
}

/// Register [`LogBridge`] as the process `log` logger
///
/// Fails with [`ReadableError::BridgeInstalled`] when any `log` logger is
/// already registered.
pub fn install() -> Result<()> {
    log::set_logger(&BRIDGE).map_err(ReadableError::from)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
