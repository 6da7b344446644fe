//! Logger configuration loaded from JSON or the environment

use super::{
    error::{ReadableError, Result},
    flags::Flags,
    logger::Logger,
};
use crate::sinks::{FileSink, StderrSink, StdoutSink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the line prefix
pub const ENV_PREFIX: &str = "READABLE_PREFIX";
/// Environment variable switching debug lines on (`1`, `true`, `yes`, `on`)
pub const ENV_DEBUG: &str = "READABLE_DEBUG";
/// Environment variable holding decoration flag bits, e.g. `0` or `3`
pub const ENV_FLAGS: &str = "READABLE_FLAGS";
/// Environment variable naming the output: `stderr`, `stdout` or a file path
pub const ENV_OUTPUT: &str = "READABLE_OUTPUT";

/// Where a configured logger writes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    File { path: PathBuf },
}

/// Serializable logger configuration
///
/// # Example
///
/// ```
/// use readable::{Flags, Settings};
///
/// let settings = Settings::from_json(r#"{ "prefix": "server", "debug": true, "flags": "" }"#).unwrap();
/// assert_eq!(settings.prefix.as_deref(), Some("server"));
/// assert_eq!(settings.flags, Flags::empty());
///
/// let logger = settings.build().unwrap();
/// assert!(logger.is_debug());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub prefix: Option<String>,
    pub debug: bool,
    pub flags: Flags,
    pub output: OutputTarget,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: None,
            debug: false,
            flags: Flags::STD,
            output: OutputTarget::Stderr,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from `READABLE_*` variables, defaulting anything unset
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(prefix) = lookup(ENV_PREFIX) {
            settings.prefix = Some(prefix);
        }

        if let Some(raw) = lookup(ENV_DEBUG) {
            settings.debug = parse_bool(&raw)
                .ok_or_else(|| ReadableError::config(ENV_DEBUG, format!("not a boolean: '{}'", raw)))?;
        }

        if let Some(raw) = lookup(ENV_FLAGS) {
            let bits: u32 = raw
                .trim()
                .parse()
                .map_err(|_| ReadableError::config(ENV_FLAGS, format!("not a number: '{}'", raw)))?;
            settings.flags = Flags::from_bits(bits)
                .ok_or_else(|| ReadableError::config(ENV_FLAGS, format!("unknown bits in {}", bits)))?;
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            settings.output = match raw.trim() {
                "" | "stderr" => OutputTarget::Stderr,
                "stdout" => OutputTarget::Stdout,
                path => OutputTarget::File { path: path.into() },
            };
        }

        Ok(settings)
    }

    /// Build a logger from these settings, opening any file output
    pub fn build(&self) -> Result<Logger> {
        let mut logger = Logger::new();
        logger.set_flags(self.flags).set_debug(self.debug);

        if let Some(prefix) = &self.prefix {
            logger.set_prefix(prefix.as_str());
        }

        match &self.output {
            OutputTarget::Stderr => logger.set_output(StderrSink),
            OutputTarget::Stdout => logger.set_output(StdoutSink),
            OutputTarget::File { path } => logger.set_output(FileSink::open(path)?),
        };

        Ok(logger)
    }
}

impl Logger {
    /// Build a logger from [`Settings`]
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.build()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
