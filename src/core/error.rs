//! Error types for the logger

pub type Result<T> = std::result::Result<T, ReadableError>;

#[derive(Debug, thiserror::Error)]
pub enum ReadableError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be parsed
    #[error("Settings error: {0}")]
    SettingsError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A global `log` facade logger was already registered
    #[error("A `log` facade logger is already installed")]
    BridgeInstalled,
}

impl ReadableError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        ReadableError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        ReadableError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

impl From<log::SetLoggerError> for ReadableError {
    fn from(_: log::SetLoggerError) -> Self {
        ReadableError::BridgeInstalled
    }
}
