//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Network-level failure (connect, timeout, read) talking to the remote source
    #[error("Network error: {0}")]
    Network(String),

    /// The remote API answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A remote response could not be decoded at all
    #[error("Parse error: {0}")]
    Parse(String),

    /// Local storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// No week record covers the current date
    #[error("no current week found in the weeks database")]
    NoCurrentWeek,

    /// Configuration missing or unreadable
    #[error("Config error: {0}")]
    Config(String),
}

impl CoreError {
    /// Whether this is expected behavior (user setup, empty schedule) rather
    /// than a fault, used for log level selection.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NoCurrentWeek | Self::Config(_))
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
