//! Error types for the form widgets and their collaborators.
//!
//! Widgets never fail on user input: validation problems are reported as
//! messages. These errors cover the fallible edges around them: loading
//! configuration and catalogs, parsing host-supplied times and rule names.

use std::path::PathBuf;

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the form widgets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation catalog could not be parsed.
    #[error("Invalid translation catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// A time string was not in `HH:MM` form.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime { value: String },

    /// A validation rule name was not recognised.
    #[error("Unknown validation rule '{0}'")]
    UnknownRule(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed time error.
    pub fn invalid_time(value: impl Into<String>) -> Self {
        Self::InvalidTime {
            value: value.into(),
        }
    }
}
