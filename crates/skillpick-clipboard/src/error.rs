//! Error types for clipboard publishing

use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No usable clipboard mechanism on this host
    #[error("No clipboard tool found (tried: {tried})")]
    NoBackend {
        /// Programs that were probed
        tried: String,
    },

    /// Clipboard program could not be started
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        /// Program name
        program: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// Clipboard program ran but reported failure
    #[error("'{program}' exited with {status}")]
    CommandFailed {
        /// Program name
        program: String,
        /// Exit status description
        status: String,
    },

    /// Backend cannot handle this request here
    #[error("Clipboard unsupported: {0}")]
    Unsupported(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ClipboardError>;
