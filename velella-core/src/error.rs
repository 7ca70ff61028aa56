//! Structured error types for the Velella workspace.

use thiserror::Error;

/// Unified error type for all Velella operations.
///
/// Every failure is synchronous, expected, and recoverable by the caller;
/// nothing here is retried internally.
#[derive(Debug, Error)]
pub enum VelellaError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No sequence record exists for the given id
    #[error("no sequence record for id '{0}'")]
    NotFound(String),

    /// No compressed artifact exists for the given id
    #[error("no compressed artifact for id '{0}'")]
    ArtifactNotFound(String),

    /// A byte outside the sequence alphabet (after uppercasing)
    #[error("invalid {alphabet} base '{base}' at position {position}")]
    InvalidAlphabet {
        /// Name of the violated alphabet
        alphabet: &'static str,
        /// The offending character, as uppercased
        base: char,
        /// Zero-based position of the offending byte
        position: usize,
    },

    /// A zero-length record where an analysis requires content
    #[error("sequence record '{0}' is empty")]
    EmptySequence(String),

    /// A motif pattern that cannot be used for searching
    #[error("invalid motif pattern: {0}")]
    InvalidPattern(String),

    /// Compression or decompression failure
    #[error("compression error: {0}")]
    Compression(String),

    /// Backing-store failure that is not a simple missing id
    #[error("storage error: {0}")]
    Storage(String),
}

/// Convenience alias used throughout the Velella workspace.
pub type Result<T> = std::result::Result<T, VelellaError>;
