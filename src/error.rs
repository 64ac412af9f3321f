//! Error types for rs-article-extract.
//!
//! Extraction itself never fails: every heuristic degrades to an empty or
//! default value. These errors only surface at the crate's edges
//! (option validation, serialization, and the stdin binary).

/// Error type for the edges of the extraction API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An `Options` field holds a value the engine cannot work with.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Serializing an extraction result failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible edge operations.
pub type Result<T> = std::result::Result<T, Error>;
