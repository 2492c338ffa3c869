//! Error types for solace.
//!
//! Classification, triage and prompt composition are total and never return
//! these. Only the ambient surfaces (config files, generative backends, the
//! host bridge) can fail.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum SolaceError {
    /// Configuration load/save error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generative backend failure (request, transport, or stream error).
    #[error("backend error: {0}")]
    Backend(String),

    /// Host bridge read/write or dispatch error.
    #[error("bridge error: {0}")]
    Bridge(String),

    /// JSON encode/decode error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, SolaceError>;
