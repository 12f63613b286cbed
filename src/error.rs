use thiserror::Error;

/// Seam's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Seam's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// A word in the input carried timestamps the pipeline cannot work with.
    ///
    /// Raised at the ingestion boundary so timing garbage never propagates
    /// into paragraph arithmetic.
    #[error("chunk {chunk_index}: {reason}")]
    InvalidWord { chunk_index: u64, reason: String },

    /// A plugin name was looked up in the registry but never registered.
    #[error("plugin not found: {0}")]
    PluginNotFound(String),

    /// A registered plugin was invoked while disabled.
    #[error("plugin is disabled: {0}")]
    PluginDisabled(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}
