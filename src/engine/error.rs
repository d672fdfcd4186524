use thiserror::Error;

/// Everything that can go wrong while producing one turn. All variants
/// are fatal to the operation that hit them; the caller decides whether
/// to abort the process or surface the error and keep reading input.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Connection failure, non-success HTTP status, or a completion
    /// with no choices.
    #[error("transport error: {0}")]
    Transport(String),

    /// The assistant's reply was not valid JSON. Carries a snippet of
    /// the offending text for diagnostics.
    #[error("assistant reply is not valid JSON ({reason}): {snippet}")]
    MalformedJson { reason: String, snippet: String },

    /// Valid JSON, but missing required fields for the active mode.
    #[error("assistant reply does not match the {mode} schema: {reason}")]
    SchemaMismatch { mode: &'static str, reason: String },
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        EngineError::Transport(err.to_string())
    }
}
