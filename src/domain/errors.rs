use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the model adapter
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found at {path:?}")]
    ArtifactMissing { path: PathBuf },

    #[error("failed to read model artifact {path:?}: {source}")]
    ArtifactRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to deserialize model artifact: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("prediction failed: {reason}")]
    PredictionFailed { reason: String },

    #[error("model returned no output")]
    EmptyOutput,
}
