//! Error types for every subsystem, unified under [`TonefitError`].

mod config_error;
mod feedback_error;
mod graph_error;
mod retrieval_error;
mod storage_error;

pub use config_error::ConfigError;
pub use feedback_error::FeedbackError;
pub use graph_error::GraphError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum TonefitError {
    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("feedback error: {0}")]
    FeedbackError(#[from] FeedbackError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

/// Convenience alias used across the workspace.
pub type TonefitResult<T> = Result<T, TonefitError>;
