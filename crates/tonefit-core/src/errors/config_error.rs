/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("invalid config: {reason}")]
    Parse { reason: String },

    #[error("tracing subscriber already initialized: {reason}")]
    TracingInit { reason: String },
}
