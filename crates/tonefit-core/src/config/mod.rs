//! Layered configuration. Every section is optional in TOML and falls back to
//! the values in [`defaults`].

pub mod defaults;
mod feedback_config;
mod graph_config;
mod observability_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use feedback_config::FeedbackConfig;
pub use graph_config::GraphConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::{ConfigError, TonefitResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TonefitConfig {
    pub graph: GraphConfig,
    pub feedback: FeedbackConfig,
    pub retrieval: RetrievalConfig,
    pub observability: ObservabilityConfig,
}

impl TonefitConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> TonefitResult<Self> {
        toml::from_str(source).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> TonefitResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }
}
