//! Declarative domain graph documents: versioned TOML with `[[nodes]]` and `[[edges]]`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use tonefit_core::constants::DOMAIN_GRAPH_VERSION;
use tonefit_core::errors::{GraphError, TonefitResult};
use tonefit_core::models::{ConceptNode, RelationEdge};

/// The built-in domain shipped with the crate.
pub const BUILTIN_DOMAIN: &str = include_str!("../../domain/builtin.toml");

/// A domain graph document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainSpec {
    pub version: u32,
    #[serde(default)]
    pub nodes: Vec<ConceptNode>,
    #[serde(default)]
    pub edges: Vec<RelationEdge>,
}

impl DomainSpec {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> TonefitResult<Self> {
        let spec: Self = toml::from_str(source).map_err(|e| GraphError::DomainParse {
            reason: e.to_string(),
        })?;
        spec.validate()?;
        Ok(spec)
    }

    /// Read, parse and validate a domain file.
    pub fn load(path: &Path) -> TonefitResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| GraphError::DomainUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    /// The built-in tone / platform / creative-type domain.
    pub fn builtin() -> TonefitResult<Self> {
        Self::from_toml(BUILTIN_DOMAIN)
    }

    /// Version must match and every edge weight must lie in [0, 1].
    /// Duplicate node ids are caught when the graph is built.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.version != DOMAIN_GRAPH_VERSION {
            return Err(GraphError::UnsupportedVersion {
                found: self.version,
                expected: DOMAIN_GRAPH_VERSION,
            });
        }
        if let Some(edge) = self.edges.iter().find(|e| !e.has_valid_weight()) {
            return Err(GraphError::InvalidWeight {
                from: edge.from.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
            });
        }
        Ok(())
    }
}
