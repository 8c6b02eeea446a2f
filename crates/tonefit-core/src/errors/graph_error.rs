/// Relationship graph errors. Only raised while building a graph; queries never fail.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("edge {from} -> {to} has weight {weight}, expected a value in [0, 1]")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("node {id} is declared more than once")]
    DuplicateNode { id: String },

    #[error("domain graph version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("failed to parse domain graph: {reason}")]
    DomainParse { reason: String },

    #[error("failed to read domain graph {path}: {reason}")]
    DomainUnreadable { path: String, reason: String },
}
