//! Pure functions from a feedback snapshot to statistics and signals.

pub mod aggregate;
pub mod patterns;
pub mod suggestions;
pub mod trends;
pub mod weights;

pub use aggregate::Aggregates;
pub use patterns::analyze;
pub use suggestions::improvement_suggestions;
pub use trends::daily_trends;
pub use weights::{adaptive_weight, adaptive_weights};
