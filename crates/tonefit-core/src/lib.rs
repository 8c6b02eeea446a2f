//! # tonefit-core
//!
//! Foundation crate for the tone-fit recommendation system.
//! Defines the shared models, the feedback storage trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TonefitConfig;
pub use errors::{TonefitError, TonefitResult};
pub use models::{
    AggregateStat, CombinationKey, ConceptKind, ConceptNode, FeedbackEntry, PropertyValue,
    RelationEdge,
};
pub use traits::IFeedbackStore;
