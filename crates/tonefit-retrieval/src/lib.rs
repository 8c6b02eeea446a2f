//! # tonefit-retrieval
//!
//! Guideline corpus parsing and similarity search over a fixed, inspectable
//! 7-dimension feature vector. The vector is a register heuristic, not a learned
//! embedding.

pub mod corpus;
pub mod embedding;
pub mod retriever;
pub mod similarity;

pub use corpus::{GuidelineCategory, GuidelineCorpus};
pub use embedding::{embed, FeatureVector};
pub use retriever::SemanticRetriever;
pub use similarity::cosine_similarity;
