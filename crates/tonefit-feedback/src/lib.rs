//! # tonefit-feedback
//!
//! Feedback persistence (in-memory, SQLite event log, legacy JSON document) and
//! the analyzer that turns stored ratings into per-combination statistics,
//! recommendations, adaptive weights and daily trends.

pub mod analysis;
pub mod analyzer;
pub mod storage;

pub use analyzer::FeedbackAnalyzer;
pub use storage::{open_store, InMemoryFeedbackStore, JsonDocumentStore, SqliteFeedbackStore};
