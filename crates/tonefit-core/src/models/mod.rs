//! Shared data model: concept nodes, relation edges, feedback events, and the
//! result structures each query hands to downstream consumers.

pub mod analysis;
pub mod concept;
pub mod feedback;
pub mod guideline;
pub mod recommendation;
pub mod stats;

pub use analysis::{
    AnalysisReport, ComboStat, DailyTrend, InsightsReport, PatternAnalysis, PatternSummary,
};
pub use concept::{ConceptKind, ConceptNode, PropertyValue, RelationEdge};
pub use feedback::{parse_timestamp, CombinationKey, FeedbackEntry};
pub use guideline::{DirectMatch, GuidelineMatch, RelevanceReport};
pub use recommendation::GraphRecommendation;
pub use stats::AggregateStat;
