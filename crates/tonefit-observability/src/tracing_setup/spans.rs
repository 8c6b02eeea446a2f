//! Span definitions per operation: graph query, feedback analysis, guideline search.

/// Create a graph query span.
#[macro_export]
macro_rules! graph_span {
    ($operation:expr, $origin:expr) => {
        tracing::info_span!("tonefit.graph", operation = %$operation, origin = %$origin)
    };
}

/// Create a feedback analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($entries:expr) => {
        tracing::info_span!("tonefit.analysis", entries = $entries)
    };
}

/// Create a guideline search span.
#[macro_export]
macro_rules! search_span {
    ($query:expr, $top_k:expr) => {
        tracing::info_span!("tonefit.search", query = %$query, top_k = $top_k)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GRAPH: &str = "tonefit.graph";
    pub const ANALYSIS: &str = "tonefit.analysis";
    pub const SEARCH: &str = "tonefit.search";
}
