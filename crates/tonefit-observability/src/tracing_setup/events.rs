//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a feedback write.
pub fn feedback_recorded(store: &str, tone: &str, platforms: &[String], rating: u8) {
    tracing::info!(
        event = "feedback_recorded",
        store = %store,
        tone = %tone,
        platforms = ?platforms,
        rating = rating,
        "feedback recorded"
    );
}

/// Log a completed pattern analysis.
pub fn analysis_completed(total: usize, average: f64, low: usize, high: usize) {
    tracing::info!(
        event = "analysis_completed",
        total = total,
        average = average,
        low_performing = low,
        high_performing = high,
        "feedback analysis completed"
    );
}

/// Log a graph load.
pub fn graph_loaded(source: &str, nodes: usize, edges: usize) {
    tracing::info!(
        event = "graph_loaded",
        source = %source,
        nodes = nodes,
        edges = edges,
        "relationship graph loaded"
    );
}

/// Log a guideline corpus load.
pub fn corpus_loaded(source: &str, categories: usize, guidelines: usize) {
    tracing::info!(
        event = "corpus_loaded",
        source = %source,
        categories = categories,
        guidelines = guidelines,
        "guideline corpus loaded"
    );
}

/// Log a fallback to an empty or neutral result.
pub fn degraded(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
