//! FeedbackAnalyzer: reads a fresh snapshot from the store for every query.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tonefit_core::config::FeedbackConfig;
use tonefit_core::constants::{MAX_RATING, MIN_RATING};
use tonefit_core::errors::{FeedbackError, TonefitResult};
use tonefit_core::models::{
    CombinationKey, DailyTrend, FeedbackEntry, InsightsReport, PatternAnalysis,
};
use tonefit_core::traits::IFeedbackStore;
use tonefit_observability::events;
use tracing::{info, warn};

use crate::analysis::{self, Aggregates};
use crate::storage::{open_store, InMemoryFeedbackStore};

/// Turns stored ratings into statistics, recommendations, weights and trends.
///
/// Nothing is cached: each call reads the store, so results always reflect
/// every append that completed before it.
pub struct FeedbackAnalyzer {
    store: Arc<dyn IFeedbackStore>,
    config: FeedbackConfig,
}

impl FeedbackAnalyzer {
    pub fn new(store: Arc<dyn IFeedbackStore>, config: FeedbackConfig) -> Self {
        Self { store, config }
    }

    /// Analyzer over the store named by `config.store_path`.
    pub fn from_config(config: FeedbackConfig) -> TonefitResult<Self> {
        let store = open_store(&config)?;
        Ok(Self::new(store, config))
    }

    /// Analyzer over an empty in-memory store with default thresholds.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryFeedbackStore::new()), FeedbackConfig::default())
    }

    pub fn store(&self) -> &Arc<dyn IFeedbackStore> {
        &self.store
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Validate and append one entry.
    pub fn record(&self, entry: &FeedbackEntry) -> TonefitResult<()> {
        if !entry.has_valid_rating() {
            return Err(FeedbackError::InvalidRating {
                rating: entry.rating,
                min: MIN_RATING,
                max: MAX_RATING,
            }
            .into());
        }
        self.store.append(entry)
    }

    /// Current snapshot. Store failures degrade to an empty snapshot and
    /// out-of-range ratings are dropped.
    fn snapshot(&self) -> Vec<FeedbackEntry> {
        let entries = match self.store.read_all() {
            Ok(entries) => entries,
            Err(e) => {
                events::degraded(self.store.name(), &e.to_string(), "empty feedback set");
                return Vec::new();
            }
        };
        let total = entries.len();
        let valid: Vec<FeedbackEntry> = entries
            .into_iter()
            .filter(FeedbackEntry::has_valid_rating)
            .collect();
        if valid.len() < total {
            warn!(
                store = self.store.name(),
                skipped = total - valid.len(),
                "skipping feedback entries with out-of-range ratings"
            );
        }
        valid
    }

    fn analyze_snapshot(&self, entries: &[FeedbackEntry]) -> PatternAnalysis {
        let span = tonefit_observability::analysis_span!(entries.len());
        let _guard = span.enter();
        let analysis = analysis::analyze(entries, &self.config);
        if let Some(report) = analysis.report() {
            events::analysis_completed(
                report.total_feedback,
                report.average_rating,
                report.low_performing_patterns.len(),
                report.high_performing_patterns.len(),
            );
        }
        analysis
    }

    pub fn analyze_patterns(&self) -> PatternAnalysis {
        let entries = self.snapshot();
        self.analyze_snapshot(&entries)
    }

    /// Weights per `"<tone>_<platform>"` for every combination seen so far.
    pub fn adaptive_weights(&self) -> BTreeMap<String, f64> {
        let entries = self.snapshot();
        analysis::adaptive_weights(&Aggregates::collect(&entries), &self.config)
    }

    /// Weight for one pair, the configured default when it has not been seen.
    pub fn weight_for(&self, tone: &str, platform: &str) -> f64 {
        let key = CombinationKey::new(tone, platform);
        let entries = self.snapshot();
        Aggregates::collect(&entries)
            .combination_stats()
            .find(|(k, _, _)| **k == key)
            .map_or(self.config.default_weight, |(_, stat, _)| {
                analysis::adaptive_weight(&stat, &self.config)
            })
    }

    pub fn time_based_trends(&self) -> Vec<DailyTrend> {
        let entries = self.snapshot();
        analysis::daily_trends(&entries, &self.config)
    }

    pub fn improvement_suggestions(&self) -> Vec<String> {
        let analysis = self.analyze_patterns();
        analysis::improvement_suggestions(&analysis, &self.config)
    }

    /// Analysis, trends, weights and suggestions from one consistent snapshot.
    pub fn insights(&self) -> InsightsReport {
        let entries = self.snapshot();
        let analysis = self.analyze_snapshot(&entries);
        let improvement_suggestions = analysis::improvement_suggestions(&analysis, &self.config);
        InsightsReport {
            generated_at: Utc::now(),
            trends: analysis::daily_trends(&entries, &self.config),
            adaptive_weights: analysis::adaptive_weights(&Aggregates::collect(&entries), &self.config),
            improvement_suggestions,
            analysis,
        }
    }

    /// Write [`Self::insights`] to `path` as pretty JSON and return it.
    pub fn export_insights(&self, path: &Path) -> TonefitResult<InsightsReport> {
        let insights = self.insights();
        let body = serde_json::to_string_pretty(&insights)?;
        std::fs::write(path, body).map_err(|e| FeedbackError::ExportFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), "insights exported");
        Ok(insights)
    }
}
