//! SemanticRetriever: ranks guideline snippets against a query.

use std::collections::HashSet;
use std::path::Path;

use tonefit_core::config::RetrievalConfig;
use tonefit_core::models::{DirectMatch, GuidelineMatch, RelevanceReport};
use tracing::debug;

use crate::corpus::GuidelineCorpus;
use crate::embedding::{embed, FeatureVector};
use crate::similarity::cosine_similarity;

/// A snippet with its precomputed vector.
#[derive(Debug, Clone)]
struct IndexedSnippet {
    category: String,
    text: String,
    vector: FeatureVector,
}

/// Similarity search over an immutable guideline corpus.
pub struct SemanticRetriever {
    corpus: GuidelineCorpus,
    index: Vec<IndexedSnippet>,
    config: RetrievalConfig,
}

impl SemanticRetriever {
    pub fn new(corpus: GuidelineCorpus, config: RetrievalConfig) -> Self {
        let index = corpus
            .snippets()
            .map(|(category, text)| IndexedSnippet {
                category: category.to_string(),
                text: text.to_string(),
                vector: embed(text),
            })
            .collect();
        Self {
            corpus,
            index,
            config,
        }
    }

    /// Load the corpus named by `config.guideline_path`. A missing file gives
    /// an empty retriever.
    pub fn from_config(config: RetrievalConfig) -> Self {
        let corpus = GuidelineCorpus::load(Path::new(&config.guideline_path));
        Self::new(corpus, config)
    }

    pub fn corpus(&self) -> &GuidelineCorpus {
        &self.corpus
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn embed(&self, text: &str) -> FeatureVector {
        embed(text)
    }

    pub fn similarity(&self, a: &FeatureVector, b: &FeatureVector) -> f64 {
        cosine_similarity(a.as_slice(), b.as_slice())
    }

    /// The `top_k` snippets most similar to `query`, best first.
    /// Equal scores keep corpus order.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<GuidelineMatch> {
        let span = tonefit_observability::search_span!(query, top_k);
        let _guard = span.enter();

        if self.index.is_empty() {
            debug!("search over empty corpus");
            return Vec::new();
        }

        let query_vector = embed(query);
        let mut scored: Vec<(&IndexedSnippet, f64)> = self
            .index
            .iter()
            .map(|s| (s, self.similarity(&query_vector, &s.vector)))
            .collect();
        // sort_by is stable.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_k);

        scored
            .into_iter()
            .map(|(s, score)| GuidelineMatch {
                category: s.category.clone(),
                guideline: s.text.clone(),
                score,
            })
            .collect()
    }

    /// Guidance for `tone` on `platforms`: whole categories named by the tone or
    /// a platform, plus the best semantic matches from every other category.
    pub fn retrieve_with_relevance(&self, tone: &str, platforms: &[String]) -> RelevanceReport {
        let mut report = RelevanceReport::default();
        let mut matched: HashSet<String> = HashSet::new();

        for key in std::iter::once(tone).chain(platforms.iter().map(String::as_str)) {
            let folded = key.to_lowercase();
            if matched.contains(&folded) {
                continue;
            }
            if let Some(guidelines) = self.corpus.get(&folded) {
                report.direct_matches.push(DirectMatch {
                    key: key.to_string(),
                    guidelines: guidelines.to_vec(),
                    relevance: 1.0,
                });
                matched.insert(folded);
            }
        }

        let query = format!("{tone} tone for {} platforms", platforms.join(" "));
        report.semantic_matches = self
            .search(&query, self.config.default_top_k)
            .into_iter()
            .filter(|m| !matched.contains(&m.category))
            .collect();

        report
    }

    /// The semantic matches worth surfacing next to the direct ones.
    pub fn highlighted<'a>(&self, report: &'a RelevanceReport) -> &'a [GuidelineMatch] {
        let shown = self.config.semantic_matches_shown.min(report.semantic_matches.len());
        &report.semantic_matches[..shown]
    }
}
