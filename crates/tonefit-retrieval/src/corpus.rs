//! Guideline corpus: `<category>:` header lines followed by `- ` bullets.

use std::path::Path;

use tonefit_core::errors::{RetrievalError, TonefitResult};
use tonefit_observability::events;

/// One category of guidelines. Names are lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidelineCategory {
    pub name: String,
    pub guidelines: Vec<String>,
}

/// Parsed guideline corpus. Categories keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidelineCorpus {
    categories: Vec<GuidelineCategory>,
}

impl GuidelineCorpus {
    /// Parse corpus text.
    ///
    /// A non-bullet line containing `:` opens a category. Other lines belong to
    /// the open category; text before the first header is dropped. A repeated
    /// header appends to the category it names.
    pub fn parse(text: &str) -> Self {
        let mut corpus = Self::default();
        let mut current: Option<usize> = None;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let is_bullet = line.starts_with('-');
            if !is_bullet && line.contains(':') {
                let name = line.replace(':', "").trim().to_lowercase();
                current = Some(corpus.slot_for(name));
                continue;
            }
            if let Some(slot) = current {
                let guideline = line.trim_matches(|c| c == '-' || c == ' ').to_string();
                if !guideline.is_empty() {
                    corpus.categories[slot].guidelines.push(guideline);
                }
            }
        }

        corpus
    }

    fn slot_for(&mut self, name: String) -> usize {
        match self.categories.iter().position(|c| c.name == name) {
            Some(slot) => slot,
            None => {
                self.categories.push(GuidelineCategory {
                    name,
                    guidelines: Vec::new(),
                });
                self.categories.len() - 1
            }
        }
    }

    /// Read and parse a corpus file.
    pub fn try_load(path: &Path) -> TonefitResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RetrievalError::CorpusUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let corpus = Self::parse(&text);
        events::corpus_loaded(
            &path.display().to_string(),
            corpus.len(),
            corpus.guideline_count(),
        );
        Ok(corpus)
    }

    /// Like [`Self::try_load`], but an unreadable file yields an empty corpus.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(corpus) => corpus,
            Err(e) => {
                events::degraded("guideline_corpus", &e.to_string(), "empty corpus");
                Self::default()
            }
        }
    }

    /// Guidelines of `name`, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        let name = name.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.guidelines.as_slice())
    }

    pub fn categories(&self) -> &[GuidelineCategory] {
        &self.categories
    }

    /// Every (category, guideline) pair in corpus order.
    pub fn snippets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|c| {
            c.guidelines
                .iter()
                .map(move |g| (c.name.as_str(), g.as_str()))
        })
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn guideline_count(&self) -> usize {
        self.categories.iter().map(|c| c.guidelines.len()).sum()
    }
}
