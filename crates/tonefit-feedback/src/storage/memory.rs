//! Mutex-guarded in-process store.

use std::sync::Mutex;

use tonefit_core::errors::TonefitResult;
use tonefit_core::models::FeedbackEntry;
use tonefit_core::traits::IFeedbackStore;
use tonefit_observability::events;

use super::poisoned;

/// Ephemeral store. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackStore {
    entries: Mutex<Vec<FeedbackEntry>>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing entries.
    pub fn with_entries(entries: Vec<FeedbackEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl IFeedbackStore for InMemoryFeedbackStore {
    fn read_all(&self) -> TonefitResult<Vec<FeedbackEntry>> {
        let guard = self.entries.lock().map_err(|_| poisoned("memory store"))?;
        Ok(guard.clone())
    }

    fn append(&self, entry: &FeedbackEntry) -> TonefitResult<()> {
        let mut guard = self.entries.lock().map_err(|_| poisoned("memory store"))?;
        guard.push(entry.clone());
        drop(guard);
        events::feedback_recorded(self.name(), &entry.tone, &entry.platforms, entry.rating);
        Ok(())
    }

    fn len(&self) -> TonefitResult<usize> {
        let guard = self.entries.lock().map_err(|_| poisoned("memory store"))?;
        Ok(guard.len())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
