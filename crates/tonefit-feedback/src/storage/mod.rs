//! Feedback store implementations.

pub mod document;
pub mod memory;
pub mod sqlite;

use std::path::Path;
use std::sync::Arc;

use tonefit_core::config::FeedbackConfig;
use tonefit_core::errors::{StorageError, TonefitError, TonefitResult};
use tonefit_core::traits::IFeedbackStore;

pub use document::JsonDocumentStore;
pub use memory::InMemoryFeedbackStore;
pub use sqlite::SqliteFeedbackStore;

pub(crate) fn to_storage_err(message: String) -> TonefitError {
    StorageError::SqliteError { message }.into()
}

pub(crate) fn poisoned(what: &str) -> TonefitError {
    TonefitError::ConcurrencyError(format!("{what} lock poisoned"))
}

/// Open the store named by `config.store_path`. A `.json` path opens a legacy
/// document store, anything else a SQLite event log.
pub fn open_store(config: &FeedbackConfig) -> TonefitResult<Arc<dyn IFeedbackStore>> {
    let path = Path::new(&config.store_path);
    let is_document = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_document {
        Ok(Arc::new(JsonDocumentStore::new(path)))
    } else {
        Ok(Arc::new(SqliteFeedbackStore::open(path)?))
    }
}
