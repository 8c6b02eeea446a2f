//! Legacy whole-collection JSON document: one array of feedback entries.

use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use serde_json::Value;
use tonefit_core::errors::{StorageError, TonefitResult};
use tonefit_core::models::FeedbackEntry;
use tonefit_core::traits::IFeedbackStore;
use tonefit_observability::events;
use tracing::{debug, warn};

use super::poisoned;

/// Write locks shared by every store in the process, one per document.
static DOCUMENT_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

/// Stable identity for a document path, whether or not the file exists yet.
fn lock_key(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf()),
    }
}

fn lock_for(path: &Path) -> Arc<Mutex<()>> {
    let registry = DOCUMENT_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    // The map only ever gains entries, so a poisoned guard is still consistent.
    let mut locks = registry.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(locks.entry(lock_key(path)).or_default())
}

/// JSON document store.
///
/// Appends rewrite the whole document. They are serialized through a lock
/// shared by every store opened on the same file and land via a temp file
/// rename, so a reader never observes a partial write.
pub struct JsonDocumentStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let write_lock = lock_for(&path);
        Self { path, write_lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries that decode with an in-range rating. Other array elements are
    /// skipped with a warning. A missing file is empty, a document that is not
    /// a JSON array is an error.
    pub fn load_document(&self) -> TonefitResult<Vec<FeedbackEntry>> {
        let raw = self.load_raw()?;
        let total = raw.len();
        let mut entries = Vec::with_capacity(total);
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<FeedbackEntry>(value) {
                Ok(entry) if entry.has_valid_rating() => entries.push(entry),
                Ok(entry) => warn!(
                    path = %self.path.display(),
                    index,
                    rating = entry.rating,
                    "skipping feedback entry with out-of-range rating"
                ),
                Err(e) => warn!(
                    path = %self.path.display(),
                    index,
                    error = %e,
                    "skipping undecodable feedback entry"
                ),
            }
        }
        if entries.len() < total {
            debug!(kept = entries.len(), total, "feedback document partially decoded");
        }
        Ok(entries)
    }

    /// The document as raw array elements, untouched.
    fn load_raw(&self) -> TonefitResult<Vec<Value>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "feedback document missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::Io {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                }
                .into())
            }
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(|e| {
            StorageError::CorruptDocument {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn persist(&self, entries: &[Value]) -> TonefitResult<()> {
        let io_err = |e: std::io::Error| StorageError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        };
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let body = serde_json::to_string_pretty(entries)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(body.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }

    /// Copy every entry of this document into `target`. Returns how many were copied.
    pub fn import_into(&self, target: &dyn IFeedbackStore) -> TonefitResult<usize> {
        let entries = self.load_document()?;
        for entry in &entries {
            target.append(entry)?;
        }
        Ok(entries.len())
    }
}

impl IFeedbackStore for JsonDocumentStore {
    /// Malformed documents degrade to empty.
    fn read_all(&self) -> TonefitResult<Vec<FeedbackEntry>> {
        match self.load_document() {
            Ok(entries) => Ok(entries),
            Err(e) => {
                events::degraded("json_document_store", &e.to_string(), "empty feedback set");
                Ok(Vec::new())
            }
        }
    }

    /// Refuses to overwrite a malformed document. Elements that do not decode
    /// are carried over verbatim.
    fn append(&self, entry: &FeedbackEntry) -> TonefitResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| poisoned("document store"))?;
        let mut entries = self.load_raw()?;
        entries.push(serde_json::to_value(entry)?);
        self.persist(&entries)?;
        events::feedback_recorded(self.name(), &entry.tone, &entry.platforms, entry.rating);
        Ok(())
    }

    fn name(&self) -> &str {
        "json_document"
    }
}
