/// Guideline retrieval errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("failed to read guideline corpus {path}: {reason}")]
    CorpusUnreadable { path: String, reason: String },
}
