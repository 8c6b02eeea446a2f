use crate::errors::TonefitResult;
use crate::models::FeedbackEntry;

/// Append-only feedback persistence: read everything, append one.
///
/// Implementations must make `append` atomic with respect to concurrent appends.
pub trait IFeedbackStore: Send + Sync {
    /// All entries in append order.
    fn read_all(&self) -> TonefitResult<Vec<FeedbackEntry>>;

    /// Persist one entry after all existing ones.
    fn append(&self, entry: &FeedbackEntry) -> TonefitResult<()>;

    /// Number of stored entries.
    fn len(&self) -> TonefitResult<usize> {
        Ok(self.read_all()?.len())
    }

    fn is_empty(&self) -> TonefitResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Backend name for logs.
    fn name(&self) -> &str;
}
