/// Feedback model and analysis errors.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("rating {rating} is outside the accepted range {min}..={max}")]
    InvalidRating { rating: u8, min: u8, max: u8 },

    #[error("failed to export insights to {path}: {reason}")]
    ExportFailed { path: String, reason: String },
}
