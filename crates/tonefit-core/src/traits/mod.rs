mod feedback_store;

pub use feedback_store::IFeedbackStore;
