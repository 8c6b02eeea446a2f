// Single source of truth for all default values.

// --- Graph ---
pub const DEFAULT_TRAVERSAL_DEPTH: usize = 2;
pub const DEFAULT_SUITABLE_FOR_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CREATIVITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CONCISE_CHAR_LIMIT: f64 = 100.0;
pub const DEFAULT_EMOJI_WARNING_TONES: &[&str] = &["fun"];

// --- Feedback ---
pub const DEFAULT_FEEDBACK_DB_FILENAME: &str = "feedback.db";
pub const DEFAULT_LOW_PERFORMANCE_MEAN: f64 = 2.5;
pub const DEFAULT_HIGH_PERFORMANCE_MEAN: f64 = 4.0;
pub const DEFAULT_MIN_SAMPLES: usize = 2;
pub const DEFAULT_TONE_REVISION_THRESHOLD: f64 = 3.0;
pub const DEFAULT_TONE_REFERENCE_THRESHOLD: f64 = 4.5;
pub const DEFAULT_PLATFORM_VARIANCE_THRESHOLD: f64 = 1.5;
pub const DEFAULT_OVERALL_WARNING_THRESHOLD: f64 = 3.5;
pub const DEFAULT_LIMITED_DATA_THRESHOLD: usize = 10;
pub const DEFAULT_ADAPTIVE_WEIGHT: f64 = 1.0;
pub const DEFAULT_TREND_DATE: &str = "2024-01-01";

// --- Retrieval ---
pub const DEFAULT_GUIDELINE_FILENAME: &str = "tone_guidelines.txt";
pub const DEFAULT_SEARCH_TOP_K: usize = 5;
pub const DEFAULT_SEMANTIC_MATCHES_SHOWN: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
