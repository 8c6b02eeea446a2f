/// Tonefit system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Domain graph document version understood by this build.
pub const DOMAIN_GRAPH_VERSION: u32 = 1;

/// Number of dimensions in a guideline feature vector.
pub const FEATURE_DIMENSIONS: usize = 7;

/// Separator between tone and platform in a rendered combination key.
pub const COMBINATION_SEPARATOR: char = '_';

/// Lowest accepted feedback rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted feedback rating.
pub const MAX_RATING: u8 = 5;

/// Tone recorded for feedback entries that arrive without one.
pub const UNKNOWN_TONE: &str = "unknown";
