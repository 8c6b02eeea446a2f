//! Well-known relationship labels. Labels are free-form; these are the ones
//! the recommendation rules and the built-in domain use.

/// Tone → creative type suitability. Drives creative-type recommendations.
pub const SUITABLE_FOR: &str = "suitable_for";

/// Platform → creative type preference.
pub const PREFERS: &str = "prefers";

/// Tone → platform compatibility labels.
pub const HIGHLY_COMPATIBLE: &str = "highly_compatible";
pub const MODERATELY_COMPATIBLE: &str = "moderately_compatible";
pub const POORLY_COMPATIBLE: &str = "poorly_compatible";

/// Platform property: whether emoji are welcome.
pub const PROP_EMOJI_FRIENDLY: &str = "emoji_friendly";

/// Platform property: maximum message length.
pub const PROP_CHAR_LIMIT: &str = "char_limit";

/// Tone property: creativity in [0, 1].
pub const PROP_CREATIVITY: &str = "creativity";
