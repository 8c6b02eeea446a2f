//! Rule-based feature extraction.
//!
//! Seven non-negative dimensions, in order: word count, emoji flag,
//! exclamation flag, formal keyword count, casual keyword count,
//! call-to-action flag, hashtag flag.

use std::ops::RangeInclusive;

use tonefit_core::constants::FEATURE_DIMENSIONS;

pub const FORMAL_KEYWORDS: [&str; 4] = ["professional", "value", "benefits", "business"];
pub const CASUAL_KEYWORDS: [&str; 4] = ["fun", "playful", "emoji", "snappy"];
pub const CTA_KEYWORDS: [&str; 3] = ["cta", "button", "click"];

/// Emoticons block.
pub const EMOJI_RANGE: RangeInclusive<char> = '\u{1F600}'..='\u{1F64F}';

/// A fixed-dimension feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector(pub [f64; FEATURE_DIMENSIONS]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn word_count(&self) -> f64 {
        self.0[0]
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }
}

fn flag(present: bool) -> f64 {
    if present {
        1.0
    } else {
        0.0
    }
}

/// Keywords from `keywords` that occur anywhere in `text`, each counted once.
fn keyword_hits(text: &str, keywords: &[&str]) -> f64 {
    keywords.iter().filter(|k| text.contains(*k)).count() as f64
}

/// Extract the feature vector of `text`. Matching is case-insensitive and
/// substring based, so "funny" counts as "fun".
pub fn embed(text: &str) -> FeatureVector {
    let text = text.to_lowercase();
    FeatureVector([
        text.split_whitespace().count() as f64,
        flag(text.chars().any(|c| EMOJI_RANGE.contains(&c))),
        flag(text.contains('!')),
        keyword_hits(&text, &FORMAL_KEYWORDS),
        keyword_hits(&text, &CASUAL_KEYWORDS),
        flag(CTA_KEYWORDS.iter().any(|k| text.contains(k))),
        flag(text.contains('#') || text.contains("hashtag")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_zero_vector() {
        assert!(embed("").is_zero());
        assert!(embed("   ").is_zero());
    }

    #[test]
    fn counts_words_and_flags() {
        let v = embed("Click the button now! 😀 #deal");
        assert_eq!(v.0, [6.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn keyword_counts_are_distinct_substrings() {
        // "business" twice still counts once; "values" contains "value".
        let v = embed("Business values and business BENEFITS");
        assert_eq!(v.0[3], 3.0);
        let v = embed("Funny, playful and snappy emojis");
        assert_eq!(v.0[4], 4.0);
    }

    #[test]
    fn emoji_outside_emoticon_block_is_ignored() {
        assert_eq!(embed("rocket 🚀").0[1], 0.0);
        assert_eq!(embed("pray 🙏").0[1], 1.0);
    }

    #[test]
    fn hashtag_word_counts_as_hashtag() {
        assert_eq!(embed("use a hashtag").0[6], 1.0);
    }
}
