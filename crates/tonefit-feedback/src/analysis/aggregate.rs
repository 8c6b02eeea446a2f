//! Rating lists bucketed by tone, platform and combination.

use std::collections::BTreeMap;

use tonefit_core::models::{AggregateStat, CombinationKey, FeedbackEntry};

/// Ratings grouped along every dimension the analyzer reports on.
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub all: Vec<u8>,
    pub by_tone: BTreeMap<String, Vec<u8>>,
    pub by_platform: BTreeMap<String, Vec<u8>>,
    /// One rating per platform an entry lists.
    pub by_combination: BTreeMap<CombinationKey, Vec<u8>>,
}

impl Aggregates {
    pub fn collect(entries: &[FeedbackEntry]) -> Self {
        let mut agg = Self::default();
        for entry in entries {
            agg.all.push(entry.rating);
            agg.by_tone
                .entry(entry.tone.clone())
                .or_default()
                .push(entry.rating);
            for platform in &entry.platforms {
                agg.by_platform
                    .entry(platform.clone())
                    .or_default()
                    .push(entry.rating);
            }
            for key in entry.combinations() {
                agg.by_combination.entry(key).or_default().push(entry.rating);
            }
        }
        agg
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn overall(&self) -> Option<AggregateStat> {
        AggregateStat::from_ratings(&self.all)
    }

    pub fn tone_stats(&self) -> BTreeMap<String, AggregateStat> {
        stats_of(&self.by_tone)
    }

    pub fn platform_stats(&self) -> BTreeMap<String, AggregateStat> {
        stats_of(&self.by_platform)
    }

    pub fn combination_stats(&self) -> impl Iterator<Item = (&CombinationKey, AggregateStat, &[u8])> {
        self.by_combination.iter().filter_map(|(key, ratings)| {
            AggregateStat::from_ratings(ratings).map(|stat| (key, stat, ratings.as_slice()))
        })
    }
}

fn stats_of(groups: &BTreeMap<String, Vec<u8>>) -> BTreeMap<String, AggregateStat> {
    groups
        .iter()
        .filter_map(|(k, ratings)| AggregateStat::from_ratings(ratings).map(|s| (k.clone(), s)))
        .collect()
}
