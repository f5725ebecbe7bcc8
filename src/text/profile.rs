// Frequency profiling — what a document talks about, as relative frequencies.
//
// A profile maps each qualifying word to its occurrence count divided by the
// number of DISTINCT qualifying words in the text. That divisor is not the
// total token count, so the values are an "average share per distinct word"
// rather than a probability distribution. The magnitudes feed straight into
// the shared-vocabulary score, so the divisor must stay as it is.
//
// A word qualifies if it is at least three characters long and the frequency
// oracle doesn't consider it common.

use std::collections::BTreeMap;

use tracing::debug;

use super::normalize::{normalize, token_len};
use crate::frequency::traits::{FrequencyOracle, MINIMUM_FREQUENCY};

/// Words shorter than this never qualify.
pub const MIN_TOKEN_LEN: usize = 3;

/// Words more frequent than this in general usage are treated as common.
pub const COMMON_WORD_FREQUENCY: f64 = 0.001;

/// Tunables for profiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileParams {
    /// Oracle frequency above which a word is discarded as common
    pub common_word_threshold: f64,
    /// Floor applied to every oracle lookup
    pub minimum_frequency: f64,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            common_word_threshold: COMMON_WORD_FREQUENCY,
            minimum_frequency: MINIMUM_FREQUENCY,
        }
    }
}

/// Relative frequencies of the qualifying words in one text.
///
/// Keys iterate in lexical order, which keeps every ranking derived from a
/// profile deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyProfile {
    frequencies: BTreeMap<String, f64>,
}

impl FrequencyProfile {
    /// Relative frequency of `word`, if it qualified.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.frequencies.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// Iterate `(word, frequency)` pairs in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.frequencies.iter().map(|(w, f)| (w.as_str(), *f))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.frequencies.keys().map(String::as_str)
    }

    /// Number of distinct qualifying words.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// A word ranked by how much more often a text uses it than language at large.
#[derive(Debug, Clone, PartialEq)]
pub struct DistinctiveWord {
    pub word: String,
    /// Relative frequency within the profiled text
    pub frequency: f64,
    /// Relative frequency divided by general-language frequency
    pub salience: f64,
}

/// Builds frequency profiles against an injected oracle.
pub struct Profiler<'a> {
    oracle: &'a dyn FrequencyOracle,
    params: ProfileParams,
}

impl<'a> Profiler<'a> {
    pub fn new(oracle: &'a dyn FrequencyOracle, params: ProfileParams) -> Self {
        Self { oracle, params }
    }

    /// Clamped general-language frequency of `word`.
    pub fn weight(&self, word: &str) -> f64 {
        self.oracle.frequency(word, self.params.minimum_frequency)
    }

    /// Whether a normalized token survives the length and common-word filters.
    pub fn qualifies(&self, token: &str) -> bool {
        token_len(token) >= MIN_TOKEN_LEN && self.weight(token) <= self.params.common_word_threshold
    }

    /// Profile a piece of raw text.
    ///
    /// Text with no qualifying words yields an empty profile.
    pub fn profile(&self, text: &str) -> FrequencyProfile {
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for token in normalize(text) {
            if self.qualifies(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        if counts.is_empty() {
            return FrequencyProfile::default();
        }

        let distinct = counts.len() as f64;
        let frequencies: BTreeMap<String, f64> = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / distinct))
            .collect();

        debug!(distinct = frequencies.len(), "Built frequency profile");

        FrequencyProfile { frequencies }
    }

    /// The `top` words of a profile by salience, highest first (ties by word).
    pub fn distinctive_words(&self, profile: &FrequencyProfile, top: usize) -> Vec<DistinctiveWord> {
        let mut words: Vec<DistinctiveWord> = profile
            .iter()
            .map(|(word, frequency)| DistinctiveWord {
                word: word.to_string(),
                frequency,
                salience: frequency / self.weight(word),
            })
            .collect();

        words.sort_by(|a, b| {
            b.salience
                .partial_cmp(&a.salience)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        words.truncate(top);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::table::FrequencyTable;

    fn oracle() -> FrequencyTable {
        FrequencyTable::from_frequencies(
            "en",
            [("the", 0.05), ("and", 0.03), ("current", 0.0005), ("ocean", 0.0002)],
        )
    }

    #[test]
    fn test_divides_by_distinct_words() {
        let oracle = oracle();
        let profiler = Profiler::new(&oracle, ProfileParams::default());

        let profile = profiler.profile("ocean current temperature current ocean");
        assert_eq!(profile.len(), 3);
        assert!((profile.get("ocean").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((profile.get("current").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((profile.get("temperature").unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_drops_short_and_common_words() {
        let oracle = oracle();
        let profiler = Profiler::new(&oracle, ProfileParams::default());

        let profile = profiler.profile("The ox and the ocean");
        assert_eq!(profile.words().collect::<Vec<_>>(), vec!["ocean"]);
        assert_eq!(profile.get("ocean"), Some(1.0));
    }

    #[test]
    fn test_no_qualifying_words_is_empty() {
        let oracle = oracle();
        let profiler = Profiler::new(&oracle, ProfileParams::default());

        assert!(profiler.profile("").is_empty());
        assert!(profiler.profile("the and a 42 !!").is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let oracle = FrequencyTable::from_frequencies("en", [("border", 0.001)]);
        let profiler = Profiler::new(&oracle, ProfileParams::default());
        assert!(profiler.qualifies("border"));
    }

    #[test]
    fn test_distinctive_words_favor_rare_words() {
        let oracle = oracle();
        let profiler = Profiler::new(&oracle, ProfileParams::default());
        let profile = profiler.profile("current current current bathymetry");

        let top = profiler.distinctive_words(&profile, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].word, "bathymetry");
        assert_eq!(top[0].frequency, 0.5);
    }

    #[test]
    fn test_weight_is_clamped() {
        let oracle = oracle();
        let profiler = Profiler::new(&oracle, ProfileParams::default());
        assert_eq!(profiler.weight("bathymetry"), MINIMUM_FREQUENCY);
        assert_eq!(profiler.weight("ocean"), 0.0002);
    }
}
