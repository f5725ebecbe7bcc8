// Frequency oracle trait — swap-ready abstraction.
//
// The profiler, scorer and section locator all take the oracle as an injected
// dependency, so tests can hand them a fixed table instead of a real word list.

/// Default floor applied to every oracle lookup.
pub const MINIMUM_FREQUENCY: f64 = 1e-6;

/// Expected frequency of words in general use, for a single language.
pub trait FrequencyOracle {
    /// The language this oracle describes (e.g. "en").
    fn language(&self) -> &str;

    /// Unclamped frequency of `word` in general usage. Unknown words are 0.0.
    fn raw_frequency(&self, word: &str) -> f64;

    /// Frequency of `word`, clamped below at `minimum`.
    fn frequency(&self, word: &str, minimum: f64) -> f64 {
        self.raw_frequency(word).max(minimum)
    }
}
