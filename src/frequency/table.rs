// Word-count table oracle.
//
// Loads a plain-text frequency list with one `word count` pair per line, the
// format used by the FrequencyWords project (e.g. `en_50k.txt`). Counts are
// converted to proportions of the total, so a word's frequency is directly
// comparable to the common-word threshold.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::traits::FrequencyOracle;

/// In-memory word frequency table for one language.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    language: String,
    frequencies: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Build a table from already-normalized frequencies.
    ///
    /// Words are lowercased; a repeated word keeps its last frequency.
    pub fn from_frequencies<I, S>(language: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let frequencies = entries
            .into_iter()
            .map(|(word, freq)| (word.as_ref().to_lowercase(), freq))
            .collect();

        Self {
            language: language.to_string(),
            frequencies,
        }
    }

    /// Parse a `word count` list. Blank lines are skipped; anything else that
    /// doesn't parse is an error naming the offending line.
    pub fn from_counts<R: BufRead>(language: &str, reader: R) -> Result<Self> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut total: u64 = 0;

        for (i, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read word list line {}", i + 1))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(word), Some(count), None) = (fields.next(), fields.next(), fields.next())
            else {
                anyhow::bail!("Malformed word list line {}: {line:?}", i + 1);
            };
            let count: u64 = count
                .parse()
                .with_context(|| format!("Invalid count on word list line {}: {count:?}", i + 1))?;

            *counts.entry(word.to_lowercase()).or_insert(0) += count;
            total += count;
        }

        if total == 0 {
            anyhow::bail!("Word list is empty");
        }

        let frequencies = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / total as f64))
            .collect();

        Ok(Self {
            language: language.to_string(),
            frequencies,
        })
    }

    /// Load a `word count` list from disk.
    pub fn load(language: &str, path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open word list {}", path.display()))?;
        let table = Self::from_counts(language, std::io::BufReader::new(file))
            .with_context(|| format!("Failed to parse word list {}", path.display()))?;

        info!(
            language = language,
            words = table.len(),
            path = %path.display(),
            "Loaded word frequency table"
        );

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl FrequencyOracle for FrequencyTable {
    fn language(&self) -> &str {
        &self.language
    }

    fn raw_frequency(&self, word: &str) -> f64 {
        self.frequencies.get(word).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::traits::MINIMUM_FREQUENCY;

    #[test]
    fn test_counts_become_proportions() {
        let list = "the 60\nocean 30\n\ncurrent 10\n";
        let table = FrequencyTable::from_counts("en", list.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert!((table.raw_frequency("the") - 0.6).abs() < 1e-12);
        assert!((table.raw_frequency("ocean") - 0.3).abs() < 1e-12);
        assert!((table.raw_frequency("current") - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_word_is_clamped() {
        let table = FrequencyTable::from_counts("en", "the 1\n".as_bytes()).unwrap();
        assert_eq!(table.raw_frequency("thalassocracy"), 0.0);
        assert_eq!(
            table.frequency("thalassocracy", MINIMUM_FREQUENCY),
            MINIMUM_FREQUENCY
        );
    }

    #[test]
    fn test_words_are_lowercased_and_merged() {
        let table = FrequencyTable::from_counts("en", "The 2\nthe 2\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert!((table.raw_frequency("the") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_line_fails() {
        let err = FrequencyTable::from_counts("en", "the 1\nocean\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");

        assert!(FrequencyTable::from_counts("en", "the lots\n".as_bytes()).is_err());
    }

    #[test]
    fn test_empty_list_fails() {
        assert!(FrequencyTable::from_counts("en", "\n\n".as_bytes()).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join("fuse-test-missing-wordlist.txt");
        assert!(FrequencyTable::load("en", &path).is_err());
    }
}
