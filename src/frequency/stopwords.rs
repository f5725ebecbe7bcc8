// Stop-word fallback oracle.
//
// Used when no frequency table has been downloaded. Stop words report a
// frequency well above the common-word threshold so the profiler drops them;
// every other word reports 0.0 and is clamped to the floor, which makes the
// scorer weight all shared vocabulary equally. Coarse, but it keeps the tool
// usable offline from the word list.

use std::collections::HashSet;

use anyhow::Result;
use stop_words::{get, LANGUAGE};

use super::traits::FrequencyOracle;

/// Frequency reported for any stop word.
pub const STOP_WORD_FREQUENCY: f64 = 0.01;

/// Map an ISO 639-1 code to a stop-word list.
pub fn stop_word_language(code: &str) -> Option<LANGUAGE> {
    match code {
        "en" => Some(LANGUAGE::English),
        "de" => Some(LANGUAGE::German),
        "es" => Some(LANGUAGE::Spanish),
        "fr" => Some(LANGUAGE::French),
        "it" => Some(LANGUAGE::Italian),
        "nl" => Some(LANGUAGE::Dutch),
        "pt" => Some(LANGUAGE::Portuguese),
        _ => None,
    }
}

/// Oracle that only knows which words are stop words.
pub struct StopWordOracle {
    language: String,
    stop_words: HashSet<String>,
}

impl StopWordOracle {
    /// Build the oracle for a supported language code.
    pub fn new(language: &str) -> Result<Self> {
        let Some(list) = stop_word_language(language) else {
            anyhow::bail!("No stop-word list available for language {language:?}");
        };

        let words: Vec<String> = get(list);
        Ok(Self {
            language: language.to_string(),
            stop_words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        })
    }
}

impl FrequencyOracle for StopWordOracle {
    fn language(&self) -> &str {
        &self.language
    }

    fn raw_frequency(&self, word: &str) -> f64 {
        if self.stop_words.contains(word) {
            STOP_WORD_FREQUENCY
        } else {
            0.0
        }
    }
}
