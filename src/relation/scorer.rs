// Shared-vocabulary scoring.
//
// For every word present in both profiles:
//
//   score = profile_a[word] * profile_b[word] / oracle(word)
//
// The product rewards words both documents use heavily; dividing by the
// general-language frequency rewards words that are rare outside them. The
// highest-scoring word is the best candidate for the concept linking the two.

use serde::Serialize;
use tracing::debug;

use crate::error::RelationError;
use crate::text::profile::{FrequencyProfile, Profiler};

/// One shared word and its weighted co-occurrence score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedWordScore {
    pub word: String,
    pub score: f64,
}

/// The ranked vocabulary two profiles share. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedVocabulary {
    top: SharedWordScore,
    rest: Vec<SharedWordScore>,
}

impl SharedVocabulary {
    /// The strongest shared word.
    pub fn top(&self) -> &SharedWordScore {
        &self.top
    }

    pub fn into_top(self) -> SharedWordScore {
        self.top
    }

    /// Every shared word, strongest first.
    pub fn iter(&self) -> impl Iterator<Item = &SharedWordScore> {
        std::iter::once(&self.top).chain(self.rest.iter())
    }

    /// Number of shared words (at least 1).
    pub fn word_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Sum of all shared-word scores: the dot product of the two weighted profiles.
    pub fn total_score(&self) -> f64 {
        self.iter().map(|s| s.score).sum()
    }
}

/// Score every word the two profiles share, strongest first.
///
/// Ties are ordered by word, so the ranking is the same whichever profile
/// comes first. Fails with `NoSharedVocabulary` when nothing is shared.
pub fn score_shared(
    profiler: &Profiler<'_>,
    first: (&str, &FrequencyProfile),
    second: (&str, &FrequencyProfile),
) -> Result<SharedVocabulary, RelationError> {
    let (first_name, profile_a) = first;
    let (second_name, profile_b) = second;

    let mut scores: Vec<SharedWordScore> = profile_a
        .iter()
        .filter_map(|(word, freq_a)| {
            profile_b.get(word).map(|freq_b| SharedWordScore {
                word: word.to_string(),
                score: freq_a * freq_b / profiler.weight(word),
            })
        })
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });

    let mut ranked = scores.into_iter();
    let Some(top) = ranked.next() else {
        return Err(RelationError::NoSharedVocabulary {
            first: first_name.to_string(),
            second: second_name.to_string(),
        });
    };
    let rest: Vec<SharedWordScore> = ranked.collect();

    debug!(
        shared = rest.len() + 1,
        top_word = %top.word,
        top_score = top.score,
        "Scored shared vocabulary"
    );

    Ok(SharedVocabulary { top, rest })
}
