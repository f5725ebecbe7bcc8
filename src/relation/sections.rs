// Section location — where in a document the connecting word matters most.
//
// Each section is profiled on its own, with the same filters as the whole
// document, and the word's section-local relative frequency is compared
// across sections. Empty sections, and sections where the word doesn't
// qualify, count as 0.
//
// Policy when the word qualifies nowhere: the first section wins with a
// frequency of 0, the same answer "first maximum" gives on an all-zero list.

use serde::Serialize;

use crate::document::Document;
use crate::text::profile::Profiler;

/// A section and the connecting word's relative frequency within it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionMatch {
    pub title: String,
    pub frequency: f64,
}

/// The word's relative frequency in every section, in document order.
pub fn section_frequencies(
    profiler: &Profiler<'_>,
    word: &str,
    document: &Document,
) -> Vec<SectionMatch> {
    document
        .sections()
        .iter()
        .map(|section| {
            let frequency = if section.text.is_empty() {
                0.0
            } else {
                profiler.profile(&section.text).get(word).unwrap_or(0.0)
            };
            SectionMatch {
                title: section.title.clone(),
                frequency,
            }
        })
        .collect()
}

/// Pick the section where `word` is relatively most frequent.
///
/// Ties go to the earliest section. Returns `None` only for a document with
/// no sections at all.
pub fn locate_best_section(
    profiler: &Profiler<'_>,
    word: &str,
    document: &Document,
) -> Option<SectionMatch> {
    best_of(section_frequencies(profiler, word, document))
}

/// First maximum of a frequency table.
pub fn best_of(frequencies: Vec<SectionMatch>) -> Option<SectionMatch> {
    frequencies.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.frequency >= candidate.frequency => Some(current),
        _ => Some(candidate),
    })
}
