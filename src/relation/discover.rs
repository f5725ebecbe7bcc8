// Relation orchestrator — from two resolved concepts to one connecting word.
//
// 1. Profile each concept's full document text
// 2. Score the vocabulary the two profiles share
// 3. Take the strongest shared word as the connection
// 4. Find the section of each document where that word is most prominent
//
// Either the whole result comes back or an error does. A query that fails at
// step 2 never touches the sections.

use serde::Serialize;
use tracing::info;

use super::scorer::score_shared;
use super::sections::{locate_best_section, SectionMatch};
use crate::document::Document;
use crate::error::RelationError;
use crate::frequency::traits::FrequencyOracle;
use crate::text::profile::{ProfileParams, Profiler};

/// A user-named concept and the document it resolved to.
#[derive(Debug, Clone)]
pub struct Concept {
    pub name: String,
    pub document: Document,
}

impl Concept {
    pub fn new(name: &str, document: Document) -> Self {
        Self {
            name: name.to_string(),
            document,
        }
    }
}

/// One side of a relation: the concept and its best section for the connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptLink {
    pub concept: String,
    pub section: SectionMatch,
}

/// The outcome of a successful relation query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationResult {
    pub first: ConceptLink,
    pub second: ConceptLink,
    /// The word that links the two concepts
    pub connection: String,
    /// Weighted co-occurrence score of the connection
    pub score: f64,
    /// Sum of scores over all shared words
    pub total_score: f64,
    /// How many words the two documents share after filtering
    pub shared_words: usize,
}

/// Discovers the connecting word between two concepts.
pub struct RelationFinder<'a> {
    profiler: Profiler<'a>,
}

impl<'a> RelationFinder<'a> {
    pub fn new(oracle: &'a dyn FrequencyOracle, params: ProfileParams) -> Self {
        Self {
            profiler: Profiler::new(oracle, params),
        }
    }

    /// Run a full relation query over two concepts.
    pub fn discover(
        &self,
        first: &Concept,
        second: &Concept,
    ) -> Result<RelationResult, RelationError> {
        let profile_a = self.profiler.profile(&first.document.content);
        let profile_b = self.profiler.profile(&second.document.content);

        info!(
            first = %first.name,
            first_words = profile_a.len(),
            second = %second.name,
            second_words = profile_b.len(),
            "Profiled concept documents"
        );

        // Fails before any section is touched when nothing is shared
        let shared = score_shared(
            &self.profiler,
            (&first.name, &profile_a),
            (&second.name, &profile_b),
        )?;
        let total = shared.total_score();
        let shared_words = shared.word_count();
        let top = shared.into_top();

        let first_section = self.locate(first, &top.word)?;
        let second_section = self.locate(second, &top.word)?;

        info!(
            connection = %top.word,
            score = top.score,
            first_section = %first_section.title,
            second_section = %second_section.title,
            "Discovered relation"
        );

        Ok(RelationResult {
            first: ConceptLink {
                concept: first.name.clone(),
                section: first_section,
            },
            second: ConceptLink {
                concept: second.name.clone(),
                section: second_section,
            },
            connection: top.word,
            score: top.score,
            total_score: total,
            shared_words,
        })
    }

    fn locate(&self, concept: &Concept, word: &str) -> Result<SectionMatch, RelationError> {
        locate_best_section(&self.profiler, word, &concept.document).ok_or_else(|| {
            RelationError::NoSections {
                concept: concept.name.clone(),
                word: word.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Section;
    use crate::frequency::table::FrequencyTable;

    fn oracle() -> FrequencyTable {
        FrequencyTable::from_frequencies(
            "en",
            [
                ("the", 0.05),
                ("current", 0.0005),
                ("ocean", 0.0002),
                ("temperature", 0.0003),
                ("weather", 0.0004),
            ],
        )
    }

    #[test]
    fn test_discover_full_result() {
        let oracle = oracle();
        let finder = RelationFinder::new(&oracle, ProfileParams::default());

        let gulf = Concept::new(
            "Gulf Stream",
            Document::from_sections(
                "Gulf Stream",
                vec![
                    Section::new("Overview", "ocean current temperature"),
                    Section::new("Flow", "current ocean current ocean ocean"),
                ],
            ),
        );
        let climate = Concept::new(
            "Climate",
            Document::from_sections(
                "Climate",
                vec![
                    Section::new("Weather", "current weather temperature"),
                    Section::new("Oceans", "ocean current"),
                ],
            ),
        );

        let result = finder.discover(&gulf, &climate).unwrap();
        assert_eq!(result.connection, "ocean");
        assert_eq!(result.first.concept, "Gulf Stream");
        assert_eq!(result.first.section.title, "Flow");
        assert_eq!(result.second.concept, "Climate");
        assert_eq!(result.second.section.title, "Oceans");
        assert_eq!(result.shared_words, 3);
        assert!(result.total_score >= result.score);
    }

    #[test]
    fn test_document_without_sections_fails_whole_query() {
        let oracle = oracle();
        let finder = RelationFinder::new(&oracle, ProfileParams::default());

        let a = Concept::new(
            "A",
            Document::from_sections("A", vec![Section::new("Body", "ocean")]),
        );
        let b = Concept::new("B", Document::new("B", "ocean", vec![]));

        let err = finder.discover(&a, &b).unwrap_err();
        assert_eq!(
            err,
            RelationError::NoSections {
                concept: "B".to_string(),
                word: "ocean".to_string(),
            }
        );
    }

    #[test]
    fn test_only_common_words_means_no_connection() {
        let oracle = oracle();
        let finder = RelationFinder::new(&oracle, ProfileParams::default());

        let a = Concept::new("A", Document::from_sections("A", vec![Section::new("Body", "the the")]));
        let b = Concept::new("B", Document::from_sections("B", vec![Section::new("Body", "the")]));

        assert!(matches!(
            finder.discover(&a, &b),
            Err(RelationError::NoSharedVocabulary { .. })
        ));
    }
}
