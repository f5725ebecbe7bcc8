// Unit tests for shared-vocabulary scoring and section location.
//
// Uses fixed frequency tables so every score is computable by hand.

use fuse::document::{Document, Section};
use fuse::error::RelationError;
use fuse::frequency::table::FrequencyTable;
use fuse::relation::scorer::score_shared;
use fuse::relation::sections::{locate_best_section, section_frequencies};
use fuse::text::profile::{ProfileParams, Profiler};

fn ocean_oracle() -> FrequencyTable {
    FrequencyTable::from_frequencies(
        "en",
        [
            ("current", 0.0005),
            ("ocean", 0.0002),
            ("temperature", 0.0003),
            ("weather", 0.0004),
        ],
    )
}

// ============================================================
// score_shared — ranking
// ============================================================

#[test]
fn ocean_current_temperature_ranking() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    let a = profiler.profile("ocean current temperature current ocean");
    let b = profiler.profile("current weather temperature ocean current");

    let ranked = score_shared(&profiler, ("A", &a), ("B", &b)).unwrap();
    assert_eq!(ranked.word_count(), 3);

    let expected = [
        ("ocean", (2.0 / 3.0) * 0.25 / 0.0002),
        ("current", (2.0 / 3.0) * 0.5 / 0.0005),
        ("temperature", (1.0 / 3.0) * 0.25 / 0.0003),
    ];
    for (got, (word, score)) in ranked.iter().zip(expected) {
        assert_eq!(got.word, word);
        assert!((got.score - score).abs() < 1e-9, "{word}: {} vs {score}", got.score);
    }
}

#[test]
fn ranking_is_independent_of_argument_order() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    let a = profiler.profile("ocean current temperature current ocean salinity");
    let b = profiler.profile("current weather temperature ocean current salinity");

    let ab = score_shared(&profiler, ("A", &a), ("B", &b)).unwrap();
    let ba = score_shared(&profiler, ("B", &b), ("A", &a)).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn only_shared_words_are_scored() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    let a = profiler.profile("ocean volcano");
    let b = profiler.profile("ocean violin");

    let ranked = score_shared(&profiler, ("A", &a), ("B", &b)).unwrap();
    assert_eq!(ranked.word_count(), 1);
    assert_eq!(ranked.top().word, "ocean");
}

#[test]
fn empty_profile_means_no_shared_vocabulary() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    let a = profiler.profile("");
    let b = profiler.profile("ocean current");

    assert!(matches!(
        score_shared(&profiler, ("A", &a), ("B", &b)),
        Err(RelationError::NoSharedVocabulary { .. })
    ));
}

// ============================================================
// Section location
// ============================================================

fn sea_document() -> Document {
    Document::from_sections(
        "Sea",
        vec![
            Section::new("Intro", ""),
            Section::new("History", "ocean ocean current"),
            Section::new("Climate", "current"),
        ],
    )
}

#[test]
fn locator_finds_history_for_ocean() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    let best = locate_best_section(&profiler, "ocean", &sea_document()).unwrap();
    assert_eq!(best.title, "History");
    assert_eq!(best.frequency, 1.0);
}

#[test]
fn locator_reports_every_section_in_order() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    let freqs = section_frequencies(&profiler, "current", &sea_document());
    let table: Vec<(&str, f64)> = freqs.iter().map(|m| (m.title.as_str(), m.frequency)).collect();
    assert_eq!(table, vec![("Intro", 0.0), ("History", 0.5), ("Climate", 1.0)]);
}

#[test]
fn locator_prefers_local_share_over_raw_count() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    // Three occurrences among many words vs. one occurrence alone
    let doc = Document::from_sections(
        "Sea",
        vec![
            Section::new(
                "Long",
                "ocean ocean ocean abyss trench ridge shelf slope plain basin",
            ),
            Section::new("Short", "ocean"),
        ],
    );

    let best = locate_best_section(&profiler, "ocean", &doc).unwrap();
    assert_eq!(best.title, "Short");
}

#[test]
fn locator_filtered_word_falls_back_to_first_section() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    // "ox" is too short to qualify in any section
    let best = locate_best_section(&profiler, "ox", &sea_document()).unwrap();
    assert_eq!(best.title, "Intro");
    assert_eq!(best.frequency, 0.0);
}

// ============================================================
// Round trip: whole document vs. its sections
// ============================================================

#[test]
fn concatenated_sections_cover_every_section_word() {
    let oracle = ocean_oracle();
    let profiler = Profiler::new(&oracle, ProfileParams::default());

    let doc = Document::from_sections(
        "Gulf Stream",
        vec![
            Section::new("Overview", "The Gulf Stream is a warm ocean current."),
            Section::new("Empty", ""),
            Section::new("Climate", "It moderates the weather of Western Europe."),
            Section::new("Ecology", "Plankton blooms follow the temperature front."),
        ],
    );

    let whole = profiler.profile(&doc.content);
    for section in doc.sections() {
        for word in profiler.profile(&section.text).words() {
            assert!(
                whole.contains(word),
                "{word:?} from section {:?} missing in whole-document profile",
                section.title
            );
        }
    }
}
