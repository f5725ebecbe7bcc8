// General-language word frequencies — the oracle that tells the profiler
// which words are common and how strongly to downweight shared words.
//
// The default oracle is a word-count table downloaded once per language.
// Without it, a stop-word list stands in so the tool still runs.

pub mod download;
pub mod stopwords;
pub mod table;
pub mod traits;
