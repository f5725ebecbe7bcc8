// Typed errors for relation discovery and concept resolution.
//
// Everything outside these two boundaries uses anyhow.

use thiserror::Error;

/// Ways a relation query can fail. No partial result exists alongside any of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelationError {
    #[error("\"{first}\" and \"{second}\" share no distinctive vocabulary")]
    NoSharedVocabulary { first: String, second: String },

    #[error("\"{concept}\" has no sections to locate \"{word}\" in")]
    NoSections { concept: String, word: String },
}

/// Ways turning a concept name into a document can fail.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("\"{name}\" is ambiguous ({} options)", .options.len())]
    Ambiguous { name: String, options: Vec<String> },

    #[error("No page found for \"{0}\"")]
    NotFound(String),

    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
