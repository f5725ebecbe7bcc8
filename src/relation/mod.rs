// Relation discovery — shared-vocabulary scoring, section location and the
// orchestration that ties them into a single answer.

pub mod discover;
pub mod scorer;
pub mod sections;
