// Text processing — normalization and frequency profiling.

pub mod normalize;
pub mod profile;
