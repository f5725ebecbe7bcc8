// Wikipedia — the document source concepts resolve against.
//
// Talks to the MediaWiki Action API over plain HTTP. Each submodule handles
// one part of turning a concept name into a sectioned document.

pub mod client;
pub mod lookup;
pub mod page;
pub mod rate_limiter;
