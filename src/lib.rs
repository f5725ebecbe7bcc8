// Fuse: discover the concept that bridges two Wikipedia articles
//
// This is the library root. The relation core (text, relation) only reads
// documents and a frequency oracle; everything that talks to the outside
// world (wikipedia, frequency downloads, output) sits around it.

pub mod config;
pub mod document;
pub mod error;
pub mod frequency;
pub mod output;
pub mod relation;
pub mod resolver;
pub mod text;
pub mod wikipedia;
