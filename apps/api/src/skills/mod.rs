// Skill catalog and extraction engine.
// The engine is pure: no I/O, no shared mutable state. The LLM recommender is
// the only networked piece and sits behind a trait.

pub mod catalog;
pub mod confidence;
pub mod extractor;
pub mod handlers;
pub mod merge;
pub mod prompts;
pub mod recommender;
pub mod suggestions;
