//! Context Graph: Conversational Context Structures
//!
//! A typed, hierarchical, in-memory graph that a language-understanding
//! pipeline builds while interpreting a dialogue turn. Subjects, actions,
//! attributes, modifiers, positions, questions and intents are linked as
//! parent/child nodes and queried by flattening, with subjects ordered by
//! recency for reference resolution.

pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod lexicon;
pub mod logging;

pub use context::{ContextId, ContextKind, ContextTag, Handle};
pub use error::ContextError;
pub use graph::ContextGraph;
pub use lexicon::{Concept, ConceptId, DictionaryItem, MemoryId};
