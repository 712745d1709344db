//! Lexicon handles
//!
//! Opaque collaborator types that contexts reference but never interpret:
//! the per-conversation memory, the concept that owns a context, and the
//! lexical tokens stored in context payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Identity of a per-conversation memory store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemoryId(pub u64);

/// Identity of a concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptId(pub u64);

/// Owner tag attached to every context.
///
/// The graph only checks that a concept belongs to the graph's memory; it
/// never dereferences it otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Concept {
    id: ConceptId,
    memory: MemoryId,
}

impl Concept {
    pub fn new(id: ConceptId, memory: MemoryId) -> Self {
        Self { id, memory }
    }

    pub fn id(&self) -> ConceptId {
        self.id
    }

    pub fn memory(&self) -> MemoryId {
        self.memory
    }
}

/// Equality-comparable lexical token.
///
/// The word is stored as given and compared exactly. `"Apple"` and `"apple"`
/// are different tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictionaryItem {
    word: Arc<str>,
}

impl DictionaryItem {
    pub fn new(word: &str) -> Self {
        Self {
            word: Arc::from(word),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.word
    }

    pub fn is(&self, word: &str) -> bool {
        *self.word == *word
    }

    /// Folded form for matching against fixed vocabularies: Unicode NFC,
    /// surrounding whitespace trimmed, lower-cased. The stored word is
    /// unchanged.
    pub fn folded(&self) -> String {
        self.word.trim().nfc().collect::<String>().to_lowercase()
    }
}

impl fmt::Display for DictionaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)
    }
}

impl From<&str> for DictionaryItem {
    fn from(word: &str) -> Self {
        DictionaryItem::new(word)
    }
}

/// Fixed tokens the question classifiers compare against.
pub mod well_known {
    pub const WHO: &str = "who";
    pub const WHAT: &str = "what";
    pub const WHEN: &str = "when";
    pub const WHERE: &str = "where";
    pub const WHY: &str = "why";
    pub const HOW: &str = "how";
    pub const ARE: &str = "are";
    pub const CAN: &str = "can";
    pub const IF: &str = "if";
}
