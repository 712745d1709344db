//! Error types for the context graph.

use crate::context::{ContextId, ContextTag};
use crate::lexicon::MemoryId;
use thiserror::Error;

/// Errors raised by graph construction and mutation.
///
/// Queries never fail: lookups of unknown ids return `None` and removal of a
/// non-member returns `false`.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Context not found: {0}")]
    ContextNotFound(ContextId),

    #[error("Concept belongs to memory {concept:?}, graph is bound to memory {graph:?}")]
    ForeignConcept { graph: MemoryId, concept: MemoryId },

    #[error("Group of {expected} cannot hold a {actual} context")]
    MemberKindMismatch {
        expected: ContextTag,
        actual: ContextTag,
    },

    #[error("Context {child} is already attached to {parent}; detach it first")]
    AlreadyAttached { child: ContextId, parent: ContextId },

    #[error("Attaching {child} under {parent} would create a cycle")]
    CycleDetected { child: ContextId, parent: ContextId },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ContextError {
    fn from(err: config::ConfigError) -> Self {
        ContextError::ConfigError(err.to_string())
    }
}
