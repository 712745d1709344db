//! Base context node

use crate::context::{ContextKind, ContextTag};
use crate::lexicon::Concept;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide creation counter shared by every graph.
static CREATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Identity of a node.
///
/// Ids are drawn from one process-wide counter, so an id is never reused and
/// a handle from another graph resolves to nothing here. Larger ids were
/// created later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(pub(crate) u64);

impl ContextId {
    pub(crate) fn next() -> Self {
        ContextId(CREATION_SEQUENCE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx#{}", self.0)
    }
}

/// One recognized linguistic fragment.
///
/// The parent is a lookup-only id; the child list is the owning side of the
/// relation. Both are maintained exclusively by the graph.
#[derive(Debug, Clone)]
pub struct ContextNode {
    id: ContextId,
    concept: Concept,
    parent: Option<ContextId>,
    children: Vec<ContextId>,
    kind: ContextKind,
}

impl ContextNode {
    pub(crate) fn new(id: ContextId, concept: Concept, kind: ContextKind) -> Self {
        Self {
            id,
            concept,
            parent: None,
            children: Vec::new(),
            kind,
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn concept(&self) -> &Concept {
        &self.concept
    }

    pub fn parent(&self) -> Option<ContextId> {
        self.parent
    }

    pub fn children(&self) -> &[ContextId] {
        &self.children
    }

    pub fn kind(&self) -> &ContextKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ContextKind {
        &mut self.kind
    }

    pub fn tag(&self) -> ContextTag {
        self.kind.tag()
    }

    /// Creation-sequence number; larger means created later.
    pub fn sequence(&self) -> u64 {
        self.id.0
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ContextId>) {
        self.parent = parent;
    }

    pub(crate) fn push_child(&mut self, child: ContextId) {
        self.children.push(child);
    }

    /// Unlink `child`; false if it is not in the list.
    pub(crate) fn remove_child(&mut self, child: ContextId) -> bool {
        match self.children.iter().position(|c| *c == child) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }
}
