//! Context Graph
//!
//! Arena owning every context node of one conversational session. Nodes are
//! addressed by [`ContextId`]; each child list is the owning side of the tree
//! and parent ids are lookup-only back-references.
//!
//! The graph is single-threaded by contract: each conversation owns its own
//! graph and no internal locking is performed.

pub mod flatten;
pub mod intent;

pub use flatten::Flatten;
pub use intent::{MostRecentFirst, SubjectOrdering};

use crate::config::GraphSettings;
use crate::context::{
    ContextId, ContextKind, ContextNode, ContextPayload, ContextVariant, Group, GroupContext,
    Handle, IntentContext,
};
use crate::error::ContextError;
use crate::lexicon::{Concept, MemoryId};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

pub struct ContextGraph {
    memory: MemoryId,
    settings: GraphSettings,
    nodes: HashMap<ContextId, ContextNode>,
}

impl ContextGraph {
    /// Create an empty graph bound to a conversation's memory.
    pub fn new(memory: MemoryId) -> Self {
        Self::with_settings(memory, GraphSettings::default())
    }

    pub fn with_settings(memory: MemoryId, settings: GraphSettings) -> Self {
        Self {
            memory,
            settings,
            nodes: HashMap::new(),
        }
    }

    pub fn memory(&self) -> MemoryId {
        self.memory
    }

    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ContextId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: ContextId) -> Option<&ContextNode> {
        self.nodes.get(&id)
    }

    pub fn payload<T: ContextPayload>(&self, handle: Handle<T>) -> Option<&T> {
        self.nodes.get(&handle.id()).and_then(|n| T::view(n.kind()))
    }

    pub fn payload_mut<T: ContextPayload>(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.nodes
            .get_mut(&handle.id())
            .and_then(|n| T::view_mut(n.kind_mut()))
    }

    /// Typed handle for `id` if the node exists and is selected by `T`.
    pub fn handle<T: ContextVariant>(&self, id: ContextId) -> Option<Handle<T>> {
        self.nodes
            .get(&id)
            .filter(|n| T::accepts(n.kind()))
            .map(|_| Handle::new(id))
    }

    pub fn parent(&self, id: ContextId) -> Option<ContextId> {
        self.nodes.get(&id).and_then(|n| n.parent())
    }

    /// Ordered children; empty for unknown ids.
    pub fn children(&self, id: ContextId) -> &[ContextId] {
        self.nodes.get(&id).map(|n| n.children()).unwrap_or(&[])
    }

    /// Parent chain from the direct parent up to the root.
    pub fn ancestors(&self, id: ContextId) -> Vec<ContextId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if !seen.insert(parent) {
                warn!(context = %id, "Cycle in parent chain");
                break;
            }
            chain.push(parent);
            current = self.parent(parent);
        }
        chain
    }

    /// The nearest intent at or above `id`.
    pub fn intent_of(&self, id: ContextId) -> Option<Handle<IntentContext>> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|candidate| self.handle::<IntentContext>(candidate))
    }

    /// Nodes without a parent, in creation order.
    pub fn roots(&self) -> Vec<ContextId> {
        let mut roots: Vec<ContextId> = self
            .nodes
            .values()
            .filter(|n| n.parent().is_none())
            .map(|n| n.id())
            .collect();
        roots.sort();
        roots
    }

    /// Create a context and attach it under `parent`.
    ///
    /// Fails when the concept belongs to another memory, when `parent` is
    /// unknown, or when `parent` is a group that does not hold this kind.
    pub fn create<T: ContextPayload>(
        &mut self,
        concept: &Concept,
        parent: Option<ContextId>,
        payload: T,
    ) -> Result<Handle<T>, ContextError> {
        self.insert(concept, parent, payload.into_kind())
            .map(Handle::new)
    }

    /// Create a conversational-turn root.
    pub fn create_intent(
        &mut self,
        concept: &Concept,
    ) -> Result<Handle<IntentContext>, ContextError> {
        self.create(concept, None, IntentContext)
    }

    /// Create an empty group whose members must be `T`.
    pub fn create_group<T: ContextPayload>(
        &mut self,
        concept: &Concept,
        parent: Option<ContextId>,
    ) -> Result<Handle<Group<T>>, ContextError> {
        self.insert(concept, parent, ContextKind::Group(GroupContext::new(T::TAG)))
            .map(Handle::new)
    }

    fn insert(
        &mut self,
        concept: &Concept,
        parent: Option<ContextId>,
        kind: ContextKind,
    ) -> Result<ContextId, ContextError> {
        if concept.memory() != self.memory {
            return Err(ContextError::ForeignConcept {
                graph: self.memory,
                concept: concept.memory(),
            });
        }
        if let Some(parent) = parent {
            self.check_admits(parent, &kind)?;
        }

        let id = ContextId::next();
        let tag = kind.tag();
        self.nodes.insert(id, ContextNode::new(id, *concept, kind));
        if let Some(parent) = parent {
            self.link(parent, id);
        }
        debug!(context = %id, kind = %tag, parent = ?parent, "Created context");
        Ok(id)
    }

    fn check_admits(&self, parent: ContextId, kind: &ContextKind) -> Result<(), ContextError> {
        let parent_node = self
            .nodes
            .get(&parent)
            .ok_or(ContextError::ContextNotFound(parent))?;
        if let ContextKind::Group(group) = parent_node.kind() {
            if !group.admits(kind) {
                return Err(ContextError::MemberKindMismatch {
                    expected: group.member(),
                    actual: kind.tag(),
                });
            }
        }
        Ok(())
    }

    fn link(&mut self, parent: ContextId, child: ContextId) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.push_child(child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.set_parent(Some(parent));
        }
    }

    /// Attach a detached node as the last child of `parent`.
    pub fn attach(&mut self, parent: ContextId, child: ContextId) -> Result<(), ContextError> {
        let child_node = self
            .nodes
            .get(&child)
            .ok_or(ContextError::ContextNotFound(child))?;
        if let Some(current) = child_node.parent() {
            return Err(ContextError::AlreadyAttached {
                child,
                parent: current,
            });
        }
        self.check_admits(parent, child_node.kind())?;
        if parent == child || self.ancestors(parent).contains(&child) {
            return Err(ContextError::CycleDetected { child, parent });
        }
        self.link(parent, child);
        debug!(context = %child, parent = %parent, "Attached context");
        Ok(())
    }

    /// Unlink `child` from `parent` and clear its back-reference.
    ///
    /// The child stays in the graph as a detached root. Returns false, with
    /// no mutation, when `child` is not one of `parent`'s children.
    pub fn remove_child(&mut self, parent: ContextId, child: ContextId) -> bool {
        let removed = self
            .nodes
            .get_mut(&parent)
            .map(|node| node.remove_child(child))
            .unwrap_or(false);
        if removed {
            if let Some(node) = self.nodes.get_mut(&child) {
                node.set_parent(None);
            }
            debug!(context = %child, parent = %parent, "Detached context");
        }
        removed
    }

    /// Detach `id` from its parent, if any.
    pub fn detach(&mut self, id: ContextId) -> bool {
        match self.parent(id) {
            Some(parent) => self.remove_child(parent, id),
            None => false,
        }
    }

    /// Detach `id` and drop it together with its subtree.
    pub fn discard(&mut self, id: ContextId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.detach(id);

        let mut stack = vec![id];
        let mut dropped = 0usize;
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend_from_slice(node.children());
                dropped += 1;
            }
        }
        debug!(context = %id, dropped, "Discarded context subtree");
        true
    }

    pub fn add_to_group<T: ContextPayload>(
        &mut self,
        group: Handle<Group<T>>,
        member: ContextId,
    ) -> Result<(), ContextError> {
        self.attach(group.id(), member)
    }

    /// Drop `member` and its subtree from `group`.
    ///
    /// Returns false without mutating anything when `member` is not
    /// currently in the group, so a repeated call always returns false.
    pub fn remove_from_group<T: ContextPayload>(
        &mut self,
        group: Handle<Group<T>>,
        member: ContextId,
    ) -> bool {
        if !self.children(group.id()).contains(&member) {
            return false;
        }
        self.discard(member)
    }

    /// Depth-first, pre-order iterator over the descendants of `root` that
    /// `T` selects. `root` itself is not yielded.
    ///
    /// Group nodes are always traversed. They are yielded only when
    /// `include_groups` is set and `T` selects them.
    pub fn flatten<T: ContextVariant>(
        &self,
        root: ContextId,
        include_groups: bool,
    ) -> Flatten<'_, T> {
        Flatten::new(self, root, include_groups)
    }

    #[cfg(test)]
    pub(crate) fn force_link(&mut self, parent: ContextId, child: ContextId) {
        self.link(parent, child);
    }
}
