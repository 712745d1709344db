//! Group contexts
//!
//! A group is a node whose children are its members, all of one kind.
//! [`MemberSet`] is the read contract shared by groups and by subjects, which
//! behave as a group containing only themselves.

use crate::context::{
    ContextId, ContextKind, ContextPayload, ContextTag, ContextVariant, Handle, SubjectContext,
};
use crate::error::ContextError;
use crate::graph::ContextGraph;
use std::marker::PhantomData;

/// Payload of a group node: the kind its members must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupContext {
    member: ContextTag,
}

impl GroupContext {
    pub(crate) fn new(member: ContextTag) -> Self {
        Self { member }
    }

    pub fn member(&self) -> ContextTag {
        self.member
    }

    pub fn admits(&self, kind: &ContextKind) -> bool {
        kind.tag().is_a(self.member)
    }
}

/// Marker selecting groups whose members are `T`.
pub struct Group<T>(PhantomData<fn() -> T>);

impl<T: ContextPayload> ContextVariant for Group<T> {
    fn accepts(kind: &ContextKind) -> bool {
        matches!(kind, ContextKind::Group(group) if group.member == T::TAG)
    }
}

/// Ordered members with first/last/has-items queries.
pub trait MemberSet<T> {
    fn contexts(&self, graph: &ContextGraph) -> Vec<Handle<T>>;

    fn has_items(&self, graph: &ContextGraph) -> bool {
        !self.contexts(graph).is_empty()
    }

    fn first(&self, graph: &ContextGraph) -> Option<Handle<T>> {
        self.contexts(graph).first().copied()
    }

    fn last(&self, graph: &ContextGraph) -> Option<Handle<T>> {
        self.contexts(graph).last().copied()
    }
}

impl<T: ContextPayload> MemberSet<T> for Handle<Group<T>> {
    fn contexts(&self, graph: &ContextGraph) -> Vec<Handle<T>> {
        graph
            .children(self.id())
            .iter()
            .filter_map(|child| graph.handle::<T>(*child))
            .collect()
    }

    fn has_items(&self, graph: &ContextGraph) -> bool {
        graph
            .children(self.id())
            .iter()
            .any(|child| graph.handle::<T>(*child).is_some())
    }
}

impl MemberSet<SubjectContext> for Handle<SubjectContext> {
    fn contexts(&self, _graph: &ContextGraph) -> Vec<Handle<SubjectContext>> {
        vec![*self]
    }

    fn has_items(&self, _graph: &ContextGraph) -> bool {
        true
    }

    fn first(&self, _graph: &ContextGraph) -> Option<Handle<SubjectContext>> {
        Some(*self)
    }

    fn last(&self, _graph: &ContextGraph) -> Option<Handle<SubjectContext>> {
        Some(*self)
    }
}

impl<T: ContextPayload> Handle<Group<T>> {
    /// Attach a detached context as the newest member.
    pub fn add(
        &self,
        graph: &mut ContextGraph,
        member: impl Into<ContextId>,
    ) -> Result<(), ContextError> {
        graph.add_to_group(*self, member.into())
    }

    /// Drop a member and its subtree; false if it is not a member.
    pub fn remove(&self, graph: &mut ContextGraph, member: impl Into<ContextId>) -> bool {
        graph.remove_from_group(*self, member.into())
    }
}
