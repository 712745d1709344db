//! Subtree flattening

use crate::context::{ContextId, ContextVariant, Handle};
use crate::graph::ContextGraph;
use std::collections::HashSet;
use std::marker::PhantomData;
use tracing::warn;

/// Lazy pre-order walk over a subtree, yielding the nodes `T` selects.
///
/// Created by [`ContextGraph::flatten`]. Each call produces a fresh walk.
pub struct Flatten<'g, T> {
    graph: &'g ContextGraph,
    include_groups: bool,
    stack: Vec<ContextId>,
    visited: Option<HashSet<ContextId>>,
    _marker: PhantomData<fn() -> T>,
}

impl<'g, T: ContextVariant> Flatten<'g, T> {
    pub(crate) fn new(graph: &'g ContextGraph, root: ContextId, include_groups: bool) -> Self {
        let visited = graph.settings().cycle_guard.then(|| HashSet::from([root]));
        let mut walk = Self {
            graph,
            include_groups,
            stack: Vec::new(),
            visited,
            _marker: PhantomData,
        };
        walk.push_children(root);
        walk
    }

    fn push_children(&mut self, id: ContextId) {
        self.stack
            .extend(self.graph.children(id).iter().rev().copied());
    }
}

impl<'g, T: ContextVariant> Iterator for Flatten<'g, T> {
    type Item = Handle<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if let Some(visited) = self.visited.as_mut() {
                if !visited.insert(id) {
                    warn!(context = %id, "Context reached twice during flatten; skipping");
                    continue;
                }
            }
            let Some(node) = self.graph.node(id) else {
                continue;
            };
            self.push_children(id);

            if node.kind().is_group() && !self.include_groups {
                continue;
            }
            if T::accepts(node.kind()) {
                return Some(Handle::new(id));
            }
        }
        None
    }
}
