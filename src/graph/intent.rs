//! Intent aggregation and subject recency
//!
//! Anaphora resolution looks for referents among the subjects of an intent,
//! most recently introduced first.

use crate::context::{ContextNode, Handle, IntentContext, SubjectContext};
use crate::graph::{ContextGraph, Flatten};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Strict ordering over subject nodes.
///
/// Implementations must not report two distinct nodes as equal.
pub trait SubjectOrdering {
    fn compare(&self, a: &ContextNode, b: &ContextNode) -> Ordering;
}

/// Descending creation sequence: the newest subject sorts first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostRecentFirst;

impl SubjectOrdering for MostRecentFirst {
    fn compare(&self, a: &ContextNode, b: &ContextNode) -> Ordering {
        b.sequence().cmp(&a.sequence())
    }
}

impl ContextGraph {
    /// Every subject reachable under `intent`, in pre-order, not deduplicated.
    pub fn all_subjects(
        &self,
        intent: Handle<IntentContext>,
        include_groups: bool,
    ) -> Flatten<'_, SubjectContext> {
        self.flatten::<SubjectContext>(intent.id(), include_groups)
    }

    /// Subjects under `intent`, most recently created first.
    pub fn flatten_most_recent_subjects(
        &self,
        intent: Handle<IntentContext>,
    ) -> Vec<Handle<SubjectContext>> {
        self.sort_subjects_by(intent, &MostRecentFirst)
    }

    /// Subjects under `intent` sorted with an explicit ordering.
    #[instrument(skip(self, intent, ordering), fields(intent = %intent.id()))]
    pub fn sort_subjects_by<O: SubjectOrdering>(
        &self,
        intent: Handle<IntentContext>,
        ordering: &O,
    ) -> Vec<Handle<SubjectContext>> {
        let mut keyed: Vec<(&ContextNode, Handle<SubjectContext>)> = self
            .all_subjects(intent, true)
            .filter_map(|handle| self.node(handle.id()).map(|node| (node, handle)))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| ordering.compare(a, b));
        debug!(subjects = keyed.len(), "Ordered subjects");
        keyed.into_iter().map(|(_, handle)| handle).collect()
    }
}
