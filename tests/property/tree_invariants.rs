//! Property-based tests for tree structure under random mutation

use context_graph::context::{AnyContext, ContextId, SubjectContext};
use context_graph::{Concept, ConceptId, ContextGraph, DictionaryItem, MemoryId};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    CreateSubject(usize),
    CreateGroup(usize),
    Detach(usize),
    Attach(usize, usize),
    Discard(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<usize>().prop_map(Op::CreateSubject),
        1 => any::<usize>().prop_map(Op::CreateGroup),
        1 => any::<usize>().prop_map(Op::Detach),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Attach(a, b)),
        1 => any::<usize>().prop_map(Op::Discard),
    ]
}

fn pick(ids: &[ContextId], n: usize) -> Option<ContextId> {
    if ids.is_empty() {
        None
    } else {
        Some(ids[n % ids.len()])
    }
}

fn live_ids(graph: &ContextGraph, root: ContextId) -> Vec<ContextId> {
    let mut ids = vec![root];
    ids.extend(graph.flatten::<AnyContext>(root, true).map(|h| h.id()));
    ids
}

proptest! {
    #[test]
    fn test_tree_invariant_holds(ops in prop::collection::vec(op(), 1..48)) {
        let memory = MemoryId(5);
        let concept = Concept::new(ConceptId(1), memory);
        let mut graph = ContextGraph::new(memory);
        let intent = graph.create_intent(&concept).unwrap();
        let mut detached: Vec<ContextId> = Vec::new();

        for op in ops {
            let ids = live_ids(&graph, intent.id());
            match op {
                Op::CreateSubject(n) => {
                    let parent = pick(&ids, n);
                    // groups of subjects accept subjects, so creation never fails here
                    graph
                        .create(&concept, parent, SubjectContext::new(DictionaryItem::new("s")))
                        .unwrap();
                }
                Op::CreateGroup(n) => {
                    let parent = pick(&ids, n).filter(|p| {
                        graph.node(*p).map_or(false, |node| !node.kind().is_group())
                    });
                    if let Some(parent) = parent {
                        graph.create_group::<SubjectContext>(&concept, Some(parent)).unwrap();
                    }
                }
                Op::Detach(n) => {
                    if let Some(id) = pick(&ids[1..], n) {
                        prop_assert!(graph.detach(id));
                        detached.push(id);
                    }
                }
                Op::Attach(a, b) => {
                    if let (Some(child), Some(parent)) = (pick(&detached, a), pick(&ids, b)) {
                        if graph.attach(parent, child).is_ok() {
                            detached.retain(|d| *d != child);
                        }
                    }
                }
                Op::Discard(n) => {
                    if let Some(id) = pick(&ids[1..], n) {
                        prop_assert!(graph.discard(id));
                        prop_assert!(!graph.contains(id));
                    }
                }
            }
        }

        // every child points back at the one parent that lists it
        let mut owners: HashMap<ContextId, ContextId> = HashMap::new();
        for id in live_ids(&graph, intent.id()) {
            for child in graph.children(id) {
                prop_assert_eq!(graph.parent(*child), Some(id));
                prop_assert!(owners.insert(*child, id).is_none());
            }
        }

        let ordered = graph.flatten_most_recent_subjects(intent);
        prop_assert_eq!(ordered.len(), graph.all_subjects(intent, true).count());
        let sequences: Vec<u64> = ordered
            .iter()
            .map(|h| graph.node(h.id()).unwrap().sequence())
            .collect();
        prop_assert!(sequences.windows(2).all(|w| w[0] > w[1]));
    }
}
