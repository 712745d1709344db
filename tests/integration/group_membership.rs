//! Integration tests for group membership

use super::test_utils::{concept, graph, subject};
use context_graph::context::{
    AttributeContext, ColorContext, MemberSet, SubjectContext,
};
use context_graph::{ContextError, DictionaryItem};

#[test]
fn test_first_last_and_removal() {
    let mut graph = graph();
    let group = graph
        .create_group::<SubjectContext>(&concept(), None)
        .unwrap();
    let a = graph.create(&concept(), Some(group.id()), subject("a")).unwrap();
    let b = graph.create(&concept(), Some(group.id()), subject("b")).unwrap();
    let c = graph.create(&concept(), Some(group.id()), subject("c")).unwrap();

    assert_eq!(group.first(&graph), Some(a));
    assert_eq!(group.last(&graph), Some(c));
    assert!(group.has_items(&graph));
    assert_eq!(group.contexts(&graph), vec![a, b, c]);

    for member in [a, b, c] {
        assert!(group.remove(&mut graph, member));
    }
    assert!(!group.has_items(&graph));
    assert_eq!(group.first(&graph), None);
    assert_eq!(group.last(&graph), None);
    for member in [a, b, c] {
        assert!(!group.remove(&mut graph, member));
    }
}

#[test]
fn test_remove_is_idempotent() {
    let mut graph = graph();
    let group = graph
        .create_group::<SubjectContext>(&concept(), None)
        .unwrap();
    let a = graph.create(&concept(), Some(group.id()), subject("a")).unwrap();

    assert!(group.remove(&mut graph, a));
    assert!(!group.remove(&mut graph, a));
    assert!(graph.payload(a).is_none());
}

#[test]
fn test_remove_of_foreign_member_does_not_mutate() {
    let mut graph = graph();
    let intent = graph.create_intent(&concept()).unwrap();
    let group = graph
        .create_group::<SubjectContext>(&concept(), Some(intent.id()))
        .unwrap();
    let outsider = graph
        .create(&concept(), Some(intent.id()), subject("outsider"))
        .unwrap();

    assert!(!group.remove(&mut graph, outsider));
    assert_eq!(graph.parent(outsider.id()), Some(intent.id()));
    assert!(graph.contains(outsider.id()));
}

#[test]
fn test_remove_drops_member_subtree() {
    let mut graph = graph();
    let group = graph
        .create_group::<SubjectContext>(&concept(), None)
        .unwrap();
    let a = graph.create(&concept(), Some(group.id()), subject("a")).unwrap();
    let color = graph
        .create(&concept(), Some(a.id()), ColorContext::new(DictionaryItem::new("red")))
        .unwrap();

    assert!(group.remove(&mut graph, a));
    assert!(!graph.contains(color.id()));
}

#[test]
fn test_add_existing_member() {
    let mut graph = graph();
    let group = graph
        .create_group::<SubjectContext>(&concept(), None)
        .unwrap();
    let loose = graph.create(&concept(), None, subject("loose")).unwrap();

    group.add(&mut graph, loose).unwrap();
    assert_eq!(group.last(&graph), Some(loose));
    assert_eq!(graph.parent(loose.id()), Some(group.id()));

    // Already a member: a second attach would duplicate it.
    let err = group.add(&mut graph, loose).unwrap_err();
    assert!(matches!(err, ContextError::AlreadyAttached { .. }));
    assert_eq!(group.contexts(&graph).len(), 1);
}

#[test]
fn test_attribute_group_accepts_colors() {
    let mut graph = graph();
    let group = graph
        .create_group::<AttributeContext>(&concept(), None)
        .unwrap();
    let color = graph
        .create(&concept(), Some(group.id()), ColorContext::new(DictionaryItem::new("green")))
        .unwrap();
    let tall = graph
        .create(
            &concept(),
            Some(group.id()),
            AttributeContext::new(DictionaryItem::new("tall")),
        )
        .unwrap();

    let members = group.contexts(&graph);
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].id(), color.id());
    assert_eq!(members[1], tall);

    let err = graph
        .create(&concept(), Some(group.id()), subject("nope"))
        .unwrap_err();
    assert!(matches!(err, ContextError::MemberKindMismatch { .. }));
}
