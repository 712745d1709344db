//! Integration tests for frequency contexts inside a graph

use super::test_utils::{concept, graph};
use context_graph::context::{
    FrequencyContext, FrequencyType, ModifierContext, RelationshipType, STRENGTH_STEP,
};
use context_graph::DictionaryItem;

#[test]
fn test_frequency_state_through_graph_handle() {
    let mut graph = graph();
    let intent = graph.create_intent(&concept()).unwrap();
    let frequency = graph
        .create(
            &concept(),
            Some(intent.id()),
            FrequencyContext::new(DictionaryItem::new("usually")),
        )
        .unwrap();

    {
        let state = graph.payload_mut(frequency).unwrap();
        state.set_frequency_type(FrequencyType::MostTimes);
        state.set_relationship_type(RelationshipType::OneNonSpecific);
        state.set_strength(state.strength() + STRENGTH_STEP);
    }

    let state = graph.payload(frequency).unwrap();
    assert_eq!(state.generality(), Some(0.8));
    assert_eq!(state.count(), Some(1.0));
    assert_eq!(state.relationship_type(), RelationshipType::OneNonSpecific);
    assert!((state.strength() - STRENGTH_STEP).abs() < f64::EPSILON);
}

#[test]
fn test_frequency_is_readable_as_modifier() {
    let mut graph = graph();
    let intent = graph.create_intent(&concept()).unwrap();
    let frequency = graph
        .create(
            &concept(),
            Some(intent.id()),
            FrequencyContext::new(DictionaryItem::new("rarely"))
                .with_frequency_type(FrequencyType::Rarely),
        )
        .unwrap();

    let modifier = graph
        .handle::<ModifierContext>(frequency.id())
        .and_then(|h| graph.payload(h))
        .unwrap();
    assert_eq!(modifier.modifier().as_str(), "rarely");
    assert_eq!(graph.payload(frequency).unwrap().generality(), Some(0.01));
}

#[test]
fn test_relationship_and_count_walkthrough() {
    let mut state = FrequencyContext::new(DictionaryItem::new("some"));

    state.set_count(Some(0.0));
    assert_eq!(state.relationship_type(), RelationshipType::None);

    state.set_count(Some(1.0));
    assert_eq!(state.relationship_type(), RelationshipType::One);

    state.set_relationship_type(RelationshipType::All);
    assert_eq!(state.count(), None);

    state.set_count(Some(7.0));
    assert_eq!(state.relationship_type(), RelationshipType::All);

    state.set_relationship_type(RelationshipType::Unspecified);
    assert_eq!(state.count(), None);

    state.set_count(Some(-3.5));
    assert_eq!(state.relationship_type(), RelationshipType::Many);
}
