//! Property-based tests for the relationship/count coupling

use context_graph::context::{FrequencyContext, RelationshipType};
use context_graph::DictionaryItem;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Relationship(RelationshipType),
    Count(Option<f64>),
}

fn relationship() -> impl Strategy<Value = RelationshipType> {
    prop_oneof![
        Just(RelationshipType::Unspecified),
        Just(RelationshipType::None),
        Just(RelationshipType::One),
        Just(RelationshipType::OneSpecific),
        Just(RelationshipType::OneNonSpecific),
        Just(RelationshipType::Many),
        Just(RelationshipType::All),
    ]
}

fn count() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        Just(Some(1.0)),
        Just(Some(-1.0)),
        (-1000i32..1000).prop_map(|n| Some(n as f64)),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        relationship().prop_map(Step::Relationship),
        count().prop_map(Step::Count),
    ]
}

proptest! {
    /// Whatever sequence of assignments came before, the last assignment
    /// leaves the pair in a state consistent with the rule it triggered.
    #[test]
    fn test_state_stays_consistent(steps in prop::collection::vec(step(), 1..32)) {
        let mut state = FrequencyContext::new(DictionaryItem::new("x"));
        for step in &steps {
            match step {
                Step::Relationship(r) => state.set_relationship_type(*r),
                Step::Count(c) => state.set_count(*c),
            }

            match state.relationship_type() {
                RelationshipType::Unspecified => prop_assert_eq!(state.count(), None),
                RelationshipType::None => prop_assert_eq!(state.count(), Some(0.0)),
                r if r.is_one() => {
                    let c = state.count();
                    prop_assert!(c == Some(1.0) || c == Some(-1.0));
                }
                _ => {
                    // many/all never hold a zero or singular count of one
                    let c = state.count();
                    prop_assert!(c.map_or(true, |v| v != 0.0 && v != 1.0));
                }
            }
        }
    }

    /// Assigning the current value again never changes anything.
    #[test]
    fn test_reassignment_is_no_op(steps in prop::collection::vec(step(), 0..16)) {
        let mut state = FrequencyContext::new(DictionaryItem::new("x"));
        for step in &steps {
            match step {
                Step::Relationship(r) => state.set_relationship_type(*r),
                Step::Count(c) => state.set_count(*c),
            }
        }
        let before = state.clone();
        state.set_relationship_type(before.relationship_type());
        state.set_count(before.count());
        prop_assert_eq!(state, before);
    }
}
