//! Property-based tests for request normalization

use cpcd_parser::{normalize, Mapping, Node};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,6}"
}

/// A group value is either a bare name or a list of names (duplicates likely)
fn group_value() -> impl Strategy<Value = Node> {
    prop_oneof![
        name().prop_map(Node::from),
        prop::collection::vec(name().prop_map(Node::from), 0..8).prop_map(Node::Sequence),
    ]
}

fn request() -> impl Strategy<Value = Node> {
    prop::collection::vec((name(), group_value()), 0..6)
        .prop_map(|groups| Node::Mapping(groups.into_iter().collect::<Mapping>()))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(req in request()) {
        let query = normalize(&req).unwrap();
        let again = normalize(query.as_node()).unwrap();
        prop_assert_eq!(again, query);
    }

    #[test]
    fn normalized_names_are_sorted_and_unique(req in request()) {
        let query = normalize(&req).unwrap();
        for group in query.groups() {
            let names = query.names(group);
            prop_assert!(names.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn every_requested_name_survives(req in request()) {
        let query = normalize(&req).unwrap();
        let map = req.as_mapping().unwrap();
        for (group, value) in map.iter() {
            let names = query.names(group);
            let requested: Vec<&str> = match value {
                Node::Scalar(s) => vec![s.as_str()],
                Node::Sequence(items) => items.iter().filter_map(Node::as_scalar).collect(),
                _ => unreachable!(),
            };
            for r in requested {
                prop_assert!(names.contains(&r));
            }
        }
    }
}
