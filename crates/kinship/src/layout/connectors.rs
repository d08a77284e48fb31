//! Connector derivation from positioned nodes.
//!
//! Runs once, after every position is final. All parent-child connectors
//! come first, then spouse connectors, each pass in node order.

use indexmap::IndexMap;
use log::trace;

use kinship_core::family::{Connector, ConnectorKind, Node};

/// Derives the connectors for a set of positioned nodes keyed by identifier.
///
/// A parent-child connector runs from the parent's bottom center to the
/// child's top center. A spouse connector runs from the right middle of the
/// lexicographically smaller identifier to the left middle of the other, so
/// a symmetric pair yields exactly one connector. References that do not
/// resolve are skipped.
pub fn generate(nodes: &IndexMap<String, Node>) -> Vec<Connector> {
    let mut connectors = Vec::new();

    for node in nodes.values() {
        let Some(parent_id) = node.parent_id() else {
            continue;
        };
        let Some(parent) = nodes.get(parent_id) else {
            trace!(node_id = node.id(), parent_id; "Skipping dangling parent reference");
            continue;
        };

        connectors.push(Connector::new(
            ConnectorKind::ParentChild,
            parent.id(),
            node.id(),
            parent.bottom_center(),
            node.top_center(),
        ));
    }

    for node in nodes.values() {
        let Some(spouse_id) = node.spouse_id() else {
            continue;
        };
        let Some(spouse) = nodes.get(spouse_id) else {
            trace!(node_id = node.id(), spouse_id; "Skipping dangling spouse reference");
            continue;
        };

        if node.id() < spouse.id() {
            connectors.push(Connector::new(
                ConnectorKind::Spouse,
                node.id(),
                spouse.id(),
                node.right_middle(),
                spouse.left_middle(),
            ));
        }
    }

    connectors
}

#[cfg(test)]
mod tests {
    use kinship_core::geometry::{Point, Size};

    use super::*;

    fn index(nodes: Vec<Node>) -> IndexMap<String, Node> {
        nodes
            .into_iter()
            .map(|node| (node.id().to_string(), node))
            .collect()
    }

    fn node(id: &str, x: f32, y: f32) -> Node {
        Node::new(id, Size::new(40.0, 20.0)).with_position(Point::new(x, y))
    }

    #[test]
    fn test_parent_child_endpoints() {
        let nodes = index(vec![
            node("p", 10.0, 0.0),
            node("c", 0.0, 100.0).with_parent("p"),
        ]);

        let connectors = generate(&nodes);

        assert_eq!(connectors.len(), 1);
        let connector = &connectors[0];
        assert_eq!(connector.kind(), ConnectorKind::ParentChild);
        assert_eq!(connector.from_id(), "p");
        assert_eq!(connector.to_id(), "c");
        assert_eq!(connector.from(), Point::new(30.0, 20.0));
        assert_eq!(connector.to(), Point::new(20.0, 100.0));
    }

    #[test]
    fn test_spouse_pair_emitted_once() {
        let nodes = index(vec![
            node("b", 100.0, 0.0).with_spouse("a"),
            node("a", 0.0, 0.0).with_spouse("b"),
        ]);

        let connectors = generate(&nodes);

        assert_eq!(connectors.len(), 1);
        let connector = &connectors[0];
        assert_eq!(connector.kind(), ConnectorKind::Spouse);
        assert_eq!(connector.from_id(), "a");
        assert_eq!(connector.to_id(), "b");
        assert_eq!(connector.from(), Point::new(40.0, 10.0));
        assert_eq!(connector.to(), Point::new(100.0, 10.0));
    }

    #[test]
    fn test_one_sided_spouse_reference() {
        // Only the larger identifier names its spouse: no connector.
        let nodes = index(vec![
            node("a", 0.0, 0.0),
            node("b", 100.0, 0.0).with_spouse("a"),
        ]);
        assert!(generate(&nodes).is_empty());

        // Only the smaller identifier names its spouse: one connector.
        let nodes = index(vec![
            node("a", 0.0, 0.0).with_spouse("b"),
            node("b", 100.0, 0.0),
        ]);
        assert_eq!(generate(&nodes).len(), 1);
    }

    #[test]
    fn test_dangling_references_are_skipped() {
        let nodes = index(vec![
            node("a", 0.0, 0.0).with_parent("ghost").with_spouse("phantom"),
        ]);

        assert!(generate(&nodes).is_empty());
    }

    #[test]
    fn test_parent_child_connectors_precede_spouse_connectors() {
        let nodes = index(vec![
            node("a", 0.0, 0.0).with_spouse("b"),
            node("b", 50.0, 0.0).with_spouse("a"),
            node("c", 0.0, 100.0).with_parent("a"),
        ]);

        let kinds: Vec<_> = generate(&nodes).iter().map(Connector::kind).collect();

        assert_eq!(kinds, vec![ConnectorKind::ParentChild, ConnectorKind::Spouse]);
    }
}
