//! Family-tree layout.
//!
//! Layout turns a flat list of [`Node`]s into absolute positions plus the
//! [`Connector`]s between them. The entry point for the generational tree is
//! [`compute_layout`]; [`engines::EngineBuilder`] selects between the
//! available algorithms by [`LayoutEngine`](crate::config::LayoutEngine).
//!
//! Every call is a pure function of its input. The lookup tables an engine
//! builds live only for the duration of one call.

pub mod connectors;
pub mod engines;

use serde::Serialize;

use kinship_core::{
    family::{Connector, ConnectorKind, Node},
    geometry::Bounds,
};

use crate::error::KinshipError;

/// Positioned nodes, their connectors and the extent of the drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    nodes: Vec<Node>,
    connectors: Vec<Connector>,
    total_width: f32,
    total_height: f32,
}

impl LayoutResult {
    pub fn new(
        nodes: Vec<Node>,
        connectors: Vec<Connector>,
        total_width: f32,
        total_height: f32,
    ) -> Self {
        Self {
            nodes,
            connectors,
            total_width,
            total_height,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Connectors of a single kind, in emission order.
    pub fn connectors_of(&self, kind: ConnectorKind) -> impl Iterator<Item = &Connector> {
        self.connectors
            .iter()
            .filter(move |connector| connector.kind() == kind)
    }

    /// Looks up a positioned node by identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Horizontal extent reserved by the layout.
    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    /// Vertical extent reserved by the layout, including one spare level.
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// The union of all node boxes, or `None` when there are no nodes.
    ///
    /// Unlike `total_width`/`total_height` this is the drawn extent, which a
    /// viewport uses to center the tree.
    pub fn bounds(&self) -> Option<Bounds> {
        self.nodes
            .iter()
            .map(Node::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

/// Lays out a family forest as a generational tree.
///
/// Roots (nodes without a parent, or whose parent is not in `nodes`) are
/// placed left to right in input order; siblings keep their input order.
/// Each leaf takes the next horizontal slot of width `sibling_distance` and
/// each parent is centered over the centers of its first and last child.
///
/// # Errors
///
/// Returns [`KinshipError::InvalidSpacing`] if either spacing is not a
/// positive finite number, and [`KinshipError::CyclicRelationship`] if
/// repeated identifiers make a node its own descendant.
///
/// # Examples
///
/// ```
/// # use kinship::{layout::compute_layout, family::Node, geometry::Size};
/// let size = Size::new(80.0, 40.0);
/// let nodes = vec![
///     Node::new("parent", size),
///     Node::new("a", size).with_parent("parent"),
///     Node::new("b", size).with_parent("parent"),
/// ];
///
/// let result = compute_layout(&nodes, 150.0, 100.0).expect("valid spacing");
/// let parent = result.node("parent").unwrap();
///
/// assert_eq!(parent.position().x(), 50.0);
/// assert_eq!(result.total_width(), 200.0);
/// assert_eq!(result.connectors().len(), 2);
/// ```
pub fn compute_layout(
    nodes: &[Node],
    level_height: f32,
    sibling_distance: f32,
) -> Result<LayoutResult, KinshipError> {
    engines::tree::Engine::new(level_height, sibling_distance)?.layout(nodes)
}
