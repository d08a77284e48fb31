//! Kinship - Geometry engine for genealogy diagrams.
//!
//! Turns a flat list of people with parent and spouse references into
//! positioned boxes and connectors, produces the polylines a renderer strokes,
//! and decides which elements fall inside the viewport. There is no rendering,
//! no I/O and no shared state: every operation is a pure function of its input.

pub mod config;
pub mod layout;
pub mod path;
pub mod viewport;
pub mod visibility;

mod error;

pub use kinship_core::{family, geometry};

pub use error::KinshipError;

use log::{debug, info};

use config::AppConfig;
use family::Node;
use geometry::Point;
use layout::{LayoutResult, engines::EngineBuilder};
use path::PathGenerator;
use viewport::{Rect, Viewport, VisibleArea};

/// Runs the geometry pipeline with one configuration.
///
/// # Examples
///
/// ```
/// use kinship::{TreeBuilder, family::Node, geometry::Size};
///
/// let size = Size::new(120.0, 150.0);
/// let nodes = vec![
///     Node::new("grandma", size).with_spouse("grandpa"),
///     Node::new("grandpa", size).with_spouse("grandma"),
///     Node::new("mum", size).with_parent("grandma"),
/// ];
///
/// let builder = TreeBuilder::default();
/// let layout = builder.layout(&nodes).expect("default spacing is valid");
///
/// assert_eq!(layout.connectors().len(), 2);
/// assert_eq!(builder.connector_paths(&layout).len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    config: AppConfig,
}

impl TreeBuilder {
    /// Create a new tree builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay out `nodes` with the configured engine and spacing.
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::InvalidSpacing`] for a non-positive or
    /// non-finite spacing in the configuration, and
    /// [`KinshipError::CyclicRelationship`] if the tree engine finds a node
    /// among its own ancestors.
    pub fn layout(&self, nodes: &[Node]) -> Result<LayoutResult, KinshipError> {
        let layout_config = self.config.layout();
        info!(engine:? = layout_config.engine(); "Laying out family tree");

        let engine = EngineBuilder::new()
            .with_level_height(layout_config.level_height())
            .with_sibling_distance(layout_config.sibling_distance())
            .build(layout_config.engine())?;

        engine.calculate(nodes)
    }

    /// Polylines for every connector of `layout`, in connector order.
    pub fn connector_paths(&self, layout: &LayoutResult) -> Vec<Vec<Point>> {
        let generator = self.path_generator();
        layout
            .connectors()
            .iter()
            .map(|connector| generator.connector(connector))
            .collect()
    }

    /// Rounded outline of a positioned node.
    pub fn outline(&self, node: &Node) -> Vec<Point> {
        self.path_generator()
            .rounded_rect(node.bounds(), self.config.path().corner_radius())
    }

    /// The visible area of `viewport` with the configured culling margin.
    pub fn visible_area(&self, viewport: &Viewport) -> VisibleArea {
        viewport.visible_area(self.config.visibility().buffer())
    }

    /// Identifiers of the laid-out nodes that fall inside `area`, in layout
    /// order.
    pub fn visible_node_ids(&self, layout: &LayoutResult, area: &VisibleArea) -> Vec<String> {
        let rects: Vec<Rect> = layout.nodes().iter().map(Rect::from).collect();
        let ids = visibility::visible_ids(&rects, area);
        debug!(visible_count = ids.len(); "Visible nodes selected");
        ids
    }

    fn path_generator(&self) -> PathGenerator {
        PathGenerator::new().with_corner_segments(self.config.path().corner_segments())
    }
}
