//! Flat row layout engine
//!
//! A fallback that ignores relationships: every node goes into a single
//! row in input order, one level down per recorded generation. No
//! connectors are produced.

use log::info;

use kinship_core::family::Node;

use crate::{error::KinshipError, layout::LayoutResult};

/// Row layout engine
#[derive(Debug, Clone)]
pub struct Engine {
    level_height: f32,
    sibling_distance: f32,
}

impl Engine {
    /// Create a row engine.
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::InvalidSpacing`] if either spacing is not a
    /// positive finite number.
    pub fn new(level_height: f32, sibling_distance: f32) -> Result<Self, KinshipError> {
        Ok(Self {
            level_height: KinshipError::check_spacing("level_height", level_height)?,
            sibling_distance: KinshipError::check_spacing("sibling_distance", sibling_distance)?,
        })
    }

    /// Place nodes left to right, `index * (width + sibling_distance)` apart,
    /// at `generation * level_height`.
    pub fn layout(&self, nodes: &[Node]) -> LayoutResult {
        info!(nodes_count = nodes.len(); "Calculating row layout");

        if nodes.is_empty() {
            return LayoutResult::new(Vec::new(), Vec::new(), 0.0, self.level_height);
        }

        let placed: Vec<Node> = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let mut node = node.clone();
                let x = index as f32 * (node.size().width() + self.sibling_distance);
                let y = node.generation() as f32 * self.level_height;
                node.set_x(x);
                node.set_y(y);
                node
            })
            .collect();

        let right = placed
            .iter()
            .map(|node| node.bounds().max_x())
            .fold(f32::NEG_INFINITY, f32::max);
        let bottom = placed
            .iter()
            .map(|node| node.bounds().max_y())
            .fold(f32::NEG_INFINITY, f32::max);

        LayoutResult::new(
            placed,
            Vec::new(),
            right + self.sibling_distance,
            bottom + self.level_height,
        )
    }
}

impl super::Engine for Engine {
    fn calculate(&self, nodes: &[Node]) -> Result<LayoutResult, KinshipError> {
        Ok(self.layout(nodes))
    }
}
