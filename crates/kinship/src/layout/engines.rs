//! Layout engine factory module
//!
//! Selects and configures a layout engine by [`LayoutEngine`]. Engines share
//! one interface, [`Engine`], so a host can switch between the generational
//! tree and the flat fallback without changing the surrounding pipeline.

pub mod row;
pub mod tree;

use kinship_core::family::Node;

use crate::{config::LayoutEngine, error::KinshipError, layout::LayoutResult};

/// Interface shared by all layout engines.
pub trait Engine {
    /// Calculates positions and connectors for `nodes`.
    ///
    /// Implementations must not retain state between calls: the same input
    /// always yields the same output.
    fn calculate(&self, nodes: &[Node]) -> Result<LayoutResult, KinshipError>;
}

/// Builder for creating and configuring layout engines.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    level_height: f32,
    sibling_distance: f32,
}

impl EngineBuilder {
    /// Create a new engine builder with the reference spacing
    pub fn new() -> Self {
        Self {
            level_height: 150.0,
            sibling_distance: 100.0,
        }
    }

    /// Set the vertical distance between generations
    pub fn with_level_height(mut self, level_height: f32) -> Self {
        self.level_height = level_height;
        self
    }

    /// Set the horizontal slot reserved per leaf
    pub fn with_sibling_distance(mut self, sibling_distance: f32) -> Self {
        self.sibling_distance = sibling_distance;
        self
    }

    /// Build an engine of the specified type with the configured spacing.
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::InvalidSpacing`] if a spacing is not a
    /// positive finite number.
    pub fn build(&self, engine_type: LayoutEngine) -> Result<Box<dyn Engine>, KinshipError> {
        let engine: Box<dyn Engine> = match engine_type {
            LayoutEngine::Tree => Box::new(tree::Engine::new(
                self.level_height,
                self.sibling_distance,
            )?),
            LayoutEngine::Row => Box::new(row::Engine::new(
                self.level_height,
                self.sibling_distance,
            )?),
        };
        Ok(engine)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
