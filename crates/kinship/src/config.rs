//! Configuration types for Kinship layout and rendering support.
//!
//! All types implement [`serde::Deserialize`] with per-field defaults, so a
//! host can load a partial configuration from any serde format and get the
//! reference values for everything it leaves out. The library itself never
//! reads files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`LayoutConfig`] - Engine choice and generation/sibling spacing.
//! - [`PathConfig`] - Resolution and radius of node outlines.
//! - [`VisibilityConfig`] - Culling margin around the viewport.
//!
//! # Example
//!
//! ```
//! # use kinship::config::{AppConfig, LayoutEngine};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().engine(), LayoutEngine::Tree);
//! assert_eq!(config.layout().level_height(), 150.0);
//! assert_eq!(config.path().corner_segments(), 8);
//! ```

use serde::Deserialize;

use crate::path::DEFAULT_CORNER_SEGMENTS;

/// Top-level configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Outline and connector path section.
    #[serde(default)]
    path: PathConfig,

    /// Viewport culling section.
    #[serde(default)]
    visibility: VisibilityConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, path: PathConfig, visibility: VisibilityConfig) -> Self {
        Self {
            layout,
            path,
            visibility,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the path configuration.
    pub fn path(&self) -> &PathConfig {
        &self.path
    }

    /// Returns the visibility configuration.
    pub fn visibility(&self) -> &VisibilityConfig {
        &self.visibility
    }
}

/// Available layout algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    /// Generational tree with parents centered over their children.
    #[default]
    Tree,
    /// Every node in one row in input order, without connectors.
    Row,
}

/// Layout engine and spacing.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    engine: LayoutEngine,

    /// Vertical distance between successive generations.
    #[serde(default = "default_level_height")]
    level_height: f32,

    /// Horizontal slot reserved for each leaf.
    #[serde(default = "default_sibling_distance")]
    sibling_distance: f32,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(engine: LayoutEngine, level_height: f32, sibling_distance: f32) -> Self {
        Self {
            engine,
            level_height,
            sibling_distance,
        }
    }

    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    pub fn level_height(&self) -> f32 {
        self.level_height
    }

    pub fn sibling_distance(&self) -> f32 {
        self.sibling_distance
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            engine: LayoutEngine::default(),
            level_height: default_level_height(),
            sibling_distance: default_sibling_distance(),
        }
    }
}

/// Node outline settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PathConfig {
    /// Points per rounded corner, minus one.
    #[serde(default = "default_corner_segments")]
    corner_segments: usize,

    #[serde(default = "default_corner_radius")]
    corner_radius: f32,
}

impl PathConfig {
    pub fn new(corner_segments: usize, corner_radius: f32) -> Self {
        Self {
            corner_segments,
            corner_radius,
        }
    }

    pub fn corner_segments(&self) -> usize {
        self.corner_segments
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            corner_segments: default_corner_segments(),
            corner_radius: default_corner_radius(),
        }
    }
}

/// Culling settings.
#[derive(Debug, Clone, Deserialize)]
pub struct VisibilityConfig {
    /// Margin around the viewport, in screen units.
    #[serde(default = "default_buffer")]
    buffer: f32,
}

impl VisibilityConfig {
    pub fn new(buffer: f32) -> Self {
        Self { buffer }
    }

    pub fn buffer(&self) -> f32 {
        self.buffer
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            buffer: default_buffer(),
        }
    }
}

fn default_level_height() -> f32 {
    150.0
}

fn default_sibling_distance() -> f32 {
    100.0
}

fn default_corner_segments() -> usize {
    DEFAULT_CORNER_SEGMENTS
}

fn default_corner_radius() -> f32 {
    8.0
}

fn default_buffer() -> f32 {
    100.0
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.layout().engine(), LayoutEngine::Tree);
        assert_approx_eq!(f32, config.layout().level_height(), 150.0);
        assert_approx_eq!(f32, config.layout().sibling_distance(), 100.0);
        assert_eq!(config.path().corner_segments(), 8);
        assert_approx_eq!(f32, config.path().corner_radius(), 8.0);
        assert_approx_eq!(f32, config.visibility().buffer(), 100.0);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config should parse");

        assert_eq!(config.layout().engine(), LayoutEngine::Tree);
        assert_approx_eq!(f32, config.layout().level_height(), 150.0);
        assert_eq!(config.path().corner_segments(), 8);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let source = r#"
            [layout]
            engine = "row"
            sibling_distance = 60.0

            [visibility]
            buffer = 40.0
        "#;

        let config: AppConfig = toml::from_str(source).expect("config should parse");

        assert_eq!(config.layout().engine(), LayoutEngine::Row);
        assert_approx_eq!(f32, config.layout().level_height(), 150.0);
        assert_approx_eq!(f32, config.layout().sibling_distance(), 60.0);
        assert_approx_eq!(f32, config.visibility().buffer(), 40.0);
        assert_eq!(config.path().corner_segments(), 8);
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        let source = r#"
            [layout]
            engine = "radial"
        "#;

        assert!(toml::from_str::<AppConfig>(source).is_err());
    }
}
