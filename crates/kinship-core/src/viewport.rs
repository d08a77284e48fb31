//! Inputs to viewport culling.
//!
//! A [`Rect`] is a sized element the renderer may draw; a [`VisibleArea`]
//! is the region of layout space currently on screen plus a margin, so that
//! elements just outside the edge are ready before they scroll in.

use serde::{Deserialize, Serialize};

use crate::{
    family::Node,
    geometry::{Bounds, Insets, Point, Size},
};

/// An identified axis-aligned box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    id: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    pub fn new(id: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }
}

impl From<&Node> for Rect {
    fn from(node: &Node) -> Self {
        let position = node.position();
        let size = node.size();
        Self::new(
            node.id(),
            position.x(),
            position.y(),
            size.width(),
            size.height(),
        )
    }
}

/// The on-screen region in layout coordinates, with a culling margin.
///
/// # Examples
///
/// ```
/// # use kinship_core::viewport::VisibleArea;
/// let area = VisibleArea::new(0.0, 0.0, 100.0, 50.0).with_buffer(10.0);
/// let expanded = area.expanded_bounds();
///
/// assert_eq!(expanded.min_x(), -10.0);
/// assert_eq!(expanded.max_y(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleArea {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    #[serde(default)]
    buffer: f32,
}

impl VisibleArea {
    /// Creates an area with no margin.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            buffer: 0.0,
        }
    }

    /// Sets the margin added on every side.
    pub fn with_buffer(mut self, buffer: f32) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn buffer(&self) -> f32 {
        self.buffer
    }

    /// Returns the area without its margin.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.right, self.bottom)
    }

    /// Returns the area grown by the margin on all four sides.
    pub fn expanded_bounds(&self) -> Bounds {
        self.bounds().add_padding(Insets::uniform(self.buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bounds() {
        let rect = Rect::new("r", 1.0, 2.0, 3.0, 4.0);
        let bounds = rect.bounds();
        assert_eq!(rect.id(), "r");
        assert_eq!(bounds.min_point(), Point::new(1.0, 2.0));
        assert_eq!(bounds.to_size(), Size::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_from_node() {
        let node = Node::new("n", Size::new(120.0, 150.0)).with_position(Point::new(30.0, 300.0));
        let rect = Rect::from(&node);
        assert_eq!(rect.id(), "n");
        assert_eq!(rect.bounds(), node.bounds());
    }

    #[test]
    fn test_visible_area_bounds() {
        let area = VisibleArea::new(-5.0, 0.0, 95.0, 40.0);
        let bounds = area.bounds();
        assert_eq!(area.buffer(), 0.0);
        assert_eq!(bounds.min_point(), Point::new(-5.0, 0.0));
        assert_eq!(bounds.to_size(), Size::new(100.0, 40.0));
        assert_eq!(area.expanded_bounds(), bounds);
    }

    #[test]
    fn test_visible_area_expanded_bounds() {
        let area = VisibleArea::new(0.0, 0.0, 100.0, 100.0).with_buffer(25.0);
        let expanded = area.expanded_bounds();
        assert_eq!(expanded.min_point(), Point::new(-25.0, -25.0));
        assert_eq!(expanded.max_x(), 125.0);
        assert_eq!(expanded.max_y(), 125.0);
    }
}
