//! Mapping between layout space and the canvas.
//!
//! Layout coordinates ("world") are turned into canvas coordinates
//! ("screen") by a uniform scale followed by an offset:
//! `screen = world * scale + offset`. A [`Viewport`] pairs that transform
//! with the canvas size to answer which part of the layout is on screen.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use kinship_core::geometry::{Bounds, Point, Size};

pub use kinship_core::viewport::{Rect, VisibleArea};

/// Share of the canvas a centered tree fills on its tighter axis.
const FILL_RATIO: f32 = 0.8;
const MIN_SCALE: f32 = 0.3;
const MAX_SCALE: f32 = 1.5;

/// Uniform scale plus offset from layout space to canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    scale: f32,
    offset: Point,
}

impl Transform {
    pub fn new(scale: f32, offset: Point) -> Self {
        Self { scale, offset }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn world_to_screen(&self, point: Point) -> Point {
        point.scale(self.scale).add_point(self.offset)
    }

    pub fn screen_to_world(&self, point: Point) -> Point {
        let shifted = point.sub_point(self.offset);
        Point::new(shifted.x() / self.scale, shifted.y() / self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(1.0, Point::default())
    }
}

/// A canvas of a given size looking at layout space through a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    canvas: Size,
    transform: Transform,
}

impl Viewport {
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            transform: Transform::default(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_canvas(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// The layout-space rectangle covered by the canvas.
    ///
    /// `buffer` is given in canvas units and is converted to layout units,
    /// so the margin looks the same on screen at every zoom level.
    pub fn visible_area(&self, buffer: f32) -> VisibleArea {
        let top_left = self.transform.screen_to_world(Point::new(0.0, 0.0));
        let bottom_right = self
            .transform
            .screen_to_world(Point::new(self.canvas.width(), self.canvas.height()));

        VisibleArea::new(top_left.x(), top_left.y(), bottom_right.x(), bottom_right.y())
            .with_buffer(buffer / self.transform.scale())
    }

    /// A transform that centers `bounds` on the canvas.
    ///
    /// The scale fits the tree into a fixed share of the canvas on its
    /// tighter axis and is clamped so tiny trees are not blown up and huge
    /// ones stay legible. Empty or inverted bounds leave the current
    /// transform unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kinship::{viewport::Viewport, geometry::{Bounds, Point, Size}};
    /// let viewport = Viewport::new(Size::new(400.0, 300.0));
    /// let transform = viewport.centering_transform(Bounds::new(0.0, 0.0, 800.0, 300.0));
    ///
    /// let center = transform.world_to_screen(Point::new(400.0, 150.0));
    /// assert!((center.x() - 200.0).abs() < 1e-3);
    /// assert!((center.y() - 150.0).abs() < 1e-3);
    /// ```
    pub fn centering_transform(&self, bounds: Bounds) -> Transform {
        let tree_width = bounds.width();
        let tree_height = bounds.height();
        if !(tree_width > 0.0 && tree_height > 0.0) {
            warn!(tree_width, tree_height; "Cannot center degenerate bounds");
            return self.transform;
        }

        let scale_x = self.canvas.width() * FILL_RATIO / tree_width;
        let scale_y = self.canvas.height() * FILL_RATIO / tree_height;
        let scale = scale_x.min(scale_y).clamp(MIN_SCALE, MAX_SCALE);

        let center = bounds.center();
        let offset = Point::new(
            self.canvas.width() / 2.0 - center.x() * scale,
            self.canvas.height() / 2.0 - center.y() * scale,
        );
        if !(scale.is_finite() && offset.is_finite()) {
            warn!(scale; "Centering produced non-finite values");
            return self.transform;
        }

        debug!(scale, offset_x = offset.x(), offset_y = offset.y(); "Centering transform");
        Transform::new(scale, offset)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(300.0, 400.0))
    }
}
