//! Polyline geometry for node outlines and connectors.
//!
//! Everything here returns ordered point sequences in layout coordinates
//! (y grows downward). Renderers decide how to stroke them; an outline is
//! left open and should be closed back to its first point when drawn.

use std::f32::consts::{FRAC_PI_2, PI};

use kinship_core::{
    family::{Connector, ConnectorKind},
    geometry::{Bounds, Point},
};

/// Reference number of segments used to approximate one rounded corner.
pub const DEFAULT_CORNER_SEGMENTS: usize = 8;

/// Generates outline and connector polylines at a fixed corner resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathGenerator {
    corner_segments: usize,
}

impl PathGenerator {
    pub fn new() -> Self {
        Self {
            corner_segments: DEFAULT_CORNER_SEGMENTS,
        }
    }

    /// Sets the number of segments per corner. Zero is raised to one.
    pub fn with_corner_segments(mut self, corner_segments: usize) -> Self {
        self.corner_segments = corner_segments.max(1);
        self
    }

    pub fn corner_segments(&self) -> usize {
        self.corner_segments
    }

    /// Boundary of `bounds` with every corner rounded to `radius`.
    ///
    /// Starts at the top of the top-right arc and runs clockwise on screen:
    /// top-right, bottom-right, bottom-left, top-left. Each arc spans a
    /// quarter turn around its own center and contributes
    /// `corner_segments + 1` points, so consecutive arcs repeat no point.
    pub fn rounded_rect(&self, bounds: Bounds, radius: f32) -> Vec<Point> {
        let left = bounds.min_x() + radius;
        let right = bounds.max_x() - radius;
        let top = bounds.min_y() + radius;
        let bottom = bounds.max_y() - radius;

        let corners = [
            (Point::new(right, top), -FRAC_PI_2),
            (Point::new(right, bottom), 0.0),
            (Point::new(left, bottom), FRAC_PI_2),
            (Point::new(left, top), PI),
        ];

        let step = FRAC_PI_2 / self.corner_segments as f32;
        let mut points = Vec::with_capacity(4 * (self.corner_segments + 1));
        for (center, start) in corners {
            for i in 0..=self.corner_segments {
                let angle = start + step * i as f32;
                points.push(Point::new(
                    center.x() + radius * angle.cos(),
                    center.y() + radius * angle.sin(),
                ));
            }
        }
        points
    }

    /// Polyline for a laid-out connector.
    pub fn connector(&self, connector: &Connector) -> Vec<Point> {
        connector_points(connector.from(), connector.to(), connector.kind())
    }
}

impl Default for PathGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounded rectangle outline at the reference corner resolution.
///
/// # Examples
///
/// ```
/// # use kinship::path::{rounded_rect_path, DEFAULT_CORNER_SEGMENTS};
/// let points = rounded_rect_path(0.0, 0.0, 120.0, 150.0, 8.0);
/// assert_eq!(points.len(), 4 * (DEFAULT_CORNER_SEGMENTS + 1));
/// ```
pub fn rounded_rect_path(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Vec<Point> {
    let bounds = Bounds::new(x, y, x + width, y + height);
    PathGenerator::new().rounded_rect(bounds, radius)
}

/// Points of a connector between two endpoints.
///
/// A spouse link is a straight segment. A parent-child link is an elbow
/// that drops from `from` to the vertical midpoint, runs across, and drops
/// again into `to`.
///
/// # Examples
///
/// ```
/// # use kinship::{path::connector_points, family::ConnectorKind, geometry::Point};
/// let elbow = connector_points(
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 20.0),
///     ConnectorKind::ParentChild,
/// );
/// assert_eq!(elbow[1], Point::new(0.0, 10.0));
/// assert_eq!(elbow[2], Point::new(10.0, 10.0));
/// ```
pub fn connector_points(from: Point, to: Point, kind: ConnectorKind) -> Vec<Point> {
    if kind.is_spouse() {
        return vec![from, to];
    }

    let mid_y = from.midpoint(to).y();
    vec![from, from.with_y(mid_y), to.with_y(mid_y), to]
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn outline_strategy() -> impl Strategy<Value = (f32, f32, f32, f32, f32, usize)> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            40.0f32..300.0,
            40.0f32..300.0,
            0.5f32..20.0,
            1usize..24,
        )
    }

    fn corner_centers(x: f32, y: f32, width: f32, height: f32, radius: f32) -> [Point; 4] {
        [
            Point::new(x + width - radius, y + radius),
            Point::new(x + width - radius, y + height - radius),
            Point::new(x + radius, y + height - radius),
            Point::new(x + radius, y + radius),
        ]
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Each corner contributes `segments + 1` points.
    fn check_point_count(outline: (f32, f32, f32, f32, f32, usize)) -> Result<(), TestCaseError> {
        let (x, y, width, height, radius, segments) = outline;
        let points = PathGenerator::new()
            .with_corner_segments(segments)
            .rounded_rect(Bounds::new(x, y, x + width, y + height), radius);

        prop_assert_eq!(points.len(), 4 * (segments + 1));
        Ok(())
    }

    /// Every point lies on the circle around its corner center, and
    /// consecutive points on one arc are a fixed angle apart.
    fn check_arc_geometry(outline: (f32, f32, f32, f32, f32, usize)) -> Result<(), TestCaseError> {
        let (x, y, width, height, radius, segments) = outline;
        let points = PathGenerator::new()
            .with_corner_segments(segments)
            .rounded_rect(Bounds::new(x, y, x + width, y + height), radius);
        let centers = corner_centers(x, y, width, height, radius);
        let step = FRAC_PI_2 / segments as f32;

        for (arc, center) in points.chunks(segments + 1).zip(centers) {
            for point in arc {
                let distance = point.distance(center);
                prop_assert!(distance <= radius + 1e-3, "distance {distance} exceeds {radius}");
            }
            for pair in arc.windows(2) {
                let a = pair[0].sub_point(center);
                let b = pair[1].sub_point(center);
                let turn = (a.x() * b.y() - a.y() * b.x()).atan2(a.x() * b.x() + a.y() * b.y());
                prop_assert!(
                    approx_eq!(f32, turn, step, epsilon = 1e-3),
                    "angular step {turn} differs from {step}"
                );
            }
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn point_count(outline in outline_strategy()) {
            check_point_count(outline)?;
        }

        #[test]
        fn arc_geometry(outline in outline_strategy()) {
            check_arc_geometry(outline)?;
        }
    }
}
