//! Viewport culling.
//!
//! An element is visible when its box overlaps the visible area grown by its
//! buffer on every side. Touching edges count as overlap, so an element
//! exactly on the margin is still drawn.

use log::debug;

use kinship_core::{
    family::Connector,
    geometry::Bounds,
    viewport::{Rect, VisibleArea},
};

/// Whether `bounds` overlaps the buffered area.
pub fn is_visible(bounds: Bounds, area: &VisibleArea) -> bool {
    bounds.intersects(&area.expanded_bounds())
}

/// Identifiers of the visible elements, in input order.
///
/// # Examples
///
/// ```
/// # use kinship::{visibility::visible_ids, viewport::{Rect, VisibleArea}};
/// let area = VisibleArea::new(0.0, 0.0, 100.0, 100.0);
/// let elements = [
///     Rect::new("far", 150.0, 0.0, 10.0, 10.0),
///     Rect::new("edge", 95.0, 95.0, 10.0, 10.0),
/// ];
///
/// assert_eq!(visible_ids(&elements, &area), vec!["edge".to_string()]);
/// ```
pub fn visible_ids(elements: &[Rect], area: &VisibleArea) -> Vec<String> {
    let ids: Vec<String> = elements
        .iter()
        .filter(|element| is_visible(element.bounds(), area))
        .map(|element| element.id().to_string())
        .collect();

    debug!(
        elements_count = elements.len(),
        visible_count = ids.len();
        "Culled elements"
    );
    ids
}

/// Connectors whose endpoint box overlaps the buffered area, in input order.
///
/// Connector paths never leave the box spanned by their endpoints, so this
/// never hides a connector that crosses the viewport.
pub fn visible_connectors<'a>(connectors: &'a [Connector], area: &VisibleArea) -> Vec<&'a Connector> {
    let visible: Vec<&Connector> = connectors
        .iter()
        .filter(|connector| is_visible(connector.bounds(), area))
        .collect();

    debug!(
        connectors_count = connectors.len(),
        visible_count = visible.len();
        "Culled connectors"
    );
    visible
}

#[cfg(test)]
mod tests {
    use kinship_core::{family::ConnectorKind, geometry::Point};

    use super::*;

    fn area() -> VisibleArea {
        VisibleArea::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_element_beyond_right_edge_is_hidden() {
        let elements = [Rect::new("far", 150.0, 0.0, 10.0, 10.0)];
        assert!(visible_ids(&elements, &area()).is_empty());
    }

    #[test]
    fn test_element_overlapping_corner_is_visible() {
        let elements = [Rect::new("corner", 95.0, 95.0, 10.0, 10.0)];
        assert_eq!(visible_ids(&elements, &area()), vec!["corner"]);
    }

    #[test]
    fn test_touching_edges_are_visible() {
        let elements = [
            Rect::new("right", 100.0, 10.0, 10.0, 10.0),
            Rect::new("left", -10.0, 10.0, 10.0, 10.0),
            Rect::new("below", 10.0, 100.0, 10.0, 10.0),
            Rect::new("above", 10.0, -10.0, 10.0, 10.0),
        ];

        assert_eq!(visible_ids(&elements, &area()).len(), 4);
    }

    #[test]
    fn test_buffer_widens_every_side() {
        let elements = [
            Rect::new("right", 140.0, 0.0, 10.0, 10.0),
            Rect::new("above", 0.0, -60.0, 10.0, 10.0),
            Rect::new("outside", 0.0, 160.0, 10.0, 10.0),
        ];
        let area = area().with_buffer(50.0);

        assert_eq!(visible_ids(&elements, &area), vec!["right", "above"]);
    }

    #[test]
    fn test_input_order_and_empty_input() {
        let elements = [
            Rect::new("b", 10.0, 10.0, 5.0, 5.0),
            Rect::new("a", 20.0, 20.0, 5.0, 5.0),
        ];

        assert_eq!(visible_ids(&elements, &area()), vec!["b", "a"]);
        assert!(visible_ids(&[], &area()).is_empty());
    }

    #[test]
    fn test_connector_crossing_the_area_is_kept() {
        let crossing = Connector::new(
            ConnectorKind::ParentChild,
            "p",
            "c",
            Point::new(-50.0, -50.0),
            Point::new(200.0, 200.0),
        );
        let outside = Connector::new(
            ConnectorKind::Spouse,
            "a",
            "b",
            Point::new(300.0, 0.0),
            Point::new(400.0, 0.0),
        );
        let connectors = [crossing, outside];

        let visible = visible_connectors(&connectors, &area());

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].from_id(), "p");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-400.0f32..400.0, -400.0f32..400.0, 0.0f32..80.0, 0.0f32..80.0)
            .prop_map(|(x, y, width, height)| Rect::new("r", x, y, width, height))
    }

    fn area_strategy() -> impl Strategy<Value = VisibleArea> {
        (-200.0f32..0.0, -200.0f32..0.0, 0.0f32..200.0, 0.0f32..200.0, 0.0f32..100.0).prop_map(
            |(left, top, right, bottom, buffer)| {
                VisibleArea::new(left, top, right, bottom).with_buffer(buffer)
            },
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Visibility matches the four separating conditions.
    fn check_matches_separating_axes(rect: Rect, area: VisibleArea) -> Result<(), TestCaseError> {
        let bounds = rect.bounds();
        let buffer = area.buffer();
        let hidden = bounds.min_x() > area.right() + buffer
            || bounds.max_x() < area.left() - buffer
            || bounds.min_y() > area.bottom() + buffer
            || bounds.max_y() < area.top() - buffer;

        prop_assert_eq!(is_visible(bounds, &area), !hidden);
        Ok(())
    }

    /// Growing the buffer never hides an element.
    fn check_buffer_is_monotonic(rect: Rect, area: VisibleArea) -> Result<(), TestCaseError> {
        let wider = area.with_buffer(area.buffer() + 25.0);

        if is_visible(rect.bounds(), &area) {
            prop_assert!(is_visible(rect.bounds(), &wider));
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn matches_separating_axes(rect in rect_strategy(), area in area_strategy()) {
            check_matches_separating_axes(rect, area)?;
        }

        #[test]
        fn buffer_is_monotonic(rect in rect_strategy(), area in area_strategy()) {
            check_buffer_is_monotonic(rect, area)?;
        }
    }
}
