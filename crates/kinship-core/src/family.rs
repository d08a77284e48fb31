//! Family-tree value types.
//!
//! [`Node`] is the caller-owned input to the layout engine and also its
//! output once positions are filled in. [`Connector`] is derived by the
//! engine from already positioned nodes and is discarded after drawing.
//!
//! Both types serialize with the camelCase field names hosts exchange
//! (`parentId`, `spouseId`, `fromX`, ...), so a layout result can be handed
//! to a renderer as-is.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::geometry::{Bounds, Point, Size};

/// Width assumed for a node whose input omits it.
pub const DEFAULT_NODE_WIDTH: f32 = 120.0;

/// Height assumed for a node whose input omits it.
pub const DEFAULT_NODE_HEIGHT: f32 = 150.0;

/// Generation assumed for a node whose input omits it.
pub const DEFAULT_GENERATION: i32 = 1;

/// One person in the diagram.
///
/// The relational references are plain identifiers. The engine trusts them:
/// a reference that does not resolve to another node in the same input is
/// ignored rather than reported.
///
/// # Examples
///
/// ```
/// # use kinship_core::{family::Node, geometry::Size};
/// let child = Node::new("ada", Size::new(120.0, 150.0))
///     .with_parent("byron")
///     .with_spouse("william");
///
/// assert_eq!(child.parent_id(), Some("byron"));
/// assert_eq!(child.spouse_id(), Some("william"));
///
/// // An empty identifier means "no relation".
/// let root = Node::new("byron", Size::new(120.0, 150.0)).with_parent("");
/// assert!(root.parent_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    id: String,
    #[serde(
        default,
        deserialize_with = "non_empty_id",
        skip_serializing_if = "Option::is_none"
    )]
    parent_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_empty_id",
        skip_serializing_if = "Option::is_none"
    )]
    spouse_id: Option<String>,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default = "default_width")]
    width: f32,
    #[serde(default = "default_height")]
    height: f32,
    #[serde(default = "default_generation")]
    generation: i32,
}

impl Node {
    /// Creates a root node of the given size at the origin.
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            spouse_id: None,
            x: 0.0,
            y: 0.0,
            width: size.width(),
            height: size.height(),
            generation: DEFAULT_GENERATION,
        }
    }

    /// Sets the parent reference. An empty identifier clears it.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = non_empty(parent_id.into());
        self
    }

    /// Sets the spouse reference. An empty identifier clears it.
    pub fn with_spouse(mut self, spouse_id: impl Into<String>) -> Self {
        self.spouse_id = non_empty(spouse_id.into());
        self
    }

    /// Sets the top-left position.
    pub fn with_position(mut self, position: Point) -> Self {
        self.set_position(position);
        self
    }

    /// Sets the informational generation number.
    pub fn with_generation(mut self, generation: i32) -> Self {
        self.generation = generation;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn spouse_id(&self) -> Option<&str> {
        self.spouse_id.as_deref()
    }

    pub fn generation(&self) -> i32 {
        self.generation
    }

    /// Returns the top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x();
        self.y = position.y();
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the box this node occupies.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position(), self.size())
    }

    /// Horizontal center, the anchor used for parent centering.
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Middle of the bottom edge, where parent-child connectors start.
    pub fn bottom_center(&self) -> Point {
        Point::new(self.center_x(), self.y + self.height)
    }

    /// Middle of the top edge, where parent-child connectors end.
    pub fn top_center(&self) -> Point {
        Point::new(self.center_x(), self.y)
    }

    /// Middle of the left edge, where spouse connectors end.
    pub fn left_middle(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }

    /// Middle of the right edge, where spouse connectors start.
    pub fn right_middle(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height / 2.0)
    }
}

fn non_empty(id: String) -> Option<String> {
    if id.is_empty() { None } else { Some(id) }
}

fn non_empty_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<String>::deserialize(deserializer)?;
    Ok(id.and_then(non_empty))
}

fn default_width() -> f32 {
    DEFAULT_NODE_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_NODE_HEIGHT
}

fn default_generation() -> i32 {
    DEFAULT_GENERATION
}

/// The relationship a connector draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectorKind {
    /// From a parent's bottom edge down to a child's top edge.
    ParentChild,
    /// Between two spouses, right edge to left edge.
    Spouse,
}

impl ConnectorKind {
    pub fn is_spouse(self) -> bool {
        matches!(self, Self::Spouse)
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParentChild => write!(f, "parent-child"),
            Self::Spouse => write!(f, "spouse"),
        }
    }
}

/// A line between two positioned nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    from_id: String,
    to_id: String,
    #[serde(rename = "type")]
    kind: ConnectorKind,
    from_x: f32,
    from_y: f32,
    to_x: f32,
    to_y: f32,
}

impl Connector {
    /// Creates a connector between two endpoints.
    pub fn new(
        kind: ConnectorKind,
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        from: Point,
        to: Point,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            kind,
            from_x: from.x(),
            from_y: from.y(),
            to_x: to.x(),
            to_y: to.y(),
        }
    }

    pub fn kind(&self) -> ConnectorKind {
        self.kind
    }

    pub fn from_id(&self) -> &str {
        &self.from_id
    }

    pub fn to_id(&self) -> &str {
        &self.to_id
    }

    /// Returns the start point.
    pub fn from(&self) -> Point {
        Point::new(self.from_x, self.from_y)
    }

    /// Returns the end point.
    pub fn to(&self) -> Point {
        Point::new(self.to_x, self.to_y)
    }

    /// Returns the box spanned by both endpoints.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.from(), self.to())
    }
}
