//! Generational tree layout engine
//!
//! Places each person one level below their parent and centers every parent
//! over its direct children. The walk is depth-first and order-sensitive:
//!
//! 1. Roots are taken in input order. A node is a root when it names no
//!    parent or names one that is not in the input.
//! 2. A leaf takes the current horizontal cursor and advances it by the
//!    sibling distance.
//! 3. A parent lays out its children in input order, then centers itself
//!    over the midpoint of its first and last child's centers.
//!
//! Centering uses direct children only, so a parent over unbalanced
//! subtrees sits over its children's centers rather than over the whole
//! subtree box.
//!
//! The walk keeps an explicit stack instead of recursing, so deep
//! genealogies cannot exhaust the call stack.

use indexmap::IndexMap;
use log::{debug, info, warn};

use kinship_core::family::Node;

use crate::{
    error::KinshipError,
    layout::{LayoutResult, connectors},
};

/// Generational tree layout engine
#[derive(Debug, Clone)]
pub struct Engine {
    level_height: f32,
    sibling_distance: f32,
}

impl Engine {
    /// Create a tree engine.
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

    pub fn level_height(&self) -> f32 {
        self.level_height
    }

    pub fn sibling_distance(&self) -> f32 {
        self.sibling_distance
    }

    /// Calculate the layout for a family forest.
    ///
    /// Output nodes are unique by identifier, in order of first appearance;
    /// when an identifier repeats, the last entry's data wins.
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::CyclicRelationship`] if the walk reaches a
    /// node that is still on its own ancestor path.
    pub fn layout(&self, nodes: &[Node]) -> Result<LayoutResult, KinshipError> {
        info!(nodes_count = nodes.len(); "Calculating tree layout");

        let mut forest = Forest::new(nodes);
        let roots = std::mem::take(&mut forest.roots);
        debug!(roots_count = roots.len(); "Collected roots");

        let mut cursor = 0.0;
        let mut max_y: f32 = 0.0;
        for root in roots {
            let extent = self.place_subtree(&mut forest, root, &mut cursor)?;
            max_y = max_y.max(extent);
        }

        let unreached_count = forest
            .marks
            .iter()
            .filter(|&&mark| mark == Mark::Unvisited)
            .count();
        if unreached_count > 0 {
            warn!(unreached_count; "Nodes without a root ancestor keep their input positions");
        }

        let connectors = connectors::generate(&forest.nodes);
        let result = LayoutResult::new(
            forest.nodes.into_values().collect(),
            connectors,
            cursor,
            max_y + self.level_height,
        );

        info!(
            nodes_count = result.nodes().len(),
            connectors_count = result.connectors().len(),
            total_width = result.total_width(),
            total_height = result.total_height();
            "Tree layout calculated"
        );

        Ok(result)
    }

    /// Place `root` and its descendants starting at `cursor`.
    ///
    /// Advances `cursor` past the subtree and returns the largest vertical
    /// position reached.
    fn place_subtree(
        &self,
        forest: &mut Forest,
        root: usize,
        cursor: &mut f32,
    ) -> Result<f32, KinshipError> {
        let mut stack = Vec::new();
        let mut max_y = self.enter(forest, root, 0, cursor, &mut stack)?;

        while let Some(frame) = stack.last_mut() {
            match forest.children[frame.index].get(frame.next_child).copied() {
                Some(child) => {
                    frame.next_child += 1;
                    let generation = frame.generation + 1;
                    let y = self.enter(forest, child, generation, cursor, &mut stack)?;
                    max_y = max_y.max(y);
                }
                None => {
                    let index = frame.index;
                    stack.pop();
                    forest.center_over_children(index);
                }
            }
        }

        Ok(max_y)
    }

    /// Assign the vertical position of a node and either place it as a leaf
    /// or push it so its children are visited next.
    fn enter(
        &self,
        forest: &mut Forest,
        index: usize,
        generation: usize,
        cursor: &mut f32,
        stack: &mut Vec<Frame>,
    ) -> Result<f32, KinshipError> {
        if forest.marks[index] == Mark::Active {
            return Err(KinshipError::CyclicRelationship {
                id: forest.nodes[index].id().to_string(),
            });
        }

        let y = generation as f32 * self.level_height;
        let is_leaf = forest.children[index].is_empty();
        let node = &mut forest.nodes[index];
        node.set_y(y);

        if is_leaf {
            node.set_x(*cursor);
            *cursor += self.sibling_distance;
            forest.marks[index] = Mark::Placed;
        } else {
            forest.marks[index] = Mark::Active;
            stack.push(Frame {
                index,
                generation,
                next_child: 0,
            });
        }

        Ok(y)
    }
}

impl super::Engine for Engine {
    fn calculate(&self, nodes: &[Node]) -> Result<LayoutResult, KinshipError> {
        self.layout(nodes)
    }
}

/// Walk state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the current ancestor path, waiting for its children.
    Active,
    Placed,
}

/// A parent whose children are being placed.
#[derive(Debug)]
struct Frame {
    index: usize,
    generation: usize,
    next_child: usize,
}

/// Per-call lookup tables, addressed by position in `nodes`.
#[derive(Debug)]
struct Forest {
    nodes: IndexMap<String, Node>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    marks: Vec<Mark>,
}

impl Forest {
    fn new(input: &[Node]) -> Self {
        let mut nodes = IndexMap::with_capacity(input.len());
        let entries: Vec<usize> = input
            .iter()
            .map(|node| nodes.insert_full(node.id().to_string(), node.clone()).0)
            .collect();

        let mut children = vec![Vec::new(); nodes.len()];
        let mut roots = Vec::new();
        for (node, &index) in input.iter().zip(&entries) {
            match node.parent_id().and_then(|id| nodes.get_index_of(id)) {
                Some(parent) => children[parent].push(index),
                None => roots.push(index),
            }
        }

        let marks = vec![Mark::Unvisited; nodes.len()];
        Self {
            nodes,
            children,
            roots,
            marks,
        }
    }

    /// Center a parent over the midpoint of its first and last child.
    fn center_over_children(&mut self, index: usize) {
        self.marks[index] = Mark::Placed;

        let children = &self.children[index];
        let (Some(&first), Some(&last)) = (children.first(), children.last()) else {
            return;
        };

        let span_center = (self.nodes[first].center_x() + self.nodes[last].center_x()) / 2.0;
        let node = &mut self.nodes[index];
        let x = span_center - node.size().width() / 2.0;
        node.set_x(x);
    }
}
