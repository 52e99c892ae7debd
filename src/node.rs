//! Arena-backed search tree.
//!
//! Every strategy records the cells it discovers as [Node]s in a [NodeArena]. A node refers to the
//! node it was reached from by index, so following parents never creates ownership cycles and the
//! whole tree is released at once when the arena is dropped at the end of a search.
use grid_util::point::Point;
use std::iter;

/// Parent index of the root node.
pub const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub point: Point,
    pub parent: usize,
}

impl Node {
    pub fn is_root(&self) -> bool {
        self.parent == NO_PARENT
    }
}

#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    /// Stores a node and returns its index.
    pub fn push(&mut self, point: Point, parent: usize) -> usize {
        debug_assert!(parent == NO_PARENT || parent < self.nodes.len());
        self.nodes.push(Node { point, parent });
        self.nodes.len() - 1
    }

    pub fn root(&mut self, point: Point) -> usize {
        self.push(point, NO_PARENT)
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn point(&self, index: usize) -> Point {
        self.nodes[index].point
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks parent links from `index` back to the root and returns the visited points ordered
    /// root first.
    pub fn reconstruct_path(&self, index: usize) -> Vec<Point> {
        let mut path: Vec<Point> = iter::successors(self.get(index), |node| self.get(node.parent))
            .map(|node| node.point)
            .collect();
        path.reverse();
        path
    }
}
