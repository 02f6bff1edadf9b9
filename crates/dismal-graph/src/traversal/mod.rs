//! Diagnostic traversals. They write only traversal marks, never values or deltas.

pub mod bfs;
pub mod dfs;
pub mod marks;

pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use marks::{Color, TraversalMarks};

/// A vertex reached by a traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalNode {
    pub name: String,
    /// BFS distance or DFS tree depth.
    pub depth: usize,
}

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalReport {
    /// The starting vertex.
    pub origin: String,
    /// Vertices in the order they were visited.
    pub nodes: Vec<TraversalNode>,
}

impl TraversalReport {
    fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            nodes: Vec::new(),
        }
    }

    fn visit(&mut self, name: &str, depth: usize) {
        self.nodes.push(TraversalNode {
            name: name.to_string(),
            depth,
        });
    }

    pub fn order(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n.name == name)
    }

    pub fn max_depth_reached(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}
