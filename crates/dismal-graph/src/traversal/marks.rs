//! Per-vertex traversal bookkeeping.

use petgraph::stable_graph::EdgeIndex;

/// Search colouring: unseen, discovered, finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    White,
    Grey,
    Black,
}

/// Transient state written by BFS, DFS, and path search.
/// Never read by propagation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraversalMarks {
    pub color: Color,
    /// BFS hop count from the start vertex.
    pub distance: Option<usize>,
    /// DFS discovery time.
    pub discovered: Option<usize>,
    /// DFS finish time.
    pub finished: Option<usize>,
    /// Edge used to first reach this vertex.
    pub searched_edge: Option<EdgeIndex>,
}

impl TraversalMarks {
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}
