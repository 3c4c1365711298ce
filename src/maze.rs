use bit_set::BitSet;

use crate::palette::NB_COLORS;

/** Node Id (a room of the maze) */
pub type NodeId = usize;

/** Color Id (index into the palette) */
pub type ColorId = usize;

/// number of entries of a proximity set (2 direct successors + 4 successors at distance 2)
pub const PROXIMITY_SIZE:usize = 6;

/** proximity set of a node: L(i), L(L(i)), R(L(i)), R(i), L(R(i)), R(R(i)) */
pub type ProximitySet = [NodeId; PROXIMITY_SIZE];

/** models a binary functional graph: every node has exactly one left and one right successor */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// left[i]: left successor of i
    left: Vec<NodeId>,
    /// right[i]: right successor of i
    right: Vec<NodeId>,
}

impl Maze {

    /** constructor from the two successor arrays (0-indexed).

# Panics
- if the arrays have different lengths or a successor is out of range
    */
    pub fn new(left:Vec<NodeId>, right:Vec<NodeId>) -> Self {
        assert_eq!(left.len(), right.len(), "Maze: left and right successors differ in size");
        let n = left.len();
        assert!(
            left.iter().chain(right.iter()).all(|v| *v < n),
            "Maze: successor out of range"
        );
        Self { left, right }
    }

    /// number of nodes
    pub fn n(&self) -> usize { self.left.len() }

    /// left successor of u
    pub fn left(&self, u:NodeId) -> NodeId { self.left[u] }

    /// right successor of u
    pub fn right(&self, u:NodeId) -> NodeId { self.right[u] }

    /// nodes reachable from u in exactly 1 or 2 steps (with repetitions)
    pub fn proximity(&self, u:NodeId) -> ProximitySet {
        let l = self.left[u];
        let r = self.right[u];
        [l, self.left[l], self.right[l], r, self.left[r], self.right[r]]
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        let n = self.n();
        let self_loops = (0..n).filter(|u| self.left(*u) == *u || self.right(*u) == *u).count();
        let mut targets = BitSet::with_capacity(n);
        for v in self.left.iter().chain(self.right.iter()) {
            targets.insert(*v);
        }
        tracing::debug!(
            nb_nodes = n,
            self_loops,
            without_predecessor = n - targets.len(),
            "maze statistics"
        );
    }
}


/** result of the checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid coloring, number of distinct colors used
    Ok(usize),
    /// the coloring does not have one color per node (found, expected)
    WrongLength(usize, usize),
    /// the color given to the node does not belong to the palette
    ColorOutOfPalette(NodeId, ColorId),
    /// the node is its own 2-hop neighbor: no coloring can be valid
    SelfConflict(NodeId),
    /// two nodes at distance at most 2 share a color
    ConflictingNodes(NodeId, NodeId),
}

/**
checks a coloring (colors[i]: color of node i) against the maze.
Pure function of its arguments, used as an oracle by the solver and the tests.
*/
pub fn checker(maze:&Maze, colors:&[ColorId]) -> CheckerResult {
    if colors.len() != maze.n() {
        return CheckerResult::WrongLength(colors.len(), maze.n());
    }
    let mut used = BitSet::with_capacity(NB_COLORS);
    for (u,c) in colors.iter().enumerate() {
        if *c >= NB_COLORS {
            return CheckerResult::ColorOutOfPalette(u, *c);
        }
        used.insert(*c);
    }
    for u in 0..maze.n() {
        for v in maze.proximity(u).iter() {
            if *v == u {
                return CheckerResult::SelfConflict(u);
            }
            if colors[*v] == colors[u] {
                return CheckerResult::ConflictingNodes(u, *v);
            }
        }
    }
    CheckerResult::Ok(used.len())
}

/// first node that belongs to its own proximity set (None if the maze can be colored)
pub fn self_conflict(maze:&Maze) -> Option<NodeId> {
    (0..maze.n()).find(|u| maze.proximity(*u).contains(u))
}
