//! Two-hop coloring of binary functional graphs.

/// proximity sets (nodes reachable in 1 or 2 steps) and feasibility
pub mod proximity;

/// peeling order guaranteeing a free color to every node
pub mod degeneracy;

/// greedy coloring following the peeling order
pub mod greedy;

use crate::maze::{ColorId, Maze, NodeId};

use self::degeneracy::degeneracy_order;
use self::greedy::{greedy_coloring, ColorChoice};
use self::proximity::ProximityTable;

/** outcome of a case */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// the witness is its own 2-hop neighbor, no coloring exists
    Impossible(NodeId),
    /// colors[i]: color of node i
    Colored(Vec<ColorId>),
}

/** colors the maze with at most 13 colors such that nodes at distance 1 or 2 differ.
    1. builds the proximity sets. If a node is its own 2-hop neighbor, stop (impossible)
    2. computes the peeling order
    3. colors greedily following this order
*/
pub fn two_hop_coloring(maze:&Maze, choice:ColorChoice) -> Verdict {
    let table = ProximityTable::new(maze);
    if let Some(witness) = table.self_conflict() {
        return Verdict::Impossible(witness);
    }
    let order = degeneracy_order(&table);
    Verdict::Colored(greedy_coloring(&table, &order, choice))
}
