use crate::maze::{Maze, NodeId, ProximitySet};

/**
proximity sets of every node of a maze (nodes reachable in 1 or 2 steps).
Stored as a flat array indexed by the node id.
*/
#[derive(Debug, Clone)]
pub struct ProximityTable {
    /// sets[u]: proximity set of u
    sets: Vec<ProximitySet>,
}

impl ProximityTable {

    /** builds the proximity set of every node */
    pub fn new(maze:&Maze) -> Self {
        let sets = (0..maze.n()).map(|u| maze.proximity(u)).collect();
        Self { sets }
    }

    /// number of nodes
    pub fn n(&self) -> usize { self.sets.len() }

    /// proximity set of u
    pub fn get(&self, u:NodeId) -> &ProximitySet { &self.sets[u] }

    /** first node that belongs to its own proximity set.
    If such a node exists, it must differ in color from itself and the maze cannot be colored.
    */
    pub fn self_conflict(&self) -> Option<NodeId> {
        self.sets.iter().enumerate()
            .find(|(u,set)| set.contains(u))
            .map(|(u,_)| u)
    }

    /// true iff no node belongs to its own proximity set
    pub fn is_feasible(&self) -> bool { self.self_conflict().is_none() }

    /// in_degrees[v]: number of occurrences of v in the proximity sets (with multiplicity)
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut res = vec![0 ; self.n()];
        for set in &self.sets {
            for v in set.iter() {
                res[*v] += 1;
            }
        }
        res
    }
}
