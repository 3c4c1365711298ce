use std::collections::VecDeque;

use bit_set::BitSet;

use crate::maze::{NodeId, PROXIMITY_SIZE};
use crate::solvers::coloring::proximity::ProximityTable;

/// a node with at most this many remaining in-neighbors can always be colored last
pub const MAX_REMAINING_IN_DEGREE:usize = PROXIMITY_SIZE;

/** computes the order in which to color the nodes (peeling algorithm).
    1. every node with in-degree <= 6 is pushed into a FIFO queue (by increasing id)
    2. pop a node x (skip it if already removed), remove it and put it in front of the order
    3. every y in the proximity set of x loses an in-neighbor. If y has in-degree <= 6, push it
    4. repeat until the queue is empty

Since at most 6k occurrences remain among the k remaining nodes, one of them always has
in-degree <= 6 and every node gets removed.
The first nodes of the returned order are the last removed ones. When colored in this order,
a node has at most 6 in-neighbors colored before it.

# Panics
 - if some node is never removed (not possible for proximity sets of size 6)
*/
pub fn degeneracy_order(table:&ProximityTable) -> Vec<NodeId> {
    let n = table.n();
    let mut in_degrees = table.in_degrees();
    let mut queue:VecDeque<NodeId> = (0..n)
        .filter(|v| in_degrees[*v] <= MAX_REMAINING_IN_DEGREE)
        .collect();
    let mut removed = BitSet::with_capacity(n);
    let mut order:VecDeque<NodeId> = VecDeque::with_capacity(n);
    while let Some(x) = queue.pop_front() {
        if removed.contains(x) { continue; }
        removed.insert(x);
        debug_assert!(in_degrees[x] <= MAX_REMAINING_IN_DEGREE);
        order.push_front(x);
        // x is colored after y: x no longer counts when checking how constrained y is
        for y in table.get(x).iter() {
            in_degrees[*y] -= 1;
            if in_degrees[*y] <= MAX_REMAINING_IN_DEGREE {
                queue.push_back(*y);
            }
        }
    }
    assert_eq!(
        order.len(), n,
        "degeneracy_order: peeling stalled after removing {} / {} nodes", order.len(), n
    );
    order.into_iter().collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use fastrand::Rng;
    use crate::generate::{random_maze, circulant_maze};

    /** checks that the order is a permutation and that, when colored in this order,
    every node has at most 6 in-neighbors colored before it */
    fn check_order(table:&ProximityTable, order:&[NodeId]) {
        let n = table.n();
        assert_eq!(order.len(), n);
        let mut position = vec![None ; n];
        for (i,v) in order.iter().enumerate() {
            assert!(position[*v].is_none(), "node {} appears twice", v);
            position[*v] = Some(i);
        }
        let mut colored_in_neighbors = vec![0 ; n];
        for u in 0..n {
            for v in table.get(u).iter() {
                if position[u] < position[*v] {
                    colored_in_neighbors[*v] += 1;
                }
            }
        }
        assert!(colored_in_neighbors.iter().all(|d| *d <= MAX_REMAINING_IN_DEGREE));
    }

    #[test]
    fn test_low_degree_nodes_come_last() {
        // 0 -> 1 -> 2 -> 3 -> 3, nobody points to 0
        let maze = crate::maze::Maze::new(vec![1,2,3,3], vec![1,2,3,3]);
        let table = ProximityTable::new(&maze);
        let order = degeneracy_order(&table);
        check_order(&table, &order);
        // in-degrees: 0,2,6,16. 3 is only pushed once 2 is removed
        assert_eq!(order, vec![3,2,1,0]);
    }

    #[test]
    fn test_circulant_order() {
        let table = ProximityTable::new(&circulant_maze(13, 1, 3));
        let order = degeneracy_order(&table);
        check_order(&table, &order);
        // every in-degree is 6: the queue starts with every node in id order
        assert_eq!(order, (0..13).rev().collect::<Vec<NodeId>>());
    }

    #[test]
    fn test_random_orders() {
        let rng = Rng::with_seed(12);
        for n in [1, 2, 5, 10, 100, 1000, 10_000].iter() {
            let table = ProximityTable::new(&random_maze(*n, &rng));
            let order = degeneracy_order(&table);
            check_order(&table, &order);
        }
    }

    #[test]
    fn test_order_is_deterministic() {
        let table = ProximityTable::new(&random_maze(500, &Rng::with_seed(5)));
        assert_eq!(degeneracy_order(&table), degeneracy_order(&table));
    }
}
