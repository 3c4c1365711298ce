use fastrand::Rng;

use crate::maze::{Maze, NodeId};

/// number of random draws before giving up on finding a colorable maze
const MAX_TRIES:usize = 10_000;

/** maze where both successors of every node are drawn uniformly */
pub fn random_maze(n:usize, rng:&Rng) -> Maze {
    let left:Vec<NodeId> = (0..n).map(|_| rng.usize(..n)).collect();
    let right:Vec<NodeId> = (0..n).map(|_| rng.usize(..n)).collect();
    Maze::new(left, right)
}

/** draws uniform mazes until one has no self-conflicting node.
returns None if no such maze was found after a fixed number of draws
*/
pub fn random_colorable_maze(n:usize, rng:&Rng) -> Option<Maze> {
    (0..MAX_TRIES)
        .map(|_| random_maze(n, rng))
        .find(|maze| crate::maze::self_conflict(maze).is_none())
}

/** maze where L(i) = i+a and R(i) = i+b (mod n) */
pub fn circulant_maze(n:usize, a:usize, b:usize) -> Maze {
    let left = (0..n).map(|i| (i+a) % n).collect();
    let right = (0..n).map(|i| (i+b) % n).collect();
    Maze::new(left, right)
}

/// true iff the circulant maze (n,a,b) has no self-conflicting node
pub fn circulant_is_colorable(n:usize, a:usize, b:usize) -> bool {
    [a, 2*a, a+b, b, 2*b].iter().all(|d| d % n != 0)
}

/** random colorable circulant maze. None if n < 3 (every maze with less than 3 nodes
has a self-conflicting node) */
pub fn random_circulant_maze(n:usize, rng:&Rng) -> Option<Maze> {
    if n < 3 { return None; }
    for _ in 0..MAX_TRIES {
        let a = rng.usize(1..n);
        let b = rng.usize(1..n);
        if circulant_is_colorable(n, a, b) {
            return Some(circulant_maze(n, a, b));
        }
    }
    Some(circulant_maze(n, 1, 1))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::self_conflict;

    #[test]
    fn test_random_maze_is_deterministic() {
        let a = random_maze(50, &Rng::with_seed(7));
        let b = random_maze(50, &Rng::with_seed(7));
        assert_eq!(a, b);
        assert_eq!(a.n(), 50);
    }

    #[test]
    fn test_random_colorable_maze() {
        let rng = Rng::with_seed(42);
        for n in [20, 100, 1000].iter() {
            let maze = random_colorable_maze(*n, &rng).unwrap();
            assert_eq!(self_conflict(&maze), None);
        }
        assert_eq!(random_colorable_maze(1, &rng), None);
    }

    #[test]
    fn test_circulant_maze() {
        let maze = circulant_maze(13, 1, 3);
        assert_eq!(maze.proximity(0), [1,2,4,3,4,6]);
        assert!(circulant_is_colorable(13, 1, 3));
        assert!(!circulant_is_colorable(8, 2, 4));
        let rng = Rng::with_seed(3);
        for n in 3..40 {
            let maze = random_circulant_maze(n, &rng).unwrap();
            assert_eq!(self_conflict(&maze), None);
        }
        assert_eq!(random_circulant_maze(2, &rng), None);
    }
}
