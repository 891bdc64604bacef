//! Breadth-first search for graphs where every edge counts as a single step.
use indexmap::map::Entry::Vacant;
use log::debug;

use std::collections::VecDeque;
use std::hash::Hash;

use crate::astar::{reverse_path, FxIndexMap};

/// Shortest path by number of edges from `start` to the first dequeued node satisfying
/// `success`. Edge weights yielded by `successors` are ignored. Returns [None] if the frontier
/// empties first.
pub fn bfs<N, C, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FS: FnMut(&N) -> bool,
{
    // Keys double as the seen set; values are the discovery index of the predecessor.
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    let mut frontier = VecDeque::new();
    frontier.push_back(0);
    while let Some(index) = frontier.pop_front() {
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                return Some(reverse_path(&parents, |&p| p, index));
            }
            successors(node)
        };
        for (successor, _) in successors {
            if let Vacant(e) = parents.entry(successor) {
                frontier.push_back(e.index());
                e.insert(index);
            }
        }
    }
    debug!("Frontier exhausted after seeing {} nodes, no path", parents.len());
    None
}

/// Every node reachable from `start` in breadth-first order, paired with its distance in
/// edges. The start itself comes first with distance 0.
pub fn bfs_reachable<N, C, FN, IN>(start: &N, mut successors: FN) -> Vec<(N, usize)>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
{
    let mut seen: FxIndexMap<N, usize> = FxIndexMap::default();
    seen.insert(start.clone(), 0);
    let mut i = 0;
    while let Some((node, &depth)) = seen.get_index(i) {
        for (successor, _) in successors(node) {
            seen.entry(successor).or_insert(depth + 1);
        }
        i += 1;
    }
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // A ring of six nodes with a heavy shortcut edge 0 -> 3.
    fn ring(n: &u8) -> Vec<(u8, u32)> {
        let mut next = vec![((n + 1) % 6, 1), ((n + 5) % 6, 1)];
        if *n == 0 {
            next.push((3, 100));
        }
        next
    }

    #[test]
    fn ignores_weights() {
        let path = bfs(&0, ring, |n| *n == 3).unwrap();
        assert_eq!(path, vec![0, 3]);
    }

    #[test]
    fn endpoints_included() {
        let path = bfs(&1, ring, |n| *n == 4).unwrap();
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&4));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn start_is_goal() {
        assert_eq!(bfs(&2, ring, |n| *n == 2), Some(vec![2]));
    }

    #[test]
    fn unreachable_gives_none() {
        assert_eq!(bfs(&0, ring, |n| *n == 9), None);
    }

    #[test]
    fn reachable_in_bfs_order() {
        let reached = bfs_reachable(&0, ring);
        assert_eq!(reached.len(), 6);
        assert_eq!(reached[0], (0, 0));
        let depth_of = |x| reached.iter().find(|(n, _)| *n == x).map(|&(_, d)| d);
        assert_eq!(depth_of(3), Some(1));
        assert_eq!(depth_of(2), Some(2));
    }
}
