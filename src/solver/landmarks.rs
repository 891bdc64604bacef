use log::{debug, warn};
use num_traits::Zero;

use std::hash::Hash;

use crate::astar::{dijkstra_all, FxIndexMap};
use crate::graph::Graph;
use crate::Cost;

/// Exact distances from a handful of landmark nodes to every node they reach, used for
/// triangle-inequality estimates.
#[derive(Clone, Debug)]
pub struct LandmarkMap<N, C> {
    landmarks: Vec<N>,
    landmark_distances: Vec<FxIndexMap<N, C>>,
}

impl<N, C> LandmarkMap<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
{
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn landmarks(&self) -> &[N] {
        &self.landmarks
    }

    /// Distance from the `i`th landmark to `node`, if the landmark reaches it.
    pub fn distance(&self, i: usize, node: &N) -> Option<C> {
        self.landmark_distances.get(i)?.get(node).copied()
    }

    /// Lower bound on the cost from `p1` to `p2`. For a landmark `L` reaching both,
    /// `d(L, p2) <= d(L, p1) + d(p1, p2)`, so `d(L, p2) - d(L, p1)` never overestimates even when
    /// edges are one-way.
    #[inline(always)]
    pub fn triangle_heuristic(&self, p1: &N, p2: &N) -> C {
        self.landmark_distances
            .iter()
            .filter_map(|table| match (table.get(p1), table.get(p2)) {
                (Some(&d1), Some(&d2)) if d2 > d1 => Some(d2 - d1),
                _ => None,
            })
            .max()
            .unwrap_or_else(Zero::zero)
    }

    pub fn new_from_landmarks<G>(landmarks: Vec<N>, graph: &G) -> LandmarkMap<N, C>
    where
        G: Graph<Node = N, Cost = C>,
    {
        let landmark_distances = landmarks
            .iter()
            .map(|landmark| Self::distances_from(landmark, graph))
            .collect();
        LandmarkMap {
            landmarks,
            landmark_distances,
        }
    }

    /// Picks `landmark_count` landmarks, starting at `initial_landmark` and then repeatedly taking
    /// the node whose distance to its closest landmark is largest. Stops early once no node
    /// is farther than zero from the chosen landmarks.
    pub fn new_minmax_greedy<G>(
        initial_landmark: N,
        landmark_count: usize,
        graph: &G,
    ) -> LandmarkMap<N, C>
    where
        G: Graph<Node = N, Cost = C>,
    {
        let mut map = LandmarkMap {
            landmarks: vec![],
            landmark_distances: vec![],
        };
        let mut next = Some(initial_landmark);
        while let Some(landmark) = next.take() {
            map.landmark_distances
                .push(Self::distances_from(&landmark, graph));
            map.landmarks.push(landmark);
            if map.len() >= landmark_count {
                break;
            }
            // Look to maximize the minimal distance to any existing landmark for a greedy choice
            let mut max_cost: C = Zero::zero();
            for node in map.landmark_distances[0].keys() {
                let min_c = map
                    .landmark_distances
                    .iter()
                    .filter_map(|table| table.get(node).copied())
                    .min()
                    .unwrap_or_else(Zero::zero);
                if min_c > max_cost {
                    next = Some(node.clone());
                    max_cost = min_c;
                }
            }
            if next.is_none() {
                warn!(
                    "Stopped at {} of {} landmarks: no node is farther away from the existing ones",
                    map.len(),
                    landmark_count
                );
            }
        }
        map
    }

    fn distances_from<G>(landmark: &N, graph: &G) -> FxIndexMap<N, C>
    where
        G: Graph<Node = N, Cost = C>,
    {
        let table: FxIndexMap<N, C> = dijkstra_all(landmark, |node| graph.successors(node))
            .into_iter()
            .map(|(node, (_, cost))| (node, cost))
            .collect();
        debug!("Landmark reaches {} nodes", table.len());
        table
    }
}
