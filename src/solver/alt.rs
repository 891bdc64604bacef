use crate::solver::landmarks::LandmarkMap;
use crate::{graph::Graph, solver::GraphSolver, Cost};

use std::hash::Hash;

/// A* with landmarks and the triangle inequality (ALT). Needs a preprocessing pass of one full
/// Dijkstra per landmark, after which the heuristic works on graphs without any embedding.
#[derive(Clone, Debug)]
pub struct AltSolver<N, C> {
    landmark_map: LandmarkMap<N, C>,
}

impl<N, C> AltSolver<N, C> {
    pub fn new_from_landmark_map(landmark_map: LandmarkMap<N, C>) -> AltSolver<N, C> {
        AltSolver { landmark_map }
    }

    pub fn landmark_map(&self) -> &LandmarkMap<N, C> {
        &self.landmark_map
    }
}

impl<N, C> AltSolver<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
{
    pub fn new_from_landmarks<G>(landmarks: Vec<N>, graph: &G) -> AltSolver<N, C>
    where
        G: Graph<Node = N, Cost = C>,
    {
        AltSolver {
            landmark_map: LandmarkMap::new_from_landmarks(landmarks, graph),
        }
    }

    pub fn new_greedy<G>(initial_landmark: N, landmark_count: usize, graph: &G) -> AltSolver<N, C>
    where
        G: Graph<Node = N, Cost = C>,
    {
        AltSolver {
            landmark_map: LandmarkMap::new_minmax_greedy(initial_landmark, landmark_count, graph),
        }
    }
}

impl<N, C, G> GraphSolver<G> for AltSolver<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
    G: Graph<Node = N, Cost = C>,
{
    fn heuristic(&self, _: &G, p1: &G::Node, p2: &G::Node) -> G::Cost {
        self.landmark_map.triangle_heuristic(p1, p2)
    }
}
