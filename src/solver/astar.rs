use crate::{
    graph::Graph,
    scale_cost,
    solver::{GraphSolver, Heuristic},
};

/// A* guided by a caller supplied [Heuristic].
#[derive(Clone, Debug)]
pub struct AstarSolver<H> {
    pub heuristic: H,
    /// Scales the heuristic. Above 1 this is Weighted A*, which expands fewer nodes but may
    /// return paths that are up to this factor more expensive than optimal.
    pub heuristic_factor: f32,
}

impl<H> AstarSolver<H> {
    pub fn new(heuristic: H) -> AstarSolver<H> {
        AstarSolver {
            heuristic,
            heuristic_factor: 1.0,
        }
    }

    pub fn weighted(heuristic: H, heuristic_factor: f32) -> AstarSolver<H> {
        AstarSolver {
            heuristic,
            heuristic_factor,
        }
    }
}

impl<G, H> GraphSolver<G> for AstarSolver<H>
where
    G: Graph,
    H: Heuristic<G>,
{
    /// Just the estimate times the heuristic factor.
    fn heuristic(&self, graph: &G, from: &G::Node, to: &G::Node) -> G::Cost {
        scale_cost(
            self.heuristic.estimate(graph, from, to),
            self.heuristic_factor,
        )
    }
}
