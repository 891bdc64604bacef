use num_traits::Zero;

use crate::{astar::dijkstra, graph::Graph, solver::GraphSolver};

/// Uniform-cost search, for graphs without a structure to derive an estimate from.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl<G: Graph> GraphSolver<G> for DijkstraSolver {
    fn heuristic(&self, _: &G, _: &G::Node, _: &G::Node) -> G::Cost {
        Zero::zero()
    }

    fn search<FH, FS>(
        &self,
        graph: &G,
        start: &G::Node,
        _: FH,
        success: FS,
    ) -> Option<(Vec<G::Node>, G::Cost)>
    where
        FH: FnMut(&G::Node) -> G::Cost,
        FS: FnMut(&G::Node) -> bool,
    {
        dijkstra(start, |node| graph.successors(node), success)
    }
}
