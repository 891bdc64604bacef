use num_traits::Zero;

use crate::{bfs::bfs, graph::Graph, solver::GraphSolver};

/// Breadth-first search. Treats every edge as a single step, so the returned path has the fewest
/// edges rather than the lowest weight. The reported cost is the weight along that path.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl<G: Graph> GraphSolver<G> for BfsSolver {
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
        bfs(start, |node| graph.successors(node), success).map(|path| {
            let cost = graph.path_cost(&path).unwrap_or_else(Zero::zero);
            (path, cost)
        })
    }
}
