use crate::{astar::astar, graph::Graph};
use log::info;
use num_traits::Zero;

pub mod alt;
pub mod astar;
pub mod bfs;
pub mod dijkstra;
pub mod landmarks;

/// Estimate of the remaining cost between two nodes of `G`. Must never overestimate the true
/// cost for searches to return optimal paths. Implemented for plain closures.
pub trait Heuristic<G: Graph> {
    fn estimate(&self, graph: &G, from: &G::Node, to: &G::Node) -> G::Cost;
}

impl<G, F> Heuristic<G> for F
where
    G: Graph,
    F: Fn(&G, &G::Node, &G::Node) -> G::Cost,
{
    fn estimate(&self, graph: &G, from: &G::Node, to: &G::Node) -> G::Cost {
        self(graph, from, to)
    }
}

/// The heuristic of uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<G: Graph> Heuristic<G> for ZeroHeuristic {
    fn estimate(&self, _: &G, _: &G::Node, _: &G::Node) -> G::Cost {
        Zero::zero()
    }
}

pub trait GraphSolver<G: Graph> {
    fn heuristic(&self, graph: &G, from: &G::Node, to: &G::Node) -> G::Cost;

    /// Runs the underlying search from `start` until `success` holds. Best-first A* unless a
    /// solver replaces it.
    fn search<FH, FS>(
        &self,
        graph: &G,
        start: &G::Node,
        heuristic: FH,
        success: FS,
    ) -> Option<(Vec<G::Node>, G::Cost)>
    where
        FH: FnMut(&G::Node) -> G::Cost,
        FS: FnMut(&G::Node) -> bool,
    {
        astar(start, |node| graph.successors(node), heuristic, success)
    }

    /// Computes a path from start to goal together with its cost. Returns [None] if the goal
    /// cannot be reached.
    fn get_path_single_goal_with_cost(
        &self,
        graph: &G,
        start: &G::Node,
        goal: &G::Node,
    ) -> Option<(Vec<G::Node>, G::Cost)> {
        // Check if start and goal are on the same connected component.
        if graph.unreachable(start, goal) {
            info!("{:?} is not reachable from {:?}", goal, start);
            return None;
        }
        self.search(
            graph,
            start,
            |node| self.heuristic(graph, node, goal),
            |node| node == goal,
        )
    }

    /// Computes a path from start to goal, both included.
    fn get_path_single_goal(
        &self,
        graph: &G,
        start: &G::Node,
        goal: &G::Node,
    ) -> Option<Vec<G::Node>> {
        self.get_path_single_goal_with_cost(graph, start, goal)
            .map(|(path, _)| path)
    }

    /// Like [get_path_single_goal](Self::get_path_single_goal), but signals a missing path
    /// with an empty [Vec].
    fn path(&self, graph: &G, start: &G::Node, end: &G::Node) -> Vec<G::Node> {
        self.get_path_single_goal(graph, start, end)
            .unwrap_or_default()
    }

    /// Computes a path from the start to one of the given goals and returns the selected goal
    /// in addition to the found path. The heuristic value of a node is its estimate to the
    /// closest goal.
    fn get_path_multiple_goals(
        &self,
        graph: &G,
        start: &G::Node,
        goals: &[G::Node],
    ) -> Option<(G::Node, Vec<G::Node>)> {
        if goals.iter().all(|goal| graph.unreachable(start, goal)) {
            info!("None of {:?} is reachable from {:?}", goals, start);
            return None;
        }
        let result = self.search(
            graph,
            start,
            |node| {
                goals
                    .iter()
                    .map(|goal| self.heuristic(graph, node, goal))
                    .min()
                    .unwrap_or_else(Zero::zero)
            },
            |node| goals.contains(node),
        );
        result.and_then(|(path, _)| path.last().cloned().map(|goal| (goal, path)))
    }

    /// Total edge weight of `path`, [None] if it does not follow the edges of `graph`.
    fn get_path_cost(&self, graph: &G, path: &[G::Node]) -> Option<G::Cost> {
        graph.path_cost(path)
    }
}
