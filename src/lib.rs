//! # graph_pathfinding
//!
//! Shortest paths over arbitrary weighted graphs. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) (optionally weighted),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and breadth-first search
//! on top of one generic search core, plus a builder that turns a rectangular grid of cells
//! into a directed graph under a pluggable edge rule.
//!
//! Vertices live in an arena ([DiGraph]) and are addressed by dense [VertexId]s. Anything
//! implementing [Graph] can be searched, so callers can also bring their own implicit graphs.
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! A missing path is never an error: the search functions return [None] and
//! [GraphSolver::path] returns an empty [Vec].
pub mod astar;
pub mod bfs;
pub mod graph;
pub mod grid;
pub mod grid_graph;
pub mod solver;

use core::fmt::Debug;
use num_traits::{NumCast, ToPrimitive, Zero};
use std::ops::Sub;

pub use graph::{DiGraph, Graph, VertexId};
pub use grid::{Direction, Grid, GridCell, GridError, Point, CARDINALS};
pub use grid_graph::{GridGraph, GridGraphBuilder, Manhattan};
pub use solver::{
    alt::AltSolver, astar::AstarSolver, bfs::BfsSolver, dijkstra::DijkstraSolver, GraphSolver,
    Heuristic, ZeroHeuristic,
};

/// Weight used by the default grid edge rule.
pub const DEFAULT_EDGE_WEIGHT: u32 = 1;
/// Inline capacity of adjacency lists and successor buffers. Four covers every grid vertex.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Numeric edge weight. Implemented for every primitive integer; weights must be non-negative
/// for the search results to be optimal, which is not checked.
pub trait Cost: Zero + Sub<Output = Self> + Ord + Copy + NumCast + Debug {}

impl<T> Cost for T where T: Zero + Sub<Output = T> + Ord + Copy + NumCast + Debug {}

/// Multiplies a cost by `factor`, truncating towards zero like the integer heuristics it scales.
/// Falls back to the unscaled cost if the product cannot be represented.
pub fn scale_cost<C: Cost>(cost: C, factor: f32) -> C {
    if factor == 1.0 {
        return cost;
    }
    cost.to_f64()
        .and_then(|c| <C as NumCast>::from(c * factor as f64))
        .unwrap_or(cost)
}
