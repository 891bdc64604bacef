use core::convert::Infallible;
use grid_util::grid::{Grid as ValueGrid, SimpleGrid};
use log::debug;
use num_traits::{NumCast, Zero};

use crate::graph::{Adjacency, DiGraph, Graph, VertexId};
use crate::grid::{cell_index, cell_point, Grid, GridCell, Point};
use crate::solver::Heuristic;
use crate::{Cost, DEFAULT_EDGE_WEIGHT};

/// Vertex factory used when none is given: the position of the cell.
pub type DefaultVertex<T> = fn(GridCell<'_, T>) -> Point;
/// Edge rule used when none is given: every adjacency costs [DEFAULT_EDGE_WEIGHT].
pub type DefaultEdge<T> = fn(GridCell<'_, T>, GridCell<'_, T>) -> Option<u32>;

fn cell_position<T: Copy>(cell: GridCell<'_, T>) -> Point {
    cell.point()
}

fn unit_edge<T: Copy>(_: GridCell<'_, T>, _: GridCell<'_, T>) -> Option<u32> {
    Some(DEFAULT_EDGE_WEIGHT)
}

/// Graph with one vertex per cell of a grid. The vertex of a cell has the cell's index as
/// [VertexId], so positions and vertices convert without lookups.
///
/// Vertices added to [graph](Self::graph) after building have no position: they are never
/// returned by [vertex_at](Self::vertex_at) and [point_of](Self::point_of) gives [None] for them.
#[derive(Clone, Debug)]
pub struct GridGraph<V, C> {
    pub graph: DiGraph<V, C>,
    /// Shape of the source grid, the single source of the position/vertex mapping.
    layout: SimpleGrid<()>,
}

impl<V, C: Cost> GridGraph<V, C> {
    pub fn width(&self) -> usize {
        self.layout.width()
    }

    pub fn height(&self) -> usize {
        self.layout.height()
    }

    pub fn vertex_at(&self, p: Point) -> Option<VertexId> {
        cell_index(&self.layout, p).map(VertexId)
    }

    pub fn point_of(&self, id: VertexId) -> Option<Point> {
        cell_point(&self.layout, id.index())
    }

    pub fn payload(&self, id: VertexId) -> Option<&V> {
        self.graph.vertex(id)
    }

    pub fn payload_at(&self, p: Point) -> Option<&V> {
        self.vertex_at(p).and_then(|id| self.graph.vertex(id))
    }

    /// Maps a path of vertices back to grid positions, skipping vertices without one.
    pub fn points(&self, path: &[VertexId]) -> Vec<Point> {
        path.iter().filter_map(|&id| self.point_of(id)).collect()
    }
}

impl GridGraph<Point, u32> {
    /// Connects every pair of orthogonally adjacent cells in both directions with weight
    /// [DEFAULT_EDGE_WEIGHT].
    pub fn from_grid<T: Copy>(grid: &Grid<T>) -> GridGraph<Point, u32> {
        GridGraphBuilder::new(grid).build()
    }

    pub fn builder<T: Copy>(grid: &Grid<T>) -> GridGraphBuilder<'_, T, DefaultVertex<T>, DefaultEdge<T>> {
        GridGraphBuilder::new(grid)
    }
}

impl<V, C: Cost> Graph for GridGraph<V, C> {
    type Node = VertexId;
    type Cost = C;
    type Successors = Adjacency<C>;

    fn successors(&self, node: &VertexId) -> Adjacency<C> {
        self.graph.successors(node)
    }

    fn edge_cost(&self, from: &VertexId, to: &VertexId) -> Option<C> {
        self.graph.edge_cost(from, to)
    }

    fn unreachable(&self, start: &VertexId, goal: &VertexId) -> bool {
        self.graph.unreachable(start, goal)
    }
}

/// Turns a [Grid] into a [GridGraph].
///
/// The vertex factory is called once per cell, in row-major order. The edge rule is called once
/// per ordered pair of orthogonal neighbours, source first; returning [None] leaves that
/// direction out, so one-way connections are expressed by answering differently for the two
/// directions.
pub struct GridGraphBuilder<'g, T: Copy, FV, FE> {
    grid: &'g Grid<T>,
    vertex_factory: FV,
    edge_value: FE,
}

impl<'g, T: Copy> GridGraphBuilder<'g, T, DefaultVertex<T>, DefaultEdge<T>> {
    pub fn new(grid: &'g Grid<T>) -> Self {
        GridGraphBuilder {
            grid,
            vertex_factory: cell_position::<T>,
            edge_value: unit_edge::<T>,
        }
    }
}

impl<'g, T: Copy, FV, FE> GridGraphBuilder<'g, T, FV, FE> {
    pub fn vertex_factory<V, F>(self, vertex_factory: F) -> GridGraphBuilder<'g, T, F, FE>
    where
        F: FnMut(GridCell<'_, T>) -> V,
    {
        GridGraphBuilder {
            grid: self.grid,
            vertex_factory,
            edge_value: self.edge_value,
        }
    }

    /// Sets the edge rule: the weight of the edge from the first cell to the second, or [None]
    /// to leave it out.
    pub fn edge_value<C, F>(self, edge_value: F) -> GridGraphBuilder<'g, T, FV, F>
    where
        F: FnMut(GridCell<'_, T>, GridCell<'_, T>) -> Option<C>,
    {
        GridGraphBuilder {
            grid: self.grid,
            vertex_factory: self.vertex_factory,
            edge_value,
        }
    }

    /// Sets a fallible edge rule, to be used with [try_build](Self::try_build).
    pub fn try_edge_value<C, E, F>(self, edge_value: F) -> GridGraphBuilder<'g, T, FV, F>
    where
        F: FnMut(GridCell<'_, T>, GridCell<'_, T>) -> Result<Option<C>, E>,
    {
        GridGraphBuilder {
            grid: self.grid,
            vertex_factory: self.vertex_factory,
            edge_value,
        }
    }

    pub fn build<V, C>(self) -> GridGraph<V, C>
    where
        C: Cost,
        FV: FnMut(GridCell<'_, T>) -> V,
        FE: FnMut(GridCell<'_, T>, GridCell<'_, T>) -> Option<C>,
    {
        let mut edge_value = self.edge_value;
        let linked = link(self.grid, self.vertex_factory, |from, to| {
            Ok::<_, Infallible>(edge_value(from, to))
        });
        match linked {
            Ok(graph) => graph,
            Err(never) => match never {},
        }
    }

    /// Builds the graph with a fallible edge rule. The first error aborts construction and is
    /// returned unchanged.
    pub fn try_build<V, C, E>(self) -> Result<GridGraph<V, C>, E>
    where
        C: Cost,
        FV: FnMut(GridCell<'_, T>) -> V,
        FE: FnMut(GridCell<'_, T>, GridCell<'_, T>) -> Result<Option<C>, E>,
    {
        link(self.grid, self.vertex_factory, self.edge_value)
    }
}

fn link<T: Copy, V, C, E, FV, FE>(
    grid: &Grid<T>,
    mut vertex_factory: FV,
    mut edge_value: FE,
) -> Result<GridGraph<V, C>, E>
where
    C: Cost,
    FV: FnMut(GridCell<'_, T>) -> V,
    FE: FnMut(GridCell<'_, T>, GridCell<'_, T>) -> Result<Option<C>, E>,
{
    let mut graph = DiGraph::with_capacity(grid.len());
    for cell in grid.cells() {
        graph.add_vertex(vertex_factory(cell));
    }
    for cell in grid.cells() {
        for (_, neighbour) in cell.neighbours() {
            if let Some(weight) = edge_value(cell, neighbour)? {
                graph.add_edge(VertexId(cell.index()), VertexId(neighbour.index()), weight);
            }
        }
    }
    graph.generate_components();
    debug!(
        "Built {}x{} grid graph with {} edges",
        grid.width(),
        grid.height(),
        graph.edge_count()
    );
    Ok(GridGraph {
        graph,
        layout: SimpleGrid::new(grid.width(), grid.height(), ()),
    })
}

/// Manhattan distance between the cells of two vertices times `step_cost`. Admissible as long
/// as no edge is cheaper than `step_cost`. Vertices without a cell are estimated at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Manhattan {
    pub step_cost: u32,
}

impl Manhattan {
    pub fn new(step_cost: u32) -> Manhattan {
        Manhattan { step_cost }
    }
}

impl Default for Manhattan {
    fn default() -> Manhattan {
        Manhattan {
            step_cost: DEFAULT_EDGE_WEIGHT,
        }
    }
}

impl<V, C: Cost> Heuristic<GridGraph<V, C>> for Manhattan {
    fn estimate(&self, graph: &GridGraph<V, C>, from: &VertexId, to: &VertexId) -> C {
        let (Some(a), Some(b)) = (graph.point_of(*from), graph.point_of(*to)) else {
            return Zero::zero();
        };
        let steps = a.manhattan_distance(&b) as u64;
        <C as NumCast>::from(steps * self.step_cost as u64).unwrap_or_else(Zero::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{bfs::BfsSolver, dijkstra::DijkstraSolver, GraphSolver};
    use crate::AstarSolver;

    #[test]
    fn one_vertex_per_cell() {
        let grid = Grid::new(4, 3, 0_u8);
        let graph = GridGraph::from_grid(&grid);
        assert_eq!(graph.graph.vertex_count(), 12);
        // 2 * (3 * 3 + 4 * 2) directed edges
        assert_eq!(graph.graph.edge_count(), 34);
        for cell in grid.cells() {
            let id = graph.vertex_at(cell.point()).unwrap();
            assert_eq!(graph.payload(id), Some(&cell.point()));
            assert_eq!(graph.point_of(id), Some(cell.point()));
        }
        assert_eq!(graph.vertex_at(Point::new(4, 0)), None);
    }

    /// Positions and vertices only map onto each other for grid cells, also after vertices are
    /// added to the inner graph by hand.
    #[test]
    fn extra_vertices_have_no_position() {
        let grid = Grid::new(3, 2, '.');
        let mut graph = GridGraph::from_grid(&grid);
        let extra = graph.graph.add_vertex(Point::new(1, 1));
        let corner = graph.vertex_at(Point::new(2, 1)).unwrap();
        graph.graph.add_undirected_edge(corner, extra, 1);
        assert_eq!((graph.width(), graph.height()), (3, 2));
        assert_eq!(extra.index(), 6);
        assert_eq!(graph.point_of(extra), None);
        assert_eq!(graph.vertex_at(Point::new(0, 2)), None);
        for id in graph.graph.vertex_ids().filter(|&id| id != extra) {
            let p = graph.point_of(id).unwrap();
            assert_eq!(graph.vertex_at(p), Some(id));
        }
        assert_eq!(graph.points(&[corner, extra]), vec![Point::new(2, 1)]);
        // No position, no distance.
        assert_eq!(Manhattan::default().estimate(&graph, &extra, &corner), 0_u32);
        let start = graph.vertex_at(Point::new(0, 0)).unwrap();
        let (path, cost) = AstarSolver::new(Manhattan::default())
            .get_path_single_goal_with_cost(&graph, &start, &extra)
            .unwrap();
        assert_eq!(path.last(), Some(&extra));
        assert_eq!(cost, 4);
    }

    #[test]
    fn custom_vertex_factory() {
        let grid = Grid::parse("ab\ncd", |c| c).unwrap();
        let graph = GridGraph::builder(&grid)
            .vertex_factory(|cell| (*cell.value(), cell.index()))
            .build();
        assert_eq!(graph.payload_at(Point::new(1, 1)), Some(&('d', 3)));
    }

    /// Asserts that the two corners are connected around the wall on a 4-grid.
    #[test]
    fn wall_detour_in_four_hops() {
        // |S  |
        // | # |
        // |  G|
        let grid = Grid::parse("...\n.#.\n...", |c| c).unwrap();
        let graph = GridGraph::builder(&grid)
            .edge_value(|_, to| (*to.value() != '#').then_some(1_u32))
            .build();
        let start = graph.vertex_at(Point::new(0, 0)).unwrap();
        let end = graph.vertex_at(Point::new(2, 2)).unwrap();
        let astar = AstarSolver::new(Manhattan::default()).path(&graph, &start, &end);
        let dijkstra = DijkstraSolver.path(&graph, &start, &end);
        let bfs = BfsSolver.path(&graph, &start, &end);
        for path in [&astar, &dijkstra, &bfs] {
            assert_eq!(path.len(), 5);
            assert_eq!(graph.path_cost(path), Some(4));
        }
    }

    #[test]
    fn one_way_tiles() {
        // 'v' can only be entered from above and only be left downwards.
        let grid = Grid::parse("...\n#v#\n...", |c| c).unwrap();
        let graph = GridGraph::builder(&grid)
            .edge_value(|from, to| {
                let down = to.y() > from.y();
                match (*from.value(), *to.value()) {
                    (_, '#') | ('#', _) => None,
                    ('v', _) if !down => None,
                    (_, 'v') if !down => None,
                    _ => Some(1_u32),
                }
            })
            .build();
        let top = graph.vertex_at(Point::new(0, 0)).unwrap();
        let bottom = graph.vertex_at(Point::new(0, 2)).unwrap();
        let solver = AstarSolver::new(Manhattan::default());
        let down = solver.path(&graph, &top, &bottom);
        assert_eq!(
            graph.points(&down),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(0, 2)
            ]
        );
        // The reverse direction is open on the way down but excluded on the way up.
        assert!(solver.path(&graph, &bottom, &top).is_empty());
        assert!(DijkstraSolver.path(&graph, &bottom, &top).is_empty());
        assert!(BfsSolver.path(&graph, &bottom, &top).is_empty());
    }

    #[test]
    fn disconnected_components() {
        let grid = Grid::parse("..#..\n..#..", |c| c).unwrap();
        let graph = GridGraph::builder(&grid)
            .edge_value(|from, to| {
                (*from.value() != '#' && *to.value() != '#').then_some(1_u32)
            })
            .build();
        let start = graph.vertex_at(Point::new(0, 0)).unwrap();
        let end = graph.vertex_at(Point::new(4, 1)).unwrap();
        assert!(graph.unreachable(&start, &end));
        assert!(AstarSolver::new(Manhattan::default())
            .path(&graph, &start, &end)
            .is_empty());
        assert!(DijkstraSolver.path(&graph, &start, &end).is_empty());
        assert!(BfsSolver.path(&graph, &start, &end).is_empty());
    }

    #[derive(Debug, PartialEq)]
    struct BadTile(char);

    #[test]
    fn failing_edge_rule_aborts() {
        let grid = Grid::parse("..\n.?", |c| c).unwrap();
        let mut calls = 0;
        let result = GridGraph::builder(&grid)
            .try_edge_value(|_, to| {
                calls += 1;
                match *to.value() {
                    '.' => Ok(Some(1_u32)),
                    c => Err(BadTile(c)),
                }
            })
            .try_build();
        assert_eq!(result.unwrap_err(), BadTile('?'));
        // (0, 0) -> north, east, then (1, 0) -> north hits the bad tile.
        assert_eq!(calls, 3);
    }

    #[test]
    fn weighted_tiles() {
        // Digits are the cost of entering a tile.
        let grid = Grid::parse("1911\n1911\n1111", |c| c.to_digit(10).unwrap_or(1)).unwrap();
        let graph = GridGraph::builder(&grid)
            .edge_value(|_, to| Some(*to.value()))
            .build();
        let start = graph.vertex_at(Point::new(0, 0)).unwrap();
        let end = graph.vertex_at(Point::new(3, 0)).unwrap();
        let (path, cost) = AstarSolver::new(Manhattan::default())
            .get_path_single_goal_with_cost(&graph, &start, &end)
            .unwrap();
        assert_eq!(cost, 7);
        assert_eq!(path.len(), 8);
    }
}
