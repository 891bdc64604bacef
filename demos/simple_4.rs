use graph_pathfinding::grid::render_path;
use graph_pathfinding::{AstarSolver, GraphSolver, Grid, GridGraph, Manhattan, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let grid = Grid::parse("...\n.#.\n...", |c| c).expect("grid literal is rectangular");
    let graph = GridGraph::builder(&grid)
        .edge_value(|from, to| (*from.value() != '#' && *to.value() != '#').then_some(1_u32))
        .build();
    println!("{}", grid);
    let start = graph.vertex_at(Point::new(0, 0)).unwrap();
    let end = graph.vertex_at(Point::new(2, 2)).unwrap();
    let solver = AstarSolver::new(Manhattan::default());
    let (path, cost) = solver
        .get_path_single_goal_with_cost(&graph, &start, &end)
        .unwrap();
    println!("Path of cost {}:", cost);
    for p in graph.points(&path) {
        println!("{}", p);
    }
    println!("{}", render_path(&grid, &path, |v| graph.point_of(*v), 'o'));
}
