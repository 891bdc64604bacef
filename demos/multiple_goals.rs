use graph_pathfinding::grid::render_path;
use graph_pathfinding::{AstarSolver, GraphSolver, Grid, GridGraph, Manhattan, Point};

// In this example a path is found to one of two goals on a 3x3 grid with shape
//  ___
// |S G|
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks a goal
// The found path moves to the closest goal, which is the top one.

fn main() {
    env_logger::init();
    let grid = Grid::parse("...\n.#.\n...", |c| c).expect("grid literal is rectangular");
    let graph = GridGraph::builder(&grid)
        .edge_value(|from, to| (*from.value() != '#' && *to.value() != '#').then_some(1_u32))
        .build();
    println!("{}", grid);
    let start = graph.vertex_at(Point::new(0, 0)).unwrap();
    let goals = [Point::new(2, 0), Point::new(2, 2)]
        .into_iter()
        .filter_map(|p| graph.vertex_at(p))
        .collect::<Vec<_>>();
    let (selected_goal, path) = AstarSolver::new(Manhattan::default())
        .get_path_multiple_goals(&graph, &start, &goals)
        .unwrap();
    println!("Selected goal: {:?}\n", graph.point_of(selected_goal));
    println!("Path:");
    for p in graph.points(&path) {
        println!("{}", p);
    }
    println!("{}", render_path(&grid, &path, |v| graph.point_of(*v), 'o'));
}
