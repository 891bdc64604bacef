use graph_pathfinding::grid::render_path;
use graph_pathfinding::{AstarSolver, GraphSolver, Grid, GridCell, GridGraph, Manhattan, Point};

// Arrow tiles can only be left in the direction they point, and only be entered along it.
// Going from the right side to the left side therefore has to detour through the bottom rows:
//
// ...>>>..
// ##.>>>.#
// ........
// ......E.

fn edge(from: GridCell<'_, char>, to: GridCell<'_, char>) -> Option<u32> {
    let against_arrow = to.x() < from.x();
    match (*from.value(), *to.value()) {
        (_, '#') | ('#', _) => None,
        ('>', _) | (_, '>') if against_arrow => None,
        _ => Some(1),
    }
}

fn main() {
    env_logger::init();
    let grid = Grid::parse("...>>>..\n##.>>>.#\n........\n........", |c| c)
        .expect("grid literal is rectangular");
    let graph = GridGraph::builder(&grid).edge_value(edge).build();
    println!("{}", grid);

    let solver = AstarSolver::new(Manhattan::default());
    let left = graph.vertex_at(Point::new(0, 0)).unwrap();
    let right = graph.vertex_at(Point::new(7, 0)).unwrap();
    for (start, end) in [(left, right), (right, left)] {
        let path = solver.path(&graph, &start, &end);
        println!(
            "{:?} -> {:?}: {} steps",
            graph.point_of(start),
            graph.point_of(end),
            path.len().saturating_sub(1)
        );
        println!("{}", render_path(&grid, &path, |v| graph.point_of(*v), 'o'));
    }
}
