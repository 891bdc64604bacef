use graph_pathfinding::grid::render_path;
use graph_pathfinding::{AstarSolver, GraphSolver, Grid, GridGraph, Manhattan, Point};

// The heuristic_factor can be set to scale the heuristic, causing nodes that are closer to the
// goal (ignoring obstacles) to be evaluated quicker than in normal operation. This is called
// Weighted A* and it can speed up the algorithm in certain scenarios, at the price of paths that
// may be up to heuristic_factor times as expensive as the optimal one.

fn fill(grid: &mut Grid<char>, x: i32, y: i32, w: i32, h: i32) {
    for j in y..y + h {
        for i in x..x + w {
            grid.set(Point::new(i, j), '#');
        }
    }
}

fn main() {
    env_logger::init();
    const N: i32 = 30;
    let mut grid = Grid::new(N as usize, N as usize, '.');
    fill(&mut grid, 8, 8, 8, 8);
    fill(&mut grid, 0, 3, 6, 6);
    fill(&mut grid, 10, 0, 6, 6);
    let graph = GridGraph::builder(&grid)
        .edge_value(|from, to| (*from.value() != '#' && *to.value() != '#').then_some(1_u32))
        .build();
    let start = graph.vertex_at(Point::new(1, 1)).unwrap();
    let end = graph.vertex_at(Point::new(N - 3, N - 3)).unwrap();

    for factor in [1.0, 1.3, 3.0] {
        let solver = AstarSolver::weighted(Manhattan::default(), factor);
        let (path, cost) = solver
            .get_path_single_goal_with_cost(&graph, &start, &end)
            .unwrap();
        println!("heuristic_factor {}: cost {}", factor, cost);
        println!("{}", render_path(&grid, &path, |v| graph.point_of(*v), 'o'));
    }
}
