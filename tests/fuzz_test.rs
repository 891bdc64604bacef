/// Fuzzes the solvers by checking for many random grids that a path is found exactly when the goal
/// is reachable, and that every solver agrees on the cost of the path when it is.
use graph_pathfinding::bfs::bfs_reachable;
use graph_pathfinding::grid::render_path;
use graph_pathfinding::*;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> Grid<char> {
    let mut grid = Grid::new(w, h, '.');
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            if rng.gen_bool(0.4) {
                grid.set(Point::new(x, y), '#');
            }
        }
    }
    grid
}

fn walled_graph(grid: &Grid<char>) -> GridGraph<Point, u32> {
    GridGraph::builder(grid)
        .edge_value(|from, to| (*from.value() != '#' && *to.value() != '#').then_some(1_u32))
        .build()
}

fn visualize_grid(grid: &Grid<char>, path: &[Point], start: &Point, end: &Point) {
    let mut rendered = render_path(grid, path, |p| Some(*p), 'o');
    rendered.set(*start, 'S');
    rendered.set(*end, 'G');
    println!("{}", rendered);
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set(start, '.');
        grid.set(end, '.');
        let graph = walled_graph(&grid);
        let s = graph.vertex_at(start).unwrap();
        let g = graph.vertex_at(end).unwrap();
        let reachable = bfs_reachable(&s, |n| graph.successors(n))
            .iter()
            .any(|(n, _)| *n == g);
        assert_eq!(graph.graph.reachable(s, g), reachable);
        let path = AstarSolver::new(Manhattan::default()).path(&graph, &s, &g);
        // Show the grid if a path is not found
        if path.is_empty() == reachable {
            visualize_grid(&grid, &graph.points(&path), &start, &end);
        }
        assert_eq!(!path.is_empty(), reachable);
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 6;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar = AstarSolver::new(Manhattan::default());
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let graph = walled_graph(&grid);
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let s = graph.vertex_at(start).unwrap();
        let g = graph.vertex_at(end).unwrap();
        let alt = AltSolver::new_greedy(s, 2, &graph);

        let astar_result = astar.get_path_single_goal_with_cost(&graph, &s, &g);
        let dijkstra_result = DijkstraSolver.get_path_single_goal_with_cost(&graph, &s, &g);
        let bfs_result = BfsSolver.get_path_single_goal_with_cost(&graph, &s, &g);
        let alt_result = alt.get_path_single_goal_with_cost(&graph, &s, &g);

        let astar_cost = astar_result.as_ref().map(|(_, c)| *c);
        let dijkstra_cost = dijkstra_result.as_ref().map(|(_, c)| *c);
        if astar_cost != dijkstra_cost {
            println!("Astar: {astar_result:?}\nDijkstra: {dijkstra_result:?}");
            visualize_grid(&grid, &[], &start, &end);
        }
        assert_eq!(astar_cost, dijkstra_cost);
        // Unit weights: fewest hops is also cheapest.
        assert_eq!(bfs_result.as_ref().map(|(_, c)| *c), dijkstra_cost);
        assert_eq!(alt_result.as_ref().map(|(_, c)| *c), dijkstra_cost);

        for (path, cost) in [astar_result, dijkstra_result, bfs_result, alt_result]
            .into_iter()
            .flatten()
        {
            assert_eq!(path.first(), Some(&s));
            assert_eq!(path.last(), Some(&g));
            assert_eq!(path.len() as u32, cost + 1);
            assert_eq!(graph.path_cost(&path), Some(cost));
        }
    }
}

/// One-way tiles never get crossed against their direction.
#[test]
fn fuzz_one_way() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(2);
    let astar = AstarSolver::new(Manhattan::default());
    for _ in 0..N_GRIDS {
        let mut grid = Grid::new(N, N, '.');
        for y in 0..N as i32 {
            for x in 0..N as i32 {
                if rng.gen_bool(0.3) {
                    grid.set(Point::new(x, y), '>');
                }
            }
        }
        let graph = GridGraph::builder(&grid)
            .edge_value(|from, to| {
                let leftwards = to.x() < from.x();
                (!(leftwards && (*from.value() == '>' || *to.value() == '>'))).then_some(1_u32)
            })
            .build();
        let s = graph.vertex_at(Point::new(N as i32 - 1, 0)).unwrap();
        let g = graph.vertex_at(Point::new(0, N as i32 - 1)).unwrap();
        for path in [
            astar.path(&graph, &s, &g),
            DijkstraSolver.path(&graph, &s, &g),
            BfsSolver.path(&graph, &s, &g),
        ] {
            for pair in graph.points(&path).windows(2) {
                let leftwards = pair[1].x < pair[0].x;
                let touches_arrow = grid.get_point(pair[0]) == Some(&'>')
                    || grid.get_point(pair[1]) == Some(&'>');
                assert!(!(leftwards && touches_arrow), "{:?}", pair);
            }
        }
    }
}
