use graph_pathfinding::{BfsSolver, DiGraph, DijkstraSolver, GraphSolver};

// Graphs do not need to come from a grid. Here the vertices are states of the classic water jug
// puzzle: a 3 and a 5 litre jug, where the goal is to measure exactly 4 litres. States are
// interned, so the same pair of fill levels always maps to the same vertex. Pouring costs the
// amount of water moved, filling and emptying cost one.

const CAPACITY: (u32, u32) = (3, 5);

fn moves((a, b): (u32, u32)) -> Vec<((u32, u32), u32)> {
    let pour_ab = a.min(CAPACITY.1 - b);
    let pour_ba = b.min(CAPACITY.0 - a);
    vec![
        ((CAPACITY.0, b), 1),
        ((a, CAPACITY.1), 1),
        ((0, b), 1),
        ((a, 0), 1),
        ((a - pour_ab, b + pour_ab), pour_ab.max(1)),
        ((a + pour_ba, b - pour_ba), pour_ba.max(1)),
    ]
}

fn main() {
    env_logger::init();
    let mut graph: DiGraph<(u32, u32), u32> = DiGraph::new();
    let start = graph.intern((0, 0));
    let mut frontier = vec![(0, 0)];
    while let Some(state) = frontier.pop() {
        let from = graph.intern(state);
        for (next, cost) in moves(state) {
            if next == state {
                continue;
            }
            if graph.lookup(&next).is_none() {
                frontier.push(next);
            }
            let to = graph.intern(next);
            graph.add_edge(from, to, cost);
        }
    }
    graph.generate_components();
    println!(
        "{} states, {} moves",
        graph.vertex_count(),
        graph.edge_count()
    );

    let goals = graph
        .vertex_ids()
        .filter(|&v| graph.vertex(v).is_some_and(|&(a, b)| a == 4 || b == 4))
        .collect::<Vec<_>>();
    for (name, found) in [
        ("Fewest moves", BfsSolver.get_path_multiple_goals(&graph, &start, &goals)),
        ("Least effort", DijkstraSolver.get_path_multiple_goals(&graph, &start, &goals)),
    ] {
        match found {
            Some((_, path)) => {
                let cost = DijkstraSolver.get_path_cost(&graph, &path).unwrap_or_default();
                println!("{} ({} moves, cost {}):", name, path.len() - 1, cost);
                for v in path {
                    println!("  {:?}", graph.vertex(v));
                }
            }
            None => println!("{}: no solution", name),
        }
    }
}
