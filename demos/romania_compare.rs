//! Compares greedy, uniform-cost and A* on the Romania road map.
//!
//! Run with: `cargo run --example romania_compare`

use wayfind::{astar_search, greedy_search, uniform_cost_search, RouteProblem, WeightedGraph};

fn romania() -> WeightedGraph {
    let mut g = WeightedGraph::undirected();

    for &(a, b, cost) in &[
        ("Arad", "Zerind", 75.0),
        ("Arad", "Sibiu", 140.0),
        ("Arad", "Timisoara", 118.0),
        ("Bucharest", "Urziceni", 85.0),
        ("Bucharest", "Pitesti", 101.0),
        ("Bucharest", "Giurgiu", 90.0),
        ("Bucharest", "Fagaras", 211.0),
        ("Craiova", "Drobeta", 120.0),
        ("Craiova", "Rimnicu", 146.0),
        ("Craiova", "Pitesti", 138.0),
        ("Drobeta", "Mehadia", 75.0),
        ("Eforie", "Hirsova", 86.0),
        ("Fagaras", "Sibiu", 99.0),
        ("Hirsova", "Urziceni", 98.0),
        ("Iasi", "Vaslui", 92.0),
        ("Iasi", "Neamt", 87.0),
        ("Lugoj", "Timisoara", 111.0),
        ("Lugoj", "Mehadia", 70.0),
        ("Oradea", "Zerind", 71.0),
        ("Oradea", "Sibiu", 151.0),
        ("Pitesti", "Rimnicu", 97.0),
        ("Rimnicu", "Sibiu", 80.0),
        ("Urziceni", "Vaslui", 142.0),
    ] {
        g.connect(a, b, cost);
    }

    for &(name, x, y) in &[
        ("Arad", 91.0, 492.0),
        ("Bucharest", 400.0, 327.0),
        ("Craiova", 253.0, 288.0),
        ("Drobeta", 165.0, 299.0),
        ("Eforie", 562.0, 293.0),
        ("Fagaras", 305.0, 449.0),
        ("Giurgiu", 375.0, 270.0),
        ("Hirsova", 534.0, 350.0),
        ("Iasi", 473.0, 506.0),
        ("Lugoj", 165.0, 379.0),
        ("Mehadia", 168.0, 339.0),
        ("Neamt", 406.0, 537.0),
        ("Oradea", 131.0, 571.0),
        ("Pitesti", 320.0, 368.0),
        ("Rimnicu", 233.0, 410.0),
        ("Sibiu", 207.0, 457.0),
        ("Timisoara", 94.0, 410.0),
        ("Urziceni", 456.0, 350.0),
        ("Vaslui", 509.0, 444.0),
        ("Zerind", 108.0, 531.0),
    ] {
        g.set_location(name, (x, y));
    }

    g
}

fn main() {
    let map = romania();
    let problem = RouteProblem::new(&map, "Arad", "Bucharest");

    println!("Arad -> Bucharest\n");
    for (name, result) in [
        ("greedy", greedy_search(&problem)),
        ("uniform-cost", uniform_cost_search(&problem)),
        ("A*", astar_search(&problem)),
    ] {
        match result {
            Some(result) => println!(
                "{name:>12}: cost {:>5.0}  expanded {:>2}  {}",
                result.path_cost(),
                result.metrics.expanded_nodes,
                result.path().join(" - "),
            ),
            None => println!("{name:>12}: no route"),
        }
    }
}
