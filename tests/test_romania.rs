//! Route planning on the classic Romania road map.

use wayfind::{astar_search, greedy_search, uniform_cost_search, RouteProblem, WeightedGraph};

/// The Romania road map with straight-line node positions.
fn romania() -> WeightedGraph {
    let mut g = WeightedGraph::undirected();

    g.connect("Arad", "Zerind", 75.0);
    g.connect("Arad", "Sibiu", 140.0);
    g.connect("Arad", "Timisoara", 118.0);
    g.connect("Bucharest", "Urziceni", 85.0);
    g.connect("Bucharest", "Pitesti", 101.0);
    g.connect("Bucharest", "Giurgiu", 90.0);
    g.connect("Bucharest", "Fagaras", 211.0);
    g.connect("Craiova", "Drobeta", 120.0);
    g.connect("Craiova", "Rimnicu", 146.0);
    g.connect("Craiova", "Pitesti", 138.0);
    g.connect("Drobeta", "Mehadia", 75.0);
    g.connect("Eforie", "Hirsova", 86.0);
    g.connect("Fagaras", "Sibiu", 99.0);
    g.connect("Hirsova", "Urziceni", 98.0);
    g.connect("Iasi", "Vaslui", 92.0);
    g.connect("Iasi", "Neamt", 87.0);
    g.connect("Lugoj", "Timisoara", 111.0);
    g.connect("Lugoj", "Mehadia", 70.0);
    g.connect("Oradea", "Zerind", 71.0);
    g.connect("Oradea", "Sibiu", 151.0);
    g.connect("Pitesti", "Rimnicu", 97.0);
    g.connect("Rimnicu", "Sibiu", 80.0);
    g.connect("Urziceni", "Vaslui", 142.0);

    g.set_location("Arad", (91.0, 492.0));
    g.set_location("Bucharest", (400.0, 327.0));
    g.set_location("Craiova", (253.0, 288.0));
    g.set_location("Drobeta", (165.0, 299.0));
    g.set_location("Eforie", (562.0, 293.0));
    g.set_location("Fagaras", (305.0, 449.0));
    g.set_location("Giurgiu", (375.0, 270.0));
    g.set_location("Hirsova", (534.0, 350.0));
    g.set_location("Iasi", (473.0, 506.0));
    g.set_location("Lugoj", (165.0, 379.0));
    g.set_location("Mehadia", (168.0, 339.0));
    g.set_location("Neamt", (406.0, 537.0));
    g.set_location("Oradea", (131.0, 571.0));
    g.set_location("Pitesti", (320.0, 368.0));
    g.set_location("Rimnicu", (233.0, 410.0));
    g.set_location("Sibiu", (207.0, 457.0));
    g.set_location("Timisoara", (94.0, 410.0));
    g.set_location("Urziceni", (456.0, 350.0));
    g.set_location("Vaslui", (509.0, 444.0));
    g.set_location("Zerind", (108.0, 531.0));

    g
}

#[test]
fn test_astar_finds_the_optimal_route_to_bucharest() {
    let map = romania();
    let problem = RouteProblem::new(&map, "Arad", "Bucharest");
    let result = astar_search(&problem).unwrap();
    assert_eq!(result.path_cost(), 418.0);
    assert_eq!(
        result.path(),
        vec![
            "Arad".to_string(),
            "Sibiu".to_string(),
            "Rimnicu".to_string(),
            "Pitesti".to_string(),
            "Bucharest".to_string(),
        ]
    );
}

#[test]
fn test_uniform_cost_agrees_with_astar() {
    let map = romania();
    let problem = RouteProblem::new(&map, "Arad", "Bucharest");
    let ucs = uniform_cost_search(&problem).unwrap();
    let astar = astar_search(&problem).unwrap();
    assert_eq!(ucs.path_cost(), astar.path_cost());
    assert_eq!(ucs.path(), astar.path());
}

#[test]
fn test_greedy_takes_the_fagaras_shortcut() {
    // Greedy chases the straight-line estimate and ends up on the longer
    // Fagaras road.
    let map = romania();
    let problem = RouteProblem::new(&map, "Arad", "Bucharest");
    let result = greedy_search(&problem).unwrap();
    assert_eq!(
        result.path(),
        vec![
            "Arad".to_string(),
            "Sibiu".to_string(),
            "Fagaras".to_string(),
            "Bucharest".to_string(),
        ]
    );
    assert_eq!(result.path_cost(), 450.0);
}

#[test]
fn test_astar_expands_no_more_than_uniform_cost() {
    let map = romania();
    let problem = RouteProblem::new(&map, "Arad", "Bucharest");
    let ucs = uniform_cost_search(&problem).unwrap();
    let astar = astar_search(&problem).unwrap();
    assert!(astar.metrics.expanded_nodes <= ucs.metrics.expanded_nodes);
}

#[test]
fn test_unreachable_city_has_no_route() {
    let mut map = romania();
    map.connect("Atlantis", "Mu", 1.0);
    let problem = RouteProblem::new(&map, "Arad", "Atlantis");
    assert!(uniform_cost_search(&problem).is_none());
}

#[test]
fn test_route_to_self_costs_nothing() {
    let map = romania();
    let problem = RouteProblem::new(&map, "Arad", "Arad");
    let result = astar_search(&problem).unwrap();
    assert_eq!(result.path_cost(), 0.0);
    assert_eq!(result.path(), vec!["Arad".to_string()]);
    assert_eq!(result.metrics.expanded_nodes, 0);
}
