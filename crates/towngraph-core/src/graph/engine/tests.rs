use super::*;

fn town(name: &str) -> Town {
    Town::new(name)
}

fn graph_with(names: &[&str]) -> Graph {
    let mut graph = Graph::new();
    for name in names {
        graph.add_vertex(town(name));
    }
    graph
}

#[test]
fn test_add_vertex_reports_new_insertions_only() {
    let mut graph = Graph::new();
    assert!(graph.add_vertex(town("Ada, Lovelace")));
    assert!(!graph.add_vertex(town("Ada, Lovelace")));
    assert!(!graph.add_vertex(town("")));
    assert!(!graph.add_vertex(town("  ")));
    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.contains_vertex(&town("Ada, Lovelace")));
}

#[test]
fn test_add_edge_visible_from_both_endpoints() {
    let mut graph = graph_with(&["A", "B"]);
    let road = graph.add_edge(&town("A"), &town("B"), 7, "Main").unwrap();
    assert_eq!(road.name(), "Main");
    assert_eq!(road.weight(), 7);

    assert_eq!(graph.get_edge(&town("B"), &town("A")).unwrap().name(), "Main");
    assert!(graph.contains_edge(&town("A"), &town("B")));
    assert_eq!(graph.edges_of(&town("A")).len(), 1);
    assert_eq!(graph.edges_of(&town("B")).len(), 1);
    assert_eq!(graph.edge_set().len(), 1);
}

#[test]
fn test_add_edge_rejects_invalid_requests() {
    let mut graph = graph_with(&["A", "B"]);

    assert!(matches!(
        graph.add_edge(&town("A"), &town("A"), 1, "Loop"),
        Err(GraphError::SelfLoop { .. })
    ));
    assert!(matches!(
        graph.add_edge(&town("A"), &town("B"), -1, "Back"),
        Err(GraphError::NegativeWeight { weight: -1 })
    ));
    assert!(matches!(
        graph.add_edge(&town("A"), &town("B"), i64::from(u32::MAX) + 1, "Far"),
        Err(GraphError::WeightOutOfRange { .. })
    ));
    assert!(matches!(
        graph.add_edge(&town("A"), &town("C"), 1, "Nowhere"),
        Err(GraphError::MissingVertex { town: ref missing }) if missing == "C"
    ));
    assert!(matches!(
        graph.add_edge(&town("A"), &town("B"), 1, " "),
        Err(GraphError::InvalidName { .. })
    ));

    assert_eq!(graph.edge_count(), 0);
    assert!(graph.edges_of(&town("A")).is_empty());
}

#[test]
fn test_add_edge_duplicate_pair_first_wins() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_edge(&town("A"), &town("B"), 1, "First").unwrap();

    let err = graph
        .add_edge(&town("B"), &town("A"), 2, "Second")
        .unwrap_err();
    assert!(matches!(err, GraphError::DuplicateEdge { ref existing, .. } if existing == "First"));

    let road = graph.get_edge(&town("A"), &town("B")).unwrap();
    assert_eq!(road.name(), "First");
    assert_eq!(road.weight(), 1);
}

#[test]
fn test_zero_weight_road_allowed() {
    let mut graph = graph_with(&["A", "B"]);
    assert!(graph.add_edge(&town("A"), &town("B"), 0, "Bridge").is_ok());
}

#[test]
fn test_get_edge_absent() {
    let graph = graph_with(&["A", "B"]);
    assert!(graph.get_edge(&town("A"), &town("B")).is_none());
    assert!(graph.get_edge(&town("A"), &town("Z")).is_none());
    assert!(!graph.contains_edge(&town("Y"), &town("Z")));
}

#[test]
fn test_remove_edge_checks_weight_and_name() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_edge(&town("A"), &town("B"), 4, "Main").unwrap();

    assert!(!graph.remove_edge(&town("A"), &town("B"), 5, "Main"));
    assert!(!graph.remove_edge(&town("A"), &town("B"), 4, "Other"));
    assert!(graph.contains_edge(&town("A"), &town("B")));

    assert!(graph.remove_edge(&town("B"), &town("A"), 4, "Main"));
    assert!(!graph.contains_edge(&town("A"), &town("B")));
    assert!(graph.edges_of(&town("A")).is_empty());
    assert!(graph.edges_of(&town("B")).is_empty());

    assert!(!graph.remove_edge(&town("A"), &town("B"), 4, "Main"));
}

#[test]
fn test_remove_vertex_drops_incident_edges() {
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.add_edge(&town("A"), &town("B"), 1, "AB").unwrap();
    graph.add_edge(&town("A"), &town("C"), 2, "AC").unwrap();
    graph.add_edge(&town("B"), &town("C"), 3, "BC").unwrap();

    assert!(graph.remove_vertex(&town("A")));
    assert!(!graph.remove_vertex(&town("A")));

    assert!(!graph.contains_vertex(&town("A")));
    assert_eq!(graph.edge_count(), 1);
    let names: Vec<&str> = graph.edge_set().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["BC"]);
    assert_eq!(graph.edges_of(&town("B")).len(), 1);
    assert!(graph.edges_of(&town("A")).is_empty());
}

#[test]
fn test_readding_removed_vertex_starts_isolated() {
    let mut graph = graph_with(&["A", "B"]);
    graph.add_edge(&town("A"), &town("B"), 1, "AB").unwrap();
    graph.remove_vertex(&town("B"));

    assert!(graph.add_vertex(town("B")));
    assert!(graph.edges_of(&town("B")).is_empty());
    assert!(graph.add_edge(&town("A"), &town("B"), 9, "AB2").is_ok());
}

#[test]
fn test_vertex_set_lists_every_town() {
    let graph = graph_with(&["C", "A", "B"]);
    let mut names: Vec<&str> = graph.vertex_set().iter().map(|t| t.name()).collect();
    names.sort();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_shortest_path_descriptions() {
    let mut graph = graph_with(&["Ada, Lovelace", "Turing, Alan"]);
    graph
        .add_edge(
            &town("Ada, Lovelace"),
            &town("Turing, Alan"),
            3,
            "Analytical Engine",
        )
        .unwrap();

    assert_eq!(
        graph.shortest_path(&town("Ada, Lovelace"), &town("Turing, Alan")),
        Some(vec![
            "Ada, Lovelace via Analytical Engine to Turing, Alan 3 mi".to_string()
        ])
    );
    assert_eq!(
        graph.shortest_path(&town("Turing, Alan"), &town("Ada, Lovelace")),
        Some(vec![
            "Turing, Alan via Analytical Engine to Ada, Lovelace 3 mi".to_string()
        ])
    );
}

#[test]
fn test_shortest_path_none_when_missing() {
    let mut graph = graph_with(&["A", "B", "C"]);
    graph.add_edge(&town("A"), &town("B"), 1, "AB").unwrap();

    assert_eq!(graph.shortest_path(&town("A"), &town("Z")), None);
    assert_eq!(graph.shortest_path(&town("A"), &town("C")), None);
}

#[test]
fn test_shortest_path_none_for_isolated_town_to_itself() {
    let graph = graph_with(&["Lonely"]);
    assert_eq!(graph.shortest_path(&town("Lonely"), &town("Lonely")), None);
}
