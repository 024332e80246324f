use crate::graph::{Color, Edge, Graph, GraphError};
use crate::percolate::percolate;

fn path_graph(n: u32) -> Graph {
    Graph::new(0..n, (0..n.saturating_sub(1)).map(|i| (i, i + 1))).unwrap()
}

#[test]
fn test_edge_endpoints_are_normalized() {
    let e1 = Edge::new(3, 1).unwrap();
    let e2 = Edge::new(1, 3).unwrap();
    assert_eq!(e1, e2);
    assert_eq!(e1.a(), 1);
    assert_eq!(e1.b(), 3);
    assert_eq!(e1.other(1), 3);
    assert_eq!(e1.other(3), 1);
}

#[test]
fn test_self_loop_rejected() {
    assert!(matches!(Edge::new(2, 2), Err(GraphError::SelfLoop { v: 2 })));
    let result = Graph::new(0..3, [(0, 1), (2, 2)]);
    assert!(matches!(result, Err(GraphError::SelfLoop { v: 2 })));
}

#[test]
fn test_duplicate_vertex_rejected() {
    let result = Graph::new([0, 1, 1, 2], []);
    assert!(matches!(result, Err(GraphError::DuplicateVertex { v: 1 })));
}

#[test]
fn test_duplicate_edge_rejected() {
    let result = Graph::new(0..3, [(0, 1), (0, 1)]);
    assert!(matches!(
        result,
        Err(GraphError::DuplicateEdge { a: 0, b: 1 })
    ));
}

#[test]
fn test_reversed_duplicate_edge_rejected() {
    // {1, 0} is the same unordered pair as {0, 1}.
    let result = Graph::new(0..3, [(0, 1), (1, 0)]);
    assert!(matches!(
        result,
        Err(GraphError::DuplicateEdge { a: 0, b: 1 })
    ));
}

#[test]
fn test_missing_endpoint_rejected() {
    let result = Graph::new(0..3, [(0, 7)]);
    assert!(matches!(result, Err(GraphError::MissingEndpoint { v: 7 })));
}

#[test]
fn test_accessors_on_path_graph() {
    let g = path_graph(4);
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 3);
    assert!(!g.is_empty());
    assert_eq!(g.degree(0), 1);
    assert_eq!(g.degree(1), 2);
    assert_eq!(g.degree(3), 1);
    assert_eq!(g.uncolored_count(), 4);
    assert!(g.vertex(2).is_some());
    assert!(g.vertex(4).is_none());
}

#[test]
fn test_set_color_and_counts() {
    let mut g = path_graph(3);
    assert!(g.set_color(1, Color::Owned(0)));
    assert!(g.set_color(2, Color::Owned(1)));
    assert!(!g.set_color(9, Color::Owned(0)));
    assert_eq!(g.uncolored_count(), 1);
    assert_eq!(g.owned_count(0), 1);
    assert_eq!(g.owned_count(1), 1);
    assert_eq!(g.vertex(1).unwrap().color, Color::Owned(0));
}

#[test]
fn test_percolate_star_center_empties_graph() {
    // 0 is the only neighbor of 1, 2, and 3, so all of them cascade.
    let mut g = Graph::new(0..4, [(0, 1), (0, 2), (0, 3)]).unwrap();
    percolate(&mut g, 0);
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_percolate_leaves_previously_isolated_vertex() {
    // Vertex 2 had no edges before the move; its edge count did not change,
    // so it survives.
    let mut g = Graph::new(0..3, [(0, 1)]).unwrap();
    percolate(&mut g, 0);
    assert_eq!(g.vertex_count(), 1);
    assert!(g.vertex(2).is_some());
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_percolate_path_interior() {
    // Removing 1 from 0-1-2-3 isolates 0 but leaves 2 attached to 3.
    let mut g = path_graph(4);
    percolate(&mut g, 1);
    assert!(g.vertex(0).is_none());
    assert!(g.vertex(1).is_none());
    assert!(g.vertex(2).is_some());
    assert!(g.vertex(3).is_some());
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_percolate_path_leaf() {
    // Removing leaf 0 from 0-1-2 keeps 1, which is still attached to 2.
    let mut g = path_graph(3);
    percolate(&mut g, 0);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_percolate_isolated_vertex_removes_only_itself() {
    let mut g = Graph::new(0..4, []).unwrap();
    percolate(&mut g, 2);
    assert_eq!(g.vertex_count(), 3);
    assert!(g.vertex(2).is_none());
}

#[test]
fn test_percolate_preserves_colors() {
    let mut g = path_graph(4);
    g.set_color(2, Color::Owned(0));
    g.set_color(3, Color::Owned(1));
    percolate(&mut g, 1);
    assert_eq!(g.vertex(2).unwrap().color, Color::Owned(0));
    assert_eq!(g.vertex(3).unwrap().color, Color::Owned(1));
}
