use crate::canonical::SearchGraph;
use perc_core::{Color, Graph};
use rustc_hash::FxHashMap;

fn path_graph(n: u32) -> Graph {
    Graph::new(0..n, (0..n - 1).map(|i| (i, i + 1))).unwrap()
}

#[test]
fn test_capture_is_order_independent() {
    let g1 = Graph::new([0, 1, 2, 3], [(0, 1), (1, 2), (2, 3)]).unwrap();
    let g2 = Graph::new([3, 1, 0, 2], [(3, 2), (1, 0), (2, 1)]).unwrap();
    let s1 = SearchGraph::capture(&g1);
    let s2 = SearchGraph::capture(&g2);
    assert_eq!(s1, s2);
    assert_eq!(s1.structural_key(), s2.structural_key());
}

#[test]
fn test_color_changes_key() {
    let mut g1 = path_graph(4);
    let mut g2 = path_graph(4);
    g1.set_color(1, Color::Owned(0));
    g2.set_color(1, Color::Owned(1));
    let s1 = SearchGraph::capture(&g1);
    let s2 = SearchGraph::capture(&g2);
    assert_ne!(s1, s2);
    assert_ne!(s1.structural_key(), s2.structural_key());
    assert_ne!(
        s1.structural_key(),
        SearchGraph::capture(&path_graph(4)).structural_key()
    );
}

#[test]
fn test_edge_changes_key() {
    let g1 = Graph::new(0..3, [(0, 1)]).unwrap();
    let g2 = Graph::new(0..3, [(0, 2)]).unwrap();
    let s1 = SearchGraph::capture(&g1);
    let s2 = SearchGraph::capture(&g2);
    assert_ne!(s1, s2);
    assert_ne!(s1.structural_key(), s2.structural_key());
}

#[test]
fn test_empty_graphs_are_equal() {
    let g1 = Graph::new([], []).unwrap();
    let g2 = Graph::new([], []).unwrap();
    assert_eq!(SearchGraph::capture(&g1), SearchGraph::capture(&g2));
}

#[test]
fn test_usable_as_map_key() {
    let mut cache: FxHashMap<SearchGraph, f64> = FxHashMap::default();
    let g = path_graph(5);
    cache.insert(SearchGraph::capture(&g), 0.25);

    // A fresh capture of the same position must hit the same entry.
    assert_eq!(cache.get(&SearchGraph::capture(&g)), Some(&0.25));

    let mut other = path_graph(5);
    other.set_color(0, Color::Owned(0));
    assert_eq!(cache.get(&SearchGraph::capture(&other)), None);
}

#[test]
fn test_vertex_count() {
    let g = path_graph(3);
    assert_eq!(SearchGraph::capture(&g).vertex_count(), 3);
}

#[test]
fn test_with_color_is_pure() {
    let before = SearchGraph::capture(&path_graph(3));
    let after = before.with_color(1, 0);
    assert_ne!(before, after);
    assert_eq!(before.uncolored().len(), 3);
    assert_eq!(after.uncolored(), vec![0, 2]);
    assert_eq!(after.owned_by(0), vec![1]);
    assert!(after.owned_by(1).is_empty());
}

#[test]
fn test_pure_percolate_leaves_input_untouched() {
    let before = SearchGraph::capture(&path_graph(4));
    let copy = before.clone();
    let _ = before.percolate(1);
    assert_eq!(before, copy);
}

#[test]
fn test_pure_percolate_matches_live_operator() {
    // Both forms apply the same one-pass cascade rule.
    let mut live = Graph::new(0..4, [(0, 1), (1, 2), (2, 3)]).unwrap();
    let snapshot = SearchGraph::capture(&live);
    perc_core::percolate(&mut live, 1);
    assert_eq!(snapshot.percolate(1), SearchGraph::capture(&live));
}

#[test]
fn test_pure_percolate_keeps_previously_isolated_vertex() {
    let g = Graph::new(0..3, [(0, 1)]).unwrap();
    let after = SearchGraph::capture(&g).percolate(0);
    assert_eq!(after.vertex_count(), 1);
    assert_eq!(after.uncolored(), vec![2]);
}
