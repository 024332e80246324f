use crate::expectimax::Searcher;
use perc_core::{Color, Graph};
use std::time::{Duration, Instant};

fn far_deadline() -> Instant {
    Instant::now() + Duration::from_secs(60)
}

#[test]
fn test_opponent_replies_average_uniformly() {
    // Searcher (player 0) colors the one free vertex. The opponent then owns
    // 1 and 2 and removes uniformly at random:
    //   remove 1: vertex 0 cascades away, searcher owns nothing -> 0.0
    //   remove 2: searcher removes 0, vertex 1 cascades -> win -> 1.0
    // Mean value is exactly 0.5.
    let mut g = Graph::new(0..3, [(0, 1)]).unwrap();
    g.set_color(1, Color::Owned(1));
    g.set_color(2, Color::Owned(1));

    let mut searcher = Searcher::new();
    let best = searcher
        .best_coloring_move(&g, 0, far_deadline())
        .unwrap()
        .expect("one coloring move exists");
    assert_eq!(best.0, 0);
    assert!((best.1 - 0.5).abs() < 1e-12);
}

#[test]
fn test_immediate_win_is_certain() {
    // Removing 0 cascades away the opponent's only vertex.
    let mut g = Graph::new(0..2, [(0, 1)]).unwrap();
    g.set_color(0, Color::Owned(0));
    g.set_color(1, Color::Owned(1));

    let mut searcher = Searcher::new();
    let best = searcher
        .best_removal_move(&g, 0, far_deadline())
        .unwrap()
        .expect("a removal move exists");
    assert_eq!(best, (0, 1.0));
}

#[test]
fn test_first_mover_wins_single_edge_game() {
    let g = Graph::new(0..2, [(0, 1)]).unwrap();
    let mut searcher = Searcher::new();
    let best = searcher
        .best_coloring_move(&g, 0, far_deadline())
        .unwrap()
        .expect("coloring moves exist");
    assert!((best.1 - 1.0).abs() < 1e-12);
}

#[test]
fn test_no_moves_yields_none() {
    let g = Graph::new(0..2, []).unwrap();
    let mut searcher = Searcher::new();
    // Player 0 owns nothing, so there is no removal move to rank.
    assert!(searcher
        .best_removal_move(&g, 0, far_deadline())
        .unwrap()
        .is_none());
}

#[test]
fn test_expired_deadline_errors() {
    let g = Graph::new(0..4, [(0, 1), (1, 2), (2, 3)]).unwrap();
    let deadline = Instant::now();
    std::thread::sleep(Duration::from_millis(1));
    let mut searcher = Searcher::new();
    assert!(searcher.best_coloring_move(&g, 0, deadline).is_err());
}

#[test]
fn test_cache_persists_across_searches() {
    let mut g = Graph::new(0..4, [(0, 1), (1, 2), (2, 3)]).unwrap();
    g.set_color(0, Color::Owned(0));
    g.set_color(1, Color::Owned(1));
    g.set_color(2, Color::Owned(0));
    g.set_color(3, Color::Owned(1));

    let mut searcher = Searcher::new();
    let first = searcher.best_removal_move(&g, 0, far_deadline()).unwrap();
    assert!(searcher.cache_len() > 0);
    let hits_after_first = searcher.stats.cache_hits;

    let second = searcher.best_removal_move(&g, 0, far_deadline()).unwrap();
    assert_eq!(first, second);
    assert!(searcher.stats.cache_hits > hits_after_first);
}

#[test]
fn test_coloring_tree_reuses_transpositions() {
    // Edgeless six-vertex graph: many coloring orders reach the same
    // position, so with memoization the expansion tracks the number of
    // distinct colorings (at most 3^6 = 729) instead of the number of move
    // sequences. Without coloring-phase caching this search expands more
    // than 3000 nodes.
    let g = Graph::new(0..6, []).unwrap();
    let mut searcher = Searcher::new();
    searcher
        .best_coloring_move(&g, 0, far_deadline())
        .unwrap()
        .expect("coloring moves exist");
    assert!(
        searcher.stats.nodes < 2500,
        "nodes = {}",
        searcher.stats.nodes
    );
    assert!(searcher.stats.cache_hits > 0);
}

#[test]
fn test_values_stay_in_unit_interval() {
    let g = Graph::new(0..4, [(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
    let mut searcher = Searcher::new();
    for player in [0, 1] {
        let (_, value) = searcher
            .best_coloring_move(&g, player, far_deadline())
            .unwrap()
            .expect("coloring moves exist");
        assert!((0.0..=1.0).contains(&value));
    }
}
