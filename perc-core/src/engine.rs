//! Match engine: the two-phase coloring/removal state machine.
//!
//! This module is the single place that mutates the live graph via rules.
//! Strategies only ever see deep copies of it; whatever they hand back is
//! re-resolved by index against the engine's own graph.

use crate::graph::{Color, Graph, Player};
use crate::percolate::percolate;
use crate::strategy::Strategy;

/// Why a match ended early in a forfeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForfeitReason {
    /// The strategy call itself failed.
    Fault,
    /// The returned vertex does not exist in the current graph.
    UnknownVertex,
    /// Coloring phase: the returned vertex is already colored.
    AlreadyColored,
    /// Removal phase: the returned vertex is not owned by the active player.
    NotOwned,
}

impl ForfeitReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ForfeitReason::Fault => "fault",
            ForfeitReason::UnknownVertex => "unknown_vertex",
            ForfeitReason::AlreadyColored => "already_colored",
            ForfeitReason::NotOwned => "not_owned",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Forfeit {
    /// The player whose move was rejected. The opponent wins.
    pub by: Player,
    pub reason: ForfeitReason,
    /// Strategy error message, for `ForfeitReason::Fault`.
    pub detail: Option<String>,
}

/// Result of one completed match. A match always declares a winner; it cannot
/// draw or hang (coloring is bounded by |V| moves, removal by |V|
/// percolations).
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub winner: Player,
    pub forfeit: Option<Forfeit>,
    pub coloring_moves: u32,
    pub removal_moves: u32,
}

/// Play one match to completion. `p0` moves first.
pub fn play_match(mut graph: Graph, p0: &mut dyn Strategy, p1: &mut dyn Strategy) -> MatchOutcome {
    let mut active: Player = 0;
    let mut coloring_moves = 0u32;
    let mut removal_moves = 0u32;

    let forfeit = |active: Player, reason: ForfeitReason, detail: Option<String>, cm: u32, rm: u32| {
        MatchOutcome {
            winner: 1 - active,
            forfeit: Some(Forfeit {
                by: active,
                reason,
                detail,
            }),
            coloring_moves: cm,
            removal_moves: rm,
        }
    };

    // Coloring phase: exactly one vertex gets a color per turn, so this ends
    // after |V| accepted moves.
    while graph.uncolored_count() > 0 {
        let strat: &mut dyn Strategy = if active == 0 { &mut *p0 } else { &mut *p1 };
        let chosen = match strat.choose_vertex_to_color(graph.clone(), active) {
            Ok(idx) => idx,
            Err(e) => {
                return forfeit(
                    active,
                    ForfeitReason::Fault,
                    Some(e.to_string()),
                    coloring_moves,
                    removal_moves,
                )
            }
        };
        match graph.vertex(chosen) {
            None => {
                return forfeit(
                    active,
                    ForfeitReason::UnknownVertex,
                    None,
                    coloring_moves,
                    removal_moves,
                )
            }
            Some(v) if !v.color.is_uncolored() => {
                return forfeit(
                    active,
                    ForfeitReason::AlreadyColored,
                    None,
                    coloring_moves,
                    removal_moves,
                )
            }
            Some(_) => {
                graph.set_color(chosen, Color::Owned(active));
            }
        }
        coloring_moves += 1;
        active = 1 - active;
    }

    // Removal phase: the game ends the instant the active player owns no
    // vertex of their color at the start of their turn.
    while graph.owned_count(active) > 0 {
        let strat: &mut dyn Strategy = if active == 0 { &mut *p0 } else { &mut *p1 };
        let chosen = match strat.choose_vertex_to_remove(graph.clone(), active) {
            Ok(idx) => idx,
            Err(e) => {
                return forfeit(
                    active,
                    ForfeitReason::Fault,
                    Some(e.to_string()),
                    coloring_moves,
                    removal_moves,
                )
            }
        };
        match graph.vertex(chosen) {
            None => {
                return forfeit(
                    active,
                    ForfeitReason::UnknownVertex,
                    None,
                    coloring_moves,
                    removal_moves,
                )
            }
            Some(v) if v.color != Color::Owned(active) => {
                return forfeit(
                    active,
                    ForfeitReason::NotOwned,
                    None,
                    coloring_moves,
                    removal_moves,
                )
            }
            Some(_) => percolate(&mut graph, chosen),
        }
        removal_moves += 1;
        active = 1 - active;
    }

    // The player unable to move loses.
    MatchOutcome {
        winner: 1 - active,
        forfeit: None,
        coloring_moves,
        removal_moves,
    }
}
