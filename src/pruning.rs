//! Candidate generation and pruning rules for the solver.
//!
//! These rules skip pours that can never contribute to a solution,
//! which keeps the reachable state space small enough for exhaustive
//! search.

use crate::puzzle::State;

/// Heuristic rank for a candidate pour. Matching-destination pours are
/// explored before pours into empty tubes; the ordering guides the
/// search, it proves nothing about optimality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Pour into an empty tube.
    EmptyDestination,
    /// Pour onto a matching top color.
    MatchingDestination,
}

/// A legal pour together with its heuristic rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMove {
    pub from: usize,
    pub to: usize,
    pub priority: Priority,
}

/// Classify the pour `from -> to`. Returns `None` when the pour is
/// illegal or useless:
/// - source empty or completed (completed tubes are inert),
/// - destination completed or full,
/// - non-empty destination whose top color does not match,
/// - a single-colored source into an empty tube, which merely relocates
///   the units and cannot make progress toward a win.
pub fn pour_priority(state: &State, from: usize, to: usize) -> Option<Priority> {
    if from == to {
        return None;
    }
    let source = &state.tubes[from];
    let dest = &state.tubes[to];

    if source.is_empty() || source.is_completed() {
        return None;
    }
    if dest.is_completed() || dest.is_full() {
        return None;
    }

    match dest.top() {
        None => {
            if source.is_single_color() {
                None
            } else {
                Some(Priority::EmptyDestination)
            }
        }
        Some(dest_top) => {
            let color = source.top()?;
            if dest_top == color {
                Some(Priority::MatchingDestination)
            } else {
                None
            }
        }
    }
}

/// Enumerate every legal pour in `state`, ordered by descending
/// priority. The sort is stable, so ties keep enumeration order:
/// source index ascending, then destination index ascending.
pub fn candidate_moves(state: &State) -> Vec<RankedMove> {
    let mut moves = Vec::new();

    for from in 0..state.tube_count() {
        for to in 0..state.tube_count() {
            if let Some(priority) = pour_priority(state, from, to) {
                moves.push(RankedMove { from, to, priority });
            }
        }
    }

    moves.sort_by(|a, b| b.priority.cmp(&a.priority));
    moves
}
