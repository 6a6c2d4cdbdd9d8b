//! Depth-first backtracking solver with visited-state memoization.
//!
//! The search explores pours in priority order and returns the first
//! winning move sequence it reaches. A set of every expanded state
//! prevents cycles (pours are often reversible) and redundant work; a
//! state reached again through a different move sequence is pruned.
//! The search runs to completion: there is no timeout and no partial
//! result, only a solution or exhaustion.

use std::collections::HashSet;
use std::time::Instant;

use crate::moves::{pour, Move};
use crate::pruning::candidate_moves;
use crate::puzzle::State;

/// Result of one solve call.
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Moves reaching a won state, in order. `Some(vec![])` means the
    /// puzzle was already won; `None` means the reachable space was
    /// exhausted without a win.
    pub solution: Option<Vec<Move>>,
    /// Number of distinct states expanded.
    pub states_explored: usize,
    /// Wall-clock time spent searching, in milliseconds.
    pub time_elapsed_ms: u64,
}

/// A frontier node: a state together with the moves that produced it.
/// Frames own their data so sibling branches never observe each
/// other's mutations.
#[derive(Debug, Clone)]
struct SearchFrame {
    state: State,
    path: Vec<Move>,
}

/// Search for a move sequence that wins `initial`.
///
/// The first solution found under the move-priority ordering is
/// returned; it is not necessarily the shortest. Depth-first traversal
/// uses an explicit frame stack rather than recursion, so search depth
/// is bounded by memory, not the call stack.
pub fn solve(initial: &State) -> SolverResult {
    let start_time = Instant::now();

    let mut visited: HashSet<State> = HashSet::new();
    let mut stack: Vec<SearchFrame> = vec![SearchFrame {
        state: initial.clone(),
        path: Vec::new(),
    }];

    while let Some(frame) = stack.pop() {
        if frame.state.is_win() {
            return SolverResult {
                solution: Some(frame.path),
                states_explored: visited.len(),
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            };
        }

        // A state already expanded on another branch is pruned here;
        // `insert` doubles as the membership check.
        if !visited.insert(frame.state.clone()) {
            continue;
        }

        // Push children lowest-priority first so the pop order matches
        // the priority order.
        for candidate in candidate_moves(&frame.state).into_iter().rev() {
            let mut state = frame.state.clone();
            let moved = pour(&mut state, candidate.from, candidate.to);
            debug_assert!(moved, "enumerated candidate must be a legal pour");

            let mut path = frame.path.clone();
            path.push(Move::new(candidate.from, candidate.to));
            stack.push(SearchFrame { state, path });
        }
    }

    SolverResult {
        solution: None,
        states_explored: visited.len(),
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}
