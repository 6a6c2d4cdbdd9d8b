//! Pour mechanics: applying a single move to a puzzle state.

use serde::{Deserialize, Serialize};

use crate::puzzle::State;

/// A pour from one tube to another, by index. A move is only meaningful
/// relative to the state it was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Apply a pour to `state`, transferring the maximal contiguous run of
/// same-colored units from the top of `from` to the top of `to`. The
/// transfer stops when the run ends, the source empties, or the
/// destination fills.
///
/// Returns `false` and leaves the state untouched when the pour is
/// invalid: empty source, full destination, or a non-empty destination
/// whose top color differs from the source's top color.
///
/// Both indexes must be in bounds and distinct; that is the caller's
/// responsibility.
pub fn pour(state: &mut State, from: usize, to: usize) -> bool {
    let color = match state.tubes[from].top() {
        Some(c) => c,
        None => return false,
    };
    if state.tubes[to].is_full() {
        return false;
    }
    if state.tubes[to].top().map_or(false, |c| c != color) {
        return false;
    }

    while state.tubes[from].top() == Some(color) && !state.tubes[to].is_full() {
        state.tubes[from].pop();
        state.tubes[to].push(color);
    }
    true
}
