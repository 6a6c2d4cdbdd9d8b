//! Water-sort puzzle solver.
//!
//! This crate provides an exhaustive depth-first solver for the
//! water-sort puzzle: tubes of capacity four holding colored units,
//! sorted by pouring contiguous same-colored runs between tubes. The
//! search prunes useless pours, orders the rest heuristically, and
//! memoizes visited states, returning the first winning move sequence
//! it reaches.

pub mod boundary;
pub mod ffi;
pub mod moves;
pub mod pruning;
pub mod puzzle;
pub mod solver;

// Re-export main types
pub use boundary::{solve_flat, state_from_flat, write_path, NO_UNIT};
pub use moves::{pour, Move};
pub use pruning::{candidate_moves, pour_priority, Priority, RankedMove};
pub use puzzle::{Color, State, Tube, TUBE_CAPACITY};
pub use solver::{solve, SolverResult};
