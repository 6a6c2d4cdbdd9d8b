//! Flat-buffer boundary adapter.
//!
//! Host processes describe a puzzle as one flat integer buffer of
//! `tube_count * TUBE_CAPACITY` slots, bottom-to-top within each tube,
//! with [`NO_UNIT`] marking an unoccupied slot. Solutions travel back
//! as interleaved `(from, to)` pairs. This module owns no algorithmic
//! logic; it marshals in, calls the solver, and marshals out.

use crate::moves::Move;
use crate::puzzle::{Color, State, Tube, TUBE_CAPACITY};
use crate::solver;

/// Sentinel marking an unoccupied slot in the flat input layout.
pub const NO_UNIT: i32 = -1;

/// Decode a flat unit buffer into a puzzle state.
///
/// `units.len()` must be a multiple of [`TUBE_CAPACITY`]; every
/// non-sentinel slot must hold a small non-negative color id. Malformed
/// input is a precondition violation, not validated here.
pub fn state_from_flat(units: &[i32]) -> State {
    debug_assert!(units.len() % TUBE_CAPACITY == 0);

    let tubes = units
        .chunks_exact(TUBE_CAPACITY)
        .map(|slots| {
            let mut tube = Tube::new();
            for &slot in slots {
                if slot != NO_UNIT {
                    tube.push(slot as Color);
                }
            }
            tube
        })
        .collect();
    State::new(tubes)
}

/// Write a move path as interleaved `(from, to)` pairs and return the
/// move count. `out` must hold at least `2 * path.len()` slots; sizing
/// it is the caller's responsibility and is not checked beyond the
/// usual slice bounds.
pub fn write_path(path: &[Move], out: &mut [i32]) -> usize {
    for (i, mv) in path.iter().enumerate() {
        out[i * 2] = mv.from as i32;
        out[i * 2 + 1] = mv.to as i32;
    }
    path.len()
}

/// Decode `units`, solve, and write the solution into `out`.
///
/// Returns the number of moves written. Zero means either "no solution
/// exists" or "already solved"; the two are indistinguishable at this
/// boundary. Callers needing the distinction use [`solver::solve`]
/// directly.
pub fn solve_flat(units: &[i32], out: &mut [i32]) -> usize {
    let state = state_from_flat(units);
    match solver::solve(&state).solution {
        Some(path) => write_path(&path, out),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_skips_sentinel_slots() {
        let units = [2, 3, NO_UNIT, NO_UNIT, NO_UNIT, NO_UNIT, NO_UNIT, NO_UNIT];
        let state = state_from_flat(&units);
        assert_eq!(state.tube_count(), 2);
        assert_eq!(state.tubes[0].units(), &[2, 3]);
        assert!(state.tubes[1].is_empty());
    }

    #[test]
    fn test_write_path_interleaves_pairs() {
        let path = [Move::new(0, 2), Move::new(1, 0)];
        let mut out = [0i32; 4];
        assert_eq!(write_path(&path, &mut out), 2);
        assert_eq!(out, [0, 2, 1, 0]);
    }

    #[test]
    fn test_solve_flat_round_trip() {
        // [0,1,1,1] / [1,0,0,0] / [], solvable in three pours.
        let units = [
            0, 1, 1, 1, //
            1, 0, 0, 0, //
            NO_UNIT, NO_UNIT, NO_UNIT, NO_UNIT,
        ];
        let mut out = [0i32; 32];
        let count = solve_flat(&units, &mut out);
        assert!(count > 0);

        // Replay the written pairs against the decoded state.
        let mut state = state_from_flat(&units);
        for pair in out[..count * 2].chunks_exact(2) {
            assert!(crate::moves::pour(&mut state, pair[0] as usize, pair[1] as usize));
        }
        assert!(state.is_win());
    }

    #[test]
    fn test_solve_flat_already_won_returns_zero() {
        let units = [5, 5, 5, 5, NO_UNIT, NO_UNIT, NO_UNIT, NO_UNIT];
        let mut out = [0i32; 8];
        assert_eq!(solve_flat(&units, &mut out), 0);
    }

    #[test]
    fn test_solve_flat_unsolvable_returns_zero() {
        let units = [
            0, 1, NO_UNIT, NO_UNIT, //
            1, 0, NO_UNIT, NO_UNIT,
        ];
        let mut out = [0i32; 8];
        assert_eq!(solve_flat(&units, &mut out), 0);
    }
}
