//! C ABI entry point for host processes.
//!
//! Mirrors the flat call/return contract described in
//! [`crate::boundary`]: the host passes tube contents as one flat
//! integer buffer and receives interleaved `(from, to)` pairs back.

use std::slice;

use crate::boundary;
use crate::puzzle::TUBE_CAPACITY;

/// Solve a puzzle passed as a flat unit buffer.
///
/// `units` points to `num_tubes * 4` integers, bottom-to-top per tube,
/// `-1` marking an unoccupied slot. The solution is written into
/// `out_steps` as interleaved `(from, to)` pairs and the move count is
/// returned; 0 means no solution was found or none was needed. Null
/// pointers or a negative tube count return 0 without writing.
///
/// # Safety
///
/// `units` must be valid for reads of `num_tubes * 4` integers.
/// `out_steps` must be valid for writes of two integers per move of the
/// eventual solution; the solver does not know the buffer's length and
/// cannot guard against overflow, so callers must size it for the
/// longest path they are prepared to accept.
#[no_mangle]
pub unsafe extern "C" fn solve(units: *const i32, num_tubes: i32, out_steps: *mut i32) -> i32 {
    if units.is_null() || out_steps.is_null() || num_tubes < 0 {
        return 0;
    }

    let units = slice::from_raw_parts(units, num_tubes as usize * TUBE_CAPACITY);
    let state = boundary::state_from_flat(units);

    match crate::solver::solve(&state).solution {
        Some(path) => {
            let out = slice::from_raw_parts_mut(out_steps, path.len() * 2);
            boundary::write_path(&path, out) as i32
        }
        None => 0,
    }
}
