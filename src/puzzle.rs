//! Puzzle state representation and classification predicates.
//!
//! A puzzle is an ordered collection of tubes, each holding up to four
//! colored units. Within a tube the last unit is the top (the pourable
//! end). Tube identity is positional: moves refer to tubes by index.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of units a tube can hold.
pub const TUBE_CAPACITY: usize = 4;

/// Color identifier. The alphabet is small and puzzle-specific; callers
/// may assign any small non-negative integers they like.
pub type Color = u8;

/// A single tube, bottom unit first. An empty tube is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tube(SmallVec<[Color; TUBE_CAPACITY]>);

impl Tube {
    /// Create an empty tube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tube from its units, bottom first.
    pub fn from_units(units: &[Color]) -> Self {
        debug_assert!(units.len() <= TUBE_CAPACITY);
        Self(SmallVec::from_slice(units))
    }

    /// Units currently in the tube, bottom first.
    pub fn units(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() == TUBE_CAPACITY
    }

    /// Color of the top unit, if any.
    pub fn top(&self) -> Option<Color> {
        self.0.last().copied()
    }

    pub(crate) fn push(&mut self, color: Color) {
        debug_assert!(!self.is_full());
        self.0.push(color);
    }

    pub(crate) fn pop(&mut self) -> Option<Color> {
        self.0.pop()
    }

    /// A tube is completed when it is full and uniformly colored.
    /// Completed tubes are inert: they are never a pour source or
    /// destination.
    pub fn is_completed(&self) -> bool {
        if self.0.len() != TUBE_CAPACITY {
            return false;
        }
        let first = self.0[0];
        self.0.iter().all(|&c| c == first)
    }

    /// True when the tube is empty or all of its units share one color,
    /// regardless of count.
    pub fn is_single_color(&self) -> bool {
        match self.0.first() {
            None => true,
            Some(&first) => self.0.iter().all(|&c| c == first),
        }
    }
}

/// A full puzzle state. Equality and hashing are structural and
/// order-sensitive, which is what the solver's visited set keys on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    pub tubes: Vec<Tube>,
}

impl State {
    pub fn new(tubes: Vec<Tube>) -> Self {
        Self { tubes }
    }

    /// Build a state from per-tube unit slices, bottom first.
    pub fn from_tubes(tubes: &[&[Color]]) -> Self {
        Self {
            tubes: tubes.iter().map(|units| Tube::from_units(units)).collect(),
        }
    }

    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    /// The puzzle is won when every tube is either empty or completed.
    pub fn is_win(&self) -> bool {
        self.tubes
            .iter()
            .all(|tube| tube.is_empty() || tube.is_completed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_requires_full_uniform() {
        assert!(Tube::from_units(&[2, 2, 2, 2]).is_completed());
        assert!(!Tube::from_units(&[2, 2, 2]).is_completed());
        assert!(!Tube::from_units(&[2, 2, 2, 3]).is_completed());
        assert!(!Tube::new().is_completed());
    }

    #[test]
    fn test_single_color() {
        assert!(Tube::new().is_single_color());
        assert!(Tube::from_units(&[1]).is_single_color());
        assert!(Tube::from_units(&[1, 1, 1]).is_single_color());
        assert!(Tube::from_units(&[1, 1, 1, 1]).is_single_color());
        assert!(!Tube::from_units(&[1, 2]).is_single_color());
    }

    #[test]
    fn test_top_is_last_unit() {
        assert_eq!(Tube::new().top(), None);
        assert_eq!(Tube::from_units(&[1, 2, 3]).top(), Some(3));
    }

    #[test]
    fn test_win_full_and_empty_tubes() {
        let state = State::from_tubes(&[&[0, 0, 0, 0], &[]]);
        assert!(state.is_win());
    }

    #[test]
    fn test_not_win_with_partial_tube() {
        let state = State::from_tubes(&[&[0, 0, 0, 0], &[1, 1]]);
        assert!(!state.is_win());

        let state = State::from_tubes(&[&[0, 0, 1, 0], &[]]);
        assert!(!state.is_win());
    }

    #[test]
    fn test_empty_state_is_win() {
        assert!(State::new(Vec::new()).is_win());
    }

    #[test]
    fn test_json_shape_is_nested_arrays() {
        let state = State::from_tubes(&[&[0, 1], &[]]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "[[0,1],[]]");

        let parsed: State = serde_json::from_str("[[3,3],[1],[]]").unwrap();
        assert_eq!(parsed.tube_count(), 3);
        assert_eq!(parsed.tubes[0].units(), &[3, 3]);
        assert!(parsed.tubes[2].is_empty());
    }
}
