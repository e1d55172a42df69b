//! A single six-sided die.
//!
//! A die holds its last rolled value. Rolling draws from an injected
//! [`RandomSource`]; validation is a separate, explicit step so callers
//! decide when an out-of-range value is an error.

use crate::random::RandomSource;

/// Number of faces on a die.
pub const FACE_COUNT: u8 = 6;

/// The face that converts to a point and removes the die from play.
pub const SCORING_FACE: u8 = 6;

/// The face that moves the die to the next player in seating order.
pub const TRANSFER_FACE: u8 = 1;

/// Error for a die value outside the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("invalid dice number: {0}")]
    InvalidNumber(u8),
}

/// A six-sided die.
///
/// A value of 0 is the unrolled sentinel and only legal before the
/// first roll; [`Die::validate`] rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    value: u8,
}

impl Die {
    /// Creates a die showing `value`. No validation is performed.
    pub const fn new(value: u8) -> Self {
        Die { value }
    }

    /// Creates a die that has not been rolled yet.
    pub const fn unrolled() -> Self {
        Die { value: 0 }
    }

    /// Returns the face currently showing (0 if never rolled).
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Rolls the die, storing and returning the new face.
    pub fn roll<R: RandomSource>(&mut self, rng: &mut R) -> u8 {
        let draw = rng.next_below(FACE_COUNT as u32);
        self.value = draw as u8 + 1;
        self.value
    }

    /// Checks that the value is a real face, in `[1, 6]`.
    pub fn validate(&self) -> Result<(), DiceError> {
        if self.value == 0 || self.value > FACE_COUNT {
            return Err(DiceError::InvalidNumber(self.value));
        }
        Ok(())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    #[test]
    fn roll_stores_draw_plus_one() {
        let mut rng = ScriptedSource::new(&[5]);
        let mut die = Die::unrolled();
        assert_eq!(die.roll(&mut rng), 6);
        assert_eq!(die.value(), 6);
    }

    #[test]
    fn roll_stays_in_range() {
        let mut rng = crate::random::SeededSource::new(7);
        let mut die = Die::unrolled();
        for _ in 0..200 {
            let v = die.roll(&mut rng);
            assert!((1..=6).contains(&v), "rolled {}", v);
        }
    }

    #[test]
    fn validate_accepts_faces() {
        for v in 1..=6 {
            assert_eq!(Die::new(v).validate(), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert_eq!(
            Die::new(0).validate(),
            Err(DiceError::InvalidNumber(0)),
            "unrolled sentinel is not a valid face"
        );
        assert_eq!(Die::new(7).validate(), Err(DiceError::InvalidNumber(7)));
        assert_eq!(Die::new(10).validate(), Err(DiceError::InvalidNumber(10)));
    }

    #[test]
    fn display_is_bare_value() {
        assert_eq!(Die::new(4).to_string(), "4");
    }
}
