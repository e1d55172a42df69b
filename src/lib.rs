//! Dadu engine library.
//!
//! Implements an elimination dice game: every round all players roll
//! their remaining dice, sixes convert to points and leave play, and
//! ones are handed to the next player in seating order. Exposes the
//! dice, hand, round, and game modules for use by integration tests and
//! the binary entry points.

pub mod dice;
pub mod display;
pub mod game;
pub mod hand;
pub mod random;
pub mod round;
pub mod simulate;
