//! Round resolution.
//!
//! Drives one round across all hands in three ordered phases, each
//! applied to every hand before the next phase starts:
//!
//! 1. Roll: every hand rolls its dice.
//! 2. Score + transfer: every hand banks its sixes, then its ones are
//!    queued onto the next hand in seating order (wrapping to seat 0).
//! 3. Commit: every hand moves queued dice into play.
//!
//! Running phase-by-phase rather than hand-by-hand is what guarantees a
//! transferred die cannot be rolled or scored in the round it arrives:
//! it sits in the target's pending buffer until phase 3.

use crate::hand::{Hand, HandError};
use crate::random::RandomSource;

/// Rolls every die of every hand.
pub fn roll_phase<R: RandomSource>(hands: &mut [Hand], rng: &mut R) {
    for hand in hands.iter_mut() {
        hand.roll_all(rng);
    }
}

/// Banks scoring dice and queues transfer dice onto each next hand.
///
/// Extracted dice always carry valid faces, so a queue rejection here
/// means game state is corrupt; it is propagated, never dropped.
pub fn score_phase(hands: &mut [Hand]) -> Result<(), HandError> {
    let count = hands.len();
    for i in 0..count {
        hands[i].extract_scoring();
        let transfers = hands[i].extract_transfers();
        if transfers.is_empty() {
            continue;
        }
        let next = (i + 1) % count;
        hands[next].queue_incoming(&transfers)?;
    }
    Ok(())
}

/// Commits every hand's queued incoming dice into play.
pub fn commit_phase(hands: &mut [Hand]) {
    for hand in hands.iter_mut() {
        hand.commit_incoming();
    }
}

/// Runs one full round: roll, score + transfer, commit.
pub fn play_round<R: RandomSource>(hands: &mut [Hand], rng: &mut R) -> Result<(), HandError> {
    roll_phase(hands, rng);
    score_phase(hands)?;
    commit_phase(hands);
    Ok(())
}
