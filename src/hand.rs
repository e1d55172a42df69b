//! A player's hand: dice, score, and the pending-transfer buffer.
//!
//! The hand owns the dice a player can currently roll plus a staging
//! buffer for dice received mid-round. Queued dice stay invisible to
//! rolling and scoring until [`Hand::commit_incoming`] moves them into
//! play, which is what keeps a transferred die from being rolled in the
//! round it arrives.

use crate::dice::{Die, DiceError, SCORING_FACE, TRANSFER_FACE};
use crate::random::RandomSource;

/// Errors from hand operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    /// A die was rejected on insertion, or an empty batch was queued.
    #[error("insert dice failed")]
    InsertFailed,

    /// A removal index past the end of the hand.
    #[error("index {0} out of bound")]
    IndexOutOfBound(usize),

    /// A queued batch contained an invalid die at `index`; dice before
    /// it were queued, the rest were not.
    #[error("queue rejected at index {index}: {source}")]
    QueueRejected {
        index: usize,
        #[source]
        source: DiceError,
    },
}

/// One player's dice, score, and pending incoming dice.
///
/// Invariants: a die is never in both `dice` and `incoming`; `incoming`
/// is only non-empty between the score and commit phases of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    dice: Vec<Die>,
    incoming: Vec<Die>,
    score: u32,
}

impl Hand {
    /// Creates an empty hand with zero points.
    pub fn new() -> Self {
        Hand::default()
    }

    /// Adds a die to the hand.
    ///
    /// The die is validated first; an out-of-range die leaves the hand
    /// untouched and reports [`HandError::InsertFailed`] without the
    /// underlying validation detail.
    pub fn add_die(&mut self, die: Die) -> Result<(), HandError> {
        if die.validate().is_err() {
            return Err(HandError::InsertFailed);
        }
        self.dice.push(die);
        Ok(())
    }

    /// Removes and returns the die at `index`.
    ///
    /// The remaining dice keep their relative order, so index-based
    /// scans behave predictably after a removal.
    pub fn remove_die(&mut self, index: usize) -> Result<Die, HandError> {
        if index >= self.dice.len() {
            return Err(HandError::IndexOutOfBound(index));
        }
        Ok(self.dice.remove(index))
    }

    /// Rolls every die in the hand, in place, in order.
    ///
    /// Pending incoming dice are not rolled.
    pub fn roll_all<R: RandomSource>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// Removes every die showing the scoring face, adding one point per
    /// removed die. Returns the removed count. Survivors keep their
    /// order.
    pub fn extract_scoring(&mut self) -> usize {
        let before = self.dice.len();
        self.dice.retain(|d| d.value() != SCORING_FACE);
        let removed = before - self.dice.len();
        self.score += removed as u32;
        removed
    }

    /// Removes and returns every die showing the transfer face, in
    /// encounter order. Survivors keep their order.
    pub fn extract_transfers(&mut self) -> Vec<Die> {
        let (transfers, keep): (Vec<Die>, Vec<Die>) =
            self.dice.drain(..).partition(|d| d.value() == TRANSFER_FACE);
        self.dice = keep;
        transfers
    }

    /// Queues dice to join the hand at the next commit.
    ///
    /// Each die is validated in order; the first invalid die aborts the
    /// batch with [`HandError::QueueRejected`], keeping only the dice
    /// queued before it. An empty batch is [`HandError::InsertFailed`].
    pub fn queue_incoming(&mut self, dice: &[Die]) -> Result<(), HandError> {
        if dice.is_empty() {
            return Err(HandError::InsertFailed);
        }
        for (index, die) in dice.iter().enumerate() {
            if let Err(source) = die.validate() {
                return Err(HandError::QueueRejected { index, source });
            }
            self.incoming.push(*die);
        }
        Ok(())
    }

    /// Moves all queued incoming dice into play. Idempotent when the
    /// buffer is already empty.
    pub fn commit_incoming(&mut self) {
        self.dice.append(&mut self.incoming);
    }

    /// Number of dice currently in play for this hand.
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    /// Accumulated points.
    pub fn points(&self) -> u32 {
        self.score
    }

    /// The dice currently in play, in stable order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Dice queued for the next commit, in arrival order.
    pub fn pending_incoming(&self) -> &[Die] {
        &self.incoming
    }
}
