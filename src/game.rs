//! Game state and lifecycle.
//!
//! Owns the seating order of hands and the round counter, drives rounds
//! through the phase functions in [`crate::round`], and answers the
//! termination and winner queries. The game never self-terminates;
//! callers poll [`Game::is_game_over`] after each round and stop
//! playing turns once it reports true.

use crate::dice::Die;
use crate::hand::{Hand, HandError};
use crate::random::RandomSource;
use crate::round;

/// A complete game: hands in seating order plus the round counter.
///
/// Seating order is insertion order and defines both display order and
/// who receives each hand's transferred dice.
#[derive(Debug, Clone, Default)]
pub struct Game {
    hands: Vec<Hand>,
    rounds: u32,
}

impl Game {
    /// Creates a game with no players.
    pub fn new() -> Self {
        Game::default()
    }

    /// Creates a game of `player_count` hands holding `dice_per_player`
    /// dice each.
    ///
    /// Starting dice carry face 1; they are always rolled before being
    /// read, so the starting face is never observed.
    pub fn setup(player_count: usize, dice_per_player: usize) -> Result<Game, HandError> {
        let mut game = Game::new();
        for _ in 0..player_count {
            let mut hand = Hand::new();
            for _ in 0..dice_per_player {
                hand.add_die(Die::new(1))?;
            }
            game.hands.push(hand);
        }
        Ok(game)
    }

    /// Appends hands to the seating order, preserving their order.
    pub fn add_players<I: IntoIterator<Item = Hand>>(&mut self, hands: I) {
        self.hands.extend(hands);
    }

    /// Rolls every hand's dice and counts the round.
    ///
    /// Kept separate from [`Game::evaluate`] so callers can print the
    /// post-roll, pre-scoring state.
    pub fn play_turn<R: RandomSource>(&mut self, rng: &mut R) {
        round::roll_phase(&mut self.hands, rng);
        self.rounds += 1;
    }

    /// Scores, transfers, and commits for every hand. Does not count a
    /// round; counting happens in [`Game::play_turn`].
    pub fn evaluate(&mut self) -> Result<(), HandError> {
        round::score_phase(&mut self.hands)?;
        round::commit_phase(&mut self.hands);
        Ok(())
    }

    /// Plays one full round, counting it once.
    pub fn play_turn_and_evaluate<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), HandError> {
        round::play_round(&mut self.hands, rng)?;
        self.rounds += 1;
        Ok(())
    }

    /// True when fewer than two hands still hold dice.
    pub fn is_game_over(&self) -> bool {
        self.hands.iter().filter(|h| h.dice_count() > 0).count() < 2
    }

    /// Seating indexes of the hands that still hold dice.
    pub fn remaining_player_indexes(&self) -> Vec<usize> {
        self.hands
            .iter()
            .enumerate()
            .filter(|(_, h)| h.dice_count() > 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Seating indexes of every hand holding the maximum points.
    ///
    /// With no positive score anywhere the maximum is 0 and every seat
    /// is returned.
    pub fn winning_player_indexes(&self) -> Vec<usize> {
        let max = self.hands.iter().map(Hand::points).max().unwrap_or(0);
        self.hands
            .iter()
            .enumerate()
            .filter(|(_, h)| h.points() == max)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of rounds played so far.
    pub fn round_count(&self) -> u32 {
        self.rounds
    }

    /// The hands in seating order.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    fn hand_with(values: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &v in values {
            hand.add_die(Die::new(v)).unwrap();
        }
        hand
    }

    fn values(hand: &Hand) -> Vec<u8> {
        hand.dice().iter().map(|d| d.value()).collect()
    }

    #[test]
    fn setup_builds_requested_hands() {
        let game = Game::setup(3, 4).unwrap();
        assert_eq!(game.hands().len(), 3);
        for hand in game.hands() {
            assert_eq!(hand.dice_count(), 4);
            assert_eq!(hand.points(), 0);
        }
    }

    #[test]
    fn add_players_preserves_seating_order() {
        let mut game = Game::new();
        game.add_players([hand_with(&[2]), hand_with(&[5]), hand_with(&[4])]);
        assert_eq!(values(&game.hands()[0]), vec![2]);
        assert_eq!(values(&game.hands()[1]), vec![5]);
        assert_eq!(values(&game.hands()[2]), vec![4]);
    }

    #[test]
    fn play_turn_rolls_and_counts() {
        let mut game = Game::setup(2, 2).unwrap();
        let mut rng = ScriptedSource::new(&[2, 1, 5, 0]);
        game.play_turn(&mut rng);
        assert_eq!(game.round_count(), 1);
        assert_eq!(values(&game.hands()[0]), vec![3, 2]);
        assert_eq!(values(&game.hands()[1]), vec![6, 1]);
    }

    #[test]
    fn evaluate_scores_and_transfers_without_counting() {
        let mut game = Game::new();
        game.add_players([hand_with(&[3, 2]), hand_with(&[6, 1])]);
        game.evaluate().unwrap();
        assert_eq!(game.round_count(), 0);
        assert_eq!(values(&game.hands()[0]), vec![3, 2, 1]);
        assert_eq!(game.hands()[0].points(), 0);
        assert_eq!(values(&game.hands()[1]), Vec::<u8>::new());
        assert_eq!(game.hands()[1].points(), 1);
    }

    #[test]
    fn play_turn_and_evaluate_counts_once() {
        let mut game = Game::setup(2, 2).unwrap();
        let mut rng = ScriptedSource::new(&[2, 1, 5, 0]);
        game.play_turn_and_evaluate(&mut rng).unwrap();
        assert_eq!(game.round_count(), 1);
        assert_eq!(values(&game.hands()[0]), vec![3, 2, 1]);
        assert_eq!(values(&game.hands()[1]), Vec::<u8>::new());
        assert_eq!(game.hands()[1].points(), 1);
    }

    #[test]
    fn game_is_on_while_two_hands_hold_dice() {
        let mut game = Game::new();
        game.add_players([hand_with(&[2, 2]), hand_with(&[3])]);
        assert!(!game.is_game_over());
    }

    #[test]
    fn game_is_over_with_one_or_zero_stocked_hands() {
        let mut one_left = Game::new();
        one_left.add_players([hand_with(&[2, 2]), Hand::new()]);
        assert!(one_left.is_game_over());

        let mut none_left = Game::new();
        none_left.add_players([Hand::new(), Hand::new()]);
        assert!(none_left.is_game_over());

        assert!(Game::new().is_game_over());
    }

    #[test]
    fn remaining_player_indexes_in_seating_order() {
        let mut game = Game::new();
        game.add_players([hand_with(&[2]), Hand::new(), hand_with(&[4])]);
        assert_eq!(game.remaining_player_indexes(), vec![0, 2]);
    }

    #[test]
    fn winning_player_indexes_includes_ties() {
        let mut game = Game::new();
        let mut hands = Vec::new();
        for points in [3u32, 2, 3] {
            let mut hand = Hand::new();
            for _ in 0..points {
                hand.add_die(Die::new(6)).unwrap();
            }
            hand.extract_scoring();
            hands.push(hand);
        }
        game.add_players(hands);
        assert_eq!(game.winning_player_indexes(), vec![0, 2]);
    }

    #[test]
    fn winning_player_indexes_all_zero_scores() {
        let mut game = Game::new();
        game.add_players([Hand::new(), Hand::new(), Hand::new()]);
        assert_eq!(game.winning_player_indexes(), vec![0, 1, 2]);
    }

    #[test]
    fn seeded_game_runs_to_completion() {
        let mut game = Game::setup(3, 4).unwrap();
        let mut rng = crate::random::SeededSource::new(9);
        let mut rounds = 0;
        while !game.is_game_over() {
            game.play_turn_and_evaluate(&mut rng).unwrap();
            rounds += 1;
            assert!(rounds < 100_000, "game failed to terminate");
        }
        assert_eq!(game.round_count(), rounds);
        assert!(game.remaining_player_indexes().len() <= 1);
        assert!(!game.winning_player_indexes().is_empty());
        // Pending buffers must be empty at every round boundary.
        for hand in game.hands() {
            assert!(hand.pending_incoming().is_empty());
        }
    }
}
