//! Textual presentation of game state.
//!
//! Renders hands and reports in the exact Indonesian format the game's
//! output consumers expect. All writers take an injected `Write` sink;
//! the game core itself never prints.

use std::io::{self, Write};

use crate::game::Game;
use crate::hand::Hand;

/// Separator line printed between rounds and before the final report.
pub const SEPARATOR: &str = "==================";

/// Renders one hand as `Pemain #<n> (<points>): <dice>`.
///
/// `index` is the 0-based seating index; output is 1-based. An empty
/// hand renders the stopped-playing marker instead of dice values.
pub fn format_hand(index: usize, hand: &Hand) -> String {
    let mut line = format!("Pemain #{} ({}): ", index + 1, hand.points());
    if hand.dice_count() == 0 {
        line.push_str("_ (Berhenti bermain karena tidak memiliki dadu)");
        return line;
    }
    for (i, die) in hand.dice().iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&die.to_string());
    }
    line
}

/// Writes one tab-indented hand line per player, in seating order.
pub fn write_standings<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    for (index, hand) in game.hands().iter().enumerate() {
        writeln!(out, "\t{}", format_hand(index, hand))?;
    }
    Ok(())
}

/// Writes the post-roll heading for the current round plus standings.
pub fn write_roll_report<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    writeln!(out, "Giliran {} lempar dadu:", game.round_count())?;
    write_standings(game, out)
}

/// Writes the post-evaluation heading plus standings.
pub fn write_evaluation_report<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    writeln!(out, "Setelah evaluasi:")?;
    write_standings(game, out)
}

/// Writes the end-of-game report: who still holds dice and who won.
///
/// Every qualifying seat is reported; ties and a zero-remaining finish
/// are rendered instead of assuming a single index.
pub fn write_final_report<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    let remaining = game.remaining_player_indexes();
    match remaining.len() {
        0 => writeln!(
            out,
            "Game berakhir karena tidak ada pemain yang memiliki dadu."
        )?,
        _ => writeln!(
            out,
            "Game berakhir karena hanya pemain {} yang memiliki dadu.",
            player_list(&remaining)
        )?,
    }

    let winners = game.winning_player_indexes();
    if winners.len() == 1 {
        writeln!(
            out,
            "Game dimenangkan oleh pemain {} karena memiliki poin lebih banyak dari pemain lainnya.",
            player_list(&winners)
        )?;
    } else {
        writeln!(
            out,
            "Game dimenangkan bersama oleh pemain {} karena memiliki poin yang sama banyak.",
            player_list(&winners)
        )?;
    }
    Ok(())
}

/// Joins seating indexes as `#1, #3`, 1-based.
fn player_list(indexes: &[usize]) -> String {
    let mut s = String::new();
    for (i, index) in indexes.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        s.push('#');
        s.push_str(&(index + 1).to_string());
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Die;

    fn hand_with(scored: u32, values: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for _ in 0..scored {
            hand.add_die(Die::new(6)).unwrap();
        }
        hand.extract_scoring();
        for &v in values {
            hand.add_die(Die::new(v)).unwrap();
        }
        hand
    }

    #[test]
    fn format_hand_with_dice() {
        let hand = hand_with(2, &[2]);
        assert_eq!(format_hand(0, &hand), "Pemain #1 (2): 2");
    }

    #[test]
    fn format_hand_several_dice() {
        let hand = hand_with(3, &[3, 6, 1, 3]);
        assert_eq!(format_hand(1, &hand), "Pemain #2 (3): 3,6,1,3");
    }

    #[test]
    fn format_hand_empty() {
        let hand = hand_with(4, &[]);
        assert_eq!(
            format_hand(0, &hand),
            "Pemain #1 (4): _ (Berhenti bermain karena tidak memiliki dadu)"
        );
    }

    #[test]
    fn standings_are_tabbed_lines_in_seating_order() {
        let mut game = Game::new();
        game.add_players([hand_with(2, &[2]), hand_with(3, &[5]), hand_with(4, &[5])]);
        let mut out = Vec::new();
        write_standings(&game, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\tPemain #1 (2): 2\n\tPemain #2 (3): 5\n\tPemain #3 (4): 5\n"
        );
    }

    #[test]
    fn final_report_single_winner() {
        let mut game = Game::new();
        game.add_players([hand_with(1, &[4]), hand_with(3, &[])]);
        let mut out = Vec::new();
        write_final_report(&game, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Game berakhir karena hanya pemain #1 yang memiliki dadu.\n\
             Game dimenangkan oleh pemain #2 karena memiliki poin lebih banyak dari pemain lainnya.\n"
        );
    }

    #[test]
    fn final_report_tied_winners() {
        let mut game = Game::new();
        game.add_players([hand_with(3, &[2]), hand_with(3, &[]), hand_with(1, &[])]);
        let mut out = Vec::new();
        write_final_report(&game, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Game dimenangkan bersama oleh pemain #1, #2"));
    }

    #[test]
    fn final_report_nobody_left() {
        let mut game = Game::new();
        game.add_players([hand_with(2, &[]), hand_with(2, &[])]);
        let mut out = Vec::new();
        write_final_report(&game, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Game berakhir karena tidak ada pemain yang memiliki dadu.\n"));
    }
}
