//! Interactive elimination dice game.
//!
//! Reads the player count and dice-per-player count from stdin, plays
//! the game to completion, and prints the round-by-round report: every
//! round shows the hands after rolling and again after evaluation, and
//! the run ends with who still held dice and who won.
//!
//! Usage:
//!   dadu [--seed N]
//!
//! With `--seed N` (nonzero) the run is reproducible; otherwise dice
//! are rolled from entropy.

use std::io::{self, BufWriter, Read, Write};
use std::process;

use dadu::display;
use dadu::game::Game;
use dadu::random::SeededSource;

fn main() {
    let seed = match parse_seed() {
        Ok(seed) => seed,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    };

    let (players, dice) = match read_counts() {
        Ok(counts) => counts,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    };

    let mut rng = match seed {
        0 => SeededSource::from_entropy(),
        s => SeededSource::new(s),
    };

    let mut game = match Game::setup(players, dice) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("failed to set up game: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    run(&mut game, &mut rng, &mut out).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    if let Err(e) = out.flush() {
        eprintln!("failed to write output: {}", e);
        process::exit(1);
    }
}

/// Plays the game loop, printing the two-step report each round.
fn run<W: Write>(
    game: &mut Game,
    rng: &mut SeededSource,
    out: &mut W,
) -> Result<(), String> {
    writeln!(
        out,
        "Pemain = {}, Dadu = {}",
        game.hands().len(),
        game.hands().first().map_or(0, |h| h.dice_count())
    )
    .map_err(write_error)?;

    while !game.is_game_over() {
        writeln!(out, "{}", display::SEPARATOR).map_err(write_error)?;
        game.play_turn(rng);
        display::write_roll_report(game, out).map_err(write_error)?;
        game.evaluate()
            .map_err(|e| format!("internal error during evaluation: {}", e))?;
        display::write_evaluation_report(game, out).map_err(write_error)?;
    }

    writeln!(out, "{}", display::SEPARATOR).map_err(write_error)?;
    display::write_final_report(game, out).map_err(write_error)
}

fn write_error(e: io::Error) -> String {
    format!("failed to write output: {}", e)
}

/// Parses an optional `--seed N` argument.
fn parse_seed() -> Result<u64, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut seed = 0u64;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| "missing value for --seed".to_string())?;
                seed = value
                    .parse()
                    .map_err(|_| format!("invalid --seed value: {}", value))?;
            }
            "--help" | "-h" => {
                eprintln!("Usage: dadu [--seed N]");
                eprintln!();
                eprintln!("Reads two positive integers from stdin:");
                eprintln!("  <players> <dice per player>");
                process::exit(0);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(seed)
}

/// Reads the player and dice counts: two whitespace-separated positive
/// integers on stdin.
fn read_counts() -> Result<(usize, usize), String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("failed to read input: {}", e))?;

    let mut tokens = input.split_whitespace();
    let players = parse_count(tokens.next(), "player count")?;
    let dice = parse_count(tokens.next(), "dice count")?;
    Ok((players, dice))
}

fn parse_count(token: Option<&str>, what: &str) -> Result<usize, String> {
    let token = token.ok_or_else(|| format!("missing {}", what))?;
    let value: usize = token
        .parse()
        .map_err(|_| format!("invalid {}: {}", what, token))?;
    if value == 0 {
        return Err(format!("{} must be positive", what));
    }
    Ok(value)
}
