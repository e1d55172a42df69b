//! Batch game simulation.
//!
//! Plays many independent games to completion and records the outcome
//! of each: rounds played, final points, remaining seats, and winners.
//! Games share nothing; each owns its state and its RNG, so batches can
//! run concurrently while every single game stays single-threaded.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use serde::Serialize;

use crate::game::Game;
use crate::random::SeededSource;

/// Configuration for a simulation batch.
#[derive(Clone)]
pub struct SimulateConfig {
    /// Number of games to play.
    pub games: usize,
    /// Players per game.
    pub players: usize,
    /// Starting dice per player.
    pub dice_per_player: usize,
    /// Forced cutoff for pathologically long games.
    pub max_rounds: u32,
    /// Number of parallel threads (1 = sequential).
    pub threads: usize,
    /// Random seed (0 = use entropy). Game `i` plays with `seed + i`.
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        SimulateConfig {
            games: 10,
            players: 4,
            dice_per_player: 6,
            max_rounds: 10_000,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// Outcome of one simulated game.
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    /// Index of the game within the batch.
    pub game_id: usize,
    /// Rounds played before the game ended (or was cut off).
    pub rounds: u32,
    /// True when the game hit `max_rounds` before finishing.
    pub cut_off: bool,
    /// Final points per seat.
    pub points: Vec<u32>,
    /// Seats still holding dice at the end (0-based).
    pub remaining: Vec<usize>,
    /// Seats holding the maximum points (0-based).
    pub winners: Vec<usize>,
}

/// Plays one game to completion (or cutoff) and records the outcome.
fn play_game(config: &SimulateConfig, game_id: usize, rng: &mut SeededSource) -> GameRecord {
    let mut game = Game::setup(config.players, config.dice_per_player)
        .unwrap_or_else(|e| panic!("setup failed for game {}: {}", game_id, e));

    let mut cut_off = false;
    while !game.is_game_over() {
        if game.round_count() >= config.max_rounds {
            cut_off = true;
            break;
        }
        game.play_turn_and_evaluate(rng)
            .unwrap_or_else(|e| panic!("round failed in game {}: {}", game_id, e));
    }

    GameRecord {
        game_id,
        rounds: game.round_count(),
        cut_off,
        points: game.hands().iter().map(|h| h.points()).collect(),
        remaining: game.remaining_player_indexes(),
        winners: game.winning_player_indexes(),
    }
}

/// RNG for one game of the batch: derived from the configured seed, or
/// entropy when no seed was given.
fn game_rng(config: &SimulateConfig, game_id: usize) -> SeededSource {
    if config.seed != 0 {
        SeededSource::new(config.seed.wrapping_add(game_id as u64))
    } else {
        SeededSource::from_entropy()
    }
}

/// Runs the batch, returning one record per game.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_simulations(config: &SimulateConfig) -> Vec<GameRecord> {
    let mut records = Vec::with_capacity(config.games);
    run_simulations_with_callback(config, |record| records.push(record));
    // Parallel runs deliver records in completion order.
    records.sort_by_key(|r| r.game_id);
    records
}

/// Runs the batch, calling `on_game` with each completed record.
pub fn run_simulations_with_callback<F>(config: &SimulateConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_parallel(config, on_game);
    } else {
        run_sequential(config, on_game);
    }
}

fn run_sequential<F>(config: &SimulateConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.games {
        let start = Instant::now();
        let mut rng = game_rng(config, i);
        let record = play_game(config, i, &mut rng);
        if !config.quiet {
            report_progress(config, &record, i + 1, start.elapsed().as_secs_f64());
        }
        on_game(record);
    }
}

/// Parallel batch: plays games concurrently, delivering completed
/// records to the callback over a channel from the worker threads.
fn run_parallel<F>(config: &SimulateConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let start = Instant::now();
                    let mut rng = game_rng(&config_clone, i);
                    let record = play_game(&config_clone, i, &mut rng);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        report_progress(&config_clone, &record, n, start.elapsed().as_secs_f64());
                    }
                    let _ = tx.send(record);
                });
        });
    });

    for record in rx {
        on_game(record);
    }

    handle.join().expect("simulation worker thread panicked");
}

fn report_progress(config: &SimulateConfig, record: &GameRecord, n: usize, elapsed: f64) {
    let outcome = if record.cut_off {
        format!("cut off after {} rounds", record.rounds)
    } else {
        format!(
            "{} rounds, winner(s) {:?}",
            record.rounds, record.winners
        )
    };
    eprintln!("Game {}/{}: {} ({:.2}s)", n, config.games, outcome, elapsed);
}

/// Writes records as JSONL, one JSON object per line.
pub fn write_jsonl<W: Write>(records: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints per-seat win counts and the average game length to stderr.
pub fn print_summary(records: &[GameRecord]) {
    if records.is_empty() {
        return;
    }
    let seats = records.iter().map(|r| r.points.len()).max().unwrap_or(0);
    let mut wins = vec![0usize; seats];
    let mut total_rounds = 0u64;
    for record in records {
        total_rounds += u64::from(record.rounds);
        for &w in &record.winners {
            wins[w] += 1;
        }
    }
    eprintln!("Summary over {} games:", records.len());
    for (seat, count) in wins.iter().enumerate() {
        eprintln!("  Pemain #{}: {} wins", seat + 1, count);
    }
    eprintln!(
        "  Average length: {:.1} rounds",
        total_rounds as f64 / records.len() as f64
    );
}
