//! Batch simulation CLI.
//!
//! Plays many dice games and outputs one JSON record per game (JSONL).
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --games N        Number of games to play (default: 10)
//!   --players N      Players per game (default: 4)
//!   --dice N         Starting dice per player (default: 6)
//!   --max-rounds N   Forced cutoff per game (default: 10000)
//!   --threads N      Number of parallel threads (default: 4)
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::time::Instant;

use dadu::simulate::{self, SimulateConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SimulateConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.games = parse_value(&args, i, "--games");
            }
            "--players" => {
                i += 1;
                config.players = parse_value(&args, i, "--players");
            }
            "--dice" => {
                i += 1;
                config.dice_per_player = parse_value(&args, i, "--dice");
            }
            "--max-rounds" => {
                i += 1;
                config.max_rounds = parse_value(&args, i, "--max-rounds");
            }
            "--threads" => {
                i += 1;
                config.threads = parse_value(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                output_path = Some(required_value(&args, i, "--output").to_string());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    config.quiet = quiet;

    if config.players == 0 || config.dice_per_player == 0 {
        eprintln!("--players and --dice must be positive");
        process::exit(1);
    }

    if !quiet {
        eprintln!(
            "Simulating {} games: {} players, {} dice each, {} threads, seed {}",
            config.games, config.players, config.dice_per_player, config.threads, config.seed
        );
    }

    let start = Instant::now();
    let records = simulate::run_simulations(&config);
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Completed {} games in {:.2}s",
            records.len(),
            elapsed.as_secs_f64()
        );
        simulate::print_summary(&records);
    }

    let result = match output_path {
        Some(path) => {
            let file = match File::create(&path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("failed to create {}: {}", path, e);
                    process::exit(1);
                }
            };
            let mut writer = BufWriter::new(file);
            let written = simulate::write_jsonl(&records, &mut writer);
            if written.is_ok() && !quiet {
                eprintln!("Wrote {} records to {}", records.len(), path);
            }
            written
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            simulate::write_jsonl(&records, &mut writer)
        }
    };

    if let Err(e) = result {
        eprintln!("failed to write output: {}", e);
        process::exit(1);
    }
}

fn required_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v,
        None => {
            eprintln!("missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = required_value(args, i, flag);
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid {} value: {}", flag, raw);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: simulate [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --players N      Players per game (default: 4)");
    eprintln!("  --dice N         Starting dice per player (default: 6)");
    eprintln!("  --max-rounds N   Forced cutoff per game (default: 10000)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}
