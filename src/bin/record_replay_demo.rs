//! Standalone record-and-replay demonstration.
//!
//! Run with:
//! `cargo run --bin record_replay_demo`
//! `cargo run --bin record_replay_demo -- --seed 42`
//!
//! Plays one seeded random game, prints the recorded command log, replays it
//! into a fresh engine, and verifies both boards agree.

use std::time::Duration;

use damson_draughts::command_log::replay_driver::ReplayDriver;
use damson_draughts::game::turn_engine::TurnEngine;
use damson_draughts::utils::playout_harness::{run_playout, PlayoutConfig};
use damson_draughts::utils::render_board::render_board;

fn main() -> Result<(), String> {
    let seed = parse_seed_arg()?;

    let outcome = run_playout(&PlayoutConfig {
        seed,
        ..PlayoutConfig::default()
    });
    println!("live game: {}", outcome.report());
    println!("{}", render_board(outcome.engine.board()));
    println!("\nrecorded log ({} lines):", outcome.log_text.lines().count());
    print!("{}", outcome.log_text);

    let mut replayed = TurnEngine::new();
    let report = ReplayDriver::new(Duration::ZERO)
        .run(&mut replayed, &outcome.log_text)
        .map_err(|e| e.to_string())?;
    println!("\nreplayed {} records", report.applied);
    println!("{}", render_board(replayed.board()));

    if render_board(replayed.board()) != render_board(outcome.engine.board()) {
        return Err("replayed board diverged from the live game".to_owned());
    }
    if replayed.winner() != outcome.engine.winner() {
        return Err("replayed winner diverged from the live game".to_owned());
    }
    println!("\nreplay matches the live game");
    Ok(())
}

fn parse_seed_arg() -> Result<u64, String> {
    let args: Vec<String> = std::env::args().collect();
    match args.iter().position(|a| a == "--seed") {
        None => Ok(PlayoutConfig::default().seed),
        Some(index) => args
            .get(index + 1)
            .ok_or("--seed requires a value".to_owned())?
            .parse::<u64>()
            .map_err(|e| format!("invalid --seed value: {e}")),
    }
}
