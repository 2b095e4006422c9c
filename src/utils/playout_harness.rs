//! Seeded random playout harness for local testing and benchmarks.
//!
//! Drives a `TurnEngine` with uniformly random legal selections until the
//! game ends or a ply bound is hit, recording the command log as it goes.
//! There is no evaluation anywhere; this exists so round-trip and soak tests
//! have reproducible full games to chew on.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::board_types::{Coordinate, Side, BOARD_COLS, BOARD_ROWS};
use crate::command_log::log_writer::LogWriter;
use crate::game::turn_engine::TurnEngine;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 1234,
            max_plies: 256,
        }
    }
}

/// How a playout stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutResult {
    Winner(Side),
    /// The side to move had no legal destinations anywhere. The rules leave
    /// such a game stuck, so the harness stops and reports it.
    NoMoves(Side),
    PlyBound,
}

#[derive(Debug)]
pub struct PlayoutOutcome {
    pub engine: TurnEngine,
    pub log_text: String,
    pub plies: u16,
    pub result: PlayoutResult,
}

impl PlayoutOutcome {
    /// One-line human-readable summary for harness output.
    pub fn report(&self) -> String {
        format!(
            "plies {} result {:?} black {} white {}",
            self.plies,
            self.result,
            self.engine.live_count(Side::Black),
            self.engine.live_count(Side::White),
        )
    }
}

/// Play one seeded random game from the standard setup.
pub fn run_playout(config: &PlayoutConfig) -> PlayoutOutcome {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut engine = TurnEngine::new();
    let mut writer = LogWriter::new(engine.side_to_move());
    let mut plies = 0u16;

    let result = loop {
        if let Some(winner) = engine.winner() {
            break PlayoutResult::Winner(winner);
        }
        if plies >= config.max_plies {
            break PlayoutResult::PlyBound;
        }

        let options = movable_pieces(&engine);
        if options.is_empty() {
            break PlayoutResult::NoMoves(engine.side_to_move());
        }

        let (origin, destinations) = &options[rng.random_range(0..options.len())];
        let destination = destinations[rng.random_range(0..destinations.len())];

        let selected = engine.select(*origin);
        debug_assert!(selected, "movable piece refused selection");
        let committed = engine.commit(destination);
        debug_assert!(committed, "resolved destination refused commit");

        writer.observe_all(&engine.drain_events());
        plies += 1;
    };

    writer.observe_all(&engine.drain_events());

    PlayoutOutcome {
        engine,
        log_text: writer.to_text(),
        plies,
        result,
    }
}

/// Every piece of the side to move that has at least one destination.
fn movable_pieces(engine: &TurnEngine) -> Vec<(Coordinate, Vec<Coordinate>)> {
    let mut options = Vec::new();
    for y in 0..BOARD_ROWS {
        for x in 0..BOARD_COLS {
            let coordinate = Coordinate::new(x, y);
            let destinations = engine.legal_destinations(coordinate);
            if !destinations.is_empty() {
                options.push((coordinate, destinations));
            }
        }
    }
    options
}
