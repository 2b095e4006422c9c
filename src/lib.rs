//! Crate root module declarations for the Damson Draughts rule engine.
//!
//! This file exposes all top-level subsystems (board graph, move resolution,
//! the turn state machine, and the command-log protocol) so binaries, tests,
//! and external tooling can import stable module paths.

pub mod board {
    pub mod board_graph;
    pub mod board_types;
}

pub mod rules {
    pub mod move_resolver;
}

pub mod game {
    pub mod game_events;
    pub mod turn_engine;
}

pub mod command_log {
    pub mod log_record;
    pub mod log_writer;
    pub mod replay_driver;
}

pub mod utils {
    pub mod coordinate_text;
    pub mod playout_harness;
    pub mod render_board;
}
