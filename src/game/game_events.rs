//! Observable game deltas emitted by the turn engine.
//!
//! Collaborators (highlight rendering, the command-log writer, UI glue)
//! consume these as drained values rather than registered callbacks. Per
//! commit the engine guarantees `MoveCommitted` is observed before the
//! follow-up `TurnFlipped` or `GameEnded`.

use crate::board::board_types::{Coordinate, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A selection was accepted. `destinations` may be empty: a selection
    /// with zero options is still acknowledged, it just cannot be committed.
    PieceSelected {
        origin: Coordinate,
        destinations: Vec<Coordinate>,
    },
    /// A click on an empty cell or an opposing piece. Collaborators clear
    /// any stale highlight; nothing else changes.
    SelectionRejected { at: Coordinate },
    MoveCommitted {
        origin: Coordinate,
        destination: Coordinate,
        captured: Option<Coordinate>,
    },
    TurnFlipped { side: Side },
    GameEnded { winner: Side },
}
