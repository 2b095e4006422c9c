//! Turn state machine over the board graph.
//!
//! Serializes the select/commit cycle for one game: validates selections
//! against the side to move, stores the active resolution, performs the
//! committed relocation and capture inside an explicit `Committing` phase,
//! checks terminal conditions in rule order, and flips the side. Illegal
//! input is answered with a quiet `false`; only invariant breakage panics.

use crate::board::board_graph::Board;
use crate::board::board_types::{CellId, Coordinate, Side};
use crate::game::game_events::GameEvent;
use crate::rules::move_resolver::{resolve_moves, Resolution};

/// Engine phase. `Committing` is the blocking relocation window: while a
/// commit is in flight no new selection or commit is accepted, it is
/// rejected rather than queued. `GameEnded` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected,
    Committing,
    GameEnded,
}

#[derive(Debug, Clone)]
struct Selection {
    origin: CellId,
    resolution: Resolution,
}

#[derive(Debug, Clone)]
pub struct TurnEngine {
    board: Board,
    side_to_move: Side,
    phase: Phase,
    selection: Option<Selection>,
    winner: Option<Side>,
    events: Vec<GameEvent>,
}

impl TurnEngine {
    /// Fresh game on the standard 12-per-side setup, Black to move.
    pub fn new() -> Self {
        Self::from_position(Board::standard(), Side::Black)
    }

    /// Game over an arbitrary position. Used by scenario tests and by
    /// replay sessions that start from a recorded setup.
    pub fn from_position(board: Board, side_to_move: Side) -> Self {
        board.debug_assert_consistent();
        Self {
            board,
            side_to_move,
            phase: Phase::AwaitingSelection,
            selection: None,
            winner: None,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[inline]
    pub fn live_count(&self, side: Side) -> u8 {
        self.board.live_count(side)
    }

    /// Drain buffered events in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Legal destinations for the piece on `coordinate` this turn. Empty for
    /// off-board coordinates, empty cells, and opposing pieces: only the
    /// current side's own occupied cells are selectable.
    pub fn legal_destinations(&self, coordinate: Coordinate) -> Vec<Coordinate> {
        if self.phase == Phase::GameEnded {
            return Vec::new();
        }
        let Some(origin) = self.selectable_cell(coordinate) else {
            return Vec::new();
        };
        resolve_moves(&self.board, origin)
            .destinations
            .iter()
            .map(|&id| self.board.coordinate_of(id))
            .collect()
    }

    /// Select the piece on `coordinate` for the side to move.
    ///
    /// Returns `false` and clears any stale selection when the cell is
    /// empty, off the board, or held by the idle side; a rejected click is
    /// normal input, never an error. Selecting another own piece replaces
    /// the previous selection. Returns `true` even when the piece has no
    /// destinations; such a selection is acknowledged but cannot commit.
    pub fn select(&mut self, coordinate: Coordinate) -> bool {
        match self.phase {
            Phase::GameEnded | Phase::Committing => return false,
            Phase::AwaitingSelection | Phase::PieceSelected => {}
        }

        let Some(origin) = self.selectable_cell(coordinate) else {
            self.selection = None;
            self.phase = Phase::AwaitingSelection;
            self.events.push(GameEvent::SelectionRejected { at: coordinate });
            return false;
        };

        let resolution = resolve_moves(&self.board, origin);
        self.events.push(GameEvent::PieceSelected {
            origin: coordinate,
            destinations: resolution
                .destinations
                .iter()
                .map(|&id| self.board.coordinate_of(id))
                .collect(),
        });

        if resolution.is_empty() {
            // Acknowledged, but with zero options nothing can be committed.
            self.selection = None;
            self.phase = Phase::AwaitingSelection;
        } else {
            self.selection = Some(Selection { origin, resolution });
            self.phase = Phase::PieceSelected;
        }
        true
    }

    /// Commit the current selection to `coordinate`.
    ///
    /// Valid only with a live selection and a destination from its
    /// resolution; anything else returns `false` with no state change. A
    /// successful jump commit removes exactly the piece on the crossed
    /// cell. Terminal checks run in rule order: far back rank first, then
    /// the opponent running out of pieces; otherwise the side flips.
    pub fn commit(&mut self, coordinate: Coordinate) -> bool {
        if self.phase != Phase::PieceSelected {
            return false;
        }
        let Some(destination) = self.board.cell_id(coordinate) else {
            return false;
        };
        let Some(selection) = self.selection.as_ref() else {
            debug_assert!(false, "PieceSelected phase without a stored selection");
            return false;
        };
        if !selection.resolution.permits(destination) {
            return false;
        }

        // Relocation window: nothing else may drive the engine until the
        // move and any capture have fully landed.
        self.phase = Phase::Committing;
        let selection = self.selection.take().unwrap_or_else(|| {
            unreachable!("selection vanished while committing")
        });

        let origin_coordinate = self.board.coordinate_of(selection.origin);
        let destination_coordinate = self.board.coordinate_of(destination);
        self.board.relocate_piece(selection.origin, destination);

        let captured = if origin_coordinate.is_jump_apart(destination_coordinate) {
            Some(self.capture_jumped_piece(&selection, origin_coordinate, destination_coordinate))
        } else {
            None
        };
        self.board.debug_assert_consistent();

        self.events.push(GameEvent::MoveCommitted {
            origin: origin_coordinate,
            destination: destination_coordinate,
            captured,
        });

        let mover = self.side_to_move;
        if destination_coordinate.y == mover.back_rank() {
            // Reaching the far rank wins outright, before piece counts are
            // even considered.
            self.end_game(mover);
        } else if self.board.live_count(mover.opposite()) == 0 {
            self.end_game(mover);
        } else {
            self.side_to_move = mover.opposite();
            self.phase = Phase::AwaitingSelection;
            self.events.push(GameEvent::TurnFlipped {
                side: self.side_to_move,
            });
        }
        true
    }

    fn capture_jumped_piece(
        &mut self,
        selection: &Selection,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Coordinate {
        let crossed = origin.jump_midpoint(destination);
        let crossed_id = self
            .board
            .cell_id(crossed)
            .unwrap_or_else(|| unreachable!("jump midpoint off the board"));
        debug_assert!(
            selection.resolution.capture_candidates.contains(&crossed_id),
            "jump crossed a cell that was never a capture candidate"
        );
        let removed = self.board.remove_piece(crossed_id);
        debug_assert!(removed.is_some(), "jump crossed an empty cell");
        crossed
    }

    fn end_game(&mut self, winner: Side) {
        self.winner = Some(winner);
        self.phase = Phase::GameEnded;
        self.events.push(GameEvent::GameEnded { winner });
    }

    /// The cell id behind `coordinate` when it holds a piece of the side to
    /// move, `None` for everything else.
    fn selectable_cell(&self, coordinate: Coordinate) -> Option<CellId> {
        let id = self.board.cell_id(coordinate)?;
        let piece_id = self.board.cell(id).piece()?;
        if self.board.piece(piece_id).side == self.side_to_move {
            Some(id)
        } else {
            None
        }
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}
