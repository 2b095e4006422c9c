//! Per-selection legal move resolution.
//!
//! Walks the selected piece's forward diagonal neighbors, classifies them
//! into simple destinations and opponent-held capture candidates, and scans
//! the cells beyond each candidate for a free jump landing. Jump geometry is
//! the exact two-step diagonal offset test, so a single-step move and a jump
//! can never be confused.

use crate::board::board_graph::Board;
use crate::board::board_types::CellId;

/// Outcome of resolving one selection.
///
/// `destinations` is the complete legal move set for the selection.
/// `capture_candidates` lists every opponent piece at risk: a forward
/// opponent neighbor that has at least one forward continuation cell,
/// whether or not that continuation was free this turn. At most one
/// candidate is actually removed, by the commit that lands beyond it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub destinations: Vec<CellId>,
    pub capture_candidates: Vec<CellId>,
}

impl Resolution {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    #[inline]
    pub fn permits(&self, destination: CellId) -> bool {
        self.destinations.contains(&destination)
    }
}

/// Compute the legal destinations for the piece on `origin`.
///
/// The caller guarantees `origin` holds a piece of the side to move; the
/// resolver only assumes it. An empty result is a valid "no-op selection".
pub fn resolve_moves(board: &Board, origin: CellId) -> Resolution {
    let Some(piece_id) = board.cell(origin).piece() else {
        debug_assert!(false, "resolver called on an empty cell");
        return Resolution::default();
    };
    let side = board.piece(piece_id).side;
    let origin_coordinate = board.coordinate_of(origin);

    let mut resolution = Resolution::default();
    let mut opponent_neighbors = Vec::with_capacity(2);

    for neighbor in board.forward_neighbors(origin, side) {
        match board.cell(neighbor).piece() {
            None => resolution.destinations.push(neighbor),
            Some(blocker) if board.piece(blocker).side != side => {
                opponent_neighbors.push(neighbor);
            }
            // A forward neighbor held by an own piece is a dead end.
            Some(_) => {}
        }
    }

    for candidate in opponent_neighbors {
        let continuations = board.forward_neighbors(candidate, side);
        for landing in &continuations {
            let landing_coordinate = board.coordinate_of(*landing);
            if board.cell(*landing).is_empty()
                && origin_coordinate.is_jump_apart(landing_coordinate)
            {
                resolution.destinations.push(*landing);
            }
        }
        // The candidate is recorded whenever it has any forward continuation
        // at all, even one that is currently occupied.
        if !continuations.is_empty() {
            resolution.capture_candidates.push(candidate);
        }
    }

    resolution
}
