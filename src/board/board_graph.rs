//! Board graph: the 8x8 cell arena and the piece arena it indexes into.
//!
//! Cells and pieces reference each other by arena index instead of owning
//! pointers, so the cell/piece back-reference cycle of the rules model never
//! becomes a shared-ownership cycle. All piece mutation funnels through the
//! place/remove/relocate primitives, which keep both directions of the
//! reference in sync.

use crate::board::board_types::{
    CellId, CellShade, Coordinate, Direction, PieceId, Side, ALL_DIRECTIONS, BOARD_COLS, BOARD_ROWS,
};

/// One square of the board. Neighbor links are assigned once at build time;
/// a second configuration attempt is ignored (first write wins).
#[derive(Debug, Clone)]
pub struct Cell {
    pub coordinate: Coordinate,
    pub shade: CellShade,
    piece: Option<PieceId>,
    neighbors: [Option<CellId>; 4],
    linked: bool,
}

impl Cell {
    #[inline]
    pub fn piece(&self) -> Option<PieceId> {
        self.piece
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.index()]
    }
}

/// A piece in the piece arena. Captured pieces are tombstoned in place so
/// `PieceId`s handed out to collaborators stay valid for the whole game.
#[derive(Debug, Clone)]
pub struct Piece {
    pub side: Side,
    cell: CellId,
    alive: bool,
}

impl Piece {
    #[inline]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    pieces: Vec<Piece>,
    live_counts: [u8; 2],
}

impl Board {
    /// Build the cell graph with no pieces: row-major cell creation, shade
    /// assignment, then diagonal neighbor linking with bounds-checked
    /// omission of off-board offsets.
    pub fn empty() -> Self {
        let mut cells = Vec::with_capacity((BOARD_ROWS * BOARD_COLS) as usize);
        for y in 0..BOARD_ROWS {
            for x in 0..BOARD_COLS {
                let coordinate = Coordinate::new(x, y);
                cells.push(Cell {
                    coordinate,
                    shade: CellShade::of(coordinate),
                    piece: None,
                    neighbors: [None; 4],
                    linked: false,
                });
            }
        }

        let mut board = Self {
            cells,
            pieces: Vec::with_capacity(24),
            live_counts: [0; 2],
        };

        for id in 0..board.cells.len() {
            let mut neighbors = [None; 4];
            for direction in ALL_DIRECTIONS {
                let target = board.cells[id].coordinate + direction.offset();
                if target.in_bounds() {
                    neighbors[direction.index()] = board.cell_id(target);
                }
            }
            board.configure_neighbors(id, neighbors);
        }

        board
    }

    /// Build the standard opening position: 12 pieces per side on the dark
    /// cells of each side's three nearest rows, rows 3 and 4 left empty.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for id in 0..board.cells.len() {
            let Coordinate { y, .. } = board.cells[id].coordinate;
            if board.cells[id].shade != CellShade::Dark {
                continue;
            }
            if y <= 2 {
                board.spawn_piece(id, Side::Black);
            } else if y >= BOARD_ROWS - 3 {
                board.spawn_piece(id, Side::White);
            }
        }
        board
    }

    /// First-write-wins neighbor assignment. Re-linking a cell during a live
    /// game must be a no-op.
    pub fn configure_neighbors(&mut self, id: CellId, neighbors: [Option<CellId>; 4]) {
        let cell = &mut self.cells[id];
        if cell.linked {
            return;
        }
        cell.neighbors = neighbors;
        cell.linked = true;
    }

    #[inline]
    pub fn cell_id(&self, coordinate: Coordinate) -> Option<CellId> {
        if !coordinate.in_bounds() {
            return None;
        }
        Some((coordinate.y as usize) * (BOARD_COLS as usize) + coordinate.x as usize)
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    #[inline]
    pub fn coordinate_of(&self, id: CellId) -> Coordinate {
        self.cells[id].coordinate
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<PieceId> {
        self.cell_id(coordinate).and_then(|id| self.cells[id].piece)
    }

    #[inline]
    pub fn neighbor(&self, id: CellId, direction: Direction) -> Option<CellId> {
        self.cells[id].neighbor(direction)
    }

    /// The (up to two) neighbors in `side`'s forward diagonal directions,
    /// missing edge neighbors omitted.
    pub fn forward_neighbors(&self, id: CellId, side: Side) -> Vec<CellId> {
        side.forward_directions()
            .into_iter()
            .filter_map(|direction| self.neighbor(id, direction))
            .collect()
    }

    #[inline]
    pub fn live_count(&self, side: Side) -> u8 {
        self.live_counts[side.index()]
    }

    /// Create a new piece on an empty cell. Setup-time only; during play
    /// pieces are relocated and removed, never created.
    pub fn spawn_piece(&mut self, id: CellId, side: Side) -> PieceId {
        debug_assert!(self.cells[id].piece.is_none(), "spawn onto occupied cell");
        let piece_id = self.pieces.len();
        self.pieces.push(Piece {
            side,
            cell: id,
            alive: true,
        });
        self.cells[id].piece = Some(piece_id);
        self.live_counts[side.index()] += 1;
        piece_id
    }

    /// Tombstone the piece on `id`, clearing both directions of the
    /// back-reference and decrementing its side's live count.
    pub fn remove_piece(&mut self, id: CellId) -> Option<PieceId> {
        let piece_id = self.cells[id].piece.take()?;
        let piece = &mut self.pieces[piece_id];
        debug_assert!(piece.alive && piece.cell == id, "back-reference mismatch");
        piece.alive = false;
        self.live_counts[piece.side.index()] -= 1;
        Some(piece_id)
    }

    /// Move the piece on `from` to the empty cell `to`, keeping the
    /// cell/piece back-references consistent.
    pub fn relocate_piece(&mut self, from: CellId, to: CellId) {
        debug_assert!(self.cells[to].piece.is_none(), "relocate onto occupied cell");
        let piece_id = self.cells[from]
            .piece
            .take()
            .unwrap_or_else(|| unreachable!("relocate from empty cell"));
        debug_assert!(self.pieces[piece_id].cell == from, "back-reference mismatch");
        self.pieces[piece_id].cell = to;
        self.cells[to].piece = Some(piece_id);
    }

    /// Debug-build sweep of the bidirectional invariant: every occupied cell
    /// points at a live piece that points back, and live counts agree.
    pub fn debug_assert_consistent(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut counts = [0u8; 2];
        for (id, cell) in self.cells.iter().enumerate() {
            if let Some(piece_id) = cell.piece {
                let piece = &self.pieces[piece_id];
                debug_assert!(piece.alive, "cell {id} references a captured piece");
                debug_assert!(piece.cell == id, "piece back-reference mismatch at cell {id}");
                counts[piece.side.index()] += 1;
            }
        }
        debug_assert!(counts == self.live_counts, "live counts out of sync");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_links_corner_and_center_neighbors() {
        let board = Board::empty();

        let corner = board.cell_id(Coordinate::new(0, 0)).expect("corner exists");
        assert_eq!(
            board.neighbor(corner, Direction::TopRight).map(|id| board.coordinate_of(id)),
            Some(Coordinate::new(1, 1))
        );
        assert_eq!(board.neighbor(corner, Direction::TopLeft), None);
        assert_eq!(board.neighbor(corner, Direction::BottomLeft), None);
        assert_eq!(board.neighbor(corner, Direction::BottomRight), None);

        let center = board.cell_id(Coordinate::new(4, 4)).expect("center exists");
        for direction in ALL_DIRECTIONS {
            let neighbor = board.neighbor(center, direction).expect("center has all neighbors");
            assert_eq!(
                board.coordinate_of(neighbor),
                Coordinate::new(4, 4) + direction.offset()
            );
        }
    }

    #[test]
    fn neighbor_configuration_is_first_write_wins() {
        let mut board = Board::empty();
        let center = board.cell_id(Coordinate::new(4, 4)).expect("center exists");
        let before = board.cell(center).neighbors;

        board.configure_neighbors(center, [None; 4]);

        assert_eq!(board.cell(center).neighbors, before);
    }

    #[test]
    fn standard_setup_places_twelve_per_side_on_dark_cells() {
        let board = Board::standard();
        assert_eq!(board.live_count(Side::Black), 12);
        assert_eq!(board.live_count(Side::White), 12);

        for y in 0..BOARD_ROWS {
            for x in 0..BOARD_COLS {
                let coordinate = Coordinate::new(x, y);
                match board.piece_at(coordinate) {
                    Some(piece_id) => {
                        assert_eq!(CellShade::of(coordinate), CellShade::Dark);
                        let expected = if y <= 2 { Side::Black } else { Side::White };
                        assert!(y <= 2 || y >= 5, "rows 3 and 4 start empty");
                        assert_eq!(board.piece(piece_id).side, expected);
                    }
                    None => {
                        assert!(
                            CellShade::of(coordinate) == CellShade::Light || (3..=4).contains(&y),
                            "dark cell {coordinate} outside the middle rows should hold a piece"
                        );
                    }
                }
            }
        }
        board.debug_assert_consistent();
    }

    #[test]
    fn forward_neighbors_follow_side_direction() {
        let board = Board::empty();
        let origin = board.cell_id(Coordinate::new(2, 2)).expect("cell exists");

        let black: Vec<Coordinate> = board
            .forward_neighbors(origin, Side::Black)
            .into_iter()
            .map(|id| board.coordinate_of(id))
            .collect();
        assert_eq!(black, vec![Coordinate::new(1, 3), Coordinate::new(3, 3)]);

        let white: Vec<Coordinate> = board
            .forward_neighbors(origin, Side::White)
            .into_iter()
            .map(|id| board.coordinate_of(id))
            .collect();
        assert_eq!(white, vec![Coordinate::new(1, 1), Coordinate::new(3, 1)]);

        let edge = board.cell_id(Coordinate::new(0, 0)).expect("corner exists");
        assert_eq!(board.forward_neighbors(edge, Side::Black).len(), 1);
        assert!(board.forward_neighbors(edge, Side::White).is_empty());
    }

    #[test]
    fn relocate_and_remove_keep_back_references_in_sync() {
        let mut board = Board::empty();
        let from = board.cell_id(Coordinate::new(2, 2)).expect("cell exists");
        let to = board.cell_id(Coordinate::new(3, 3)).expect("cell exists");

        let piece_id = board.spawn_piece(from, Side::Black);
        board.relocate_piece(from, to);

        assert!(board.cell(from).is_empty());
        assert_eq!(board.cell(to).piece(), Some(piece_id));
        assert_eq!(board.piece(piece_id).cell(), to);
        board.debug_assert_consistent();

        assert_eq!(board.remove_piece(to), Some(piece_id));
        assert!(board.cell(to).is_empty());
        assert!(!board.piece(piece_id).is_alive());
        assert_eq!(board.live_count(Side::Black), 0);
        assert_eq!(board.remove_piece(to), None);
        board.debug_assert_consistent();
    }
}
