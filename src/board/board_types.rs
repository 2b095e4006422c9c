//! Core board vocabulary shared across the engine.
//!
//! Coordinates, sides, diagonal directions, and the arena index aliases used
//! by the board graph to reference cells and pieces without ownership cycles.

use std::fmt;
use std::ops::{Add, Sub};

pub const BOARD_ROWS: i8 = 8;
pub const BOARD_COLS: i8 = 8;

/// Arena index of a cell in the board's row-major cell vector.
pub type CellId = usize;

/// Arena index of a piece in the board's piece vector. Stable for the whole
/// game; captured pieces are tombstoned, never removed.
pub type PieceId = usize;

/// Board coordinate. `y` grows away from Black's back rank, so Black advances
/// toward `y = 7` and White toward `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i8,
    pub y: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_COLS && self.y >= 0 && self.y < BOARD_ROWS
    }

    /// Exact test for a two-step diagonal offset, the only geometry a jump
    /// landing can have. A single-step move can never satisfy it.
    #[inline]
    pub const fn is_jump_apart(self, other: Coordinate) -> bool {
        (self.x - other.x).abs() == 2 && (self.y - other.y).abs() == 2
    }

    /// Cell crossed by a two-step diagonal jump. Only meaningful when
    /// `is_jump_apart(other)` holds.
    #[inline]
    pub const fn jump_midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coordinate {
    /// The stable external key form, `x:y`, shared with the command log.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Side to move. Fixed per piece for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// The far edge row that ends the game as soon as this side reaches it.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Side::Black => BOARD_ROWS - 1,
            Side::White => 0,
        }
    }

    /// The two diagonal directions this side is allowed to advance in.
    #[inline]
    pub const fn forward_directions(self) -> [Direction; 2] {
        match self {
            Side::Black => [Direction::TopLeft, Direction::TopRight],
            Side::White => [Direction::BottomLeft, Direction::BottomRight],
        }
    }

    /// Player token used by the command-log text format.
    #[inline]
    pub const fn player_token(self) -> &'static str {
        match self {
            Side::Black => "1",
            Side::White => "2",
        }
    }

    #[inline]
    pub fn from_player_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Side::Black),
            "2" => Some(Side::White),
            _ => None,
        }
    }
}

/// Diagonal neighbor slot of a cell. "Top" is toward increasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::TopLeft,
    Direction::TopRight,
    Direction::BottomLeft,
    Direction::BottomRight,
];

impl Direction {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::TopLeft => 0,
            Direction::TopRight => 1,
            Direction::BottomLeft => 2,
            Direction::BottomRight => 3,
        }
    }

    #[inline]
    pub const fn offset(self) -> Coordinate {
        match self {
            Direction::TopLeft => Coordinate::new(-1, 1),
            Direction::TopRight => Coordinate::new(1, 1),
            Direction::BottomLeft => Coordinate::new(-1, -1),
            Direction::BottomRight => Coordinate::new(1, -1),
        }
    }
}

/// Checkerboard shade of a cell. Only dark cells are playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellShade {
    Dark,
    Light,
}

impl CellShade {
    #[inline]
    pub const fn of(coordinate: Coordinate) -> Self {
        if (coordinate.x + coordinate.y) % 2 == 0 {
            CellShade::Dark
        } else {
            CellShade::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_text_form_has_no_padding() {
        assert_eq!(Coordinate::new(0, 7).to_string(), "0:7");
        assert_eq!(Coordinate::new(5, 5).to_string(), "5:5");
    }

    #[test]
    fn jump_geometry_is_exact() {
        let origin = Coordinate::new(2, 2);
        assert!(origin.is_jump_apart(Coordinate::new(4, 4)));
        assert!(origin.is_jump_apart(Coordinate::new(0, 4)));
        assert!(!origin.is_jump_apart(Coordinate::new(3, 3)));
        assert!(!origin.is_jump_apart(Coordinate::new(4, 2)));
        assert_eq!(
            origin.jump_midpoint(Coordinate::new(4, 4)),
            Coordinate::new(3, 3)
        );
    }

    #[test]
    fn sides_advance_toward_opposite_back_ranks() {
        assert_eq!(Side::Black.back_rank(), 7);
        assert_eq!(Side::White.back_rank(), 0);
        for direction in Side::Black.forward_directions() {
            assert_eq!(direction.offset().y, 1);
        }
        for direction in Side::White.forward_directions() {
            assert_eq!(direction.offset().y, -1);
        }
    }

    #[test]
    fn player_tokens_round_trip() {
        assert_eq!(Side::from_player_token("1"), Some(Side::Black));
        assert_eq!(Side::from_player_token("2"), Some(Side::White));
        assert_eq!(Side::from_player_token("3"), None);
        assert_eq!(Side::Black.player_token(), "1");
        assert_eq!(Side::White.player_token(), "2");
    }

    #[test]
    fn dark_cells_have_even_coordinate_sum() {
        assert_eq!(CellShade::of(Coordinate::new(2, 2)), CellShade::Dark);
        assert_eq!(CellShade::of(Coordinate::new(3, 2)), CellShade::Light);
        assert_eq!(CellShade::of(Coordinate::new(0, 0)), CellShade::Dark);
    }
}
