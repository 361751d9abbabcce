//! Common types for Battleship: coordinates, attack results and board errors.

use core::fmt;

use crate::config::BOARD_SIZE;

const GRID_SIZE: i32 = BOARD_SIZE as i32;

/// A zero-based `(row, col)` grid position.
///
/// Coordinates are signed so that neighbours of edge cells and raw user input
/// can be represented and rejected rather than wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on the 10×10 grid.
    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.row) && (0..GRID_SIZE).contains(&self.col)
    }

    /// Row-major packed index, or `None` off the grid.
    pub fn index(&self) -> Option<usize> {
        if self.in_bounds() {
            Some((self.row * GRID_SIZE + self.col) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize) -> Self {
        let size = BOARD_SIZE as usize;
        Self::new((index / size) as i32, (index % size) as i32)
    }

    /// Orthogonal neighbours in up, down, left, right order. Some may be off
    /// the grid.
    pub fn neighbors(&self) -> [Coordinate; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
        ]
    }

    /// Iterate every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Struck a ship that is still afloat.
    Hit,
    /// Struck the last undamaged segment of a ship.
    Sunk,
    /// Found open water; the coordinate went to the miss log.
    Miss,
    /// Illegal coordinate. Nothing was mutated and no miss was logged.
    Rejected,
}

impl AttackResult {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackResult::Hit | AttackResult::Sunk)
    }
}

/// Errors returned by ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Some cell of the ship would fall outside the grid.
    OutOfBounds,
    /// Some cell of the ship is already occupied.
    Overlap,
    /// Ships must be at least one cell long.
    InvalidLength,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::Overlap => write!(f, "Ship overlaps with another ship"),
            BoardError::InvalidLength => write!(f, "Ship length must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
