//! Game board: ship placement, attack resolution and fleet status.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::common::{AttackResult, BoardError, Coordinate};
use crate::config::{BOARD_SIZE, FLEET};
use crate::ship::Ship;

const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Attempts made by [`Board::random_placement`] before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// Index of a ship in the board's fleet, in placement order.
pub type ShipId = usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Columns increase, row fixed.
    Horizontal,
    /// Rows increase, column fixed.
    Vertical,
}

/// Occupancy of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied {
        ship: ShipId,
        /// Offset of this cell along the ship, starting at 0.
        index: usize,
        attacked: bool,
    },
}

/// One player's waters: where their ships sit and what has been fired at them.
///
/// The grid is only mutated through [`Board::place_ship`] (and its oriented
/// variant) and [`Board::receive_attack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    ships: Vec<Ship>,
    missed_attacks: Vec<Coordinate>,
    // in-bounds misses, for constant time lookups
    misses: u128,
}

impl Board {
    /// Create an empty board (no ships placed, no attacks received).
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
            ships: Vec::new(),
            missed_attacks: Vec::new(),
            misses: 0,
        }
    }

    /// Place a ship of `length` starting at `origin`, extending horizontally.
    pub fn place_ship(&mut self, origin: Coordinate, length: usize) -> Result<ShipId, BoardError> {
        self.place_ship_oriented(origin, length, Orientation::Horizontal)
    }

    /// Place a ship of `length` starting at `origin` and extending along
    /// `orientation`. The whole span is validated before anything is written,
    /// so a failed placement leaves the board untouched.
    pub fn place_ship_oriented(
        &mut self,
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let span = self.free_span(origin, length, orientation)?;
        let id = self.ships.len();
        self.ships.push(Ship::new(length));
        for (index, cell) in span.into_iter().enumerate() {
            self.cells[cell] = Cell::Occupied {
                ship: id,
                index,
                attacked: false,
            };
        }
        debug!("placed ship {} (length {}) at {} {:?}", id, length, origin, orientation);
        Ok(id)
    }

    /// Packed indices of the cells a ship would cover, provided they are all
    /// on the grid and unoccupied.
    fn free_span(
        &self,
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<usize>, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        let len = i32::try_from(length).map_err(|_| BoardError::OutOfBounds)?;
        let end = match orientation {
            Orientation::Horizontal => Coordinate::new(origin.row, origin.col.saturating_add(len - 1)),
            Orientation::Vertical => Coordinate::new(origin.row.saturating_add(len - 1), origin.col),
        };
        if !origin.in_bounds() || !end.in_bounds() {
            return Err(BoardError::OutOfBounds);
        }

        let mut span = Vec::with_capacity(length);
        for i in 0..len {
            let coord = match orientation {
                Orientation::Horizontal => Coordinate::new(origin.row, origin.col + i),
                Orientation::Vertical => Coordinate::new(origin.row + i, origin.col),
            };
            let idx = coord.index().ok_or(BoardError::OutOfBounds)?;
            if self.cells[idx] != Cell::Empty {
                return Err(BoardError::Overlap);
            }
            span.push(idx);
        }
        Ok(span)
    }

    /// Resolve an incoming attack.
    ///
    /// No legality check happens here: anything that is not an occupied cell,
    /// including off-grid coordinates, is appended to the miss log. Callers
    /// that need validation go through [`crate::Player::attack`].
    pub fn receive_attack(&mut self, coord: Coordinate) -> AttackResult {
        let occupied = coord.index().and_then(|idx| match self.cells[idx] {
            Cell::Occupied { ship, index, attacked } => Some((idx, ship, index, attacked)),
            Cell::Empty => None,
        });

        let Some((idx, ship, index, attacked)) = occupied else {
            self.missed_attacks.push(coord);
            if let Some(idx) = coord.index() {
                self.misses |= 1u128 << idx;
            }
            trace!("attack at {} missed", coord);
            return AttackResult::Miss;
        };

        if attacked {
            // Same segment again: no further damage.
            return AttackResult::Hit;
        }
        self.cells[idx] = Cell::Occupied {
            ship,
            index,
            attacked: true,
        };
        let target = &mut self.ships[ship];
        target.hit();
        if target.is_sunk() {
            debug!("attack at {} sank ship {}", coord, ship);
            AttackResult::Sunk
        } else {
            trace!("attack at {} hit ship {}", coord, ship);
            AttackResult::Hit
        }
    }

    /// Every coordinate that found open water, in the order it was received.
    pub fn missed_attacks(&self) -> &[Coordinate] {
        &self.missed_attacks
    }

    /// `true` when every placed ship is sunk, and vacuously on a board with
    /// no ships.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Occupancy of `coord`, or `None` off the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        coord.index().map(|idx| self.cells[idx])
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// Ships in placement order; a [`ShipId`] indexes this slice.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<(ShipId, &Ship)> {
        match self.cell(coord)? {
            Cell::Occupied { ship, .. } => Some((ship, &self.ships[ship])),
            Cell::Empty => None,
        }
    }

    /// Coordinates covered by ship `id`, in grid order.
    pub fn ship_cells(&self, id: ShipId) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| matches!(cell, Cell::Occupied { ship, .. } if *ship == id))
            .map(|(idx, _)| Coordinate::from_index(idx))
    }

    /// Whether `coord` was already fired upon: a logged miss or a struck
    /// ship segment.
    pub fn is_attacked(&self, coord: Coordinate) -> bool {
        match coord.index() {
            Some(idx) => {
                self.misses & (1u128 << idx) != 0
                    || matches!(self.cells[idx], Cell::Occupied { attacked: true, .. })
            }
            None => self.missed_attacks.contains(&coord),
        }
    }

    /// On the grid and never fired upon.
    pub fn is_untried(&self, coord: Coordinate) -> bool {
        coord.in_bounds() && !self.is_attacked(coord)
    }

    /// All cells that can still be attacked, in row-major order.
    pub fn untried_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |c| !self.is_attacked(*c))
    }

    /// Pick a random origin and orientation where a ship of `length` fits
    /// without overlapping anything already placed.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        if length > BOARD_SIZE as usize {
            return Err(BoardError::OutOfBounds);
        }
        let reach = BOARD_SIZE as i32 - length as i32;
        let last = BOARD_SIZE as i32 - 1;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (last, reach),
                Orientation::Vertical => (reach, last),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_row), rng.random_range(0..=max_col));
            if self.free_span(origin, length, orientation).is_ok() {
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::Overlap)
    }

    /// Place the standard fleet at random positions. Ships placed before a
    /// failure stay on the board.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for def in FLEET.iter() {
            let (origin, orientation) = self.random_placement(rng, def.length())?;
            self.place_ship_oriented(origin, def.length(), orientation)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
