//! Ship damage tracking and fleet entry definitions.

use crate::config::DEFAULT_SHIP_LENGTH;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship afloat on a board. It only knows how long it is and how many
/// times it has been struck; the board owns where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    length: usize,
    hit_count: usize,
}

impl Ship {
    /// Create an undamaged ship of the given length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            hit_count: 0,
        }
    }

    /// Record one more hit. Hits past `length` are counted but never change
    /// the sunk state back.
    pub fn hit(&mut self) {
        self.hit_count = self.hit_count.saturating_add(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_count >= self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new(DEFAULT_SHIP_LENGTH)
    }
}

impl From<ShipType> for Ship {
    fn from(def: ShipType) -> Self {
        Self::new(def.length())
    }
}
