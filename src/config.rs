use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Length used when a ship is created without an explicit size.
pub const DEFAULT_SHIP_LENGTH: usize = 3;

pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

