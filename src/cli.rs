//! Terminal front end helpers: coordinate notation and board rendering.

use std::fmt::Write;

use crate::{
    board::{Board, Cell},
    common::Coordinate,
    config::BOARD_SIZE,
};

/// Format a coordinate in board notation, e.g. `(4, 0)` as `A5`.
pub fn coord_to_string(coord: Coordinate) -> String {
    if !coord.in_bounds() {
        return coord.to_string();
    }
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

/// Parse board notation (`A5`, `j10`) into a zero-based coordinate.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let mut chars = input.trim().chars();
    let letter = match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() => ch.to_ascii_uppercase(),
        Some(ch) => return Err(format!("'{}' is not a column letter; try something like B7", ch)),
        None => return Err("no target given; try something like B7".to_string()),
    };
    let col = i32::from(letter as u8 - b'A');
    if col >= BOARD_SIZE as i32 {
        return Err(format!("column {} is off the board (A-J)", letter));
    }

    let digits = chars.as_str().trim();
    if digits.is_empty() {
        return Err(format!("missing row number after column {}", letter));
    }
    let row: i32 = digits
        .parse()
        .map_err(|_| format!("'{}' is not a row number (1-10)", digits))?;
    if !(1..=BOARD_SIZE as i32).contains(&row) {
        return Err(format!("row {} is off the board (1-10)", row));
    }
    Ok(Coordinate::new(row - 1, col))
}

/// Draw `board` as text. Hits are `X`, misses `o`; ships show as `S` only
/// when `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c) as char);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE as i32 {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE as i32 {
            let coord = Coordinate::new(r, c);
            let ch = match board.cell(coord) {
                Some(Cell::Occupied { attacked: true, .. }) => 'X',
                Some(Cell::Occupied { .. }) if reveal => 'S',
                _ if board.is_attacked(coord) => 'o',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}
