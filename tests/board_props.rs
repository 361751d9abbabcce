use battleship_hunt::{AttackResult, Board, BoardError, Cell, Coordinate, Orientation, Ship};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    board
}

fn occupied_count(board: &Board) -> usize {
    Coordinate::all()
        .filter(|c| matches!(board.cell(*c), Some(Cell::Occupied { .. })))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sunk_exactly_after_length_hits(length in 1usize..8, extra in 0usize..4) {
        let mut ship = Ship::new(length);
        for _ in 0..length {
            prop_assert!(!ship.is_sunk());
            ship.hit();
        }
        for _ in 0..extra {
            prop_assert!(ship.is_sunk());
            ship.hit();
        }
        prop_assert!(ship.is_sunk());
    }

    #[test]
    fn valid_placement_covers_contiguous_row(row in 0i32..10, col in 0i32..10, length in 1usize..=10) {
        let mut board = Board::new();
        let result = board.place_ship(Coordinate::new(row, col), length);
        if col + length as i32 > 10 {
            prop_assert_eq!(result, Err(BoardError::OutOfBounds));
            prop_assert_eq!(board, Board::new());
        } else {
            let id = result.unwrap();
            prop_assert_eq!(occupied_count(&board), length);
            for i in 0..length {
                prop_assert_eq!(
                    board.cell(Coordinate::new(row, col + i as i32)),
                    Some(Cell::Occupied { ship: id, index: i, attacked: false })
                );
            }
        }
    }

    #[test]
    fn off_grid_rows_rejected(row in prop_oneof![-20i32..0, 10i32..30], col in 0i32..8) {
        let mut board = Board::new();
        prop_assert_eq!(board.place_ship(Coordinate::new(row, col), 2), Err(BoardError::OutOfBounds));
        prop_assert_eq!(board, Board::new());
    }

    #[test]
    fn overlap_never_changes_board(
        seed in any::<u64>(),
        row in 0i32..10,
        col in 0i32..10,
        length in 1usize..6,
        vertical in any::<bool>(),
    ) {
        let mut board = random_board(seed);
        let before = board.clone();
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        match board.place_ship_oriented(Coordinate::new(row, col), length, orientation) {
            Ok(_) => prop_assert_eq!(occupied_count(&board), occupied_count(&before) + length),
            Err(_) => prop_assert_eq!(board, before),
        }
    }

    #[test]
    fn attack_hits_or_logs_miss(seed in any::<u64>(), row in 0i32..10, col in 0i32..10) {
        let mut board = random_board(seed);
        let coord = Coordinate::new(row, col);
        let misses_before = board.missed_attacks().len();
        let ships_before = board.ships().to_vec();
        let result = board.receive_attack(coord);
        match board.ship_at(coord) {
            Some((id, ship)) => {
                prop_assert!(result.is_hit());
                prop_assert_eq!(ship.hit_count(), ships_before[id].hit_count() + 1);
                prop_assert_eq!(board.missed_attacks().len(), misses_before);
            }
            None => {
                prop_assert_eq!(result, AttackResult::Miss);
                prop_assert_eq!(board.missed_attacks().last(), Some(&coord));
                prop_assert_eq!(board.missed_attacks().len(), misses_before + 1);
                prop_assert_eq!(board.ships(), &ships_before[..]);
            }
        }
    }

    #[test]
    fn all_sunk_matches_ship_states(seed in any::<u64>(), shots in proptest::collection::vec((0i32..10, 0i32..10), 0..100)) {
        let mut board = random_board(seed);
        for (r, c) in shots {
            board.receive_attack(Coordinate::new(r, c));
        }
        let expected = board.ships().iter().all(|s| s.hit_count() >= s.length());
        prop_assert_eq!(board.all_ships_sunk(), expected);
        // hit counts agree with attacked cells
        for (id, ship) in board.ships().iter().enumerate() {
            let attacked = board
                .ship_cells(id)
                .filter(|c| matches!(board.cell(*c), Some(Cell::Occupied { attacked: true, .. })))
                .count();
            prop_assert_eq!(ship.hit_count(), attacked);
        }
    }
}
