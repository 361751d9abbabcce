use battleship_hunt::{AttackResult, Coordinate, GameStatus, Phase, Player};

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_valid_attack_bounds() {
    let player = Player::human();
    let enemy = Player::human();
    assert!(player.is_valid_attack(at(0, 0), enemy.board()));
    assert!(player.is_valid_attack(at(9, 9), enemy.board()));
    assert!(!player.is_valid_attack(at(-1, 0), enemy.board()));
    assert!(!player.is_valid_attack(at(0, 10), enemy.board()));
    assert!(!player.is_valid_attack(at(10, 3), enemy.board()));
}

#[test]
fn test_repeat_attacks_rejected() {
    let mut player = Player::human();
    let mut enemy = Player::human();
    enemy.board_mut().place_ship(at(0, 0), 3).unwrap();

    let report = player.attack(at(5, 5), enemy.board_mut());
    assert_eq!(report.result, AttackResult::Miss);
    assert!(!player.is_valid_attack(at(5, 5), enemy.board()));

    let report = player.attack(at(0, 1), enemy.board_mut());
    assert_eq!(report.result, AttackResult::Hit);
    assert!(!player.is_valid_attack(at(0, 1), enemy.board()));
    // occupied but untouched cells stay fair game
    assert!(player.is_valid_attack(at(0, 2), enemy.board()));
}

#[test]
fn test_rejected_attack_mutates_nothing() {
    let mut player = Player::human();
    let mut enemy = Player::human();
    enemy.board_mut().place_ship(at(2, 2), 2).unwrap();
    player.attack(at(2, 2), enemy.board_mut());
    player.attack(at(7, 7), enemy.board_mut());
    let before = enemy.board().clone();

    for coord in [at(2, 2), at(7, 7), at(-3, 4), at(4, 10)] {
        let report = player.attack(coord, enemy.board_mut());
        assert_eq!(report.result, AttackResult::Rejected);
        assert!(!report.is_hit());
    }
    assert_eq!(enemy.board(), &before);
    assert_eq!(enemy.board().missed_attacks(), &[at(7, 7)]);
    assert_eq!(player.shots_fired(), 2);
}

#[test]
fn test_end_to_end_sinking() {
    let mut player = Player::human();
    let mut enemy = Player::human();
    enemy.board_mut().place_ship(at(0, 0), 3).unwrap();

    let miss = player.attack(at(5, 5), enemy.board_mut());
    assert!(!miss.is_hit());
    assert_eq!(enemy.board().missed_attacks(), &[Coordinate { row: 5, col: 5 }]);

    assert!(player.attack(at(0, 0), enemy.board_mut()).is_hit());
    assert!(player.attack(at(0, 1), enemy.board_mut()).is_hit());
    let last = player.attack(at(0, 2), enemy.board_mut());
    assert_eq!(last.result, AttackResult::Sunk);
    assert!(enemy.board().ships()[0].is_sunk());
}

#[test]
fn test_winner_and_loser() {
    let mut attacker = Player::human();
    let mut defender = Player::human();
    attacker.board_mut().place_ship(at(0, 0), 5).unwrap();
    defender.board_mut().place_ship(at(3, 0), 4).unwrap();

    assert_eq!(attacker.check_for_winner(defender.board()), GameStatus::InProgress);
    assert_eq!(defender.check_for_winner(attacker.board()), GameStatus::InProgress);

    for col in 0..4 {
        attacker.attack(at(3, col), defender.board_mut());
    }
    assert_eq!(attacker.check_for_winner(defender.board()), GameStatus::Won);
    assert_eq!(defender.check_for_winner(attacker.board()), GameStatus::Lost);
}

#[test]
fn test_enemy_board_checked_first() {
    let mut a = Player::human();
    let mut b = Player::human();
    a.board_mut().place_ship(at(0, 0), 1).unwrap();
    b.board_mut().place_ship(at(0, 0), 1).unwrap();
    a.attack(at(0, 0), b.board_mut());
    b.attack(at(0, 0), a.board_mut());
    assert_eq!(a.check_for_winner(b.board()), GameStatus::Won);
    assert_eq!(b.check_for_winner(a.board()), GameStatus::Won);
}

#[test]
fn test_ai_ignores_supplied_coordinates() {
    let mut ai = Player::ai(7);
    let mut enemy = Player::human();
    enemy.board_mut().place_ship(at(0, 0), 2).unwrap();
    assert!(ai.is_ai());

    // the off-grid input is replaced by the AI's own pick
    for _ in 0..10 {
        let report = ai.attack(at(-5, -5), enemy.board_mut());
        assert_ne!(report.result, AttackResult::Rejected);
        assert!(report.coordinate.in_bounds());
    }
    assert_eq!(ai.shots_fired(), 10);
    let tried = 100 - enemy.board().untried_cells().count();
    assert_eq!(tried, 10);
}

#[test]
fn test_ai_rejects_when_board_exhausted() {
    let mut ai = Player::ai(1);
    let mut enemy = Player::human();
    for _ in 0..100 {
        ai.attack(at(0, 0), enemy.board_mut());
    }
    let report = ai.attack(at(0, 0), enemy.board_mut());
    assert_eq!(report.result, AttackResult::Rejected);
    assert_eq!(enemy.board().missed_attacks().len(), 100);
}

#[test]
fn test_targeting_state_and_reset() {
    let mut ai = Player::ai(3);
    let mut enemy = Player::human();
    for row in 0..10 {
        enemy.board_mut().place_ship(at(row, 0), 10).unwrap();
    }
    assert!(Player::human().targeting().is_none());
    assert_eq!(ai.targeting().map(|t| t.phase()), Some(Phase::Hunt));

    // every cell is occupied, so the first shot hits
    assert_eq!(ai.attack(at(0, 0), enemy.board_mut()).result, AttackResult::Hit);
    let targeting = ai.targeting().unwrap();
    assert_eq!(targeting.phase(), Phase::Target);
    assert_eq!(targeting.active_hits().len(), 1);

    ai.reset_targeting();
    let targeting = ai.targeting().unwrap();
    assert_eq!(targeting.phase(), Phase::Hunt);
    assert!(targeting.active_hits().is_empty());
    assert!(targeting.potential_targets().is_empty());
}
