use log::debug;

use crate::{
    ai::HuntTargetAi,
    board::Board,
    common::{AttackResult, Coordinate},
    game::GameStatus,
};

/// What an attack targeted and what came of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    /// The coordinate actually fired at. For a computer player this is the
    /// cell its targeting chose, not the one passed in.
    pub coordinate: Coordinate,
    pub result: AttackResult,
}

impl AttackReport {
    pub fn is_hit(&self) -> bool {
        self.result.is_hit()
    }
}

/// A participant: owns the board the opponent fires at, and optionally a
/// targeting computer that picks its own shots.
#[derive(Debug, Clone)]
pub struct Player {
    board: Board,
    ai: Option<HuntTargetAi>,
    shots_fired: usize,
}

impl Player {
    /// Player whose shots come from the caller.
    pub fn human() -> Self {
        Self {
            board: Board::new(),
            ai: None,
            shots_fired: 0,
        }
    }

    /// Computer player with reproducible targeting.
    pub fn ai(seed: u64) -> Self {
        Self::with_ai(HuntTargetAi::from_seed(seed))
    }

    pub fn with_ai(ai: HuntTargetAi) -> Self {
        Self {
            board: Board::new(),
            ai: Some(ai),
            shots_fired: 0,
        }
    }

    /// Human or thread-seeded computer player.
    #[cfg(feature = "std")]
    pub fn new(is_ai: bool) -> Self {
        if is_ai {
            Self::with_ai(HuntTargetAi::from_entropy())
        } else {
            Self::human()
        }
    }

    pub fn is_ai(&self) -> bool {
        self.ai.is_some()
    }

    /// This player's own waters.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for placing ships and for the opponent's attacks.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn targeting(&self) -> Option<&HuntTargetAi> {
        self.ai.as_ref()
    }

    /// Valid attacks so far.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Legal iff `coord` is on the grid and has never been fired at on
    /// `enemy`, whether it missed or struck a ship.
    pub fn is_valid_attack(&self, coord: Coordinate, enemy: &Board) -> bool {
        enemy.is_untried(coord)
    }

    /// Fire at `enemy`. A computer player ignores `coord` and picks its own
    /// target. Illegal attacks leave `enemy` untouched and report
    /// [`AttackResult::Rejected`].
    pub fn attack(&mut self, coord: Coordinate, enemy: &mut Board) -> AttackReport {
        let target = match self.ai.as_mut() {
            Some(ai) => match ai.next_target(enemy) {
                Some(target) => target,
                None => {
                    return AttackReport {
                        coordinate: coord,
                        result: AttackResult::Rejected,
                    }
                }
            },
            None => coord,
        };

        if !self.is_valid_attack(target, enemy) {
            debug!("rejected attack at {}", target);
            return AttackReport {
                coordinate: target,
                result: AttackResult::Rejected,
            };
        }

        let result = enemy.receive_attack(target);
        if let Some(ai) = self.ai.as_mut() {
            ai.record_result(target, result);
        }
        self.shots_fired += 1;
        AttackReport {
            coordinate: target,
            result,
        }
    }

    /// Outcome from this player's point of view. The enemy board is checked
    /// first. A board with no ships counts as fully sunk.
    pub fn check_for_winner(&self, enemy: &Board) -> GameStatus {
        if enemy.all_ships_sunk() {
            GameStatus::Won
        } else if self.board.all_ships_sunk() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Discard targeting state, e.g. when a new game starts against a fresh
    /// board.
    pub fn reset_targeting(&mut self) {
        if let Some(ai) = self.ai.as_mut() {
            ai.reset();
        }
    }
}
