use core::fmt;

use log::info;
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    common::{AttackResult, BoardError, Coordinate},
    player::{AttackReport, Player},
};

/// Current status of a game, from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Seat at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Errors from driving a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A winner has already been decided.
    GameOver,
    /// At least one side has no ships placed.
    NotReady,
    /// An automatic turn was requested while a human is to move.
    AwaitingHuman,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::NotReady => write!(f, "Both players must place ships before attacking"),
            GameError::AwaitingHuman => write!(f, "It is a human player's turn"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Outcome of one call to [`GameSession::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub attacker: Side,
    pub attack: AttackReport,
    /// Status from the attacker's point of view after the attack.
    pub status: GameStatus,
}

/// One game between two players: whose turn it is and whether someone has
/// won. Each session is independent, so any number can run side by side.
#[derive(Debug, Clone)]
pub struct GameSession {
    first: Player,
    second: Player,
    turn: Side,
    winner: Option<Side>,
    turns_played: usize,
}

impl GameSession {
    /// Seat two players. Ships are placed through [`GameSession::player_mut`]
    /// before the first turn.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            first,
            second,
            turn: Side::First,
            winner: None,
            turns_played: 0,
        }
    }

    /// Human (first) against the computer, both fleets placed at random.
    pub fn versus_computer(seed: u64) -> Result<Self, BoardError> {
        Self::with_random_fleets(Player::human(), Player::ai(seed), seed)
    }

    /// Two computer players, both fleets placed at random.
    pub fn computer_vs_computer(seed: u64) -> Result<Self, BoardError> {
        Self::with_random_fleets(Player::ai(seed), Player::ai(seed.wrapping_add(1)), seed)
    }

    fn with_random_fleets(mut first: Player, mut second: Player, seed: u64) -> Result<Self, BoardError> {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(0x5eed));
        first.board_mut().place_fleet_randomly(&mut rng)?;
        second.board_mut().place_fleet_randomly(&mut rng)?;
        Ok(Self::new(first, second))
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    /// Side to move next.
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Valid attacks made by both sides.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Let the side to move fire at `coord` (ignored for a computer player).
    /// The turn passes only when the attack was legal; a rejected attack
    /// leaves the same side to move.
    pub fn play_turn(&mut self, coord: Coordinate) -> Result<TurnReport, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if self.first.board().ships().is_empty() || self.second.board().ships().is_empty() {
            return Err(GameError::NotReady);
        }

        let side = self.turn;
        let (attacker, defender) = match side {
            Side::First => (&mut self.first, &mut self.second),
            Side::Second => (&mut self.second, &mut self.first),
        };
        let attack = attacker.attack(coord, defender.board_mut());
        let status = attacker.check_for_winner(defender.board());

        if attack.result != AttackResult::Rejected {
            self.turns_played += 1;
            self.turn = side.opponent();
        }
        match status {
            GameStatus::Won => self.winner = Some(side),
            GameStatus::Lost => self.winner = Some(side.opponent()),
            GameStatus::InProgress => {}
        }
        if let Some(winner) = self.winner {
            info!("{:?} player wins after {} turns", winner, self.turns_played);
            // Targeting state is scoped to this game's boards.
            self.first.reset_targeting();
            self.second.reset_targeting();
        }

        Ok(TurnReport {
            attacker: side,
            attack,
            status,
        })
    }

    /// Play the turn of a computer player.
    pub fn play_auto_turn(&mut self) -> Result<TurnReport, GameError> {
        if !self.player(self.turn).is_ai() {
            return Err(GameError::AwaitingHuman);
        }
        // The coordinate is ignored for computer players.
        self.play_turn(Coordinate::new(0, 0))
    }
}
