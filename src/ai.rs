// Hunt and target guessing logic against an enemy board.
// The search state lives across turns; the board stays the source of truth
// for which cells were tried and which ships are down.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    board::{Board, Cell},
    common::{AttackResult, Coordinate},
};

/// Line along which the unresolved hits lie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// All unresolved hits share a row.
    Horizontal,
    /// All unresolved hits share a column.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No lead: fire at a random untried cell.
    Hunt,
    /// Probe around hits whose ship is still afloat.
    Target,
}

/// Stateful "hunt and target" opponent for one enemy board.
///
/// Call [`HuntTargetAi::next_target`] once per turn, resolve the attack, then
/// report the outcome with [`HuntTargetAi::record_result`].
#[derive(Debug, Clone)]
pub struct HuntTargetAi {
    rng: SmallRng,
    active_hits: Vec<Coordinate>,
    potential_targets: Vec<Coordinate>,
    last_shot: Option<(Coordinate, Phase)>,
}

impl HuntTargetAi {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            active_hits: Vec::new(),
            potential_targets: Vec::new(),
            last_shot: None,
        }
    }

    /// Deterministic opponent, for tests and reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Opponent seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }

    /// Hits whose ship has not been seen to sink, oldest first.
    pub fn active_hits(&self) -> &[Coordinate] {
        &self.active_hits
    }

    /// Queued candidates; the last one is fired next.
    pub fn potential_targets(&self) -> &[Coordinate] {
        &self.potential_targets
    }

    pub fn phase(&self) -> Phase {
        if self.active_hits.is_empty() && self.potential_targets.is_empty() {
            Phase::Hunt
        } else {
            Phase::Target
        }
    }

    /// Orientation inferred from two or more unresolved hits on one line.
    pub fn axis(&self) -> Option<Axis> {
        let (first, rest) = self.active_hits.split_first()?;
        if rest.is_empty() {
            None
        } else if rest.iter().all(|c| c.row == first.row) {
            Some(Axis::Horizontal)
        } else if rest.iter().all(|c| c.col == first.col) {
            Some(Axis::Vertical)
        } else {
            None
        }
    }

    /// Forget everything learned about the current enemy board.
    pub fn reset(&mut self) {
        self.active_hits.clear();
        self.potential_targets.clear();
        self.last_shot = None;
    }

    /// Bring the search state in line with `board` and return the candidate
    /// queue without firing.
    pub fn pending_targets(&mut self, board: &Board) -> &[Coordinate] {
        self.refresh(board);
        &self.potential_targets
    }

    /// Choose the coordinate to fire at this turn. Returns `None` only when
    /// every cell of `board` has already been attacked.
    pub fn next_target(&mut self, board: &Board) -> Option<Coordinate> {
        self.refresh(board);
        if let Some(target) = self.potential_targets.pop() {
            trace!("target phase: firing at {} ({:?})", target, self.axis());
            self.last_shot = Some((target, Phase::Target));
            return Some(target);
        }

        let untried: Vec<Coordinate> = board.untried_cells().collect();
        if untried.is_empty() {
            return None;
        }
        let target = untried[self.rng.random_range(0..untried.len())];
        trace!("hunt phase: firing at {}", target);
        self.last_shot = Some((target, Phase::Hunt));
        Some(target)
    }

    /// Feed back the outcome of the last attack.
    pub fn record_result(&mut self, coord: Coordinate, result: AttackResult) {
        let phase = match self.last_shot.take() {
            Some((shot, phase)) if shot == coord => phase,
            _ => self.phase(),
        };
        match result {
            AttackResult::Hit | AttackResult::Sunk => {
                if !self.active_hits.contains(&coord) {
                    self.active_hits.push(coord);
                }
                // New information: regenerate from the latest hit next turn.
                self.potential_targets.clear();
            }
            AttackResult::Miss => {
                if phase == Phase::Target
                    && self.potential_targets.is_empty()
                    && !self.active_hits.is_empty()
                {
                    let dropped = self.active_hits.remove(0);
                    debug!("abandoning pursuit of hit at {}", dropped);
                }
            }
            AttackResult::Rejected => {}
        }
    }

    /// Batch mode: keep firing until every ship on `board` is sunk. Returns
    /// the number of shots taken. Not for interactive turns.
    pub fn sink_fleet(&mut self, board: &mut Board) -> usize {
        let mut shots = 0;
        while !board.all_ships_sunk() {
            let Some(target) = self.next_target(board) else {
                break;
            };
            let result = board.receive_attack(target);
            self.record_result(target, result);
            shots += 1;
        }
        shots
    }

    fn refresh(&mut self, board: &Board) {
        let before = self.active_hits.len();
        self.active_hits
            .retain(|c| matches!(board.ship_at(*c), Some((_, ship)) if !ship.is_sunk()));
        if self.active_hits.len() != before {
            debug!("ship sunk, {} unresolved hits remain", self.active_hits.len());
            self.potential_targets.clear();
        }
        self.potential_targets.retain(|c| board.is_untried(*c));
        if self.potential_targets.is_empty() {
            self.expand(board);
        }
        if self.potential_targets.is_empty() {
            self.recover_leads(board);
            self.expand(board);
        }
    }

    /// Rebuild the unresolved hits from the board: every struck segment of a
    /// ship still afloat that has an untried neighbour. Picks up hits that
    /// were abandoned earlier.
    fn recover_leads(&mut self, board: &Board) {
        self.active_hits = Coordinate::all()
            .filter(|c| matches!(board.cell(*c), Some(Cell::Occupied { attacked: true, .. })))
            .filter(|c| matches!(board.ship_at(*c), Some((_, ship)) if !ship.is_sunk()))
            .filter(|c| c.neighbors().iter().any(|n| board.is_untried(*n)))
            .collect();
        if !self.active_hits.is_empty() {
            debug!("resuming pursuit of {} earlier hits", self.active_hits.len());
        }
    }

    /// Generate candidates: along the locked axis past either end of the hit
    /// run, otherwise the untried neighbours of the newest hit that has any.
    fn expand(&mut self, board: &Board) {
        if let Some(axis) = self.axis() {
            let ends = self.axis_ends(axis);
            self.potential_targets
                .extend(ends.into_iter().filter(|c| board.is_untried(*c)));
            if !self.potential_targets.is_empty() {
                return;
            }
        }

        while let Some(&latest) = self.active_hits.last() {
            self.potential_targets
                .extend(latest.neighbors().into_iter().filter(|c| board.is_untried(*c)));
            if !self.potential_targets.is_empty() {
                return;
            }
            // Boxed in on every side.
            self.active_hits.pop();
        }
    }

    fn axis_ends(&self, axis: Axis) -> [Coordinate; 2] {
        let first = self.active_hits[0];
        match axis {
            Axis::Horizontal => {
                let lo = self.active_hits.iter().map(|c| c.col).min().unwrap_or(first.col);
                let hi = self.active_hits.iter().map(|c| c.col).max().unwrap_or(first.col);
                [
                    Coordinate::new(first.row, lo - 1),
                    Coordinate::new(first.row, hi + 1),
                ]
            }
            Axis::Vertical => {
                let lo = self.active_hits.iter().map(|c| c.row).min().unwrap_or(first.row);
                let hi = self.active_hits.iter().map(|c| c.row).max().unwrap_or(first.row);
                [
                    Coordinate::new(lo - 1, first.col),
                    Coordinate::new(hi + 1, first.col),
                ]
            }
        }
    }
}
