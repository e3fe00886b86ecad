//! The targeting engine: one instance per board under attack.
//!
//! The engine owns the probability grid and the shot ledger for the
//! opponent's board. It never sees the opponent's layout; everything it
//! knows arrives through `report_outcome`. The outer game loop drives it
//! turn by turn: `next_shot`, fire, `report_outcome`, repeat, checking
//! `is_fleet_destroyed` between turns.

use alloc::vec::Vec;
use log::debug;

use crate::common::{LedgerError, Outcome, TargetError};
use crate::config::{Tuning, NUM_SHIPS};
use crate::grid::ProbabilityGrid;
use crate::ledger::{ShotLedger, ShotRecord};
use crate::ship::Coord;

/// Decides where to fire next on a single opposing board.
///
/// Explicitly instanced: two engines attacking two boards share nothing,
/// so bot-vs-bot play and parallel test games need no globals and no
/// locks. All calls are synchronous and O(board size).
pub struct TargetEngine {
    grid: ProbabilityGrid,
    ledger: ShotLedger,
    enemy_afloat: [bool; NUM_SHIPS],
}

impl TargetEngine {
    pub fn new(tuning: Tuning) -> Self {
        TargetEngine {
            grid: ProbabilityGrid::new(tuning),
            ledger: ShotLedger::new(),
            enemy_afloat: [true; NUM_SHIPS],
        }
    }

    /// The cell to fire at this turn: the highest-scoring unresolved
    /// cell, ties broken in raster order. Deterministic for a given
    /// outcome history.
    pub fn next_shot(&self) -> Result<Coord, TargetError> {
        let coord = self.grid.best_cell()?;
        debug!(
            "targeting {} ({} cells open, score {:.3})",
            coord,
            self.grid.open_cells(),
            self.grid.score(coord)
        );
        Ok(coord)
    }

    /// Feed back the outcome of the engine's last shot. Must be called
    /// exactly once per fired coordinate, before the next `next_shot`.
    /// A duplicate coordinate is rejected with no state change.
    pub fn report_outcome(&mut self, coord: Coord, outcome: Outcome) -> Result<(), LedgerError> {
        // ledger first: it performs the duplicate check, and a rejected
        // record must leave the grid untouched
        let run = self.ledger.record(coord, outcome)?;
        match outcome {
            Outcome::Miss => self.grid.on_miss(coord)?,
            Outcome::Hit => self.grid.on_hit(coord)?,
            Outcome::Sunk(kind) => {
                self.grid.on_sunk(coord, run.cells())?;
                self.enemy_afloat[kind.index()] = false;
                debug!("sunk enemy {} ({} cells)", kind.name(), run.len());
            }
        }
        Ok(())
    }

    /// Has the engine seen a Sunk report for every ship kind?
    pub fn is_fleet_destroyed(&self) -> bool {
        self.enemy_afloat.iter().all(|afloat| !afloat)
    }

    /// Has this cell already been fired upon?
    pub fn is_resolved(&self, coord: Coord) -> bool {
        self.ledger.is_resolved(coord)
    }

    /// Full shot history, oldest first.
    pub fn history(&self) -> &[ShotRecord] {
        self.ledger.history()
    }

    pub fn shots_fired(&self) -> usize {
        self.ledger.shots_fired()
    }

    /// Number of cells never fired upon.
    pub fn open_cells(&self) -> usize {
        self.grid.open_cells()
    }

    /// Score snapshot of a cell, for debug overlays.
    pub fn score(&self, coord: Coord) -> f32 {
        self.grid.score(coord)
    }

    /// Serializable snapshot: the outcome history plus tuning. The grid
    /// is not stored; replaying the history rebuilds it exactly.
    pub fn state(&self) -> EngineState {
        EngineState {
            tuning: self.grid.tuning(),
            history: self.ledger.history().iter().copied().collect(),
        }
    }

    /// Rebuild an engine from a snapshot by replaying its history.
    /// Fails only if the snapshot itself contains a duplicate coordinate.
    pub fn from_state(state: EngineState) -> Result<Self, LedgerError> {
        let mut engine = TargetEngine::new(state.tuning);
        for record in state.history {
            engine.report_outcome(record.coord, record.outcome)?;
        }
        Ok(engine)
    }
}

impl Default for TargetEngine {
    fn default() -> Self {
        Self::new(Tuning::DEFAULT)
    }
}

/// Snapshot of an engine for the outer application's save/resume.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub tuning: Tuning,
    pub history: Vec<ShotRecord>,
}
