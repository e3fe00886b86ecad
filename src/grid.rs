//! The probability grid: a scalar field over un-fired cells that drives
//! target selection.
//!
//! Every cell starts at the same baseline. Outcomes adjust scores around
//! the fired cell: misses nudge their 3×3 block up a little while hits
//! boost the four orthogonal neighbors a lot. A sunk ship depresses the
//! 8-neighborhood of its whole run. Scores are relative weights, not
//! probabilities; only their ordering within one decision matters.

use crate::bitgrid::BitGrid;
use crate::common::{LedgerError, TargetError};
use crate::config::{Tuning, BOARD_SIZE};
use crate::ship::Coord;

const N: usize = BOARD_SIZE as usize;

type Mask = BitGrid<u128, N>;

/// Scalar field over the cells of the board under attack.
#[derive(Debug, Clone)]
pub struct ProbabilityGrid {
    scores: [[f32; N]; N],
    /// Cells still in the Unknown state. Closed cells keep their last
    /// score but are never updated or selected again.
    open: Mask,
    tuning: Tuning,
}

impl ProbabilityGrid {
    pub fn new(tuning: Tuning) -> Self {
        ProbabilityGrid {
            scores: [[tuning.baseline; N]; N],
            open: Mask::filled(),
            tuning,
        }
    }

    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// Number of cells still selectable.
    pub fn open_cells(&self) -> usize {
        self.open.count_ones()
    }

    pub fn is_open(&self, coord: Coord) -> bool {
        self.open.get(coord.row(), coord.col()).unwrap_or(false)
    }

    /// Score of a cell, open or closed. Exposed for inspection and tests;
    /// selection only ever reads open cells.
    pub fn score(&self, coord: Coord) -> f32 {
        self.scores[coord.row()][coord.col()]
    }

    /// A miss closes the fired cell and nudges the surrounding 3×3 block
    /// up: a miss weakly suggests the opponent was screening a nearby
    /// ship edge.
    pub fn on_miss(&mut self, coord: Coord) -> Result<(), LedgerError> {
        self.close(coord)?;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if let Some(n) = coord.offset(dr, dc) {
                    self.bump(n, self.tuning.miss_nudge);
                }
            }
        }
        Ok(())
    }

    /// A hit closes the fired cell and boosts the four orthogonal
    /// neighbors: the ship's remaining segments lie on one of the two
    /// lines through the hit, never diagonally.
    pub fn on_hit(&mut self, coord: Coord) -> Result<(), LedgerError> {
        self.close(coord)?;
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            if let Some(n) = coord.offset(dr, dc) {
                self.bump(n, self.tuning.hit_boost);
            }
        }
        Ok(())
    }

    /// A sunk ship closes its terminal cell (the rest of the run was
    /// closed by the earlier hits) and depresses every open cell touching
    /// the run, diagonals included. Scores clamp at zero.
    pub fn on_sunk(&mut self, terminal: Coord, run: &[Coord]) -> Result<(), LedgerError> {
        self.close(terminal)?;
        for cell in run {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if let Some(n) = cell.offset(dr, dc) {
                        self.bump(n, -self.tuning.sink_penalty);
                    }
                }
            }
        }
        Ok(())
    }

    /// Greedy target selection: the open cell with the maximum score,
    /// ties broken by raster order (lowest row, then lowest column) so
    /// that identical histories always produce identical shots.
    pub fn best_cell(&self) -> Result<Coord, TargetError> {
        let mut best: Option<(Coord, f32)> = None;
        for (r, c) in self.open.iter_ones() {
            let coord = Coord::new(r as u8, c as u8).map_err(|_| TargetError::NoCellsRemaining)?;
            let score = self.scores[r][c];
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((coord, score)),
            }
        }
        best.map(|(coord, _)| coord)
            .ok_or(TargetError::NoCellsRemaining)
    }

    fn close(&mut self, coord: Coord) -> Result<(), LedgerError> {
        let (r, c) = (coord.row(), coord.col());
        if !self.open.get(r, c).unwrap_or(false) {
            return Err(LedgerError::AlreadyResolved);
        }
        let _ = self.open.unset(r, c);
        Ok(())
    }

    /// Adjust an open cell's score, clamping at zero. Closed cells are
    /// locked and ignored.
    fn bump(&mut self, coord: Coord, delta: f32) {
        let (r, c) = (coord.row(), coord.col());
        if self.open.get(r, c).unwrap_or(false) {
            self.scores[r][c] = (self.scores[r][c] + delta).max(0.0);
        }
    }
}
