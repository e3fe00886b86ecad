//! Append-only record of every shot the engine has fired.
//!
//! The ledger is the authoritative answer to "has (row, col) been fired
//! upon" and the source the sink-attribution pass reads when a kill
//! report arrives.

use alloc::vec::Vec;

use crate::common::{CellState, LedgerError, Outcome};
use crate::config::{BOARD_SIZE, MAX_SHIP_LEN};
use crate::ship::{Coord, ShipKind};

const N: usize = BOARD_SIZE as usize;

/// One fired shot and its outcome as reported at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub coord: Coord,
    pub outcome: Outcome,
}

/// Ordered shot history plus the current per-cell state it implies.
///
/// History entries are never rewritten; reclassifying a Hit as Sunk
/// happens in the per-cell table only, so the exact reported sequence
/// stays replayable.
#[derive(Debug, Clone, Default)]
pub struct ShotLedger {
    history: Vec<ShotRecord>,
    cells: [[CellState; N]; N],
}

impl ShotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a cell.
    pub fn cell(&self, coord: Coord) -> CellState {
        self.cells[coord.row()][coord.col()]
    }

    /// True once the cell has any recorded outcome.
    pub fn is_resolved(&self, coord: Coord) -> bool {
        self.cell(coord).is_resolved()
    }

    /// The full shot history, oldest first.
    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    pub fn shots_fired(&self) -> usize {
        self.history.len()
    }

    /// Append a shot outcome. Firing twice at the same cell is a caller
    /// bug: the entry is rejected with `DuplicateShot` and nothing
    /// changes.
    ///
    /// For `Sunk(kind)` the contiguous run of unattributed Hit cells
    /// through the terminal cell is promoted to `Sunk(kind)` in the same
    /// call; the promoted run (terminal included) is returned so the
    /// probability grid can depress its surroundings. `Miss` and `Hit`
    /// return an empty run.
    pub fn record(
        &mut self,
        coord: Coord,
        outcome: Outcome,
    ) -> Result<SunkRun, LedgerError> {
        if self.is_resolved(coord) {
            return Err(LedgerError::DuplicateShot);
        }
        self.history.push(ShotRecord { coord, outcome });
        match outcome {
            Outcome::Miss => {
                self.cells[coord.row()][coord.col()] = CellState::Miss;
                Ok(SunkRun::empty())
            }
            Outcome::Hit => {
                self.cells[coord.row()][coord.col()] = CellState::Hit;
                Ok(SunkRun::empty())
            }
            Outcome::Sunk(kind) => {
                self.cells[coord.row()][coord.col()] = CellState::Hit;
                let run = self.attribute_sink(coord, kind);
                for &cell in run.cells() {
                    self.cells[cell.row()][cell.col()] = CellState::Sunk(kind);
                }
                Ok(run)
            }
        }
    }

    /// Find the contiguous line of unattributed Hit cells, terminal
    /// included, that the sunk ship occupied. The axis whose run length
    /// matches the ship's length wins; horizontal wins a tie. If neither
    /// axis matches (an inconsistent report from the outer game), only
    /// the terminal cell is attributed; stray hits stay unattributed
    /// rather than being guessed onto the wrong ship.
    fn attribute_sink(&self, terminal: Coord, kind: ShipKind) -> SunkRun {
        let len = kind.length();
        let (h_start, h_len) = self.run_extent(terminal, 0, 1);
        let (v_start, v_len) = self.run_extent(terminal, 1, 0);
        let (start, dr, dc) = if h_len == len {
            (h_start, 0, 1)
        } else if v_len == len {
            (v_start, 1, 0)
        } else {
            let mut run = SunkRun::empty();
            run.push(terminal);
            return run;
        };

        let mut run = SunkRun::empty();
        let mut cursor = Some(start);
        while let Some(cell) = cursor {
            run.push(cell);
            if run.len == len {
                break;
            }
            cursor = cell.offset(dr, dc);
        }
        run
    }

    /// Extent of the contiguous Hit run through `terminal` along the
    /// (dr, dc) axis: its lowest cell and total length. The terminal cell
    /// is in the plain Hit state while this runs, so it always counts.
    fn run_extent(&self, terminal: Coord, dr: i8, dc: i8) -> (Coord, usize) {
        let mut start = terminal;
        while let Some(prev) = start.offset(-dr, -dc) {
            if self.cell(prev) != CellState::Hit {
                break;
            }
            start = prev;
        }
        let mut len = 1;
        let mut cursor = start;
        while let Some(next) = cursor.offset(dr, dc) {
            if self.cell(next) != CellState::Hit {
                break;
            }
            cursor = next;
            len += 1;
        }
        (start, len)
    }
}

/// The cells of a sunk ship, ordered along its axis. Fixed capacity:
/// no ship is longer than the Carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunkRun {
    cells: [Coord; MAX_SHIP_LEN],
    len: usize,
}

impl SunkRun {
    fn empty() -> Self {
        SunkRun {
            cells: [Coord::ORIGIN; MAX_SHIP_LEN],
            len: 0,
        }
    }

    fn push(&mut self, coord: Coord) {
        if self.len < MAX_SHIP_LEN {
            self.cells[self.len] = coord;
            self.len += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells[..self.len]
    }
}
