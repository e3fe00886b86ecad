//! Common types shared across the engine: shot outcomes and error enums.

use crate::ship::ShipKind;

/// Result of a shot as reported back by the defending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that still has unresolved segments.
    Hit,
    /// Shot hit the last remaining segment of the named ship.
    Sunk(ShipKind),
}

/// State of a single cell on the board under attack.
///
/// Transitions are strictly one-directional: `Unknown -> Miss` (terminal)
/// or `Unknown -> Hit -> Sunk(kind)`. A cell never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Unknown,
    Miss,
    Hit,
    Sunk(ShipKind),
}

impl CellState {
    /// True once the cell has been fired upon, in any outcome.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, CellState::Unknown)
    }
}

/// Errors from fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A coordinate or ship footprint falls outside the 10x10 grid.
    OutOfBounds,
    /// The footprint intersects an already-placed ship.
    Overlap,
    /// The fleet already holds a placement for this ship kind.
    ShipAlreadyPlaced,
    /// No valid position could be found (random placement gave up).
    UnableToPlaceShip,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "placement is out of bounds"),
            PlacementError::Overlap => write!(f, "placement overlaps another ship"),
            PlacementError::ShipAlreadyPlaced => write!(f, "ship is already placed"),
            PlacementError::UnableToPlaceShip => write!(f, "unable to place ship"),
        }
    }
}

/// Errors from recording shot outcomes.
///
/// Both variants indicate a caller bug rather than a runtime condition:
/// the engine never selects a resolved cell itself, so a duplicate report
/// means the outer loop lost track of its own turns. Fail fast, never
/// retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// The coordinate already has a ledger entry.
    DuplicateShot,
    /// An update was requested for a cell no longer in the unknown set.
    AlreadyResolved,
}

impl core::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedgerError::DuplicateShot => write!(f, "coordinate was already fired upon"),
            LedgerError::AlreadyResolved => write!(f, "cell is already resolved"),
        }
    }
}

/// Errors from target selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    /// Every cell has been fired upon. The outer loop should have ended
    /// the game via fleet-sunk detection before this can happen.
    NoCellsRemaining,
}

impl core::fmt::Display for TargetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TargetError::NoCellsRemaining => write!(f, "no unresolved cells remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for LedgerError {}
#[cfg(feature = "std")]
impl std::error::Error for TargetError {}
