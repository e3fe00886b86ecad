//! Fixed game configuration and the heuristic's tuning constants.

use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::PatrolBoat,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Longest ship in the configuration, sizing fixed buffers.
pub const MAX_SHIP_LEN: usize = 5;

/// Score adjustments applied by the probability grid.
///
/// All values are fixed constants rather than anything derived at runtime:
/// replaying the same outcome sequence with the same `Tuning` reproduces
/// every decision exactly. Scores are only ever compared against each other
/// within one decision, so the absolute magnitudes carry no meaning on
/// their own.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    /// Initial score of every cell (uniform, no information).
    pub baseline: f32,
    /// Added to each open cell of the 3x3 block around a miss. A miss
    /// weakly suggests the opponent placed ships nearby, so neighbors are
    /// nudged up, not down. Intentional polarity.
    pub miss_nudge: f32,
    /// Added to the four orthogonal neighbors of a hit.
    pub hit_boost: f32,
    /// Subtracted (clamped at zero) from the 8-neighborhood of a sunk
    /// ship's cells. Players rarely place ships touching.
    pub sink_penalty: f32,
}

impl Tuning {
    pub const DEFAULT: Tuning = Tuning {
        baseline: 0.5,
        miss_nudge: 0.05,
        hit_boost: 0.4,
        sink_penalty: 0.15,
    };
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}
