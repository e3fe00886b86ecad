#![cfg_attr(not(feature = "std"), no_std)]

//! Heuristic targeting engine for an automated Battleship opponent.
//!
//! The engine decides, each turn, which cell of the opponent's 10×10
//! board to fire at, using only the public information a real player
//! has: prior shot outcomes. A probability grid over un-fired cells is
//! updated incrementally after every outcome and a greedy, deterministic
//! policy picks the highest-scoring cell. No game-tree search, no
//! simulation: every operation is bounded by the board size.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod common;
mod config;
mod engine;
mod fleet;
mod grid;
mod ledger;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use bitgrid::{BitGrid, IndexOutOfBounds};
pub use common::*;
pub use config::*;
pub use engine::{EngineState, TargetEngine};
pub use fleet::Fleet;
pub use grid::ProbabilityGrid;
pub use ledger::{ShotLedger, ShotRecord, SunkRun};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::{Coord, Orientation, Placement, ShipKind};
