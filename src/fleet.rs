//! One side's fleet: placement validation and shot resolution.

use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::{LedgerError, Outcome, PlacementError};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::ship::{Coord, Orientation, Placement, ShipKind};

type Mask = BitGrid<u128, { BOARD_SIZE as usize }>;

#[derive(Debug, Clone, Copy)]
struct PlacedShip {
    placement: Placement,
    mask: Mask,
    hits: Mask,
}

impl PlacedShip {
    fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.placement.kind.length()
    }
}

/// The five ships of one side, placed once before combat.
///
/// Placement is final: validated placements are recorded into the
/// occupancy map and there is no relocation primitive.
pub struct Fleet {
    ships: [Option<PlacedShip>; NUM_SHIPS],
    occupancy: Mask,
    shots_taken: Mask,
}

impl Fleet {
    /// An empty board with no ships placed.
    pub fn new() -> Self {
        Fleet {
            ships: [None; NUM_SHIPS],
            occupancy: Mask::new(),
            shots_taken: Mask::new(),
        }
    }

    /// Occupancy mask of all placed ships.
    pub fn occupancy(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.occupancy.iter_ones()
    }

    /// Validate and record a single ship. Rejected placements leave the
    /// fleet untouched.
    pub fn place(&mut self, placement: Placement) -> Result<(), PlacementError> {
        if self.ships[placement.kind.index()].is_some() {
            return Err(PlacementError::ShipAlreadyPlaced);
        }
        let mask = placement.mask()?;
        if self.occupancy.intersects(&mask) {
            return Err(PlacementError::Overlap);
        }
        self.occupancy |= mask;
        self.ships[placement.kind.index()] = Some(PlacedShip {
            placement,
            mask,
            hits: Mask::new(),
        });
        Ok(())
    }

    /// Place the whole fleet at once, one placement per ship kind.
    pub fn place_all(&mut self, placements: [Placement; NUM_SHIPS]) -> Result<(), PlacementError> {
        for placement in placements {
            self.place(placement)?;
        }
        Ok(())
    }

    /// Suggest a random non-overlapping placement for `kind`. Used for bot
    /// fleet setup; the targeting core itself contains no randomness.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<Placement, PlacementError> {
        let len = kind.length();
        for _ in 0..100 {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE as usize - 1, BOARD_SIZE as usize - len),
                Orientation::Vertical => (BOARD_SIZE as usize - len, BOARD_SIZE as usize - 1),
            };
            let anchor = Coord::new(
                rng.random_range(0..=max_r) as u8,
                rng.random_range(0..=max_c) as u8,
            )?;
            let candidate = Placement::new(kind, anchor, orientation);
            if !self.occupancy.intersects(&candidate.mask()?) {
                return Ok(candidate);
            }
        }
        Err(PlacementError::UnableToPlaceShip)
    }

    /// Place every ship in the configuration at random.
    pub fn place_all_random<R: Rng>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        for kind in SHIPS {
            let placement = self.random_placement(rng, kind)?;
            self.place(placement)?;
        }
        Ok(())
    }

    /// Resolve an incoming shot against this fleet. The attacker learns
    /// only the outcome, never the layout.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<Outcome, LedgerError> {
        let (r, c) = (coord.row(), coord.col());
        if self.shots_taken.get(r, c).unwrap_or(false) {
            return Err(LedgerError::DuplicateShot);
        }
        let _ = self.shots_taken.set(r, c);
        for slot in self.ships.iter_mut().flatten() {
            if slot.mask.get(r, c).unwrap_or(false) {
                let _ = slot.hits.set(r, c);
                return if slot.is_sunk() {
                    Ok(Outcome::Sunk(slot.placement.kind))
                } else {
                    Ok(Outcome::Hit)
                };
            }
        }
        Ok(Outcome::Miss)
    }

    /// True once every placed ship is fully hit.
    pub fn all_sunk(&self) -> bool {
        let mut placed = 0;
        for slot in self.ships.iter().flatten() {
            placed += 1;
            if !slot.is_sunk() {
                return false;
            }
        }
        placed > 0
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
