//! Board geometry: coordinates, ship kinds, and placement footprints.

use core::fmt;

use crate::bitgrid::BitGrid;
use crate::common::PlacementError;
use crate::config::BOARD_SIZE;

type Mask = BitGrid<u128, { BOARD_SIZE as usize }>;

/// A cell on the 10×10 board. Both components are guaranteed in `[0, 9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub(crate) const ORIGIN: Coord = Coord { row: 0, col: 0 };

    /// Build a coordinate, rejecting anything outside the board.
    pub fn new(row: u8, col: u8) -> Result<Self, PlacementError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(PlacementError::OutOfBounds);
        }
        Ok(Coord { row, col })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// The coordinate offset by (dr, dc), if still on the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Coord> {
        let r = self.row as i16 + dr as i16;
        let c = self.col as i16 + dc as i16;
        if r < 0 || c < 0 || r >= BOARD_SIZE as i16 || c >= BOARD_SIZE as i16 {
            return None;
        }
        Some(Coord {
            row: r as u8,
            col: c as u8,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Classic board notation: letter row, 1-based column.
        write!(f, "{}{}", (b'A' + self.row) as char, self.col + 1)
    }
}

/// The five ship classes and their fixed lengths.
///
/// PatrolBoat occupies two cells. That deviates from the one-cell
/// convention some rule sets use and is this system's actual rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
    PatrolBoat,
}

impl ShipKind {
    pub fn length(&self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::PatrolBoat => "PatrolBoat",
        }
    }

    /// Stable index into fleet-sized arrays.
    pub(crate) fn index(&self) -> usize {
        match self {
            ShipKind::Carrier => 0,
            ShipKind::Battleship => 1,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 3,
            ShipKind::PatrolBoat => 4,
        }
    }
}

/// Whether a ship extends along columns or rows from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A candidate or committed ship position: kind, anchor cell, orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub kind: ShipKind,
    pub anchor: Coord,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(kind: ShipKind, anchor: Coord, orientation: Orientation) -> Self {
        Placement {
            kind,
            anchor,
            orientation,
        }
    }

    /// The ordered cells this placement occupies, anchor first. Fails with
    /// `OutOfBounds` before any caller state is touched if the footprint
    /// leaves the board.
    pub fn cells(&self) -> Result<impl Iterator<Item = Coord> + '_, PlacementError> {
        let len = self.kind.length();
        let fits = match self.orientation {
            Orientation::Horizontal => self.anchor.col() + len <= BOARD_SIZE as usize,
            Orientation::Vertical => self.anchor.row() + len <= BOARD_SIZE as usize,
        };
        if !fits {
            return Err(PlacementError::OutOfBounds);
        }
        let anchor = self.anchor;
        let orientation = self.orientation;
        Ok((0..len).map(move |i| match orientation {
            Orientation::Horizontal => Coord {
                row: anchor.row,
                col: anchor.col + i as u8,
            },
            Orientation::Vertical => Coord {
                row: anchor.row + i as u8,
                col: anchor.col,
            },
        }))
    }

    /// Occupancy mask of the footprint.
    pub fn mask(&self) -> Result<Mask, PlacementError> {
        let mut mask = Mask::new();
        for cell in self.cells()? {
            mask.set(cell.row(), cell.col())
                .map_err(|_| PlacementError::OutOfBounds)?;
        }
        Ok(mask)
    }
}
