//! Board engine for a grid mine-sweeping puzzle.
//!
//! A [`Board`] owns two same-shaped grids: the truth layer ([`MineLayout`], one [`CellKind`] per cell, fixed at
//! generation) and the player-facing [`Visibility`] layer, which only [`Board::reveal`] mutates. Adjacency counts use
//! the 4-directional neighborhood (up, down, left, right), not the 8 surrounding cells of classic mine-sweeping.

#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checks that the board has at least one cell and can hold all requested mines.
    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions { height, width });
        }
        let capacity = mult(height, width);
        if mines > capacity {
            return Err(GameError::TooManyMines {
                requested: mines,
                capacity,
            });
        }
        Ok(Self::new_unchecked((height, width), mines))
    }

    pub const fn height(&self) -> Coord {
        self.size.0
    }

    pub const fn width(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// The truth grid: where the mines are and how many touch every safe cell.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    size: Coord2,
    kinds: Array2<CellKind>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Builds the layout from mine positions that are already known to be in bounds. Repeated positions collapse into
    /// one mine.
    pub(crate) fn with_mines(size: Coord2, mines: impl IntoIterator<Item = Coord2>) -> Self {
        let mut kinds: Array2<CellKind> = Array2::default(size.to_nd_index());
        let mut mine_count = 0;

        for coords in mines {
            let kind = &mut kinds[coords.to_nd_index()];
            if !kind.is_mine() {
                *kind = CellKind::Mine;
                mine_count += 1;
            }
        }

        let (height, width) = size;
        for row in 0..height {
            for col in 0..width {
                if !kinds[(row, col).to_nd_index()].is_mine() {
                    continue;
                }
                for neighbor in kinds.iter_neighbors((row, col)) {
                    kinds[neighbor.to_nd_index()].notify_mine();
                }
            }
        }

        Self {
            size,
            kinds,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (height, width) = size;
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions { height, width });
        }

        for &(row, col) in mine_coords {
            if row >= height || col >= width {
                return Err(GameError::OutOfBounds { row, col });
            }
        }

        Ok(Self::with_mines(size, mine_coords.iter().copied()))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (row, col) = coords;
        if row < self.size.0 && col < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn kinds(&self) -> &Array2<CellKind> {
        &self.kinds
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = CellKind;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.kinds[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already revealed.
    NoChange,
    Revealed,
    HitMine,
    /// The reveal uncovered the last safe cell.
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
