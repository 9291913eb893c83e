//! Ships: straight runs of cells with a per-cell hit record.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::BoardError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship occupying a straight line of cells. `hits[i]` records whether
/// `cells[i]` has been hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ship {
    cells: Vec<Coordinate>,
    hits: Vec<bool>,
}

impl Ship {
    /// Place a ship of `length` cells starting at `origin` and extending
    /// right (horizontal) or down (vertical).
    pub fn new(
        origin: Coordinate,
        orientation: Orientation,
        length: usize,
        board_size: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::EmptyShip);
        }
        let (start, fixed) = match orientation {
            Orientation::Horizontal => (origin.col, origin.row),
            Orientation::Vertical => (origin.row, origin.col),
        };
        if fixed >= board_size || start >= board_size || length > board_size - start {
            return Err(BoardError::ShipOutOfBounds);
        }
        let cells = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => Coordinate::new(origin.row, origin.col + i),
                Orientation::Vertical => Coordinate::new(origin.row + i, origin.col),
            })
            .collect();
        Ok(Self::from_validated(cells))
    }

    /// Build a ship from explicit cells, which must form a straight,
    /// gap-free line in order along one axis.
    pub fn from_cells(cells: Vec<Coordinate>, board_size: usize) -> Result<Self, BoardError> {
        let (first, rest) = cells.split_first().ok_or(BoardError::EmptyShip)?;
        if cells.iter().any(|c| !c.on_board(board_size)) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if !rest.is_empty() {
            let horizontal = cells
                .iter()
                .enumerate()
                .all(|(i, c)| c.row == first.row && c.col == first.col + i);
            let vertical = cells
                .iter()
                .enumerate()
                .all(|(i, c)| c.col == first.col && c.row == first.row + i);
            if !horizontal && !vertical {
                return Err(BoardError::ShipNotContiguous);
            }
        }
        Ok(Self::from_validated(cells))
    }

    fn from_validated(cells: Vec<Coordinate>) -> Self {
        let hits = vec![false; cells.len()];
        Self { cells, hits }
    }

    /// Cells occupied by the ship, in order from its origin.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell of the ship.
    pub fn origin(&self) -> Coordinate {
        self.cells[0]
    }

    /// Orientation of the ship. Single-cell ships report `Horizontal`.
    pub fn orientation(&self) -> Orientation {
        match self.cells.get(1) {
            Some(second) if second.col == self.cells[0].col => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns `true` if the ship owns `coord` and that cell has been hit.
    pub fn is_hit(&self, coord: Coordinate) -> bool {
        self.cells
            .iter()
            .position(|&c| c == coord)
            .map(|i| self.hits[i])
            .unwrap_or(false)
    }

    /// Record a shot at `coord`. Returns `true` if the ship owns the cell.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        match self.cells.iter().position(|&c| c == coord) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Number of this ship's cells that have been hit.
    pub fn hits_taken(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    /// A ship is sunk once every one of its own cells has been hit.
    pub fn is_sunk(&self) -> bool {
        !self.hits.is_empty() && self.hits.iter().all(|&h| h)
    }
}
