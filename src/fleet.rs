//! Fleet state and random, collision-free fleet generation.

use alloc::vec::Vec;
use rand::Rng;

use crate::cells::BoardCells;
use crate::common::{BoardError, ConfigError};
use crate::config::{GameConfig, MAX_BOARD_SIZE};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// The ships of one game. No two ships share a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    board_size: usize,
    ships: Vec<Ship>,
    occupied: BoardCells,
}

impl Fleet {
    /// Create an empty fleet for a `board_size`×`board_size` board.
    pub fn new(board_size: usize) -> Result<Self, BoardError> {
        if board_size == 0 {
            return Err(ConfigError::ZeroBoardSize.into());
        }
        if board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: board_size,
                max: MAX_BOARD_SIZE,
            }
            .into());
        }
        Ok(Self {
            board_size,
            ships: Vec::new(),
            occupied: BoardCells::new(),
        })
    }

    /// Build a fleet from fixed ships, rejecting overlaps.
    pub fn from_ships<I>(board_size: usize, ships: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Ship>,
    {
        let mut fleet = Self::new(board_size)?;
        for ship in ships {
            fleet.add(ship)?;
        }
        Ok(fleet)
    }

    /// Commit a ship to the fleet.
    pub fn add(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.cells().iter().any(|c| !c.on_board(self.board_size)) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if collides(ship.cells(), self) {
            return Err(BoardError::ShipOverlaps);
        }
        self.occupied |= BoardCells::from_cells(ship.cells().iter().copied())?;
        self.ships.push(ship);
        Ok(())
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Every cell occupied by some ship.
    pub fn occupied(&self) -> &BoardCells {
        &self.occupied
    }

    /// Index of the ship occupying `coord`, if any.
    pub fn owner_of(&self, coord: Coordinate) -> Option<usize> {
        if !self.occupied.contains(coord) {
            return None;
        }
        self.ships.iter().position(|s| s.contains(coord))
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }
}

/// Pick a random straight placement of `ship_length` cells that fits on
/// the board.
///
/// # Panics
///
/// Panics if `ship_length` is zero or longer than `board_size`.
pub fn place_ship<R: Rng>(
    rng: &mut R,
    board_size: usize,
    ship_length: usize,
) -> Vec<Coordinate> {
    assert!(
        ship_length > 0 && ship_length <= board_size,
        "ship of length {} cannot fit on a board of size {}",
        ship_length,
        board_size
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_r, max_c) = match orientation {
        Orientation::Horizontal => (board_size - 1, board_size - ship_length),
        Orientation::Vertical => (board_size - ship_length, board_size - 1),
    };
    let row = rng.random_range(0..=max_r);
    let col = rng.random_range(0..=max_c);
    (0..ship_length)
        .map(|i| match orientation {
            Orientation::Horizontal => Coordinate::new(row, col + i),
            Orientation::Vertical => Coordinate::new(row + i, col),
        })
        .collect()
}

/// Returns `true` if any candidate cell is already taken by the fleet.
pub fn collides(candidate: &[Coordinate], fleet: &Fleet) -> bool {
    candidate.iter().any(|&c| fleet.occupied.contains(c))
}

/// Generate `config.num_ships` non-overlapping ships by rejection sampling.
///
/// Each ship gets at most `config.max_placement_attempts` tries; running out
/// reports [`BoardError::PlacementExhausted`].
pub fn generate_fleet<R: Rng>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Fleet, BoardError> {
    config.validate()?;
    let mut fleet = Fleet::new(config.board_size)?;
    for placed in 0..config.num_ships {
        let mut attempts = 0;
        let cells = loop {
            if attempts == config.max_placement_attempts {
                log::warn!(
                    "gave up placing ship #{} after {} attempts",
                    placed + 1,
                    attempts
                );
                return Err(BoardError::PlacementExhausted { placed, attempts });
            }
            attempts += 1;
            let candidate = place_ship(rng, config.board_size, config.ship_length);
            if !collides(&candidate, &fleet) {
                break candidate;
            }
        };
        log::debug!("placed ship #{} after {} attempt(s)", placed + 1, attempts);
        fleet.add(Ship::from_cells(cells, config.board_size)?)?;
    }
    Ok(fleet)
}
