//! The game engine: owns the fleet and guess history and resolves shots.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::{
    cells::BoardCells,
    common::{BoardError, FireError, FireResult, TurnError},
    config::GameConfig,
    coord::{validate_guess, Coordinate},
    fleet::{generate_fleet, Fleet},
    ship::Ship,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameStatus {
    /// Accepting guesses.
    Active,
    /// Every ship is sunk; guesses are rejected.
    Terminal,
}

/// Notification raised while resolving a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Event {
    /// The ship at this fleet index went down.
    ShipSunk { ship: usize },
    /// The last ship went down after `guesses` guesses.
    FleetDestroyed { guesses: usize },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::ShipSunk { .. } => write!(f, "You sank my battleship!"),
            Event::FleetDestroyed { guesses } => {
                write!(f, "You sank all my battleships in {} guesses!", guesses)
            }
        }
    }
}

/// A resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    pub coordinate: Coordinate,
    pub result: FireResult,
    pub events: Vec<Event>,
}

impl Shot {
    pub fn sunk_ship(&self) -> Option<usize> {
        self.events.iter().find_map(|e| match e {
            Event::ShipSunk { ship } => Some(*ship),
            _ => None,
        })
    }

    pub fn fleet_destroyed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, Event::FleetDestroyed { .. }))
    }

    /// Most significant message for the player: the last event raised, or
    /// the hit/miss text when there was none.
    pub fn headline(&self) -> alloc::string::String {
        use alloc::string::ToString;
        match self.events.last() {
            Some(event) => event.to_string(),
            None => self.result.to_string(),
        }
    }
}

/// What a renderer may show for a cell without revealing the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Unknown,
    Hit,
    Miss,
}

/// Serializable report of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub board_size: usize,
    pub ships: Vec<Ship>,
    pub ships_sunk: usize,
    pub guesses: usize,
    pub guessed: Vec<Coordinate>,
    pub status: GameStatus,
}

/// Owns the game state; every change goes through [`GameEngine::fire`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    fleet: Fleet,
    guessed: BoardCells,
    guesses: usize,
    ships_sunk: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game with a freshly generated fleet.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let fleet = generate_fleet(rng, &config)?;
        Self::with_fleet(fleet)
    }

    /// Start a game against a fixed fleet.
    pub fn with_fleet(fleet: Fleet) -> Result<Self, BoardError> {
        if fleet.is_empty() {
            return Err(BoardError::EmptyFleet);
        }
        log::debug!(
            "new game: {} ship(s) on a {}x{} board",
            fleet.len(),
            fleet.board_size(),
            fleet.board_size()
        );
        Ok(Self {
            fleet,
            guessed: BoardCells::new(),
            guesses: 0,
            ships_sunk: 0,
            status: GameStatus::Active,
        })
    }

    pub fn board_size(&self) -> usize {
        self.fleet.board_size()
    }

    pub fn num_ships(&self) -> usize {
        self.fleet.len()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Number of accepted guesses, hits and misses alike.
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status == GameStatus::Terminal
    }

    pub fn has_guessed(&self, coord: Coordinate) -> bool {
        self.guessed.contains(coord)
    }

    /// Hit/miss state of a cell as the player has seen it.
    pub fn cell(&self, coord: Coordinate) -> CellView {
        if !self.guessed.contains(coord) {
            CellView::Unknown
        } else if self.fleet.occupied().contains(coord) {
            CellView::Hit
        } else {
            CellView::Miss
        }
    }

    /// Fire at `coord`.
    ///
    /// Shots off the board, repeats, and shots after the fleet is destroyed
    /// are rejected without changing any state.
    pub fn fire(&mut self, coord: Coordinate) -> Result<Shot, FireError> {
        if self.is_terminal() {
            log::warn!("shot at {} after the game ended", coord);
            return Err(FireError::GameOver);
        }
        if !coord.on_board(self.board_size()) {
            return Err(FireError::OffBoard(coord));
        }
        match self.guessed.insert(coord) {
            Ok(true) => {}
            Ok(false) => {
                log::debug!("repeat shot at {}", coord);
                return Err(FireError::AlreadyGuessed(coord));
            }
            Err(_) => return Err(FireError::OffBoard(coord)),
        }
        self.guesses += 1;

        let mut events = Vec::new();
        let result = match self.fleet.owner_of(coord) {
            Some(idx) => {
                let ship = &mut self.fleet.ships_mut()[idx];
                ship.register_hit(coord);
                if ship.is_sunk() {
                    self.ships_sunk += 1;
                    log::info!("ship #{} sunk at {}", idx, coord);
                    events.push(Event::ShipSunk { ship: idx });
                    if self.ships_sunk == self.num_ships() {
                        self.status = GameStatus::Terminal;
                        log::info!("fleet destroyed in {} guesses", self.guesses);
                        events.push(Event::FleetDestroyed {
                            guesses: self.guesses,
                        });
                    }
                }
                FireResult::Hit
            }
            None => FireResult::Miss,
        };
        log::debug!("shot #{} at {}: {:?}", self.guesses, coord, result);
        Ok(Shot {
            coordinate: coord,
            result,
            events,
        })
    }

    /// Validate raw input and fire at the resulting coordinate.
    pub fn process_guess(&mut self, raw: &str) -> Result<Shot, TurnError> {
        let coord = validate_guess(raw, self.board_size())?;
        Ok(self.fire(coord)?)
    }

    /// Report of the current state, including the hidden fleet.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board_size: self.board_size(),
            ships: self.fleet.ships().to_vec(),
            ships_sunk: self.ships_sunk,
            guesses: self.guesses,
            guessed: self.guessed.iter().collect(),
            status: self.status,
        }
    }
}
