//! Common types: shot results and the error enums shared across the engine.

use core::fmt;

use crate::cells::CellSetError;
use crate::coord::Coordinate;

/// Outcome of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FireResult {
    /// The shot landed on a ship cell.
    Hit,
    /// The shot landed on open water.
    Miss,
}

impl fmt::Display for FireResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireResult::Hit => write!(f, "HIT!"),
            FireResult::Miss => write!(f, "You missed."),
        }
    }
}

/// Invalid game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroBoardSize,
    BoardTooLarge { size: usize, max: usize },
    NoShips,
    ZeroShipLength,
    ShipTooLong { length: usize, board_size: usize },
    FleetTooLarge { cells: usize, capacity: usize },
    NoPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBoardSize => write!(f, "Board size must be positive"),
            ConfigError::BoardTooLarge { size, max } => {
                write!(f, "Board size {} exceeds the maximum of {}", size, max)
            }
            ConfigError::NoShips => write!(f, "Fleet must contain at least one ship"),
            ConfigError::ZeroShipLength => write!(f, "Ship length must be positive"),
            ConfigError::ShipTooLong { length, board_size } => write!(
                f,
                "Ship length {} does not fit on a {}x{} board",
                length, board_size, board_size
            ),
            ConfigError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
            ConfigError::NoPlacementAttempts => {
                write!(f, "At least one placement attempt is required")
            }
        }
    }
}

/// Errors returned while building ships and fleets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell set error (e.g., coordinate beyond capacity).
    Cells(CellSetError),
    /// Configuration cannot produce a fleet.
    InvalidConfig(ConfigError),
    /// A ship needs at least one cell.
    EmptyShip,
    /// Ship cells leave the board.
    ShipOutOfBounds,
    /// Ship cells are not a straight, gap-free line.
    ShipNotContiguous,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// A game needs at least one ship.
    EmptyFleet,
    /// Random placement ran out of attempts.
    PlacementExhausted { placed: usize, attempts: usize },
}

impl From<CellSetError> for BoardError {
    fn from(err: CellSetError) -> Self {
        BoardError::Cells(err)
    }
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::InvalidConfig(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Cells(e) => write!(f, "Cell set error: {}", e),
            BoardError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
            BoardError::EmptyShip => write!(f, "Ship has no cells"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipNotContiguous => write!(f, "Ship cells are not a straight line"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::EmptyFleet => write!(f, "Fleet has no ships"),
            BoardError::PlacementExhausted { placed, attempts } => write!(
                f,
                "Unable to place ship #{} after {} attempts",
                placed + 1,
                attempts
            ),
        }
    }
}

/// Rejected player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Input is not exactly a letter followed by a digit.
    WrongLength { len: usize },
    /// First character is not a letter.
    NotALetter(char),
    /// Letter names a row beyond the board.
    RowOffBoard(char),
    /// Second character is not a digit.
    NotADigit(char),
    /// Digit names a column beyond the board.
    ColumnOffBoard(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::WrongLength { .. } => {
                write!(f, "Oops, please enter a letter and a number on the board.")
            }
            GuessError::NotALetter(_) | GuessError::NotADigit(_) => {
                write!(f, "Oops, that isn't on the board.")
            }
            GuessError::RowOffBoard(_) | GuessError::ColumnOffBoard(_) => {
                write!(f, "Oops, that's off the board!")
            }
        }
    }
}

/// Shot rejected by the engine; game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireError {
    /// Coordinate lies outside the board.
    OffBoard(Coordinate),
    /// Coordinate was already fired upon.
    AlreadyGuessed(Coordinate),
    /// Every ship is sunk.
    GameOver,
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireError::OffBoard(c) => write!(f, "{} is off the board", c),
            FireError::AlreadyGuessed(c) => write!(f, "You already fired at {}.", c),
            FireError::GameOver => write!(f, "The game is over."),
        }
    }
}

/// Either half of turning raw input into a shot can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    Invalid(GuessError),
    Rejected(FireError),
}

impl From<GuessError> for TurnError {
    fn from(err: GuessError) -> Self {
        TurnError::Invalid(err)
    }
}

impl From<FireError> for TurnError {
    fn from(err: FireError) -> Self {
        TurnError::Rejected(err)
    }
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::Invalid(e) => e.fmt(f),
            TurnError::Rejected(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for GuessError {}
#[cfg(feature = "std")]
impl std::error::Error for FireError {}
#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
