//! Commonly used types and utilities for ease of import.

pub use crate::{
    validate_guess, Coordinate, FireResult, GameConfig, GameEngine, GameStatus, Shot, TurnError,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::render_board};
