#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod cells;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use cells::{BoardCells, CellSet, CellSetError, Cells};
pub use common::*;
pub use config::*;
pub use coord::{row_letter, validate_guess, Coordinate};
pub use fleet::{collides, generate_fleet, place_ship, Fleet};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use ship::{Orientation, Ship};
