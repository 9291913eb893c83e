#![cfg(feature = "std")]

//! Plain-text rendering of a game for terminal front ends.

use std::fmt::Write;
use std::string::String;

use crate::{
    coord::{row_letter, Coordinate},
    game::{CellView, GameEngine},
};

/// Render the board as a grid: `X` for hits, `o` for misses, `.` for
/// unknown water. With `reveal`, unhit ship cells show as `S`.
pub fn render_board(engine: &GameEngine, reveal: bool) -> String {
    let size = engine.board_size();
    let mut out = String::from("  ");
    for c in 0..size {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..size {
        out.push(row_letter(r).unwrap_or('?'));
        out.push(' ');
        for c in 0..size {
            let coord = Coordinate::new(r, c);
            let ch = match engine.cell(coord) {
                CellView::Hit => 'X',
                CellView::Miss => 'o',
                CellView::Unknown if reveal && engine.fleet().occupied().contains(coord) => 'S',
                CellView::Unknown => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One-line status summary shown under the board.
pub fn status_line(engine: &GameEngine) -> String {
    format!(
        "Guesses: {}  Ships sunk: {}/{}",
        engine.guesses(),
        engine.ships_sunk(),
        engine.num_ships()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fleet, Orientation, Ship};

    fn engine() -> GameEngine {
        let ship = Ship::new(Coordinate::new(0, 1), Orientation::Horizontal, 2, 3).unwrap();
        GameEngine::with_fleet(Fleet::from_ships(3, [ship]).unwrap()).unwrap()
    }

    #[test]
    fn hides_ships_unless_revealed() {
        let mut engine = engine();
        engine.fire(Coordinate::new(0, 1)).unwrap();
        engine.fire(Coordinate::new(2, 2)).unwrap();
        assert_eq!(render_board(&engine, false), "   0 1 2\nA  . X .\nB  . . .\nC  . . o\n");
        assert_eq!(render_board(&engine, true), "   0 1 2\nA  . X S\nB  . . .\nC  . . o\n");
        assert_eq!(status_line(&engine), "Guesses: 2  Ships sunk: 0/1");
    }
}
