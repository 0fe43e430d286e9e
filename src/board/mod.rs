//! Types for cells, digits and other things on a sudoku board
mod candidates;
mod cell_state;
mod digit;
pub mod positions;
mod sudoku;

pub(crate) use self::positions::*;

pub use self::{
    candidates::CandidateGrid,
    cell_state::CellState,
    digit::Digit,
    positions::{Cell, House, HouseType},
    sudoku::Sudoku,
};
