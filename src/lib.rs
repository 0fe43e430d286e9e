#![warn(missing_docs)]
//! A sudoku solving library combining constraint propagation with
//! backtracking search.
//!
//! ## Overview
//!
//! Solving happens in two stages. [`CandidateGrid::simplify`] enforces
//! local consistency: assigning a digit removes it from all peers, and the
//! naked-single and hidden-single rules cascade forced assignments to a
//! fixed point. Whatever ambiguity is left is resolved by
//! [`CandidateGrid::full_solve`], which branches on the least ambiguous
//! cell, tries every candidate on an independent copy of the grid and
//! checks that exactly one branch survives. Puzzles without a solution and
//! puzzles with more than one solution are both detected and reported
//! through [`SolveError`].
//!
//! ## Example
//!
//! ```
//! use sudoku_logic::Sudoku;
//!
//! let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//!
//! let sudoku = Sudoku::from_str_line(line).unwrap();
//! let solution = sudoku.solve().unwrap();
//!
//! assert_eq!(
//!     solution.to_str_line(),
//!     "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
//! );
//! ```

pub mod bitset;
pub mod board;
mod consts;
mod errors;
mod helper;
pub mod parse_errors;
mod propagation;
mod solver;

pub use crate::board::{CandidateGrid, Cell, CellState, Digit, House, HouseType, Sudoku};
pub use crate::errors::{FromBytesError, SolveError};
