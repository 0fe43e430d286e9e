use crate::bitset::Set;
use crate::board::{Cell, CellState, Digit, Sudoku};
use crate::consts::N_CELLS;
use crate::helper::CellArray;

use std::fmt;

/// A sudoku board in candidate form: every cell holds the set of digits it
/// can still contain.
///
/// A cell with exactly one candidate is solved. A cell must never persist
/// with an empty candidate set; the propagation and search routines treat
/// that state as a contradiction the moment it arises.
///
/// The grid is a plain value. Copying it is how the search engine branches:
/// every trial assignment operates on its own copy, so sibling branches
/// never alias.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CandidateGrid {
    pub(crate) cells: CellArray<Set<Digit>>,
}

impl CandidateGrid {
    /// Returns the set of digits that `cell` can still contain.
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.cells[cell]
    }

    /// Returns the state of `cell`, either a solved digit or its candidates.
    pub fn cell_state(&self, cell: Cell) -> CellState {
        match self.cells[cell].unique() {
            Ok(Some(digit)) => CellState::Digit(digit),
            _ => CellState::Candidates(self.cells[cell]),
        }
    }

    /// Checks whether every cell is down to exactly one candidate.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|candidates| candidates.len() == 1)
    }

    /// Extracts the determined cells into a clue grid. Cells with more than
    /// one candidate left are extracted as empty.
    pub fn to_sudoku(&self) -> Sudoku {
        let mut grid = [0; N_CELLS];
        for cell in Cell::all() {
            if let Ok(Some(digit)) = self.cells[cell].unique() {
                grid[cell.as_index()] = digit.get();
            }
        }
        Sudoku(grid)
    }
}

impl From<&Sudoku> for CandidateGrid {
    /// Clues become singleton candidate sets, empty cells start out with
    /// all nine digits. No propagation happens yet, that is
    /// [`simplify`](CandidateGrid::simplify)'s job.
    fn from(sudoku: &Sudoku) -> Self {
        let mut cells = CellArray([Set::ALL; N_CELLS]);
        for (cell, digit) in Cell::all().zip(sudoku.iter()) {
            if let Some(digit) = digit {
                cells[cell] = digit.as_set();
            }
        }
        CandidateGrid { cells }
    }
}

/* Example output
┌──────────────────────────────┬──────────────────────────────┬──────────────────────────────┐
│ 1         2         3        │ 4         5         6        │ 7         8         9        │
│ 45678     45678     45678    │ 12378     12378     12378    │ 123456    123456    123456   │
│ 456789    456789    456789   │ 123789    123789    123789   │ 123456    123456    123456   │
├──────────────────────────────┼──────────────────────────────┼──────────────────────────────┤
...
└──────────────────────────────┴──────────────────────────────┴──────────────────────────────┘
*/

impl fmt::Display for CandidateGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut column_widths = [0; 9];
        for col in 0..9 {
            let max_width = (0..9)
                .map(|row| std::cmp::max(1, self.cells.0[row * 9 + col].len()))
                .max()
                .unwrap_or(1);
            debug_assert!(1 <= max_width && max_width <= 9);
            column_widths[col] = max_width;
        }

        let stack_width = |stack_nr: usize| {
            column_widths[stack_nr * 3..stack_nr * 3 + 3]
                .iter()
                .map(|&x| x as usize)
                .sum::<usize>()
                + 6 // spaces in between cells and walls
        };

        let print_horizontal_delimiter =
            |f: &mut fmt::Formatter, leftmost: char, middle: char, rightmost: &str| {
                write!(
                    f,
                    "{left}{0:─<1$}{middle}{0:─<2$}{middle}{0:─<3$}{right}",
                    "",
                    stack_width(0),
                    stack_width(1),
                    stack_width(2),
                    left = leftmost,
                    middle = middle,
                    right = rightmost,
                )
            };
        let print_minirow = |f: &mut fmt::Formatter, row: usize, stack: usize| {
            let base_col = stack * 3;
            let base_cell = row * 9 + stack * 3;
            write!(
                f,
                " {:width1$}  {:width2$}  {:width3$} │",
                self.cell_state(Cell::new(base_cell as u8)),
                self.cell_state(Cell::new(base_cell as u8 + 1)),
                self.cell_state(Cell::new(base_cell as u8 + 2)),
                width1 = column_widths[base_col] as usize,
                width2 = column_widths[base_col + 1] as usize,
                width3 = column_widths[base_col + 2] as usize,
            )
        };

        let print_band = |f: &mut fmt::Formatter, band: usize| {
            for row in band * 3..band * 3 + 3 {
                write!(f, "│")?;
                for stack in 0..3 {
                    print_minirow(f, row, stack)?;
                }
                writeln!(f)?;
            }
            Ok(())
        };

        print_horizontal_delimiter(f, '┌', '┬', "┐\n")?;
        print_band(f, 0)?;
        print_horizontal_delimiter(f, '├', '┼', "┤\n")?;
        print_band(f, 1)?;
        print_horizontal_delimiter(f, '├', '┼', "┤\n")?;
        print_band(f, 2)?;
        print_horizontal_delimiter(f, '└', '┴', "┘")
    }
}
