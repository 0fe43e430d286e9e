use crate::bitset::Set;
use crate::board::{Cell, Digit, House};
use crate::consts::N_CELLS;
use crate::errors::FromBytesError;
use crate::parse_errors::{InvalidEntry, LineParseError};

use std::{fmt, str};

/// The clue grid of a sudoku. `0` stands for an empty cell.
///
/// This type covers parsing, formatting and conversions. Solving is done on
/// a [`CandidateGrid`](crate::CandidateGrid) built from it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a line of 81 cells.
    ///
    /// Accepted values are the digits 1 to 9 for clues and `.`, `0` or `_`
    /// for empty cells. Exactly 81 cells are required, anything else is an
    /// error.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        for ch in s.chars() {
            if n_cells == N_CELLS {
                return Err(LineParseError::TooManyCells);
            }
            match ch {
                '1'..='9' => grid[n_cells] = ch as u8 - b'0',
                '.' | '0' | '_' => (),
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }))
                }
            }
            n_cells += 1;
        }
        if n_cells < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Sudoku(grid))
    }

    /// Creates a sudoku from a byte array. `0` marks an empty cell,
    /// `1..=9` are clues.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Returns the cell contents as a byte array, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the digit in `cell`, if the cell is filled.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Returns an iterator over the cells, going from left to right,
    /// top to bottom. `None` stands for an empty cell.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Counts the filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Checks whether every cell is filled and every house contains
    /// each digit exactly once.
    pub fn is_solved(&self) -> bool {
        House::all().all(|house| {
            let mut seen = Set::<Digit>::NONE;
            for cell in house.cells() {
                match self.digit(cell) {
                    Some(digit) => seen |= digit,
                    None => return false,
                }
            }
            seen.is_full()
        })
    }

    /// Returns the sudoku as a line of 81 characters, with `.` for
    /// empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                _ => (num + b'0') as char,
            })
            .collect()
    }
}

impl str::FromStr for Sudoku {
    type Err = LineParseError;

    fn from_str(s: &str) -> Result<Sudoku, LineParseError> {
        Sudoku::from_str_line(s)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, &num) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (_, 3) | (_, 6) => write!(f, " ")?, // separate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) if row != 0 => writeln!(f)?,
                _ => (),
            }
            match num {
                0 => f.write_str("_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Sudoku({})", self.to_str_line())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};
    use std::fmt;

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    struct SudokuVisitor;

    impl<'de> Visitor<'de> for SudokuVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a line of 81 sudoku cells")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Sudoku, E> {
            Sudoku::from_str_line(v).map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Sudoku, D::Error> {
            deserializer.deserialize_str(SudokuVisitor)
        }
    }
}
