use crate::bitset::Set;
use crate::board::Digit;
use std::fmt;

/// Contains either a digit or all the candidates for an unsolved cell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum CellState {
    Digit(Digit),
    Candidates(Set<Digit>),
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::with_capacity(9);
        match *self {
            CellState::Digit(digit) => buf.push((digit.get() + b'0') as char),
            CellState::Candidates(candidates) => {
                for digit in candidates {
                    buf.push((digit.get() + b'0') as char);
                }
            }
        }
        f.pad(&buf)
    }
}
