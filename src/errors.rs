use crate::board::Sudoku;
use crate::helper::Unsolvable;

#[cfg(doc)]
use crate::board::CandidateGrid;

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::solve`], [`CandidateGrid::simplify`] and
/// [`CandidateGrid::full_solve`].
///
/// The two variants play very different roles during search. `Unsolvable`
/// is the expected outcome of a wrong guess and prunes that branch; it only
/// surfaces once every guess at every level has been exhausted.
/// `MultipleSolutions` is a statement about the puzzle itself, not about a
/// bad guess. It is never pruned and always propagates to the top-level
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// Propagation emptied a cell or left a digit with no place in a house,
    /// or every guess at some branch point ran into a contradiction.
    #[error("sudoku is contradictory and has no solution")]
    Unsolvable,
    /// The puzzle admits more than one completed grid.
    /// Carries the distinct solutions found, for diagnosis.
    #[error("sudoku is underdetermined: {} distinct solutions found", .0.len())]
    MultipleSolutions(Vec<Sudoku>),
}

impl From<Unsolvable> for SolveError {
    fn from(_: Unsolvable) -> SolveError {
        SolveError::Unsolvable
    }
}
