//! The search engine: exhaustive, validated guessing for grids that
//! propagation alone cannot determine.
//!
//! Branching always happens on the unresolved cell with the fewest
//! candidates, which keeps the branching factor (and with it the search
//! tree) small. Every trial assignment runs on its own copy of the grid.
//! Because each recursive call either completes its branch uniquely or
//! reports it as dead or ambiguous, the number of surviving completions per
//! branch point is bounded by the nine candidate digits.

use crate::board::{CandidateGrid, Cell, Sudoku};
use crate::errors::SolveError;
use crate::propagation::Task;

use log::trace;

impl CandidateGrid {
    /// Resolves all remaining ambiguity by trial assignment and reports
    /// whether the puzzle has exactly one solution.
    ///
    /// On success the grid contains that unique solution. A contradictory
    /// grid yields [`SolveError::Unsolvable`]; a grid that completes in
    /// more than one way yields [`SolveError::MultipleSolutions`], which is
    /// never absorbed as a failed guess and always reaches the caller.
    pub fn full_solve(&mut self) -> Result<(), SolveError> {
        if self.is_solved() {
            return Ok(());
        }

        // fewest candidates first, ties broken by cell order
        // (min_by_key returns the first minimum)
        // a cell that already lost all candidates sorts first and produces
        // no branches, so the contradiction surfaces as Unsolvable below
        let pivot = Cell::all()
            .filter(|&cell| self.candidates(cell).len() != 1)
            .min_by_key(|&cell| self.candidates(cell).len())
            .expect("unsolved grid without an undetermined cell");
        trace!(
            "branching on {:?} ({} candidates)",
            pivot,
            self.candidates(pivot).len()
        );

        let mut completions: Vec<CandidateGrid> = vec![];
        for digit in self.candidates(pivot) {
            let mut branch = *self;
            let outcome = branch
                .propagate(Task::Assign(pivot, digit))
                .map_err(SolveError::from)
                .and_then(|()| branch.full_solve());
            match outcome {
                Ok(()) => completions.push(branch),
                // a dead branch is the expected result of a wrong guess
                Err(SolveError::Unsolvable) => continue,
                // ambiguity is a property of the puzzle, not of this guess
                err @ Err(SolveError::MultipleSolutions(_)) => return err,
            }
        }

        match completions.as_slice() {
            [] => Err(SolveError::Unsolvable),
            [completion] => {
                *self = *completion;
                Ok(())
            }
            _ => Err(SolveError::MultipleSolutions(
                completions.iter().map(CandidateGrid::to_sudoku).collect(),
            )),
        }
    }
}

impl Sudoku {
    /// Solves the sudoku if it has exactly one solution.
    ///
    /// Runs constraint propagation first and falls back to backtracking
    /// search only for the ambiguity that propagation leaves behind.
    pub fn solve(self) -> Result<Sudoku, SolveError> {
        let mut grid = CandidateGrid::from(&self);
        grid.simplify()?;
        grid.full_solve()?;
        Ok(grid.to_sudoku())
    }
}
