//! The constraint engine: assignment and elimination with the two classic
//! propagation rules.
//!
//! Assigning a digit to a cell eliminates it from all 20 peers. An
//! elimination in turn can force further assignments in two ways:
//!
//! - *naked single*: a cell is down to one candidate, so that candidate
//!   must be its digit
//! - *hidden single*: a digit has only one possible cell left within a
//!   house, so it must go there even if that cell has other candidates
//!
//! The two rules are mutually recursive through assign/eliminate and run to
//! a fixed point. Since one assignment can cascade across a large part of
//! the grid, the recursion is flattened into an explicit work stack of
//! [`Task`]s instead of nesting calls.

use crate::bitset::Set;
use crate::board::{CandidateGrid, Cell, Digit};
use crate::consts::N_CELLS;
use crate::errors::SolveError;
use crate::helper::Unsolvable;

use log::trace;

/// A pending propagation step.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Task {
    Assign(Cell, Digit),
    Eliminate {
        cell: Cell,
        digit: Digit,
        // the cell whose assignment triggered this elimination;
        // the hidden-single check must not re-assign it
        origin: Cell,
    },
}

impl CandidateGrid {
    /// Assigns `digit` to `cell` and propagates all consequences.
    ///
    /// Errors if `digit` is not a candidate of `cell` or if the propagation
    /// cascade runs into a contradiction. The grid is left in the partially
    /// propagated state in that case; callers that need to recover must
    /// work on a copy.
    pub fn assign(&mut self, cell: Cell, digit: Digit) -> Result<(), SolveError> {
        self.propagate(Task::Assign(cell, digit))
            .map_err(SolveError::from)
    }

    /// Propagates the consequences of every cell that is already down to a
    /// single candidate, running the naked-single and hidden-single rules
    /// to a fixed point.
    ///
    /// An error here means the puzzle is inconsistent before any guessing.
    /// On an already simplified grid this is a no-op, re-running it leaves
    /// the grid unchanged.
    pub fn simplify(&mut self) -> Result<(), SolveError> {
        let mut pending = Vec::with_capacity(N_CELLS);
        for cell in Cell::all() {
            if let Ok(Some(digit)) = self.cells[cell].unique() {
                pending.push(Task::Assign(cell, digit));
            }
        }
        self.run(pending).map_err(SolveError::from)
    }

    pub(crate) fn propagate(&mut self, task: Task) -> Result<(), Unsolvable> {
        self.run(vec![task])
    }

    fn run(&mut self, mut pending: Vec<Task>) -> Result<(), Unsolvable> {
        while let Some(task) = pending.pop() {
            match task {
                Task::Assign(cell, digit) => self.apply_assign(cell, digit, &mut pending)?,
                Task::Eliminate {
                    cell,
                    digit,
                    origin,
                } => self.apply_eliminate(cell, digit, origin, &mut pending)?,
            }
        }
        Ok(())
    }

    fn apply_assign(
        &mut self,
        cell: Cell,
        digit: Digit,
        pending: &mut Vec<Task>,
    ) -> Result<(), Unsolvable> {
        if !self.cells[cell].contains(digit) {
            // two forced assignments claimed this cell for different digits
            trace!("{:?} can no longer contain {}", cell, digit.get());
            return Err(Unsolvable);
        }
        self.cells[cell] = digit.as_set();
        for peer in cell.neighbors() {
            pending.push(Task::Eliminate {
                cell: peer,
                digit,
                origin: cell,
            });
        }
        Ok(())
    }

    fn apply_eliminate(
        &mut self,
        cell: Cell,
        digit: Digit,
        origin: Cell,
        pending: &mut Vec<Task>,
    ) -> Result<(), Unsolvable> {
        if !self.cells[cell].contains(digit) {
            // already eliminated
            return Ok(());
        }
        self.cells[cell].remove(digit);

        // naked single
        match self.cells[cell].unique() {
            Err(_) => {
                trace!("no candidate left for {:?}", cell);
                return Err(Unsolvable);
            }
            Ok(Some(last)) => pending.push(Task::Assign(cell, last)),
            Ok(None) => (),
        }

        // hidden single: find the remaining positions of `digit` in each
        // house of `cell`
        for &house in cell.houses().iter() {
            let mut possible_cells = Set::NONE;
            for house_cell in house.cells() {
                if self.cells[house_cell].contains(digit) {
                    possible_cells |= house_cell;
                }
            }
            match possible_cells.unique() {
                // the contradiction is detected at house level:
                // the digit was eliminated from all its cells
                Err(_) => {
                    trace!("{} has no place left in {:?}", digit.get(), house);
                    return Err(Unsolvable);
                }
                Ok(Some(single)) if single != origin => {
                    pending.push(Task::Assign(single, digit));
                }
                Ok(_) => (),
            }
        }
        Ok(())
    }
}
