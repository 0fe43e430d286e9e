// A collection of internal helper types
// like arrays that can only be indexed by the right position structs

use crate::board::Cell;
use crate::consts::N_CELLS;
use std::ops::{Deref, DerefMut, Index, IndexMut};

/// Marker for a contradiction: some cell or house ran out of candidates.
///
/// This is the crate-internal pruning signal. It is fatal during the initial
/// propagation pass and expected at search branch points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Unsolvable;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Container with one slot for each cell.
pub(crate) struct CellArray<T>(pub [T; N_CELLS]);

impl<T> Deref for CellArray<T> {
    type Target = [T; 81];
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for CellArray<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Index<Cell> for CellArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: Cell) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<Cell> for CellArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: Cell) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}
