pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: u8 = 27;

// houses are numbered rows, then cols, then blocks
pub(crate) const ROW_OFFSET: u8 = 0;
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;
