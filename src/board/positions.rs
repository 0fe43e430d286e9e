//! Cells, houses and the static neighborhood structure of the board.
//!
//! Everything in here is fixed for all sudokus: which 9 cells make up a
//! house, which 3 houses contain a given cell and which 20 cells are the
//! peers of a given cell. There is no mutation and no failure mode.
#![allow(unused, missing_docs)]

use crate::bitset::Set;
use crate::consts::*;

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}
#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}
#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    band(cell) * 3 + stack(cell)
}

fn band(cell: u8) -> u8 {
    cell / 27
}

fn stack(cell: u8) -> u8 {
    col(cell) / 3
}

macro_rules! define_types(
    ($( $name:ident : $limit:expr ),* $(,)*) => {
        $(
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                pub fn get(self) -> u8 {
                    self.0
                }

                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_types!(
    Cell: 81,
    Row: 9,
    Col: 9,
    Block: 9,
    House: 27,
);

/// A [`House`], broken down into which of the three families it belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum HouseType {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl House {
    /// Determines whether this house is a row, column or block.
    pub fn categorize(self) -> HouseType {
        debug_assert!(self.0 < N_HOUSES);
        match self.0 {
            0..=8 => HouseType::Row(Row::new(self.0)),
            9..=17 => HouseType::Col(Col::new(self.0 - COL_OFFSET)),
            _ => HouseType::Block(Block::new(self.0 - BLOCK_OFFSET)),
        }
    }
}

macro_rules! into_cells {
    ( $( $name:ident => |$arg:ident| $code:block );* $(;)* ) => {
        $(
            impl $name {
                /// The set of cells contained in this element,
                /// iterable in ascending cell order.
                pub fn cells(self) -> Set<Cell> {
                    let $arg = self;
                    Set($code)
                }
            }
        )*
    };
}

// the closures here aren't actually closures, they just introduce
// the variables to be used in the code blocks for macro hygiene reasons
into_cells!(
    Row  => |row| { 0o777 << (9 * row.0) };
    Col  => |col| { 0o_001_001_001___001_001_001___001_001_001 << col.0 };
    Block  => |block| {
        let band = block.0 / 3;
        let stack = block.0 % 3;
        0o007_007_007 << (band * 27 + stack * 3)
    };
    House => |house| {
        use self::HouseType::*;
        match house.categorize() {
            Row(row) => row.cells().0,
            Col(col) => col.cells().0,
            Block(block) => block.cells().0,
        }
    };
);

///////////////////////////////////////////////////////////////////////////////////////////////
//                                  Conversions
///////////////////////////////////////////////////////////////////////////////////////////////

macro_rules! define_conversion_shortcuts {
    (
        $(
            $type:ty : {
                $( $target_type:ty , $method_name:ident );* $(;)*
            }
        )*
    ) => {
        $(
            impl $type {
                $(
                    /// Conversion shortcut for the enclosing element.
                    #[inline(always)]
                    pub fn $method_name(self) -> $target_type {
                        <$target_type>::from(self)
                    }
                )*
            }
        )*
    };
}

define_conversion_shortcuts!(
    Cell : {
        Row, row;
        Col, col;
        Block, block;
    }
);

macro_rules! impl_from {
    ( $( $from:ty, $to:ty, |$arg:ident| $code:block ),* $(,)* ) => {
        $(
            impl From<$from> for $to {
                fn from($arg: $from) -> $to {
                    let $arg = $arg.0;
                    <$to>::new($code)
                }
            }
        )*
    };
}

// equivalent conversions, the houses are numbered
// rows, then cols, then blocks
impl_from!(
    Row, House, |r| { r + ROW_OFFSET },
    Col, House, |c| { c + COL_OFFSET },
    Block, House, |b| { b + BLOCK_OFFSET },
);

// non-equivalent conversions
// the first type is the container of the second
impl_from!(
    Cell, Row, |c| { row(c) },
    Cell, Col, |c| { col(c) },
    Cell, Block, |c| { block(c) },
);

pub(crate) trait IntoHouse: Into<House> {
    #[inline(always)]
    fn house(self) -> House {
        self.into()
    }
}

impl<T: Into<House>> IntoHouse for T {}

///////////////////////////////////////////////////////////////////////////////////////////////

impl Cell {
    /// The three houses this cell belongs to: its row, column and block.
    pub fn houses(self) -> [House; 3] {
        [self.row().house(), self.col().house(), self.block().house()]
    }

    /// The set of the 20 cells sharing a house with this cell,
    /// excluding the cell itself. The peer relation is symmetric.
    #[inline]
    pub fn neighbors(self) -> Set<Cell> {
        let [row, col, block] = self.houses();
        (row.cells() | col.cells() | block.cells()).without(self.as_set())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn row_cells() {
        for (raw_row, row) in (0..9).map(|r| (r, Row::new(r))) {
            let first_cell = raw_row * 9;

            let iter1 = row.cells().into_iter();
            let iter2 = (first_cell..first_cell + 9).map(Cell::new);
            assert!(iter1.eq(iter2));
        }
    }

    #[test]
    fn col_cells() {
        for (raw_col, col) in (0..9).map(|c| (c, Col::new(c))) {
            let iter1 = col.cells().into_iter();
            let iter2 = (raw_col..81).step_by(9).map(Cell::new);
            assert!(iter1.eq(iter2));
        }
    }

    #[test]
    fn block_cells() {
        let block = Block::new(4); // center block
        let cells = [30, 31, 32, 39, 40, 41, 48, 49, 50];
        let iter1 = block.cells().into_iter();
        let iter2 = cells.iter().cloned().map(Cell::new);
        assert!(iter1.eq(iter2));
    }

    #[test]
    fn houses_partition_the_grid() {
        for family in &[0..9, 9..18, 18..27] {
            let mut union = Set::NONE;
            for house in family.clone().map(House::new) {
                assert_eq!(house.cells().len(), 9);
                assert!(!union.overlaps(house.cells()));
                union |= house.cells();
            }
            assert!(union.is_full());
        }
    }

    #[test]
    fn houses_contain_their_cell() {
        for cell in Cell::all() {
            for house in cell.houses().iter() {
                assert!(house.cells().contains(cell));
            }
        }
    }

    proptest! {
        #[test]
        fn neighbors_symmetric(cell in 0u8..81) {
            let cell = Cell::new(cell);
            let neighbors = cell.neighbors();
            prop_assert_eq!(neighbors.len(), 20);
            prop_assert!(!neighbors.contains(cell));
            for neighbor in neighbors {
                prop_assert!(neighbor.neighbors().contains(cell));
            }
        }
    }
}
