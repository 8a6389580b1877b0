//! Range-checked indices for the fixed 9x9x(3x3) board structure.
//!
//! A board is nine 3x3 sub-grids of nine cells each; both levels are indexed
//! 0-8. [`GridId`] and [`CellId`] enforce the range at construction so that
//! an out-of-range `(gridId, cellId)` pair is a compile-time/construction
//! condition rather than something every consumer re-validates. [`CellAddr`]
//! pairs the two and converts to and from the visual 9x9 row/column layout.
//!
//! # Examples
//!
//! ```
//! use gridslate_core::{CellAddr, CellId, GridId};
//!
//! // Sub-grids and cells are both laid out row-major in 3x3 blocks:
//! // grid 0 is the top-left block, cell 0 its top-left square.
//! let addr = CellAddr::new(GridId::new(0), CellId::new(0));
//! assert_eq!((addr.row(), addr.col()), (0, 0));
//!
//! let addr = CellAddr::from_row_col(4, 7);
//! assert_eq!(addr.grid().value(), 5);
//! assert_eq!(addr.cell().value(), 4);
//! ```

use std::fmt::{self, Display};

/// Index of a 3x3 sub-grid within the board, in the range 0-8.
///
/// Sub-grids are numbered row-major: 0-2 across the top band, 3-5 across the
/// middle band, 6-8 across the bottom band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridId(u8);

impl GridId {
    /// All nine sub-grid indices, in order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self(0); 9];
        let mut id = 1;
        while id < 9 {
            all[id as usize] = Self(id);
            id += 1;
        }
        all
    };

    /// Creates a sub-grid index.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the range 0-8.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 9, "grid id must be 0-8");
        Self(id)
    }

    /// Returns the underlying index value (0-8).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Index of a cell within a 3x3 sub-grid, in the range 0-8.
///
/// Cells are numbered row-major within their sub-grid, 0 at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(u8);

impl CellId {
    /// All nine cell indices, in order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self(0); 9];
        let mut id = 1;
        while id < 9 {
            all[id as usize] = Self(id);
            id += 1;
        }
        all
    };

    /// Creates a cell index.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the range 0-8.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 9, "cell id must be 0-8");
        Self(id)
    }

    /// Returns the underlying index value (0-8).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Address of one of the 81 board cells: a `(GridId, CellId)` pair.
///
/// # Examples
///
/// ```
/// use gridslate_core::CellAddr;
///
/// // Row/column round-trip holds for every cell
/// for addr in CellAddr::ALL {
///     assert_eq!(CellAddr::from_row_col(addr.row(), addr.col()), addr);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellAddr {
    grid: GridId,
    cell: CellId,
}

impl CellAddr {
    /// All 81 cell addresses, ordered by sub-grid then cell.
    pub const ALL: [Self; 81] = {
        let mut all = [Self::new(GridId::new(0), CellId::new(0)); 81];
        let mut grid = 0;
        while grid < 9 {
            let mut cell = 0;
            while cell < 9 {
                all[(grid * 9 + cell) as usize] = Self::new(GridId::new(grid), CellId::new(cell));
                cell += 1;
            }
            grid += 1;
        }
        all
    };

    /// Creates an address from a sub-grid index and a cell index.
    #[must_use]
    pub const fn new(grid: GridId, cell: CellId) -> Self {
        Self { grid, cell }
    }

    /// Creates an address from visual 9x9 coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "row and column must be 0-8");
        Self {
            grid: GridId::new((row / 3) * 3 + col / 3),
            cell: CellId::new((row % 3) * 3 + col % 3),
        }
    }

    /// Returns the sub-grid index.
    #[must_use]
    pub const fn grid(self) -> GridId {
        self.grid
    }

    /// Returns the cell index within the sub-grid.
    #[must_use]
    pub const fn cell(self) -> CellId {
        self.cell
    }

    /// Returns the visual row (0-8, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        (self.grid.value() / 3) * 3 + self.cell.value() / 3
    }

    /// Returns the visual column (0-8, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        (self.grid.value() % 3) * 3 + self.cell.value() % 3
    }
}

impl Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}c{}", self.grid, self.cell)
    }
}
