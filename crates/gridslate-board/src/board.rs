//! The board aggregate: 81 cells in nine fixed 3x3 sub-grids.

use std::fmt::{self, Display};

use gridslate_core::{CellAddr, CellId, Digit, GridId, MarkSet};

/// One square of the board.
///
/// A cell holds an optional digit value, a lock flag, and nine candidate
/// marks. Invariant: a locked cell always has a value; its marks are
/// retained but ignored while the lock holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub(crate) value: Option<Digit>,
    pub(crate) locked: bool,
    pub(crate) marks: MarkSet,
}

impl Cell {
    /// Returns the digit value, if one is set.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns whether the cell is locked as part of the authored puzzle.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the candidate marks annotated on this cell.
    #[must_use]
    pub const fn marks(&self) -> MarkSet {
        self.marks
    }

    /// Returns whether the cell carries no state at all.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.value.is_none() && !self.locked && self.marks.is_empty()
    }
}

/// One of the nine 3x3 sub-grids of a board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: [Cell; 9],
}

impl Grid {
    /// Returns the cell at the given index within this sub-grid.
    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[usize::from(id.value())]
    }
}

/// Unique, opaque identifier of a saved board.
///
/// Synthesized boards get a freshly generated UUID; boards loaded from
/// storage keep whatever identifier they were saved under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardId(String);

impl BoardId {
    /// Generates a new unique identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BoardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The full 81-cell puzzle state plus its name and unique identifier.
///
/// Cells are addressed by `(GridId, CellId)` pairs; the structure is fixed
/// at nine sub-grids of nine cells and is never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) id: BoardId,
    pub(crate) name: String,
    pub(crate) grids: [Grid; 9],
}

impl Board {
    /// Synthesizes a fresh, fully blank board with a generated identifier
    /// and a generated default name.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: BoardId::random(),
            name: generate_board_name(),
            grids: [Grid::default(); 9],
        }
    }

    /// Returns the board's unique identifier.
    #[must_use]
    pub fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the board's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the board's display name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the sub-grid at the given index.
    #[must_use]
    pub fn grid(&self, id: GridId) -> &Grid {
        &self.grids[usize::from(id.value())]
    }

    /// Returns the cell at the given address.
    #[must_use]
    pub fn cell(&self, addr: CellAddr) -> &Cell {
        self.grids[usize::from(addr.grid().value())].cell(addr.cell())
    }

    pub(crate) fn cell_mut(&mut self, addr: CellAddr) -> &mut Cell {
        &mut self.grids[usize::from(addr.grid().value())].cells[usize::from(addr.cell().value())]
    }

    /// Returns whether every cell of the board is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        CellAddr::ALL.iter().all(|&addr| self.cell(addr).is_blank())
    }

    /// Returns the count of set values per digit, over all 81 cells.
    ///
    /// Used by the keypad to show how often each digit already appears.
    #[must_use]
    pub fn digit_count(&self, digit: Digit) -> usize {
        CellAddr::ALL
            .iter()
            .filter(|&&addr| self.cell(addr).value() == Some(digit))
            .count()
    }
}

/// Generates the default name for a synthesized board.
pub(crate) fn generate_board_name() -> String {
    format!("Game {}", rand::random::<u32>())
}
