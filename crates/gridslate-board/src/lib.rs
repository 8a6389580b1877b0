//! Board state model and persistence contract for the Gridslate editor.
//!
//! This crate owns everything between the raw value types of
//! [`gridslate_core`] and the UI: the 81-cell [`Board`] aggregate, the
//! mode-driven [toggle transition](Board::toggle_cell) that is the single
//! mutation entry point for cell edits, and the [`persist`] module that
//! loads, saves, lists, switches, and deletes named boards through an
//! injectable key-value store.
//!
//! The in-memory board is the single source of truth for an editing
//! session; the persisted copies are a mirror written after every observable
//! change. Storage failures therefore never roll back an in-memory edit —
//! the caller keeps the state and retries the write later.
//!
//! # Examples
//!
//! ```
//! use gridslate_board::{Board, EditMode, ToggleOutcome};
//! use gridslate_core::{CellAddr, CellId, Digit, GridId};
//!
//! let mut board = Board::empty();
//! let addr = CellAddr::new(GridId::new(0), CellId::new(0));
//!
//! // Authoring a given: the cell is filled and locked in one step
//! let outcome = board.toggle_cell(EditMode::Init, Digit::D5, addr);
//! assert_eq!(outcome, ToggleOutcome::Set);
//! assert!(board.cell(addr).is_locked());
//!
//! // Locked cells shrug off solve and mark edits
//! let outcome = board.toggle_cell(EditMode::Mark, Digit::D3, addr);
//! assert_eq!(outcome, ToggleOutcome::Blocked);
//! ```

pub mod board;
pub mod edit;
pub mod persist;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardId, Cell, Grid},
    edit::{EditMode, ToggleOutcome},
};
