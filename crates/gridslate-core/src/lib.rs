//! Core value types for the Gridslate board editor.
//!
//! This crate provides the leaf data types shared by the board model and the
//! application: type-safe digits, range-checked grid/cell indices, and the
//! candidate-mark bitset. None of these types know anything about boards,
//! editing modes, or persistence; they exist so that out-of-range digits and
//! cell addresses are unrepresentable rather than runtime-checked.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of digits 1-9
//! - [`index`]: Range-checked sub-grid/cell indices and the 81-cell address
//! - [`marks`]: Candidate-mark flags for a single cell
//!
//! # Examples
//!
//! ```
//! use gridslate_core::{CellAddr, CellId, Digit, GridId, MarkSet};
//!
//! // Address the center cell of the center sub-grid
//! let addr = CellAddr::new(GridId::new(4), CellId::new(4));
//! assert_eq!((addr.row(), addr.col()), (4, 4));
//!
//! // Annotate two candidate digits
//! let mut marks = MarkSet::new();
//! marks.insert(Digit::D3);
//! marks.insert(Digit::D7);
//! assert_eq!(marks.len(), 2);
//! ```

pub mod digit;
pub mod index;
pub mod marks;

// Re-export commonly used types
pub use self::{
    digit::{Digit, DigitOutOfRange},
    index::{CellAddr, CellId, GridId},
    marks::MarkSet,
};
