//! The cell toggle transition: the single mutation entry point for edits.

use gridslate_core::{CellAddr, Digit};

use crate::board::{Board, Cell};

/// The interpretation applied to a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EditMode {
    /// Puzzle authoring: toggled values become locked givens.
    Init,
    /// Tentative value entry; locked cells are untouchable.
    Solve,
    /// Candidate-mark annotation; locked cells are untouchable.
    Mark,
}

/// What a toggle did to the targeted cell.
///
/// `Blocked` is not an error: a locked cell silently absorbs solve and mark
/// edits, and the UI surfaces nothing for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ToggleOutcome {
    /// A value or mark was set.
    Set,
    /// A value or mark was cleared.
    Cleared,
    /// The cell is locked and the edit was ignored.
    Blocked,
}

impl ToggleOutcome {
    /// Returns whether the toggle changed the board.
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

impl Cell {
    /// Toggles the value between unset and `digit`: a matching value clears,
    /// anything else sets. The lock flag is left alone.
    fn toggle_value(&mut self, digit: Digit) -> ToggleOutcome {
        if self.value == Some(digit) {
            self.value = None;
            ToggleOutcome::Cleared
        } else {
            self.value = Some(digit);
            ToggleOutcome::Set
        }
    }
}

impl Board {
    /// Applies a mode-interpreted toggle of `digit` to the cell at `addr`.
    ///
    /// Exactly one cell is mutated, or none when the outcome is
    /// [`ToggleOutcome::Blocked`]:
    ///
    /// - [`EditMode::Init`] toggles the value and re-derives the lock flag
    ///   from it, so after the call `is_locked() == value().is_some()`.
    ///   Init edits are always allowed, including on locked cells.
    /// - [`EditMode::Solve`] toggles the value of unlocked cells only; the
    ///   lock flag stays `false`.
    /// - [`EditMode::Mark`] flips the candidate mark for `digit` on
    ///   unlocked cells only.
    ///
    /// Toggling twice with the same mode and digit restores the prior cell
    /// state whenever the first application was a true toggle (the value was
    /// unset or equal to `digit`, or the mode was `Mark`).
    pub fn toggle_cell(&mut self, mode: EditMode, digit: Digit, addr: CellAddr) -> ToggleOutcome {
        let cell = self.cell_mut(addr);
        match mode {
            EditMode::Init => {
                let outcome = cell.toggle_value(digit);
                cell.locked = cell.value.is_some();
                outcome
            }
            EditMode::Solve => {
                if cell.locked {
                    ToggleOutcome::Blocked
                } else {
                    cell.toggle_value(digit)
                }
            }
            EditMode::Mark => {
                if cell.locked {
                    ToggleOutcome::Blocked
                } else if cell.marks.toggle(digit) {
                    ToggleOutcome::Set
                } else {
                    ToggleOutcome::Cleared
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gridslate_core::{CellId, GridId, MarkSet};
    use proptest::prelude::*;

    use super::*;

    fn addr(grid: u8, cell: u8) -> CellAddr {
        CellAddr::new(GridId::new(grid), CellId::new(cell))
    }

    #[test]
    fn test_init_toggle_locks_and_unlocks() {
        let mut board = Board::empty();
        let target = addr(0, 0);

        let outcome = board.toggle_cell(EditMode::Init, Digit::D5, target);
        assert_eq!(outcome, ToggleOutcome::Set);
        let cell = board.cell(target);
        assert_eq!(cell.value(), Some(Digit::D5));
        assert!(cell.is_locked());
        assert!(cell.marks().is_empty());

        let outcome = board.toggle_cell(EditMode::Init, Digit::D5, target);
        assert_eq!(outcome, ToggleOutcome::Cleared);
        let cell = board.cell(target);
        assert_eq!(cell.value(), None);
        assert!(!cell.is_locked());
    }

    #[test]
    fn test_init_replaces_other_value_and_relocks() {
        let mut board = Board::empty();
        let target = addr(2, 4);
        board.toggle_cell(EditMode::Init, Digit::D3, target);

        let outcome = board.toggle_cell(EditMode::Init, Digit::D8, target);
        assert_eq!(outcome, ToggleOutcome::Set);
        let cell = board.cell(target);
        assert_eq!(cell.value(), Some(Digit::D8));
        assert!(cell.is_locked());
    }

    #[test]
    fn test_init_is_allowed_on_solve_values() {
        let mut board = Board::empty();
        let target = addr(1, 1);
        board.toggle_cell(EditMode::Solve, Digit::D2, target);
        assert!(!board.cell(target).is_locked());

        // Init with the matching digit toggles the solve value away
        let outcome = board.toggle_cell(EditMode::Init, Digit::D2, target);
        assert_eq!(outcome, ToggleOutcome::Cleared);
        assert_eq!(board.cell(target).value(), None);
        assert!(!board.cell(target).is_locked());

        // Init with another digit locks the cell over the solve value
        board.toggle_cell(EditMode::Solve, Digit::D2, target);
        let outcome = board.toggle_cell(EditMode::Init, Digit::D6, target);
        assert_eq!(outcome, ToggleOutcome::Set);
        assert_eq!(board.cell(target).value(), Some(Digit::D6));
        assert!(board.cell(target).is_locked());
    }

    #[test]
    fn test_solve_toggle_leaves_lock_unset() {
        let mut board = Board::empty();
        let target = addr(4, 4);

        let outcome = board.toggle_cell(EditMode::Solve, Digit::D9, target);
        assert_eq!(outcome, ToggleOutcome::Set);
        let cell = board.cell(target);
        assert_eq!(cell.value(), Some(Digit::D9));
        assert!(!cell.is_locked());

        let outcome = board.toggle_cell(EditMode::Solve, Digit::D9, target);
        assert_eq!(outcome, ToggleOutcome::Cleared);
        assert_eq!(board.cell(target).value(), None);
    }

    #[test]
    fn test_locked_cell_blocks_solve_and_mark() {
        let mut board = Board::empty();
        let target = addr(0, 0);
        board.toggle_cell(EditMode::Init, Digit::D5, target);
        let before = *board.cell(target);

        assert_eq!(
            board.toggle_cell(EditMode::Mark, Digit::D3, target),
            ToggleOutcome::Blocked
        );
        assert_eq!(
            board.toggle_cell(EditMode::Solve, Digit::D7, target),
            ToggleOutcome::Blocked
        );
        assert_eq!(*board.cell(target), before);
    }

    #[test]
    fn test_mark_toggle_flips_single_flag() {
        let mut board = Board::empty();
        let target = addr(6, 2);

        let outcome = board.toggle_cell(EditMode::Mark, Digit::D7, target);
        assert_eq!(outcome, ToggleOutcome::Set);
        let cell = board.cell(target);
        assert_eq!(cell.value(), None);
        assert!(cell.marks().contains(Digit::D7));
        assert_eq!(cell.marks().len(), 1);

        let outcome = board.toggle_cell(EditMode::Mark, Digit::D7, target);
        assert_eq!(outcome, ToggleOutcome::Cleared);
        assert!(board.cell(target).marks().is_empty());
    }

    #[test]
    fn test_marks_survive_value_edits() {
        let mut board = Board::empty();
        let target = addr(5, 5);
        board.toggle_cell(EditMode::Mark, Digit::D1, target);
        board.toggle_cell(EditMode::Mark, Digit::D2, target);

        board.toggle_cell(EditMode::Solve, Digit::D4, target);
        assert_eq!(board.cell(target).marks().len(), 2);

        board.toggle_cell(EditMode::Solve, Digit::D4, target);
        assert_eq!(board.cell(target).marks().len(), 2);
    }

    #[test]
    fn test_only_target_cell_is_mutated() {
        let mut board = Board::empty();
        board.toggle_cell(EditMode::Init, Digit::D1, addr(0, 0));

        let touched = CellAddr::ALL
            .iter()
            .filter(|&&a| !board.cell(a).is_blank())
            .count();
        assert_eq!(touched, 1);
    }

    fn arbitrary_cell() -> impl Strategy<Value = Cell> {
        (
            proptest::option::of(1u8..=9),
            any::<bool>(),
            proptest::array::uniform9(any::<bool>()),
        )
            .prop_map(|(value, locked, flags)| {
                let value = value.map(|v| Digit::try_from_value(v).unwrap());
                Cell {
                    value,
                    // A lock requires a value; mirror the model invariant.
                    locked: locked && value.is_some(),
                    marks: MarkSet::from_flags(flags),
                }
            })
    }

    proptest! {
        #[test]
        fn prop_init_lock_matches_value(cell in arbitrary_cell(), value in 1u8..=9) {
            let digit = Digit::try_from_value(value).unwrap();
            let mut board = Board::empty();
            let target = addr(0, 0);
            *board.cell_mut(target) = cell;

            board.toggle_cell(EditMode::Init, digit, target);
            let after = board.cell(target);
            prop_assert_eq!(after.is_locked(), after.value().is_some());
        }

        #[test]
        fn prop_toggle_twice_is_involutive(
            cell in arbitrary_cell(),
            value in 1u8..=9,
            mode in prop_oneof![
                Just(EditMode::Init),
                Just(EditMode::Solve),
                Just(EditMode::Mark),
            ],
        ) {
            let digit = Digit::try_from_value(value).unwrap();
            let true_toggle = match mode {
                EditMode::Init | EditMode::Solve => {
                    cell.value().is_none() || cell.value() == Some(digit)
                }
                EditMode::Mark => true,
            };
            prop_assume!(true_toggle);

            let mut board = Board::empty();
            let target = addr(3, 5);
            *board.cell_mut(target) = cell;
            // Init re-derives the lock from the value, so start from a
            // state the transition itself could have produced.
            if mode.is_init() {
                board.cell_mut(target).locked = cell.value().is_some();
            }
            let before = *board.cell(target);

            board.toggle_cell(mode, digit, target);
            board.toggle_cell(mode, digit, target);
            prop_assert_eq!(*board.cell(target), before);
        }

        #[test]
        fn prop_locked_cells_never_mutate_outside_init(
            cell in arbitrary_cell(),
            value in 1u8..=9,
            mark_mode in any::<bool>(),
        ) {
            prop_assume!(cell.is_locked());
            let digit = Digit::try_from_value(value).unwrap();
            let mode = if mark_mode { EditMode::Mark } else { EditMode::Solve };

            let mut board = Board::empty();
            let target = addr(8, 8);
            *board.cell_mut(target) = cell;

            let outcome = board.toggle_cell(mode, digit, target);
            prop_assert_eq!(outcome, ToggleOutcome::Blocked);
            prop_assert_eq!(*board.cell(target), cell);
        }
    }
}
