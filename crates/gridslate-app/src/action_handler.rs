use gridslate_board::persist::BoardRepository;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    repo: &mut BoardRepository<'_>,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, repo, action);
    }
}

pub(crate) fn handle(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    repo: &mut BoardRepository<'_>,
    action: Action,
) {
    match action {
        Action::SelectMode(mode) => app_state.selection.mode = mode,
        Action::SelectDigit(digit) => app_state.selection.select_digit(digit),
        Action::ClearDigit => app_state.selection.digit = None,
        Action::ClickCell(addr) => {
            // Clicks without a selected digit are silently ignored
            let Some(digit) = app_state.selection.digit else {
                return;
            };
            let outcome = app_state
                .board
                .toggle_cell(app_state.selection.mode, digit, addr);
            if outcome.changed() {
                app_state.mark_dirty();
            }
        }
        Action::RenameBoard(name) => {
            app_state.board.rename(name);
            app_state.mark_dirty();
        }
        Action::OpenLoadDialog => ui_state.load_dialog_open = true,
        Action::CloseLoadDialog => ui_state.load_dialog_open = false,
        Action::SwitchBoard(target) => match repo.switch_active(&app_state.board, target) {
            Ok(board) => {
                log::info!("switched to board {}", board.id());
                app_state.replace_board(board);
                app_state.clear_dirty();
                ui_state.load_dialog_open = false;
            }
            Err(err) => log::warn!("failed to switch board: {err}"),
        },
        Action::DeleteCurrentBoard => {
            let id = app_state.board.id().clone();
            match repo.delete_board(&id) {
                Ok(board) => {
                    log::info!("deleted board {id}, now on {}", board.id());
                    app_state.replace_board(board);
                    app_state.clear_dirty();
                    ui_state.load_dialog_open = false;
                }
                Err(err) => log::warn!("failed to delete board: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gridslate_board::{
        EditMode,
        persist::{InMemoryStore, SwitchTarget},
    };
    use gridslate_core::{CellAddr, CellId, Digit, GridId};

    use super::*;
    use crate::state::Selection;

    fn addr(grid: u8, cell: u8) -> CellAddr {
        CellAddr::new(GridId::new(grid), CellId::new(cell))
    }

    fn fixture() -> (AppState, UiState, InMemoryStore) {
        let mut store = InMemoryStore::new();
        let board = BoardRepository::new(&mut store).load_current();
        (AppState::new(board), UiState::new(), store)
    }

    #[test]
    fn init_click_locks_then_unlocks() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        let mut repo = BoardRepository::new(&mut store);
        app_state.selection.mode = EditMode::Init;
        app_state.selection.digit = Some(Digit::D5);

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::ClickCell(addr(0, 0)),
        );
        let cell = app_state.board.cell(addr(0, 0));
        assert_eq!(cell.value(), Some(Digit::D5));
        assert!(cell.is_locked());
        assert!(cell.marks().is_empty());
        assert!(app_state.is_dirty());

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::ClickCell(addr(0, 0)),
        );
        let cell = app_state.board.cell(addr(0, 0));
        assert_eq!(cell.value(), None);
        assert!(!cell.is_locked());
    }

    #[test]
    fn mark_click_on_locked_cell_changes_nothing() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        let mut repo = BoardRepository::new(&mut store);
        app_state.selection.mode = EditMode::Init;
        app_state.selection.digit = Some(Digit::D5);
        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::ClickCell(addr(0, 0)),
        );
        app_state.clear_dirty();

        app_state.selection.mode = EditMode::Mark;
        app_state.selection.digit = Some(Digit::D3);
        let before = app_state.board.clone();
        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::ClickCell(addr(0, 0)),
        );

        assert_eq!(app_state.board, before);
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn mark_click_toggles_the_digit_flag() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        let mut repo = BoardRepository::new(&mut store);
        app_state.selection.mode = EditMode::Mark;
        app_state.selection.digit = Some(Digit::D7);

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::ClickCell(addr(2, 6)),
        );
        assert!(app_state.board.cell(addr(2, 6)).marks().contains(Digit::D7));

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::ClickCell(addr(2, 6)),
        );
        assert!(app_state.board.cell(addr(2, 6)).marks().is_empty());
    }

    #[test]
    fn click_without_digit_is_noop() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        let mut repo = BoardRepository::new(&mut store);
        let before = app_state.board.clone();

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::ClickCell(addr(0, 0)),
        );

        assert_eq!(app_state.board, before);
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn rename_marks_dirty() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        let mut repo = BoardRepository::new(&mut store);

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::RenameBoard("Morning puzzle".to_owned()),
        );

        assert_eq!(app_state.board.name(), "Morning puzzle");
        assert!(app_state.is_dirty());
    }

    #[test]
    fn switch_away_and_back_preserves_edits() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        let mut repo = BoardRepository::new(&mut store);
        let first_id = app_state.board.id().clone();

        app_state.selection.mode = EditMode::Init;
        app_state.selection.digit = Some(Digit::D8);
        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::ClickCell(addr(3, 3)),
        );
        let edited = app_state.board.clone();

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::SwitchBoard(SwitchTarget::New),
        );
        assert_ne!(app_state.board.id(), &first_id);
        assert_eq!(app_state.selection, Selection::default());
        assert!(!app_state.is_dirty());

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::SwitchBoard(SwitchTarget::Existing(first_id)),
        );
        assert_eq!(app_state.board, edited);
    }

    #[test]
    fn switch_closes_the_dialog() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        let mut repo = BoardRepository::new(&mut store);
        ui_state.load_dialog_open = true;

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::SwitchBoard(SwitchTarget::New),
        );
        assert!(!ui_state.load_dialog_open);
    }

    #[test]
    fn delete_current_board_resyncs_onto_replacement() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        let mut repo = BoardRepository::new(&mut store);
        repo.save_current(&app_state.board).unwrap();
        let old_id = app_state.board.id().clone();
        ui_state.load_dialog_open = true;

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::DeleteCurrentBoard,
        );

        assert_ne!(app_state.board.id(), &old_id);
        assert!(app_state.board.is_blank());
        assert!(!ui_state.load_dialog_open);
        assert!(repo.list_sorted().iter().all(|b| b.id() != &old_id));
    }

    #[test]
    fn failed_switch_keeps_current_state() {
        let (mut app_state, mut ui_state, mut store) = fixture();
        store.fail_writes(true);
        let mut repo = BoardRepository::new(&mut store);
        let before = app_state.board.clone();
        ui_state.load_dialog_open = true;

        handle(
            &mut app_state,
            &mut ui_state,
            &mut repo,
            Action::SwitchBoard(SwitchTarget::New),
        );

        assert_eq!(app_state.board, before);
        assert!(ui_state.load_dialog_open);
    }
}
