use std::mem;

use gridslate_board::{EditMode, persist::SwitchTarget};
use gridslate_core::{CellAddr, Digit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    SelectMode(EditMode),
    SelectDigit(Digit),
    ClearDigit,
    ClickCell(CellAddr),
    RenameBoard(String),
    OpenLoadDialog,
    CloseLoadDialog,
    SwitchBoard(SwitchTarget),
    DeleteCurrentBoard,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::SelectMode(EditMode::Mark));
        queue.request(Action::ClearDigit);

        let drained = queue.take_all();
        assert_eq!(
            drained,
            vec![Action::SelectMode(EditMode::Mark), Action::ClearDigit]
        );

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
