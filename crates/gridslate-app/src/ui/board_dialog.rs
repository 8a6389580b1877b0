use eframe::egui::{Context, Id, Modal, Sides, Ui};
use egui_extras::{Column, TableBuilder};
use gridslate_board::{
    Board, BoardId,
    persist::SwitchTarget,
};

use crate::action::{Action, ActionRequestQueue};

pub(crate) fn show(
    ctx: &Context,
    boards: &[Board],
    current_id: &BoardId,
    action_queue: &mut ActionRequestQueue,
) {
    let modal = Modal::new(Id::new("load_board")).show(ctx, |ui| {
        ui.heading("Load Another Board");
        ui.add_space(4.0);

        if boards.is_empty() {
            ui.label("No saved boards yet. Create a new board to get started.");
        } else {
            ui.label("Select a board to load.");
            show_board_list(ui, boards, current_id, action_queue);
        }
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                if ui.button("New empty board").clicked() {
                    action_queue.request(Action::SwitchBoard(SwitchTarget::New));
                    ui.close();
                }
                if ui.button("Delete current board").clicked() {
                    action_queue.request(Action::DeleteCurrentBoard);
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    action_queue.request(Action::CloseLoadDialog);
                    ui.close();
                }
            },
        );
    });

    if modal.should_close() {
        action_queue.request(Action::CloseLoadDialog);
    }
}

fn show_board_list(
    ui: &mut Ui,
    boards: &[Board],
    current_id: &BoardId,
    action_queue: &mut ActionRequestQueue,
) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .body(|mut body| {
            for board in boards {
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        let label = if board.id() == current_id {
                            format!("{} (current)", board.name())
                        } else {
                            board.name().to_owned()
                        };
                        if ui.button(label).clicked() {
                            action_queue
                                .request(Action::SwitchBoard(SwitchTarget::Existing(
                                    board.id().clone(),
                                )));
                        }
                    });
                });
            }
        });
}
