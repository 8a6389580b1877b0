use std::sync::Arc;

use eframe::egui::{
    Align2, Button, Color32, FontId, Grid, Painter, Rect, RichText, Stroke, StrokeKind, Ui, Vec2,
    vec2,
};
use gridslate_board::Board;
use gridslate_core::{CellAddr, CellId, Digit, GridId, MarkSet};

use crate::action::{Action, ActionRequestQueue};

pub(crate) fn show(ui: &mut Ui, board: &Board, action_queue: &mut ActionRequestQueue) {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let border_color = visuals.widgets.inactive.fg_stroke.color;
    let locked_text_color = visuals.strong_text_color();
    let value_text_color = visuals.text_color();
    let mark_text_color = visuals.weak_text_color();
    let bg_color = visuals.text_edit_bg_color();

    let thin_border = Stroke::new(1.0, border_color);
    let thick_border = Stroke::new(3.0, border_color);

    let board_size = ui.available_size().min_elem();
    let cell_size = board_size / 9.0;

    Grid::new(ui.id().with("board"))
        .spacing((0.0, 0.0))
        .min_col_width(cell_size * 3.0)
        .min_row_height(cell_size * 3.0)
        .show(ui, |ui| {
            for grid_row in 0..3u8 {
                for grid_col in 0..3u8 {
                    let grid_id = GridId::new(grid_row * 3 + grid_col);
                    let sub_grid = Grid::new(ui.id().with(("sub_grid", grid_row, grid_col)))
                        .spacing((0.0, 0.0))
                        .min_col_width(cell_size)
                        .min_row_height(cell_size)
                        .show(ui, |ui| {
                            for cell_row in 0..3u8 {
                                for cell_col in 0..3u8 {
                                    let addr = CellAddr::new(
                                        grid_id,
                                        CellId::new(cell_row * 3 + cell_col),
                                    );
                                    let cell = board.cell(addr);

                                    let text = match cell.value() {
                                        Some(digit) if cell.is_locked() => {
                                            RichText::new(digit.as_str()).color(locked_text_color)
                                        }
                                        Some(digit) => {
                                            RichText::new(digit.as_str()).color(value_text_color)
                                        }
                                        None => RichText::new(""),
                                    }
                                    .size(cell_size * 0.8);

                                    let button =
                                        Button::new(text).min_size(Vec2::splat(cell_size)).fill(bg_color);
                                    let response = ui.add(button);

                                    if cell.value().is_none() {
                                        draw_marks(
                                            ui.painter(),
                                            response.rect,
                                            cell.marks(),
                                            cell_size,
                                            mark_text_color,
                                        );
                                    }
                                    ui.painter().rect_stroke(
                                        response.rect,
                                        0.0,
                                        thin_border,
                                        StrokeKind::Inside,
                                    );
                                    if response.clicked() {
                                        action_queue.request(Action::ClickCell(addr));
                                    }
                                }
                                ui.end_row();
                            }
                        });
                    ui.painter().rect_stroke(
                        sub_grid.response.rect,
                        0.0,
                        thick_border,
                        StrokeKind::Inside,
                    );
                }
                ui.end_row();
            }
        });
}

// Annotated marks render as a 3x3 mini-grid in the cell, digit d in the
// slot ((d-1)%3, (d-1)/3).
fn draw_marks(painter: &Painter, rect: Rect, marks: MarkSet, cell_size: f32, color: Color32) {
    let slot = cell_size / 3.0;
    for digit in Digit::ALL {
        if !marks.contains(digit) {
            continue;
        }
        let index = digit.value() - 1;
        let (col, row) = (index % 3, index / 3);
        let pos = rect.left_top()
            + vec2(
                (f32::from(col) + 0.5) * slot,
                (f32::from(row) + 0.5) * slot,
            );
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            digit.as_str(),
            FontId::proportional(slot * 0.8),
            color,
        );
    }
}
