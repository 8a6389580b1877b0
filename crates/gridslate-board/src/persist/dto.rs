//! Wire-shape DTOs for the persisted JSON layout.
//!
//! The stored shapes carry redundant `gridId`/`cellId` fields for
//! compatibility with boards saved by earlier versions of the editor; the
//! typed model derives both from position, so encode writes position-derived
//! ids and decode ignores whatever ids were stored.

use std::collections::BTreeMap;

use gridslate_core::{CellAddr, CellId, Digit, DigitOutOfRange, GridId, MarkSet};
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardId, Cell, Grid, generate_board_name};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BoardDto {
    grids: [GridDto; 9],
    #[serde(default)]
    name: String,
    #[serde(default)]
    board_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridDto {
    #[serde(default)]
    grid_id: u8,
    cells: [CellDto; 9],
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CellDto {
    #[serde(default)]
    cell_id: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<u8>,
    #[serde(default)]
    is_locked: bool,
    marks: [bool; 9],
}

/// Reasons a persisted board fails to decode into the typed model.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum DecodeError {
    /// The stored value is not valid JSON for the board shape.
    #[display("malformed board JSON: {_0}")]
    Json(serde_json::Error),
    /// A stored cell value is outside 1-9.
    #[display("invalid persisted board: {_0}")]
    Digit(DigitOutOfRange),
}

impl BoardDto {
    pub(crate) fn from_board(board: &Board) -> Self {
        Self {
            grids: GridId::ALL.map(|grid_id| GridDto {
                grid_id: grid_id.value(),
                cells: CellId::ALL.map(|cell_id| {
                    let cell = board.cell(CellAddr::new(grid_id, cell_id));
                    CellDto {
                        cell_id: cell_id.value(),
                        value: cell.value().map(Digit::value),
                        is_locked: cell.is_locked(),
                        marks: cell.marks().flags(),
                    }
                }),
            }),
            name: board.name().to_owned(),
            board_id: board.id().as_str().to_owned(),
        }
    }

    /// Converts to the typed model, backfilling `boardId`/`name` when the
    /// stored board predates those fields.
    pub(crate) fn into_board(self) -> Result<Board, DecodeError> {
        let mut grids = [Grid::default(); 9];
        for (grid, grid_dto) in grids.iter_mut().zip(self.grids) {
            for (cell, cell_dto) in grid.cells.iter_mut().zip(grid_dto.cells) {
                let value = cell_dto.value.map(Digit::try_from_value).transpose()?;
                *cell = Cell {
                    value,
                    // A lock without a value cannot be produced by the
                    // editor; repair silently instead of rejecting.
                    locked: cell_dto.is_locked && value.is_some(),
                    marks: MarkSet::from_flags(cell_dto.marks),
                };
            }
        }

        let id = if self.board_id.is_empty() {
            BoardId::random()
        } else {
            BoardId::from(self.board_id)
        };
        let name = if self.name.is_empty() {
            generate_board_name()
        } else {
            self.name
        };
        Ok(Board { id, name, grids })
    }
}

pub(crate) fn board_to_json(board: &Board) -> Result<String, serde_json::Error> {
    serde_json::to_string(&BoardDto::from_board(board))
}

pub(crate) fn board_from_json(json: &str) -> Result<Board, DecodeError> {
    let dto: BoardDto = serde_json::from_str(json)?;
    dto.into_board()
}

pub(crate) fn catalog_to_json(
    catalog: &BTreeMap<BoardId, Board>,
) -> Result<String, serde_json::Error> {
    let dto: BTreeMap<&str, BoardDto> = catalog
        .iter()
        .map(|(id, board)| (id.as_str(), BoardDto::from_board(board)))
        .collect();
    serde_json::to_string(&dto)
}

/// Decodes the saved-board collection, skipping entries that fail to decode.
pub(crate) fn catalog_from_json(json: &str) -> Result<BTreeMap<BoardId, Board>, DecodeError> {
    let dto: BTreeMap<String, BoardDto> = serde_json::from_str(json)?;
    let mut catalog = BTreeMap::new();
    for (key, mut board_dto) in dto {
        // Entries saved before ids existed carry the id only in the map key.
        if board_dto.board_id.is_empty() {
            board_dto.board_id = key;
        }
        match board_dto.into_board() {
            Ok(board) => {
                catalog.insert(board.id().clone(), board);
            }
            Err(err) => log::warn!("skipping undecodable saved board: {err}"),
        }
    }
    Ok(catalog)
}
