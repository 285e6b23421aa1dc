//! Ultimate tic-tac-toe: nine local tic-tac-toe boards on a 9x9 grid.
//!
//! The cell a player marks selects the local board the opponent must play in
//! next. Three in a row in any local board wins the game, and a full grid is a
//! draw. When the selected local board has no empty cell, the player may mark
//! any empty cell.

mod board;
mod evaluate;
mod moves;


pub use board::{
    local_board_of, local_board_origin, next_local_board, Board, BoardError, Mark, GRID_SIZE,
    LOCAL_BOARD_COUNT, STARTING_LOCAL_BOARD,
};
pub use evaluate::{UtttEvaluator, BLOCK_SCORE, CORNER_SCORE, TWO_IN_A_ROW_SCORE};
pub use moves::{UtttMove, UtttMoveGenerator, UtttMoveList};

/// Cells of the eight lines of a 3x3 board, indexed row-major.
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Corner cells of a 3x3 board, indexed row-major.
pub(crate) const CORNERS: [usize; 4] = [0, 2, 6, 8];
