use std::fmt;
use std::ops::Range;

use smallvec::SmallVec;

use super::board::{local_board_origin, Board, BoardError, GRID_SIZE};
use crate::alpha_beta_searcher::{
    Capture, GameMove, GameOutcome, GameState, MoveGenerator, PieceKind,
};

/// Marks the cell at (`row`, `col`) of the 9x9 grid for the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UtttMove {
    pub row: u8,
    pub col: u8,
}

impl UtttMove {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for UtttMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// A local board offers at most 9 moves; only free moves on a mostly empty grid
/// spill to the heap.
pub type UtttMoveList = SmallVec<[UtttMove; 64]>;

impl GameState for Board {
    fn is_maximizing_player(&self) -> bool {
        self.turn().is_maximizing()
    }

    fn toggle_turn(&mut self) {
        Board::toggle_turn(self);
    }

    fn outcome(&self) -> Option<GameOutcome> {
        if self.winner().is_some() {
            // the line was completed by the player who just moved
            Some(GameOutcome::Loss)
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl GameMove for UtttMove {
    type State = Board;
    type Error = BoardError;

    fn apply(&self, state: &mut Board) -> Result<(), BoardError> {
        state.play(self.row as usize, self.col as usize)
    }

    fn undo(&self, state: &mut Board) -> Result<(), BoardError> {
        state.unplay(self.row as usize, self.col as usize)
    }

    /// Completing a line is the only tactical move in this game, so winning
    /// moves are reported as captures of the most valuable piece.
    fn capture(&self, state: &Board) -> Option<Capture> {
        state
            .wins_with(self.row as usize, self.col as usize)
            .then(|| Capture::new(PieceKind::Pawn, PieceKind::King))
    }
}

#[derive(Clone, Default, Debug)]
pub struct UtttMoveGenerator;

impl UtttMoveGenerator {
    fn empty_cells_in(
        board: &Board,
        rows: Range<usize>,
        cols: Range<usize>,
        moves: &mut UtttMoveList,
    ) {
        for row in rows {
            for col in cols.clone() {
                if board.get(row, col).is_none() {
                    moves.push(UtttMove::new(row as u8, col as u8));
                }
            }
        }
    }
}

impl MoveGenerator<Board> for UtttMoveGenerator {
    type Move = UtttMove;
    type MoveList = UtttMoveList;

    fn generate_moves(&self, board: &mut Board) -> UtttMoveList {
        let mut moves = UtttMoveList::new();
        if board.is_terminal() {
            return moves;
        }

        match board.playable_local_board() {
            Some(index) => {
                let (row, col) = local_board_origin(index);
                Self::empty_cells_in(board, row..row + 3, col..col + 3, &mut moves);
            }
            None => Self::empty_cells_in(board, 0..GRID_SIZE, 0..GRID_SIZE, &mut moves),
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ultimate_tic_tac_toe::Mark;
    use crate::uttt_position;

    #[test]
    fn test_opening_moves_are_in_centre_board() {
        let mut board = Board::new();
        let moves = UtttMoveGenerator.generate_moves(&mut board);

        assert_eq!(moves.len(), 9);
        assert!(moves
            .iter()
            .all(|m| (3..6).contains(&m.row) && (3..6).contains(&m.col)));
    }

    #[test]
    fn test_moves_follow_the_sending_cell() {
        let mut board = Board::new();
        UtttMove::new(3, 5).apply(&mut board).unwrap();
        board.toggle_turn();

        let moves = UtttMoveGenerator.generate_moves(&mut board);

        assert_eq!(moves.len(), 9);
        assert!(moves
            .iter()
            .all(|m| m.row < 3 && (6..9).contains(&m.col)));
    }

    #[test]
    fn test_full_target_board_opens_every_empty_cell() {
        let mut board = uttt_position! {
            X O X . . . . . .
            X O O . . . . . .
            O X X . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };
        board.set_target(Some(0));

        let moves = UtttMoveGenerator.generate_moves(&mut board);

        assert_eq!(moves.len(), 81 - 9);
    }

    #[test]
    fn test_finished_game_has_no_moves() {
        let mut board = uttt_position! {
            X X X . . . . . .
            O O . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };

        assert_eq!(board.outcome(), Some(GameOutcome::Loss));
        assert!(UtttMoveGenerator.generate_moves(&mut board).is_empty());
    }

    #[test]
    fn test_full_grid_is_a_draw() {
        let mut board = uttt_position! {
            X O X X O X X O X
            X O O X O O X O O
            O X X O X X O X X
            X O X X O X X O X
            X O O X O O X O O
            O X X O X X O X X
            X O X X O X X O X
            X O O X O O X O O
            O X X O X X O X X
        };

        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
        assert!(UtttMoveGenerator.generate_moves(&mut board).is_empty());
    }

    #[test]
    fn test_winning_moves_are_captures() {
        let board = uttt_position! {
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . X X . . . .
            . . . O O . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
            . . . . . . . . .
        };

        assert_eq!(board.turn(), Mark::X);
        assert_eq!(
            UtttMove::new(3, 5).capture(&board),
            Some(Capture::new(PieceKind::Pawn, PieceKind::King))
        );
        assert_eq!(UtttMove::new(4, 5).capture(&board), None);
        assert_eq!(UtttMove::new(5, 5).capture(&board), None);
    }

    #[test]
    fn test_apply_rejects_illegal_moves() {
        let mut board = Board::new();
        assert!(UtttMove::new(0, 0).apply(&mut board).is_err());
        assert!(UtttMove::new(9, 4).apply(&mut board).is_err());
        assert_eq!(board, Board::new());
    }
}
