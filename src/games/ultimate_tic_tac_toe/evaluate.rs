//! Pattern-based static evaluation.
//!
//! Every line of every local board is inspected for both players. A player
//! earns [`TWO_IN_A_ROW_SCORE`] for two of their marks with the third cell
//! open, and [`BLOCK_SCORE`] for a mark that stops two of the opponent's.
//! Only when neither player has such a pattern do corner cells count, at
//! [`CORNER_SCORE`] each. X's total counts positive and O's negative, so the
//! score of a position is the negation of the score of its mirror image.

use super::board::{local_board_origin, Board, Mark, LOCAL_BOARD_COUNT};
use super::CORNERS;
use crate::alpha_beta_searcher::{Evaluator, Score};

pub const TWO_IN_A_ROW_SCORE: Score = 500;
pub const BLOCK_SCORE: Score = 100;
pub const CORNER_SCORE: Score = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Patterns {
    two_in_a_row: Score,
    blocks: Score,
}

impl Patterns {
    fn count(board: &Board, player: Mark) -> Self {
        let opponent = player.opposite();
        let mut patterns = Self::default();

        for index in 0..LOCAL_BOARD_COUNT {
            for line in Board::local_lines(index) {
                let marks = line.map(|(row, col)| board.get(row, col));
                let own = marks.iter().filter(|&&m| m == Some(player)).count();
                let theirs = marks.iter().filter(|&&m| m == Some(opponent)).count();
                let empty = marks.iter().filter(|m| m.is_none()).count();

                if own == 2 && empty == 1 {
                    patterns.two_in_a_row += 1;
                }
                if theirs == 2 && own == 1 {
                    patterns.blocks += 1;
                }
            }
        }

        patterns
    }

    fn is_empty(&self) -> bool {
        self.two_in_a_row == 0 && self.blocks == 0
    }

    fn score(&self) -> Score {
        TWO_IN_A_ROW_SCORE * self.two_in_a_row + BLOCK_SCORE * self.blocks
    }
}

fn corners(board: &Board, player: Mark) -> Score {
    let mut count = 0;
    for index in 0..LOCAL_BOARD_COUNT {
        let (origin_row, origin_col) = local_board_origin(index);
        for cell in CORNERS {
            if board.get(origin_row + cell / 3, origin_col + cell % 3) == Some(player) {
                count += 1;
            }
        }
    }
    count
}

#[derive(Clone, Default, Debug)]
pub struct UtttEvaluator;

impl Evaluator<Board> for UtttEvaluator {
    fn evaluate_position(&self, board: &Board) -> Score {
        let x = Patterns::count(board, Mark::X);
        let o = Patterns::count(board, Mark::O);

        if x.is_empty() && o.is_empty() {
            return CORNER_SCORE * (corners(board, Mark::X) - corners(board, Mark::O));
        }

        x.score() - o.score()
    }
}
