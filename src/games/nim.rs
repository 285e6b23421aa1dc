//! Single-pile Nim: players alternately take one to three objects, and whoever
//! takes the last object wins.

use log::debug;
use thiserror::Error;

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameOutcome, GameState, MoveGenerator,
    NoOpMoveOrderer, Score, SearchContext, SearchError, SearchResult,
};

pub const MAX_TAKE: u32 = 3;

/// Static score of a position whose winner is known from the pile size alone.
const WINNING_POSITION_SCORE: Score = 100;

#[derive(Error, Debug, PartialEq)]
pub enum NimError {
    #[error("cannot take {take} from a pile of {pile}")]
    InvalidTake { take: u32, pile: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct NimState {
    pub pile: u32,
    pub is_player_one_turn: bool,
}

impl NimState {
    /// A pile with player one, the maximizing player, to move.
    pub fn new(pile: u32) -> Self {
        Self {
            pile,
            is_player_one_turn: true,
        }
    }
}

impl GameState for NimState {
    fn is_maximizing_player(&self) -> bool {
        self.is_player_one_turn
    }

    fn toggle_turn(&mut self) {
        self.is_player_one_turn = !self.is_player_one_turn;
    }

    fn outcome(&self) -> Option<GameOutcome> {
        // the previous player took the last object
        (self.pile == 0).then_some(GameOutcome::Loss)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NimMove {
    pub take: u32,
}

impl GameMove for NimMove {
    type State = NimState;
    type Error = NimError;

    fn apply(&self, state: &mut NimState) -> Result<(), NimError> {
        if self.take == 0 || self.take > MAX_TAKE || self.take > state.pile {
            return Err(NimError::InvalidTake {
                take: self.take,
                pile: state.pile,
            });
        }
        state.pile -= self.take;
        Ok(())
    }

    fn undo(&self, state: &mut NimState) -> Result<(), NimError> {
        state.pile += self.take;
        Ok(())
    }
}

#[derive(Clone, Default, Debug)]
pub struct NimMoveGenerator;

impl MoveGenerator<NimState> for NimMoveGenerator {
    type Move = NimMove;
    type MoveList = Vec<NimMove>;

    fn generate_moves(&self, state: &mut NimState) -> Vec<NimMove> {
        (1..=MAX_TAKE.min(state.pile))
            .map(|take| NimMove { take })
            .collect()
    }
}

/// Piles that are a multiple of four are lost for the player to move.
#[derive(Clone, Default, Debug)]
pub struct NimEvaluator;

impl Evaluator<NimState> for NimEvaluator {
    fn evaluate_position(&self, state: &NimState) -> Score {
        let to_move_is_winning = state.pile % (MAX_TAKE + 1) != 0;
        if to_move_is_winning == state.is_player_one_turn {
            WINNING_POSITION_SCORE
        } else {
            -WINNING_POSITION_SCORE
        }
    }
}

/// Searches a pile with player one to move and returns the chosen take.
pub fn best_take(
    context: &mut SearchContext,
    pile: u32,
) -> Result<SearchResult<NimMove>, SearchError> {
    let mut state = NimState::new(pile);
    let result = alpha_beta_search(
        context,
        &mut state,
        &NimMoveGenerator,
        &NimEvaluator,
        &NoOpMoveOrderer,
    )?;
    debug!("nim pile {}: take {}", pile, result.best_move.take);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha_beta_searcher::{NEG_INFINITY, POS_INFINITY};

    #[test]
    fn test_best_take_leaves_multiple_of_four() {
        for pile in 1..=21 {
            if pile % 4 == 0 {
                continue;
            }
            let result = best_take(&mut SearchContext::with_depth(6), pile).unwrap();
            assert_eq!(result.best_move.take, pile % 4, "pile {}", pile);
            assert!(result.score > 0);
        }
    }

    #[test]
    fn test_short_piles_are_solved_exactly() {
        let result = best_take(&mut SearchContext::with_depth(8), 7).unwrap();
        assert_eq!(result.score, POS_INFINITY);

        let result = best_take(&mut SearchContext::with_depth(8), 8).unwrap();
        assert_eq!(result.score, NEG_INFINITY);
    }

    #[test]
    fn test_empty_pile_is_game_over() {
        assert_eq!(
            best_take(&mut SearchContext::with_depth(4), 0).unwrap_err(),
            SearchError::GameOver(GameOutcome::Loss)
        );
    }

    #[test]
    fn test_invalid_takes_rejected() {
        let mut state = NimState::new(2);
        assert_eq!(
            NimMove { take: 3 }.apply(&mut state),
            Err(NimError::InvalidTake { take: 3, pile: 2 })
        );
        assert!(NimMove { take: 0 }.apply(&mut state).is_err());
        assert_eq!(state, NimState::new(2));
    }

    #[test]
    fn test_generator_caps_at_pile() {
        assert_eq!(
            NimMoveGenerator.generate_moves(&mut NimState::new(2)),
            vec![NimMove { take: 1 }, NimMove { take: 2 }]
        );
        assert_eq!(NimMoveGenerator.generate_moves(&mut NimState::new(9)).len(), 3);
    }
}
