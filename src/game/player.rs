use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{
    alpha_beta_search, MvvLvaMoveOrderer, SearchConfig, SearchContext, SearchError, SearchResult,
};
use crate::games::ultimate_tic_tac_toe::{
    Board, BoardError, UtttEvaluator, UtttMove, UtttMoveGenerator,
};
use crate::input_handler::{self, InputError, MoveInput};

#[derive(Error, Debug, PartialEq)]
pub enum PlayerError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// A move chosen by a player. Engine moves carry the search that produced them.
#[derive(Debug)]
pub struct Turn {
    pub chosen: UtttMove,
    pub search: Option<SearchResult<UtttMove>>,
}

/// Who picks the moves for one side. Fixed when the game is set up.
pub enum Player {
    /// Reads moves from stdin until a legal one is entered.
    Human,
    /// Searches with alpha-beta. Owns its search context, and with it the
    /// random source used to shuffle moves.
    Engine(SearchContext),
}

impl Player {
    pub fn engine(config: SearchConfig, seed: Option<u64>) -> Self {
        let context = SearchContext::new(config);
        Player::Engine(match seed {
            Some(seed) => context.with_seed(seed),
            None => context,
        })
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human)
    }

    /// Picks the next move for the player to move on `board`. The board is
    /// left unchanged.
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Turn, PlayerError> {
        match self {
            Player::Human => loop {
                match input_handler::parse_move_input() {
                    Ok(input) => match human_move(board, &input) {
                        Ok(Some(chosen)) => {
                            return Ok(Turn {
                                chosen,
                                search: None,
                            })
                        }
                        Ok(None) => return Err(InputError::UserExit.into()),
                        Err(error) => println!("error: {}", error),
                    },
                    Err(error @ InputError::InvalidInput { .. }) => println!("{}", error),
                    Err(error) => return Err(error.into()),
                }
            },
            Player::Engine(context) => {
                let result = alpha_beta_search(
                    context,
                    board,
                    &UtttMoveGenerator,
                    &UtttEvaluator,
                    &MvvLvaMoveOrderer,
                )?;
                info!(
                    "{} searched {} positions in {:?}, score {}{}",
                    board.turn(),
                    result.stats.total_nodes(),
                    result.duration,
                    result.score,
                    if result.timed_out { " (time limit)" } else { "" }
                );
                Ok(Turn {
                    chosen: result.best_move,
                    search: Some(result),
                })
            }
        }
    }
}

/// Turns parsed human input into a move. `None` means the player asked to quit.
fn human_move(board: &Board, input: &MoveInput) -> Result<Option<UtttMove>, BoardError> {
    match input.to_move() {
        Some(chosen) => {
            board.check_playable(chosen.row as usize, chosen.col as usize)?;
            Ok(Some(chosen))
        }
        None => Ok(None),
    }
}
