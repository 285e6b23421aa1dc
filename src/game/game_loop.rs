use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{GameMove, GameState, SearchStats};
use crate::games::ultimate_tic_tac_toe::{Board, BoardError, Mark};
use crate::input_handler::InputError;

use super::player::{Player, PlayerError, Turn};

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error("illegal move: {0}")]
    IllegalMove(#[from] BoardError),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameResult {
    Won(Mark),
    Draw,
    Quit,
}

pub struct GameLoop {
    board: Board,
    x: Player,
    o: Player,
    delay: Option<Duration>,
    quiet: bool,
    engine_stats: SearchStats,
}

impl GameLoop {
    pub fn new(x: Player, o: Player) -> Self {
        Self {
            board: Board::new(),
            x,
            o,
            delay: None,
            quiet: false,
            engine_stats: SearchStats::default(),
        }
    }

    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Pause after every move, so engine games can be followed.
    pub fn with_delay(mut self, delay: Option<Duration>) -> Self {
        self.delay = delay;
        self
    }

    /// Skip printing the board.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Search work summed over every engine move played so far.
    pub fn engine_stats(&self) -> SearchStats {
        self.engine_stats
    }

    pub fn run(&mut self) -> Result<GameResult, GameError> {
        loop {
            if self.board.is_terminal() {
                let result = match self.board.winner() {
                    Some(mark) => GameResult::Won(mark),
                    None => GameResult::Draw,
                };
                self.render();
                match result {
                    GameResult::Won(mark) => println!("{} wins!", mark),
                    _ => println!("Draw!"),
                }
                info!(
                    "game over after {} moves: {:?} ({} positions searched)",
                    self.board.moves_played(),
                    result,
                    self.engine_stats.total_nodes()
                );
                return Ok(result);
            }

            self.render();

            let current_turn = self.board.turn();
            let player = match current_turn {
                Mark::X => &mut self.x,
                Mark::O => &mut self.o,
            };

            let turn = match player.choose_move(&mut self.board) {
                Ok(turn) => turn,
                Err(PlayerError::Input(InputError::UserExit)) => {
                    info!("{} quit after {} moves", current_turn, self.board.moves_played());
                    return Ok(GameResult::Quit);
                }
                Err(error) => return Err(error.into()),
            };

            turn.chosen.apply(&mut self.board)?;
            GameState::toggle_turn(&mut self.board);
            if let Some(search) = &turn.search {
                self.engine_stats += search.stats;
            }
            self.announce(current_turn, &turn);

            if let Some(delay) = self.delay {
                std::thread::sleep(delay);
            }
        }
    }

    fn render(&self) {
        if !self.quiet {
            println!("{}", self.board);
        }
    }

    fn announce(&self, mark: Mark, turn: &Turn) {
        if self.quiet {
            return;
        }
        match &turn.search {
            Some(search) => println!(
                "{} chose {}\n* Score: {}\n* Positions searched: {}\n* Move took: {:?}",
                mark,
                turn.chosen,
                search.score,
                search.stats.total_nodes(),
                search.duration
            ),
            None => println!("{} chose {}", mark, turn.chosen),
        }
    }
}
