//! Turn-taking front end for ultimate tic-tac-toe.

pub mod game_loop;
pub mod player;

pub use game_loop::{GameError, GameLoop, GameResult};
pub use player::{Player, PlayerError, Turn};
