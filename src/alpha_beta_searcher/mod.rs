//! Generic alpha-beta search for two-player zero-sum games.
//!
//! The engine never looks at game rules. A game plugs in through the traits in
//! [`traits`]: a [`GameState`] that knows whose turn it is and whether the game is over, a
//! [`GameMove`] that can be applied and undone, a [`MoveGenerator`], an [`Evaluator`] and
//! optionally a [`MoveOrderer`].

mod config;
mod minimax;
mod move_orderer;
mod quiescence;
mod score;
mod search;
mod stats;
pub mod traits;


pub use config::{
    ConfigError, SearchConfig, SearchContext, DEFAULT_QUIESCENCE_DEPTH, DEFAULT_SEARCH_DEPTH,
};
pub use minimax::{minimax, minimax_search};
pub use move_orderer::MvvLvaMoveOrderer;
pub use quiescence::quiescence_search;
pub use score::{is_finite, terminal_score, Score, DRAW_SCORE, NEG_INFINITY, POS_INFINITY};
pub use search::{alpha_beta, alpha_beta_search, Evaluation, SearchError, SearchResult};
pub use stats::SearchStats;
pub use traits::{
    Capture, Evaluator, GameMove, GameOutcome, GameState, MoveCollection, MoveGenerator,
    MoveOrderer, NoOpMoveOrderer, PieceKind,
};
