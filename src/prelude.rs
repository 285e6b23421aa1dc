//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameOutcome, GameState, MoveGenerator, MoveOrderer,
    MvvLvaMoveOrderer, NoOpMoveOrderer, Score, SearchConfig, SearchContext, SearchError,
    SearchResult,
};
pub use crate::games::nim::{NimEvaluator, NimMove, NimMoveGenerator, NimState};
pub use crate::games::ultimate_tic_tac_toe::{
    Board, Mark, UtttEvaluator, UtttMove, UtttMoveGenerator,
};
