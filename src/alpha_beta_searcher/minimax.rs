//! Plain minimax without pruning.
//!
//! Visits every node of the tree that alpha-beta would search, with the same terminal,
//! horizon and ordering rules, so both must agree on every score and on the chosen move.
//! Useful as a reference when changing the pruning logic, and for measuring how many
//! nodes pruning saves.

use std::cmp::{max, min};
use std::time::Instant;

use log::debug;

use super::config::SearchContext;
use super::score::{self, Score};
use super::search::{
    root_candidates, update_best, with_move_applied, Evaluation, SearchError, SearchResult,
    SearchRun,
};
use super::traits::{Evaluator, GameState, MoveCollection, MoveGenerator, MoveOrderer};

impl<'a, G, E, O> SearchRun<'a, G, E, O> {
    fn minimax_node<S>(
        &mut self,
        state: &mut S,
        depth: u8,
        maximizing_player: bool,
    ) -> Result<Score, SearchError>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
        O: MoveOrderer<S, G::Move>,
    {
        if let Some(outcome) = state.outcome() {
            self.stats.positions_searched += 1;
            return Ok(score::terminal_score(outcome, state.is_maximizing_player()));
        }

        if depth == 0 {
            let quiescence_depth = self.context.quiescence_depth();
            return self.quiescence(state, quiescence_depth, maximizing_player);
        }

        self.stats.positions_searched += 1;

        let mut candidates = self.move_generator.generate_moves(state);
        if candidates.is_empty() {
            return Err(SearchError::NoMovesInNonTerminalPosition);
        }

        self.context.shuffle(candidates.as_mut());
        if depth > 1 {
            self.move_orderer.order_moves(candidates.as_mut(), state);
        }

        let mut best_score = score::worst_for(maximizing_player);
        for game_move in candidates.as_ref().iter() {
            let score = with_move_applied(game_move, state, |state| {
                self.minimax_node(state, depth - 1, !maximizing_player)
            })?;

            best_score = if maximizing_player {
                max(best_score, score)
            } else {
                min(best_score, score)
            };
        }

        Ok(best_score)
    }
}

/// Scores a single node with full minimax. Ignores the time limit.
#[allow(clippy::too_many_arguments)]
pub fn minimax<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
    maximizing_player: bool,
) -> Result<Evaluation, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let mut run = SearchRun::new(
        context,
        move_generator,
        evaluator,
        move_orderer,
        Instant::now(),
    )
    .without_deadline();
    let score = run.minimax_node(state, depth, maximizing_player)?;

    Ok(Evaluation {
        score,
        stats: run.stats,
    })
}

/// Chooses a root move with full minimax. Same contract as `alpha_beta_search`,
/// but ignores the time limit.
#[must_use = "search returns the best move found"]
pub fn minimax_search<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
) -> Result<SearchResult<G::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    debug!("minimax search depth: {}", context.search_depth());
    let start = Instant::now();
    let depth = context.search_depth();
    let maximizing_player = state.is_maximizing_player();
    let candidates = root_candidates(context, state, move_generator, move_orderer)?;

    let mut run = SearchRun::new(context, move_generator, evaluator, move_orderer, start)
        .without_deadline();
    let mut best_score = score::worst_for(maximizing_player);
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(game_move, state, |state| {
            run.minimax_node(state, depth - 1, !maximizing_player)
        })?;
        update_best(
            score,
            game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );
    }

    let best_move = match best_move {
        Some(best_move) => best_move,
        None => candidates
            .as_ref()
            .first()
            .cloned()
            .ok_or(SearchError::NoAvailableMoves)?,
    };

    Ok(SearchResult {
        best_move,
        score: best_score,
        stats: run.stats,
        duration: start.elapsed(),
        timed_out: false,
    })
}
