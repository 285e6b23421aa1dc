//! Quiescence search to avoid the horizon effect.
//!
//! Extends the search beyond the nominal depth by only considering capturing moves. The
//! static evaluation of the position ("stand pat") is always an option: the player to move
//! is never forced to capture, so the result is never worse for that player than the stand
//! pat score. The extension has its own depth budget, separate from the main search depth.
//!
//! Each quiescence entry opens a full window and prunes within the capture tree, so the
//! returned score is the exact max/min over the stand pat and every capture line.

use std::cmp::{max, min};
use std::time::Instant;

use super::config::SearchContext;
use super::score::{Score, NEG_INFINITY, POS_INFINITY};
use super::search::{with_move_applied, Evaluation, SearchError, SearchRun};
use super::traits::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer};

impl<'a, G, E, O> SearchRun<'a, G, E, O> {
    pub(super) fn quiescence<S>(
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
        self.quiescence_window(state, depth, NEG_INFINITY, POS_INFINITY, maximizing_player)
    }

    fn quiescence_window<S>(
        &mut self,
        state: &mut S,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing_player: bool,
    ) -> Result<Score, SearchError>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
        O: MoveOrderer<S, G::Move>,
    {
        debug_assert!(
            alpha <= beta,
            "quiescence window corrupted: alpha {} > beta {}",
            alpha,
            beta
        );
        self.stats.quiescence_nodes += 1;

        let stand_pat = self.static_eval(state);
        if depth == 0 || state.is_terminal() || self.deadline_reached() {
            return Ok(stand_pat);
        }

        let candidates = self.move_generator.generate_moves(state);
        let mut captures: Vec<G::Move> = candidates
            .as_ref()
            .iter()
            .filter(|game_move| game_move.capture(&*state).is_some())
            .cloned()
            .collect();

        if captures.is_empty() {
            return Ok(stand_pat);
        }

        self.move_orderer.order_moves(&mut captures, state);

        let mut best_score = stand_pat;
        if maximizing_player {
            alpha = max(alpha, best_score);
        } else {
            beta = min(beta, best_score);
        }
        if beta <= alpha {
            return Ok(best_score);
        }

        for capture in captures.iter() {
            let score = with_move_applied(capture, state, |state| {
                self.quiescence_window(state, depth - 1, alpha, beta, !maximizing_player)
            })?;

            if maximizing_player {
                best_score = max(best_score, score);
                alpha = max(alpha, best_score);
            } else {
                best_score = min(best_score, score);
                beta = min(beta, best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best_score)
    }
}

/// Runs a quiescence search from `state` with the given depth budget.
///
/// Returns the stand pat score when `depth` is zero, the position is terminal, or no
/// capture is available.
#[allow(clippy::too_many_arguments)]
pub fn quiescence_search<S, G, E, O>(
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
    );
    let score = run.quiescence(state, depth, maximizing_player)?;

    Ok(Evaluation {
        score,
        stats: run.stats,
    })
}
