//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Moves that fall outside this window can be
//! pruned without affecting the final result. The algorithm guarantees finding the same move as
//! minimax but explores fewer nodes.
//!
//! Scores are always expressed from the maximizing player's perspective. The maximizer raises
//! alpha, the minimizer lowers beta, and a node stops searching its remaining siblings as soon
//! as `beta <= alpha`. Nodes are fail-soft: they return the best score found, which may lie
//! outside the window they were given.
//!
//! # Terminal Positions
//!
//! Finished games are resolved before anything else, at every depth: a loss for the side to
//! move is negative infinity from that side's perspective and a draw is exactly zero.
//!
//! ## Move Ordering
//! Moves are optionally shuffled (see `SearchContext::with_seed`) and then sorted by the
//! `MoveOrderer`. Ordering is skipped when only one ply remains, since every child is then
//! scored statically and the order cannot produce extra cutoffs.
//!
//! ## Quiescence Search
//! At the nominal depth the search hands over to a capture-only extension (see
//! `quiescence.rs`) to avoid the horizon effect, where evaluation stops just before a
//! critical exchange. Games opt in by implementing `GameMove::capture`.
//!
//! ## Time Limit
//! With a configured time limit, every node checks the deadline. A node entered after the
//! deadline returns its static evaluation; a node whose deadline passes mid-loop returns the
//! best value found so far. Moves applied before the deadline are always undone.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use super::config::SearchContext;
use super::score::{self, Score, NEG_INFINITY, POS_INFINITY};
use super::stats::SearchStats;
use super::traits::{
    Evaluator, GameMove, GameOutcome, GameState, MoveCollection, MoveGenerator, MoveOrderer,
};

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("the game is already over ({0:?})")]
    GameOver(GameOutcome),
    #[error("no legal moves in a position that is not terminal")]
    NoMovesInNonTerminalPosition,
    #[error("failed to apply or undo move: {0}")]
    MoveApplication(String),
}

/// The move chosen by a root search, with its score and the work it took.
#[derive(Clone, Debug)]
pub struct SearchResult<M> {
    pub best_move: M,
    pub score: Score,
    pub stats: SearchStats,
    pub duration: Duration,
    /// True if the time limit cut the search short.
    pub timed_out: bool,
}

/// The score of a single node, with the work it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub score: Score,
    pub stats: SearchStats,
}

/// State of one search invocation. Owns its statistics; borrows the collaborators.
pub(super) struct SearchRun<'a, G, E, O> {
    pub(super) context: &'a mut SearchContext,
    pub(super) move_generator: &'a G,
    pub(super) evaluator: &'a E,
    pub(super) move_orderer: &'a O,
    pub(super) stats: SearchStats,
    deadline: Option<Instant>,
    timed_out: bool,
}

impl<'a, G, E, O> SearchRun<'a, G, E, O> {
    pub(super) fn new(
        context: &'a mut SearchContext,
        move_generator: &'a G,
        evaluator: &'a E,
        move_orderer: &'a O,
        start: Instant,
    ) -> Self {
        let deadline = context.config().deadline_from(start);
        Self {
            context,
            move_generator,
            evaluator,
            move_orderer,
            stats: SearchStats::default(),
            deadline,
            timed_out: false,
        }
    }

    pub(super) fn without_deadline(mut self) -> Self {
        self.deadline = None;
        self
    }

    pub(super) fn deadline_reached(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.timed_out = true;
                true
            }
            _ => false,
        }
    }

    pub(super) fn timed_out(&self) -> bool {
        self.timed_out
    }

    pub(super) fn static_eval<S>(&mut self, state: &S) -> Score
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.evaluations += 1;
        let score = self.evaluator.evaluate(state);
        debug_assert!(
            state.is_terminal() || score::is_finite(score),
            "evaluator returned an infinity sentinel for a non-terminal position"
        );
        score
    }

    /// Core alpha-beta minimax search with pruning.
    ///
    /// - `depth` - Remaining search depth (decrements each ply)
    /// - `alpha` - Lower bound of search window
    /// - `beta` - Upper bound of search window
    /// - `maximizing_player` - True if the player to move wants to maximize score
    pub(super) fn alpha_beta_minimax<S>(
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
            "alpha-beta window corrupted: alpha {} > beta {}",
            alpha,
            beta
        );

        if let Some(outcome) = state.outcome() {
            self.stats.positions_searched += 1;
            return Ok(score::terminal_score(outcome, state.is_maximizing_player()));
        }

        if depth == 0 {
            let quiescence_depth = self.context.quiescence_depth();
            return self.quiescence(state, quiescence_depth, maximizing_player);
        }

        self.stats.positions_searched += 1;

        if self.deadline_reached() {
            return Ok(self.static_eval(state));
        }

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
                self.alpha_beta_minimax(state, depth - 1, alpha, beta, !maximizing_player)
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

            if self.deadline_reached() {
                break;
            }
        }

        Ok(best_score)
    }

    /// Searches each root candidate with a window shared across siblings and keeps the
    /// first move whose score is strictly better than everything before it.
    fn search_root<S>(
        &mut self,
        state: &mut S,
        candidates: &[G::Move],
        depth: u8,
        maximizing_player: bool,
    ) -> Result<(Score, Option<G::Move>), SearchError>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
        O: MoveOrderer<S, G::Move>,
    {
        let mut best_score = score::worst_for(maximizing_player);
        let mut best_move = None;
        let mut alpha = NEG_INFINITY;
        let mut beta = POS_INFINITY;

        for game_move in candidates.iter() {
            let score = with_move_applied(game_move, state, |state| {
                self.alpha_beta_minimax(state, depth - 1, alpha, beta, !maximizing_player)
            })?;
            debug!("root move {:?} scored {}", game_move, score);

            update_best(
                score,
                game_move,
                maximizing_player,
                &mut best_score,
                &mut best_move,
            );

            if maximizing_player {
                alpha = max(alpha, score);
            } else {
                beta = min(beta, score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }

            if self.deadline_reached() {
                debug!("time limit reached during root search");
                break;
            }
        }

        Ok((best_score, best_move))
    }
}

/// Applies a move, executes a closure with the new state, then undoes the move.
/// Handles turn toggling automatically. The move is undone whether or not the
/// closure succeeds.
pub(super) fn with_move_applied<S, M, F, R>(
    game_move: &M,
    state: &mut S,
    f: F,
) -> Result<R, SearchError>
where
    S: GameState,
    M: GameMove<State = S>,
    F: FnOnce(&mut S) -> Result<R, SearchError>,
{
    game_move
        .apply(state)
        .map_err(|error| SearchError::MoveApplication(format!("{:?}", error)))?;
    state.toggle_turn();

    let result = f(state);

    state.toggle_turn();
    game_move
        .undo(state)
        .map_err(|error| SearchError::MoveApplication(format!("{:?}", error)))?;

    result
}

/// Updates best score and move if new score is better.
/// Returns true if best_score was updated.
pub(super) fn update_best<M: Clone>(
    score: Score,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut Score,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Generates, shuffles and orders the root candidates, rejecting positions
/// that cannot be searched.
pub(super) fn root_candidates<S, G, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    move_orderer: &O,
) -> Result<G::MoveList, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let depth = context.search_depth();
    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    if let Some(outcome) = state.outcome() {
        return Err(SearchError::GameOver(outcome));
    }

    let mut candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    context.shuffle(candidates.as_mut());
    if depth > 1 {
        move_orderer.order_moves(candidates.as_mut(), state);
    }

    Ok(candidates)
}

/// Searches for the best move using alpha-beta pruning.
///
/// This is the main entry point for the search algorithm. Every legal root move is applied,
/// searched to `depth - 1` with the opponent to move, and undone. The window is shared across
/// root moves, exactly as at internal nodes.
///
/// # Returns
///
/// - `Ok(result)` - The best move found, its score and the search statistics
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::GameOver(_))` - If the position is already terminal
/// - `Err(SearchError::NoAvailableMoves)` - If a non-terminal position has no legal moves
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::with_depth(6);
/// let result = alpha_beta_search(
///     &mut context,
///     &mut board,
///     &move_gen,
///     &evaluator,
///     &move_orderer,
/// )?;
/// ```
#[must_use = "search returns the best move found"]
pub fn alpha_beta_search<S, G, E, O>(
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
    debug!("alpha-beta search depth: {}", context.search_depth());
    let start = Instant::now();
    let depth = context.search_depth();
    let maximizing_player = state.is_maximizing_player();
    let candidates = root_candidates(context, state, move_generator, move_orderer)?;

    let mut run = SearchRun::new(context, move_generator, evaluator, move_orderer, start);
    let (best_score, best_move) =
        run.search_root(state, candidates.as_ref(), depth, maximizing_player)?;

    let best_move = match best_move {
        Some(best_move) => best_move,
        None => candidates
            .as_ref()
            .first()
            .cloned()
            .ok_or(SearchError::NoAvailableMoves)?,
    };

    let result = SearchResult {
        best_move,
        score: best_score,
        stats: run.stats,
        duration: start.elapsed(),
        timed_out: run.timed_out(),
    };
    debug!(
        "best move {:?} scored {} ({} positions, {} quiescence nodes, {:?})",
        result.best_move,
        result.score,
        result.stats.positions_searched,
        result.stats.quiescence_nodes,
        result.duration
    );

    Ok(result)
}

/// Scores a single node with alpha-beta search, without choosing a move.
///
/// `depth == 0` is valid here and is equivalent to a quiescence search with the
/// configured quiescence depth.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
    alpha: Score,
    beta: Score,
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
    let score = run.alpha_beta_minimax(state, depth, alpha, beta, maximizing_player)?;

    Ok(Evaluation {
        score,
        stats: run.stats,
    })
}
