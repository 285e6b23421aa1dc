//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

use smallvec::{Array, SmallVec};

use super::score::Score;

/// How a finished game ended, from the perspective of the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player to move has lost (e.g. checkmated, or the opponent completed a line).
    Loss,
    /// Stalemate, repetition, move-count rule, full board, etc.
    Draw,
}

/// Represents the state of a two-player zero-sum game.
pub trait GameState {
    /// Returns true if the current player is the maximizing player.
    fn is_maximizing_player(&self) -> bool;

    /// Switches to the next player's turn.
    fn toggle_turn(&mut self);

    /// Returns the outcome if the game is over in this position, otherwise `None`.
    fn outcome(&self) -> Option<GameOutcome>;

    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

/// Piece kinds ranked by value, used to classify captures for move ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const COUNT: usize = 6;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The attacking and captured piece of a capturing move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub attacker: PieceKind,
    pub victim: PieceKind,
}

impl Capture {
    pub fn new(attacker: PieceKind, victim: PieceKind) -> Self {
        Self { attacker, victim }
    }
}

/// Represents an action that can be applied to and undone from a game state.
pub trait GameMove: Clone + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move to the given state. The turn is toggled by the caller.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state. Must be the exact inverse of `apply`.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Returns the capture this move makes in `state`, if any. Only capturing
    /// moves are searched in quiescence. Default implementation returns `None`.
    fn capture(&self, _state: &Self::State) -> Option<Capture> {
        None
    }
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState> {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the current player.
    fn generate_moves(&self, state: &mut S) -> Self::MoveList;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState> {
    /// Static evaluation of a non-terminal position. Higher scores favor the
    /// maximizing player. Must stay strictly between the infinity sentinels.
    fn evaluate_position(&self, state: &S) -> Score;

    /// Scores any position, resolving finished games before falling back to
    /// the static evaluation.
    fn evaluate(&self, state: &S) -> Score {
        match state.outcome() {
            Some(outcome) => super::score::terminal_score(outcome, state.is_maximizing_player()),
            None => self.evaluate_position(state),
        }
    }
}

/// Orders moves to improve alpha-beta pruning efficiency.
pub trait MoveOrderer<S: GameState, M> {
    /// Sorts moves in-place, placing "better" moves first. Must not add or remove moves.
    fn order_moves(&self, moves: &mut [M], state: &S);
}

/// A no-op move orderer for games without move ordering heuristics.
#[derive(Clone, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<S: GameState, M> MoveOrderer<S, M> for NoOpMoveOrderer {
    #[inline(always)]
    fn order_moves(&self, _moves: &mut [M], _state: &S) {}
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M> MoveCollection<M> for Vec<M> {}

impl<A: Array> MoveCollection<A::Item> for SmallVec<A> {}
