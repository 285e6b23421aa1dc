//! Score type and the infinity sentinels used for forced outcomes and window bounds.

use super::traits::GameOutcome;

/// Scores are always from the maximizing player's perspective.
pub type Score = i32;

/// A forced win for the maximizing player.
pub const POS_INFINITY: Score = Score::MAX;

/// A forced win for the minimizing player. Symmetric with `POS_INFINITY` so
/// negating a score never overflows.
pub const NEG_INFINITY: Score = -Score::MAX;

pub const DRAW_SCORE: Score = 0;

/// Maps a finished game to its score. A loss for the side to move is negative
/// infinity from that side's perspective.
#[inline]
pub fn terminal_score(outcome: GameOutcome, maximizing_to_move: bool) -> Score {
    match outcome {
        GameOutcome::Draw => DRAW_SCORE,
        GameOutcome::Loss if maximizing_to_move => NEG_INFINITY,
        GameOutcome::Loss => POS_INFINITY,
    }
}

#[inline]
pub fn is_finite(score: Score) -> bool {
    score > NEG_INFINITY && score < POS_INFINITY
}

/// Initial best value for a node: the worst possible score for the player to move.
#[inline]
pub(crate) fn worst_for(maximizing_player: bool) -> Score {
    if maximizing_player {
        NEG_INFINITY
    } else {
        POS_INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss_is_infinite_against_side_to_move() {
        assert_eq!(terminal_score(GameOutcome::Loss, true), NEG_INFINITY);
        assert_eq!(terminal_score(GameOutcome::Loss, false), POS_INFINITY);
    }

    #[test]
    fn test_draw_is_zero_for_both_sides() {
        assert_eq!(terminal_score(GameOutcome::Draw, true), 0);
        assert_eq!(terminal_score(GameOutcome::Draw, false), 0);
    }

    #[test]
    fn test_sentinels_negate_cleanly() {
        assert_eq!(-POS_INFINITY, NEG_INFINITY);
        assert_eq!(-NEG_INFINITY, POS_INFINITY);
        assert!(!is_finite(POS_INFINITY));
        assert!(!is_finite(NEG_INFINITY));
        assert!(is_finite(0));
    }
}
