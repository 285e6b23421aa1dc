//! Capture-based move ordering for improved alpha-beta pruning.

use super::traits::{GameMove, GameState, MoveOrderer, PieceKind};

type CaptureTable = [[u8; PieceKind::COUNT]; PieceKind::COUNT];

/// Most-valuable-victim / least-valuable-attacker scores, indexed `[attacker][victim]`.
///
/// Victims dominate: any capture of a more valuable piece outranks every capture of a
/// less valuable one. Among captures of the same victim, cheaper attackers come first.
/// Pawn takes queen scores 55, king takes pawn scores 10.
const MVV_LVA: CaptureTable = build_mvv_lva();

const fn build_mvv_lva() -> CaptureTable {
    let mut table = [[0; PieceKind::COUNT]; PieceKind::COUNT];
    let mut attacker = 0;
    while attacker < PieceKind::COUNT {
        let mut victim = 0;
        while victim < PieceKind::COUNT {
            table[attacker][victim] = (10 * (victim + 1) + (PieceKind::COUNT - 1 - attacker)) as u8;
            victim += 1;
        }
        attacker += 1;
    }
    table
}

/// Orders capturing moves first, by MVV-LVA score. Quiet moves score zero and keep
/// their relative (possibly shuffled) order at the end of the list.
#[derive(Clone, Default, Debug)]
pub struct MvvLvaMoveOrderer;

impl MvvLvaMoveOrderer {
    /// Ordering score of a move in `state`. Zero for non-captures.
    pub fn score<S, M>(game_move: &M, state: &S) -> u8
    where
        S: GameState,
        M: GameMove<State = S>,
    {
        game_move
            .capture(state)
            .map(|capture| MVV_LVA[capture.attacker.index()][capture.victim.index()])
            .unwrap_or(0)
    }
}

impl<S, M> MoveOrderer<S, M> for MvvLvaMoveOrderer
where
    S: GameState,
    M: GameMove<State = S>,
{
    #[inline]
    fn order_moves(&self, moves: &mut [M], state: &S) {
        // sort_by_cached_key is stable
        moves.sort_by_cached_key(|game_move| std::cmp::Reverse(Self::score(game_move, state)));
    }
}
