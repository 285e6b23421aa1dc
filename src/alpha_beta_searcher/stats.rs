use std::ops::AddAssign;

/// Statistics collected during one search call. Each call starts from zero and
/// returns its counts alongside the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited by the main search, root children included.
    pub positions_searched: usize,
    /// Nodes visited by the quiescence extension.
    pub quiescence_nodes: usize,
    /// Calls to the evaluator (stand-pat and deadline fallbacks).
    pub evaluations: usize,
    /// Sibling loops abandoned because `beta <= alpha`.
    pub cutoffs: usize,
}

impl SearchStats {
    pub fn total_nodes(&self) -> usize {
        self.positions_searched + self.quiescence_nodes
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.positions_searched += other.positions_searched;
        self.quiescence_nodes += other.quiescence_nodes;
        self.evaluations += other.evaluations;
        self.cutoffs += other.cutoffs;
    }
}
