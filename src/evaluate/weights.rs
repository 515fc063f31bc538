pub const MAN_VALUE: f64 = 10.0;
pub const KING_VALUE: f64 = 80.0;
pub const WIN_VALUE: f64 = 1000.0;
pub const ADVANCEMENT_VALUE: f64 = 1.0;
pub const CENTRALITY_VALUE: f64 = 2.0;
pub const MOBILITY_VALUE: f64 = 0.5;

/// Coefficients of the heuristic evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    /// Material value of a man.
    pub man: f64,
    /// Material value of a king.
    pub king: f64,
    /// Score of a decided game. Must dominate every positional term.
    pub win: f64,
    /// Bonus per row a man has travelled from its home edge.
    pub advancement: f64,
    /// Bonus per unit of `dimension - manhattan distance to the centre` for kings.
    pub centrality: f64,
    /// Bonus per legal move.
    pub mobility: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            man: MAN_VALUE,
            king: KING_VALUE,
            win: WIN_VALUE,
            advancement: ADVANCEMENT_VALUE,
            centrality: CENTRALITY_VALUE,
            mobility: MOBILITY_VALUE,
        }
    }
}

impl Weights {
    pub fn without_mobility(self) -> Self {
        Self {
            mobility: 0.0,
            ..self
        }
    }
}
