//! Search failure taxonomy.

/// Reasons a search terminates without a solution.
///
/// [`Unsolvable`](Self::Unsolvable) is a mathematical proof: the parity gate
/// rejected the pair before any node was expanded. The other two variants are
/// *not* proofs of impossibility — the search merely gave up — and callers
/// that report results to users should keep the distinction visible.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum SearchError {
    /// Start and goal lie in different parity classes; no move sequence
    /// connects them. Detected before the frontier is ever seeded.
    #[display(
        "provably unsolvable: inversion parity mismatch ({start_inversions} vs {goal_inversions})"
    )]
    Unsolvable {
        /// Inversion count of the start board.
        start_inversions: u32,
        /// Inversion count of the goal board.
        goal_inversions: u32,
    },
    /// The iteration cap was reached before the goal was popped. Does not
    /// prove the instance unsolvable.
    #[display("search budget exhausted after {iterations} iterations")]
    BudgetExhausted {
        /// Number of frontier pops performed.
        iterations: usize,
    },
    /// The frontier drained without reaching the goal. With the parity gate
    /// in front this should not occur, but it is reported distinctly rather
    /// than folded into another failure.
    #[display("frontier exhausted without reaching the goal")]
    FrontierExhausted,
}
