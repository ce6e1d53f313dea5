//! Optimal 8-puzzle solving for the Taquin workspace.
//!
//! This crate layers heuristic search on top of [`taquin_core`]'s board
//! model:
//!
//! - [`heuristic`]: the admissible [`Manhattan`] distance bound
//! - [`path`]: [`MovePath`], persistent move sequences shared between
//!   frontier nodes
//! - [`search`]: the [`AStarSolver`] engine, its [`Solution`] and
//!   [`SearchStats`]
//! - [`error`]: the [`SearchError`] taxonomy separating "provably
//!   unsolvable" from "search gave up"
//! - [`testing`]: fixtures and a brute-force BFS oracle for tests and
//!   benchmarks
//!
//! # Examples
//!
//! ```
//! use taquin_core::Board;
//! use taquin_solver::AStarSolver;
//!
//! let start = Board::from_values(&[2, 8, 3, 1, 6, 4, 7, 0, 5])?;
//! let solution = AStarSolver::new().solve(&start, &Board::GOAL)?;
//!
//! // Minimal-length path, replayable onto the start board
//! assert_eq!(solution.len(), 5);
//! let end = solution
//!     .moves()
//!     .iter()
//!     .try_fold(start, |board, &mv| board.apply_move(mv))?;
//! assert_eq!(end, Board::GOAL);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod heuristic;
mod node;
pub mod path;
pub mod search;
pub mod testing;

// Re-export commonly used types
pub use self::{
    error::SearchError,
    heuristic::Manhattan,
    path::MovePath,
    search::{AStarSolver, DEFAULT_MAX_ITERATIONS, SearchStats, Solution},
};
