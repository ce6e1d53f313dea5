//! Core data structures for the Taquin 8-puzzle solver.
//!
//! This crate provides the board model shared by the solver and the CLI.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Cell types** - Type-safe board building blocks
//!    - [`tile`]: Cell values 0-8, where 0 is the blank
//!    - [`position`]: 3×3 board coordinates
//!
//! 2. **Board and moves** - The puzzle state and its transitions
//!    - [`board`]: The immutable [`Board`] value, its canonical
//!      [`signature`](Board::signature), and copy-on-transition
//!      [`apply_move`](Board::apply_move)
//!    - [`movement`]: The four blank-displacement directions
//!
//! 3. **Solvability** - Permutation parity analysis
//!    - [`parity`]: Inversion counting and the reachability gate that must
//!      run before any search
//!
//! # Examples
//!
//! ```
//! use taquin_core::{Board, Move, parity};
//!
//! let start = Board::from_values(&[1, 2, 3, 8, 4, 0, 7, 6, 5])?;
//!
//! // One LEFT blank move away from the goal
//! assert!(parity::is_reachable(&start, &Board::GOAL));
//! assert_eq!(start.apply_move(Move::Left)?, Board::GOAL);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod movement;
pub mod parity;
pub mod position;
pub mod tile;

// Re-export commonly used types
pub use self::{
    board::{Board, InvalidBoard, InvalidMove},
    movement::Move,
    position::Position,
    tile::Tile,
};
