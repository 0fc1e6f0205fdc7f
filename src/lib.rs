//! Toggle-lock puzzle solver
//!
//! A locked container is a y×x grid of boolean cells where one toggle flips a
//! cell together with its entire row and column. This crate models the grid
//! and computes, via Gaussian elimination over GF(2), the exact toggle set
//! that drives every cell to false.

pub mod args;
pub mod grid;
pub mod solver;

pub use args::parse_args;
pub use grid::{GridDims, GridError, GridSnapshot, LockGrid, ToggleGrid};
pub use solver::{solve, SolveOutcome, ToggleSystem};
