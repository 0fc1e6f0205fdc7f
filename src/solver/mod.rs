//! GF(2) solver for the toggle lock
//!
//! One solve is a strictly sequential pipeline: snapshot the grid, build the
//! linear system, eliminate, back-substitute, replay the toggle set, then ask
//! the grid itself whether anything is still locked. The grid's answer is the
//! sole success criterion; an inconsistent system is not detected earlier.

mod bitrow;
mod system;

pub use bitrow::BitRow;
pub use system::ToggleSystem;

use log::debug;

use crate::grid::LockGrid;

/// Result of one solve, as judged by the grid after replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every cell is false after replay
    Unlocked,
    /// At least one cell remained true; the observed state was not reachable
    /// from all-unlocked under the toggle footprint
    StillLocked,
}

impl SolveOutcome {
    #[inline]
    pub fn is_unlocked(&self) -> bool {
        matches!(self, SolveOutcome::Unlocked)
    }
}

/// Compute and replay the toggle set that clears the grid.
///
/// The grid is borrowed exclusively for the whole pipeline; the solver calls
/// nothing but the [`LockGrid`] operations. For reachable states the replay
/// leaves the grid all-false; for unreachable ones it leaves the best-effort
/// residue and reports [`SolveOutcome::StillLocked`].
pub fn solve<G: LockGrid>(grid: &mut G) -> SolveOutcome {
    let snapshot = grid.snapshot();
    let dims = snapshot.dims();

    let mut system = ToggleSystem::build(&snapshot);
    system.eliminate();
    let solution = system.back_substitute();

    let mut applied = 0usize;
    for (index, &on) in solution.iter().enumerate() {
        if on {
            // Odd toggle counts collapse to a single call: toggle is its
            // own inverse.
            let (row, col) = dims.position(index);
            grid.toggle(row, col);
            applied += 1;
        }
    }
    debug!("Applied {} of {} possible toggles", applied, solution.len());

    if grid.is_locked() {
        SolveOutcome::StillLocked
    } else {
        SolveOutcome::Unlocked
    }
}
