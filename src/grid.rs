//! Toggle-lock grid and the capability contract consumed by the solver
//!
//! A grid is a fixed-size rectangle of boolean cells (true = locked). The only
//! way to mutate cells is `toggle`, which flips the target cell together with
//! its entire row and entire column. The solver never touches storage directly;
//! it sees the grid through the [`LockGrid`] trait.

use log::debug;
use rand::Rng;
use thiserror::Error;

/// Errors that can occur when constructing a grid
#[derive(Debug, Error)]
pub enum GridError {
    /// Requested dimensions overflow the addressable cell count
    #[error("Grid dimensions {rows}x{cols} overflow the addressable cell count")]
    DimensionOverflow { rows: usize, cols: usize },

    /// Provided cell buffer does not match the dimensions
    #[error("Cell buffer of length {got} does not match {rows}x{cols} grid ({expected} cells)")]
    CellCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },
}

/// Grid dimensions plus the row-major linear index mapping.
///
/// System construction and toggle replay must agree on how a 2-D cell position
/// maps to a 1-D equation index; funneling both through this type is what
/// keeps them in agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        rows.checked_mul(cols)
            .ok_or(GridError::DimensionOverflow { rows, cols })?;
        Ok(GridDims { rows, cols })
    }

    /// Total cell count (also the number of unknowns in the linear system)
    #[inline]
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major linear index of (row, col)
    #[inline]
    pub fn linear(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Inverse of [`Self::linear`]
    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.area());
        (index / self.cols, index % self.cols)
    }
}

/// Read-only copy of a grid's state, taken before any toggle is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    dims: GridDims,
    cells: Vec<bool>,
}

impl GridSnapshot {
    pub fn new(dims: GridDims, cells: Vec<bool>) -> Result<Self, GridError> {
        if cells.len() != dims.area() {
            return Err(GridError::CellCountMismatch {
                rows: dims.rows,
                cols: dims.cols,
                expected: dims.area(),
                got: cells.len(),
            });
        }
        Ok(GridSnapshot { dims, cells })
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.dims.linear(row, col)]
    }

    /// Cells in row-major order, same indexing as the linear system
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

/// Capability contract the solver consumes.
///
/// The solver owns no grid storage; it reads one snapshot up front, replays
/// the computed toggle set, and judges success solely by `is_locked`.
pub trait LockGrid {
    /// Grid dimensions, fixed for the lifetime of the grid
    fn dims(&self) -> GridDims;

    /// Flip (row, col) together with its entire row and entire column.
    ///
    /// Self-inverse: two calls at the same position cancel exactly.
    fn toggle(&mut self, row: usize, col: usize);

    /// Full copy of the current state, reflecting all prior toggles
    fn snapshot(&self) -> GridSnapshot;

    /// True iff at least one cell is still locked
    fn is_locked(&self) -> bool;
}

/// The standard in-memory grid
#[derive(Debug, Clone)]
pub struct ToggleGrid {
    dims: GridDims,
    cells: Vec<bool>,
}

impl ToggleGrid {
    /// All-unlocked grid of the given dimensions
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let dims = GridDims::new(rows, cols)?;
        Ok(ToggleGrid {
            dims,
            cells: vec![false; dims.area()],
        })
    }

    /// Grid with an explicit initial state, row-major.
    ///
    /// States built this way are not necessarily reachable by toggling an
    /// all-unlocked grid; the solver may leave such a grid locked.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let dims = GridDims::new(rows, cols)?;
        if cells.len() != dims.area() {
            return Err(GridError::CellCountMismatch {
                rows,
                cols,
                expected: dims.area(),
                got: cells.len(),
            });
        }
        Ok(ToggleGrid { dims, cells })
    }

    /// Scramble the grid with a random number of random toggles.
    ///
    /// Every state produced here is reachable from all-unlocked by
    /// construction, so the solver is guaranteed a clearing toggle set.
    /// The RNG is injected so callers (and tests) control determinism.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R) {
        if self.dims.area() == 0 {
            return;
        }
        let count = rng.random_range(0..1000);
        debug!("Scrambling {}x{} grid with {} toggles", self.dims.rows, self.dims.cols, count);
        for _ in 0..count {
            let row = rng.random_range(0..self.dims.rows);
            let col = rng.random_range(0..self.dims.cols);
            self.toggle(row, col);
        }
    }
}

impl LockGrid for ToggleGrid {
    fn dims(&self) -> GridDims {
        self.dims
    }

    fn toggle(&mut self, row: usize, col: usize) {
        // Target flips three times (self + row pass + column pass), every
        // other cell in the row or column once. Net footprint: the target,
        // its row, and its column each flip exactly once.
        let target = self.dims.linear(row, col);
        self.cells[target] = !self.cells[target];
        for c in 0..self.dims.cols {
            let i = self.dims.linear(row, c);
            self.cells[i] = !self.cells[i];
        }
        for r in 0..self.dims.rows {
            let i = self.dims.linear(r, col);
            self.cells[i] = !self.cells[i];
        }
    }

    fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            dims: self.dims,
            cells: self.cells.clone(),
        }
    }

    fn is_locked(&self) -> bool {
        self.cells.iter().any(|&cell| cell)
    }
}

impl std::fmt::Display for ToggleGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.dims.rows {
            for col in 0..self.dims.cols {
                let locked = self.cells[self.dims.linear(row, col)];
                f.write_str(if locked { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
