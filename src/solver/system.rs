//! GF(2) linear system: construction, forward elimination, back-substitution
//!
//! Unknown x[i] answers "must toggle(i / cols, i % cols) be applied an odd
//! number of times". Coefficient A[i][j] is set iff toggle j flips cell i,
//! which for the row+column footprint means j shares a row or column with i
//! (or j == i). The right-hand side is the observed grid state.

use log::debug;

use super::bitrow::BitRow;
use crate::grid::{GridDims, GridSnapshot};

/// The augmented system (A | b) for one solve.
///
/// Owned exclusively for the duration of the solve; elimination mutates the
/// rows in place and nothing survives past back-substitution.
#[derive(Debug, Clone)]
pub struct ToggleSystem {
    dims: GridDims,
    rows: Vec<BitRow>,
    rhs: Vec<bool>,
}

impl ToggleSystem {
    /// Build (A, b) from a snapshot taken before any toggle was applied.
    ///
    /// Does not mutate the grid. A zero-area snapshot yields an empty system,
    /// which back-substitution resolves to an empty toggle set.
    pub fn build(snapshot: &GridSnapshot) -> Self {
        let dims = snapshot.dims();
        let unknowns = dims.area();
        let mut rows = vec![BitRow::zeros(unknowns); unknowns];
        let mut rhs = vec![false; unknowns];

        for row in 0..dims.rows {
            for col in 0..dims.cols {
                let equation = dims.linear(row, col);
                rhs[equation] = snapshot.get(row, col);

                let coefficients = &mut rows[equation];
                // A toggle always flips its own cell.
                coefficients.set(equation, true);
                // Any toggle in the same row flips this cell.
                for k in 0..dims.cols {
                    coefficients.set(dims.linear(row, k), true);
                }
                // Any toggle in the same column flips this cell.
                for k in 0..dims.rows {
                    coefficients.set(dims.linear(k, col), true);
                }
            }
        }

        debug!("Built {0}x{0} toggle system for {1}x{2} grid", unknowns, dims.rows, dims.cols);
        ToggleSystem { dims, rows, rhs }
    }

    #[inline]
    pub fn unknowns(&self) -> usize {
        self.rhs.len()
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Coefficient A[equation][unknown] in the current (possibly eliminated) form
    #[inline]
    pub fn coefficient(&self, equation: usize, unknown: usize) -> bool {
        self.rows[equation].get(unknown)
    }

    /// Reduce (A | b) to row-echelon form.
    ///
    /// Pivot search is a plain top-to-bottom scan; the field is GF(2), so
    /// there is no numerical-stability reason to prefer any other pivot.
    /// Columns without a pivot are free variables and simply skipped; a
    /// singular system is expected, not an error.
    pub fn eliminate(&mut self) {
        let unknowns = self.unknowns();
        let mut free_columns = 0usize;

        for column in 0..unknowns {
            let Some(pivot) = (column..unknowns).find(|&row| self.rows[row].get(column)) else {
                free_columns += 1;
                continue;
            };

            // Rows of A and entries of b must move together; swapping one
            // without the other silently corrupts the solution.
            self.rows.swap(column, pivot);
            self.rhs.swap(column, pivot);

            let (processed, below) = self.rows.split_at_mut(column + 1);
            let pivot_row = &processed[column];
            let pivot_rhs = self.rhs[column];
            for (offset, row) in below.iter_mut().enumerate() {
                if row.get(column) {
                    // The pivot row is all-false left of its pivot column,
                    // so the word-parallel whole-row XOR equals the
                    // columns-from-pivot-onward update.
                    row.xor_assign(pivot_row);
                    self.rhs[column + 1 + offset] ^= pivot_rhs;
                }
            }
        }

        debug!(
            "Elimination done: {} unknowns, {} free columns",
            unknowns, free_columns
        );
    }

    /// Recover x from the row-echelon form.
    ///
    /// Rows whose column never acquired a pivot still get a value; whatever
    /// the elimination order produces is taken as-is, with no attempt to pick
    /// a minimal-weight solution among the alternatives. If the system was
    /// inconsistent for this right-hand side, the result simply fails to
    /// clear the grid on replay.
    pub fn back_substitute(&self) -> Vec<bool> {
        let unknowns = self.unknowns();
        let mut solution = vec![false; unknowns];

        for row in (0..unknowns).rev() {
            let mut sum = self.rhs[row];
            for column in self.rows[row].ones() {
                if column > row && solution[column] {
                    sum = !sum;
                }
            }
            solution[row] = sum;
        }

        solution
    }
}
