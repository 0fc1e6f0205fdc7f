//! Property-based tests for the GF(2) toggle solver
//!
//! These use proptest to validate the solver across randomly generated grid
//! dimensions and toggle sequences, covering the properties the closed-form
//! arithmetic is supposed to guarantee.

use proptest::prelude::*;

use gridlock::{solve, GridDims, GridSnapshot, LockGrid, SolveOutcome, ToggleGrid, ToggleSystem};

/// Random dimensions plus a toggle sequence with positions in range
fn dims_and_toggles() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize)>)> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(rows, cols)| {
        let toggles = proptest::collection::vec((0..rows, 0..cols), 0..64);
        (Just(rows), Just(cols), toggles)
    })
}

/// Apply a toggle sequence to a fresh grid, producing a reachable state
fn reachable_grid(rows: usize, cols: usize, toggles: &[(usize, usize)]) -> ToggleGrid {
    let mut grid = ToggleGrid::new(rows, cols).unwrap();
    for &(row, col) in toggles {
        grid.toggle(row, col);
    }
    grid
}

fn solve_state(dims: GridDims, cells: Vec<bool>) -> Vec<bool> {
    let snapshot = GridSnapshot::new(dims, cells).unwrap();
    let mut system = ToggleSystem::build(&snapshot);
    system.eliminate();
    system.back_substitute()
}

proptest! {
    /// Property: any state reachable by toggling is cleared by the solver
    #[test]
    fn prop_reachable_states_round_trip(
        (rows, cols, toggles) in dims_and_toggles(),
    ) {
        let mut grid = reachable_grid(rows, cols, &toggles);
        prop_assert_eq!(solve(&mut grid), SolveOutcome::Unlocked);
        prop_assert!(!grid.is_locked());
    }

    /// Property: toggling the same cell twice restores the previous state
    #[test]
    fn prop_toggle_is_self_inverse(
        (rows, cols, toggles) in dims_and_toggles(),
    ) {
        let mut grid = reachable_grid(rows, cols, &toggles);
        let before = grid.snapshot();

        let (row, col) = (rows / 2, cols / 2);
        grid.toggle(row, col);
        grid.toggle(row, col);

        prop_assert_eq!(grid.snapshot(), before);
    }

    /// Property: the coefficient matrix is symmetric, independent of the
    /// right-hand side (the footprint relation is symmetric)
    #[test]
    fn prop_footprint_symmetry(
        rows in 1usize..=5,
        cols in 1usize..=5,
    ) {
        let grid = ToggleGrid::new(rows, cols).unwrap();
        let system = ToggleSystem::build(&grid.snapshot());
        let n = system.unknowns();
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(system.coefficient(i, j), system.coefficient(j, i));
            }
        }
    }

    /// Property: the solver is linear in the right-hand side,
    /// solution(b1 ^ b2) == solution(b1) ^ solution(b2). The elimination
    /// order depends only on A, so this holds exactly.
    #[test]
    fn prop_solution_is_linear_in_state(
        (rows, cols, toggles_a) in dims_and_toggles(),
        toggles_b in proptest::collection::vec((0usize..6, 0usize..6), 0..64),
    ) {
        let dims = GridDims::new(rows, cols).unwrap();
        let toggles_b: Vec<(usize, usize)> = toggles_b
            .into_iter()
            .map(|(row, col)| (row % rows, col % cols))
            .collect();

        let state_a = reachable_grid(rows, cols, &toggles_a).snapshot().cells().to_vec();
        let state_b = reachable_grid(rows, cols, &toggles_b).snapshot().cells().to_vec();
        let state_xor: Vec<bool> = state_a
            .iter()
            .zip(&state_b)
            .map(|(&a, &b)| a ^ b)
            .collect();

        let solution_a = solve_state(dims, state_a);
        let solution_b = solve_state(dims, state_b);
        let solution_xor = solve_state(dims, state_xor);

        let combined: Vec<bool> = solution_a
            .iter()
            .zip(&solution_b)
            .map(|(&a, &b)| a ^ b)
            .collect();
        prop_assert_eq!(solution_xor, combined);
    }

    /// Property: replaying the computed toggle set a second time restores
    /// the scrambled state (the set is its own inverse, like every toggle)
    #[test]
    fn prop_solution_replay_is_involutive(
        (rows, cols, toggles) in dims_and_toggles(),
    ) {
        let mut grid = reachable_grid(rows, cols, &toggles);
        let scrambled = grid.snapshot();
        let dims = grid.dims();

        let solution = solve_state(dims, scrambled.cells().to_vec());
        for _ in 0..2 {
            for (index, &on) in solution.iter().enumerate() {
                if on {
                    let (row, col) = dims.position(index);
                    grid.toggle(row, col);
                }
            }
        }

        prop_assert_eq!(grid.snapshot(), scrambled);
    }
}
