use std::process;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gridlock::{parse_args, solve, SolveOutcome, ToggleGrid};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    let rows = *matches.get_one::<u32>("rows").expect("rows is required") as usize;
    let cols = *matches.get_one::<u32>("cols").expect("cols is required") as usize;
    let seed = matches.get_one::<u64>("seed").copied();
    let quiet = matches.get_flag("quiet");

    match run(rows, cols, seed, quiet) {
        Ok(outcome) => {
            // Exit code mirrors the lock state: nonzero means still locked
            if outcome.is_unlocked() {
                process::exit(0);
            } else {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(rows: usize, cols: usize, seed: Option<u64>, quiet: bool) -> anyhow::Result<SolveOutcome> {
    let mut grid = ToggleGrid::new(rows, cols)
        .with_context(|| format!("failed to build {}x{} grid", rows, cols))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    grid.scramble(&mut rng);

    if !quiet {
        println!("Initial state:\n{}", grid);
    }

    let outcome = solve(&mut grid);

    if !quiet {
        println!("Final state:\n{}", grid);
        match outcome {
            SolveOutcome::Unlocked => println!("BOX: OPENED!"),
            SolveOutcome::StillLocked => println!("BOX: LOCKED!"),
        }
    }

    Ok(outcome)
}
