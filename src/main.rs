//! Command-line demonstration.
//!
//! - `inventory-calculator` prints the demonstration report for the sample inventory.
//! - `inventory-calculator <computation> [args...]` runs a single named computation
//!   (`average_price`, `total_value`, `filter_by_stock <min_stock>`) over the sample inventory.

use std::process::ExitCode;

use inventory_calculator::processing::Computation;
use inventory_calculator::report::{ReportOptions, render_demo, render_output, sample_products};
use inventory_calculator::{InventoryError, InventoryResult};

fn main() -> ExitCode {
    match run(std::env::args().skip(1).collect()) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e @ InventoryError::Invocation { .. }) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> InventoryResult<Vec<String>> {
    let opts = ReportOptions::from_env()?;
    let products = sample_products();

    match args.split_first() {
        None => render_demo(&products, &opts),
        Some((name, rest)) => {
            let computation = Computation::parse(name, rest)?;
            let output = opts.dispatcher().run(&products, &computation)?;
            Ok(render_output(&output, &opts))
        }
    }
}
