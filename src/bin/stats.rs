use std::{error::Error, process::ExitCode};

use clap::Parser;
use push_swap_turk::stats::{run_trials, TrialConfig};
use tracing_subscriber::EnvFilter;

/// Sorts many random inputs and reports instruction-count statistics.
#[derive(Parser, Debug)]
#[command(name = "stats")]
struct Opts {
    /// Distinct values per input.
    #[arg(short, long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(2..))]
    size: u32,

    /// Number of random inputs.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1024,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    trials: u32,

    /// Seed of the first input; input `i` uses `seed + i`.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let config = TrialConfig {
        size: opts.size as usize,
        trials: opts.trials as usize,
        seed: opts.seed,
    };
    tracing::info!(?config, "running trials");

    let summary = match run_trials(config) {
        Ok(summary) => summary,
        Err(err) => {
            println!("There has been a sequence that didn't sort correctly: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let (trials, size) = (summary.trials, summary.size);
    println!("Ran {trials} test with {size} sized inputs");
    println!("========================================");
    println!("Mean   \t=> {}", summary.mean.unwrap_or(f64::NAN));
    println!("Median \t=> {}", summary.median);
    println!("StdDev \t=> {}", summary.std_dev.unwrap_or(f64::NAN));
    println!("Min    \t=> {}", summary.min);
    println!("Max    \t=> {}", summary.max);
    Ok(ExitCode::SUCCESS)
}
