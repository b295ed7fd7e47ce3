use std::{
    error::Error,
    io::{BufWriter, Write},
    process::ExitCode,
};

use clap::Parser;
use push_swap_turk::{
    input::{parse_numbers, tokenize, DuplicatePolicy},
    sort,
};
use tracing_subscriber::EnvFilter;

/// Prints the instructions that sort the given numbers, one per line.
#[derive(Parser, Debug)]
#[command(name = "push_swap", version)]
struct Opts {
    /// Accept repeated values instead of rejecting the input.
    #[arg(long)]
    allow_duplicates: bool,

    /// Numbers to sort; an argument may hold several space-separated numbers.
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<String>,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let policy = if opts.allow_duplicates {
        DuplicatePolicy::Allow
    } else {
        DuplicatePolicy::Reject
    };

    let values = match parse_numbers(tokenize(&opts.numbers), policy) {
        Ok(values) => values,
        Err(err) => {
            println!("ERROR: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let moves = sort(&values);
    tracing::info!(values = values.len(), instructions = moves.len(), "sorted");

    let mut out = BufWriter::new(std::io::stdout().lock());
    for m in moves {
        writeln!(out, "{m}")?;
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
