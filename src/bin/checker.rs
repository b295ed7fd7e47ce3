use std::{error::Error, process::ExitCode};

use clap::Parser;
use push_swap_turk::{
    checker::{check, parse_moves},
    input::{parse_numbers, tokenize, DuplicatePolicy},
};
use tracing_subscriber::EnvFilter;

/// Reads instructions from stdin and tells whether they sort the numbers.
#[derive(Parser, Debug)]
#[command(name = "checker", version)]
struct Opts {
    /// Accept repeated values instead of rejecting the input.
    #[arg(long)]
    allow_duplicates: bool,

    /// Starting contents of stack A, top first.
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

    let checked = parse_numbers(tokenize(&opts.numbers), policy)
        .map_err(Box::<dyn Error>::from)
        .and_then(|values| {
            let moves = parse_moves(std::io::stdin().lock())?;
            tracing::debug!(values = values.len(), moves = moves.len(), "replaying");
            Ok(check(&values, &moves))
        });

    match checked {
        Ok(true) => println!("OK"),
        Ok(false) => println!("KO"),
        Err(err) => {
            println!("ERROR: {err}");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
