//! Instruction-count statistics over many random inputs.

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use statrs::statistics::{Distribution, *};
use thiserror::Error;

use crate::{checker::check, turk::sort};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TrialConfig {
    /// Number of distinct values per input.
    pub size: usize,
    pub trials: usize,
    pub seed: u64,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            size: 64,
            trials: 1024,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub size: usize,
    pub trials: usize,
    pub mean: Option<f64>,
    pub median: f64,
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrialError {
    #[error("trial {trial} did not sort its input {input:?}")]
    Unsorted { trial: usize, input: Vec<f64> },
    #[error("no trials to summarise")]
    NoTrials,
}

/// `size` distinct integers drawn from `rng`, as floats.
pub fn random_input(rng: &mut impl Rng, size: usize) -> Vec<f64> {
    let mut seen = HashSet::with_capacity(size);
    let mut items = Vec::with_capacity(size);
    while items.len() < size {
        let n = rng.gen::<i32>();
        if seen.insert(n) {
            items.push(n as f64);
        }
    }
    items
}

/// Sorts `config.trials` random inputs in parallel and summarises how many
/// instructions each one took. Trial `i` draws from a generator seeded with
/// `config.seed + i`.
pub fn run_trials(config: TrialConfig) -> Result<Summary, TrialError> {
    if config.trials == 0 {
        return Err(TrialError::NoTrials);
    }

    let counts = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(trial as u64));
            let input = random_input(&mut rng, config.size);
            let moves = sort(&input);
            if check(&input, &moves) {
                Ok(moves.len() as f64)
            } else {
                Err(TrialError::Unsorted { trial, input })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let data = Data::new(counts);
    Ok(Summary {
        size: config.size,
        trials: config.trials,
        mean: data.mean(),
        median: data.median(),
        std_dev: data.std_dev(),
        min: data.min(),
        max: data.max(),
    })
}
