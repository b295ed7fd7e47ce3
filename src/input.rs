//! Turns command-line arguments into the values handed to the sorter.

use std::{collections::HashSet, num::ParseFloatError};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Allow,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("error parsing {token:?}: {source}")]
    Malformed {
        token: String,
        source: ParseFloatError,
    },
    #[error("{token:?} is not a number")]
    NotANumber { token: String },
    #[error("duplicate number {value}")]
    Duplicate { value: f64 },
}

/// Splits every argument on whitespace, so `"3 1 2"` and `3 1 2` read the same.
pub fn tokenize<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn parse_numbers<I, S>(tokens: I, policy: DuplicatePolicy) -> Result<Vec<f64>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = tokens.into_iter();
    let mut values = Vec::with_capacity(tokens.size_hint().0);
    let mut seen = HashSet::new();

    for token in tokens {
        let token = token.as_ref();
        let value = token.parse::<f64>().map_err(|source| InputError::Malformed {
            token: token.to_owned(),
            source,
        })?;
        if value.is_nan() {
            return Err(InputError::NotANumber {
                token: token.to_owned(),
            });
        }
        // Adding 0.0 folds -0.0 into 0.0 so both hash alike.
        if policy == DuplicatePolicy::Reject && !seen.insert((value + 0.0).to_bits()) {
            return Err(InputError::Duplicate { value });
        }
        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(tokens: &[&str]) -> Result<Vec<f64>, InputError> {
        parse_numbers(tokens, DuplicatePolicy::Reject)
    }

    fn allow(tokens: &[&str]) -> Result<Vec<f64>, InputError> {
        parse_numbers(tokens, DuplicatePolicy::Allow)
    }

    #[test]
    fn splits_quoted_lists() {
        assert_eq!(
            tokenize(["3 1  2", "7", "", " -4\t5 "]),
            ["3", "1", "2", "7", "-4", "5"]
        );
    }

    #[test]
    fn parses_numbers() {
        let values = reject(&["1", "-2.5", "1e3", "inf", "-0.125"]).unwrap();
        assert_eq!(values, [1., -2.5, 1000., f64::INFINITY, -0.125]);
        assert_eq!(reject(&[]), Ok(Vec::new()));
    }

    #[test]
    fn rejects_malformed_tokens() {
        let err = allow(&["1", "two", "3"]).unwrap_err();
        let InputError::Malformed { token, .. } = &err else {
            panic!("expected a parse failure, got {err:?}");
        };
        assert_eq!(token, "two");
        assert!(err.to_string().starts_with("error parsing \"two\""));

        let nan = allow(&["nan"]).unwrap_err();
        assert_eq!(nan.to_string(), "\"nan\" is not a number");
    }

    #[test]
    fn duplicate_policy() {
        assert_eq!(
            reject(&["1", "2", "1.0"]),
            Err(InputError::Duplicate { value: 1. })
        );
        assert!(reject(&["0", "-0"]).is_err());
        assert_eq!(allow(&["1", "2", "1"]).unwrap(), [1., 2., 1.]);
    }

    #[test]
    fn duplicate_message() {
        let err = reject(&["4", "4"]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate number 4");
    }
}
