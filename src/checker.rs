use std::io::BufRead;

use thiserror::Error;

use crate::{
    dual_stack::DualStack,
    executor::execute_instructions,
    moves::{InvalidMove, Move},
    turk::is_sorted,
};

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("line {line}: {source}")]
    UnknownMove { line: usize, source: InvalidMove },
    #[error("failed to read instructions: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads one instruction per line. Blank lines are skipped.
pub fn parse_moves(reader: impl BufRead) -> Result<Vec<Move>, CheckerError> {
    let mut moves = Vec::new();
    for (text, line) in reader.lines().zip(1..) {
        let text = text?;
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let m = text
            .parse::<Move>()
            .map_err(|source| CheckerError::UnknownMove { line, source })?;
        moves.push(m);
    }
    Ok(moves)
}

/// Replays `moves` on `values` and reports whether they end up sorted in A
/// with B empty.
pub fn check(values: &[f64], moves: &[Move]) -> bool {
    let mut stacks = DualStack::new(values.iter().copied());
    execute_instructions(&mut stacks, moves);
    stacks.b.is_empty() && is_sorted(stacks.a.values())
}
