use std::iter;

use crate::{
    dual_stack::{DualStack, StackSelector},
    moves::Move,
    planner::{MoveCandidate, Route},
};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
enum Rotates {
    Forward(usize),
    Reverse(usize),
}

impl Rotates {
    /// Rotations bringing `index` to the top of a stack of `len` elements.
    fn towards_top(index: usize, len: usize, route: Route) -> Self {
        if route == Route::ReverseRotateBoth || index > len / 2 {
            Self::Reverse(len - index)
        } else {
            Self::Forward(index)
        }
    }

    fn count(self) -> usize {
        let (Self::Forward(n) | Self::Reverse(n)) = self;
        n
    }

    fn instruction(self, stack: StackSelector) -> Move {
        match (self, stack) {
            (Self::Forward(_), StackSelector::A) => Move::RotateA,
            (Self::Forward(_), StackSelector::B) => Move::RotateB,
            (Self::Reverse(_), StackSelector::A) => Move::RevRotateA,
            (Self::Reverse(_), StackSelector::B) => Move::RevRotateB,
        }
    }
}

/// Rotations that bring both ends of `candidate` to the top of their stacks.
/// The trailing push is left to the caller.
pub fn generate_instructions(stacks: &DualStack, candidate: &MoveCandidate) -> Vec<Move> {
    let (index_a, index_b) = match candidate.destination {
        StackSelector::B => (candidate.from_index, candidate.to_index),
        StackSelector::A => (candidate.to_index, candidate.from_index),
    };
    let rotate_a = Rotates::towards_top(index_a, stacks.a.len(), candidate.route);
    let rotate_b = Rotates::towards_top(index_b, stacks.b.len(), candidate.route);
    let (mut a, mut b) = (rotate_a.count(), rotate_b.count());
    let (mut single_a, mut single_b) = (
        rotate_a.instruction(StackSelector::A),
        rotate_b.instruction(StackSelector::B),
    );

    let mut instructions = Vec::with_capacity(a.max(b) + 1);
    let shared = match candidate.route {
        Route::RotateBoth => Some((Move::RotateBoth, Move::RotateA, Move::RotateB)),
        Route::ReverseRotateBoth => Some((Move::RevRotateBoth, Move::RevRotateA, Move::RevRotateB)),
        Route::Independent => None,
    };
    if let Some((both, only_a, only_b)) = shared {
        let n = a.min(b);
        instructions.extend(iter::repeat(both).take(n));
        a -= n;
        b -= n;
        single_a = only_a;
        single_b = only_b;
    }

    instructions.extend(iter::repeat(single_a).take(a));
    instructions.extend(iter::repeat(single_b).take(b));
    instructions
}

/// Replays `moves` in order. Pushes from an empty stack change nothing.
pub fn execute_instructions(stacks: &mut DualStack, moves: &[Move]) {
    for &m in moves {
        stacks.apply(m);
    }
}
