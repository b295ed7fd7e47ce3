//! The sorting driver.
//!
//! Elements go from A into B one at a time, each to its rank in B's
//! descending order, until three are left in A. Those three are sorted in
//! place, then B drains back into A the same way and a last rotation brings
//! A's minimum to the top.

use std::{fmt, iter};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    dual_stack::{DualStack, StackSelector},
    executor::{execute_instructions, generate_instructions},
    moves::Move,
    planner::find_cheapest_move,
    search::{find_maximums, find_minimums, run_heads},
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Phase {
    Seed,
    BulkMoveToB,
    SortLast3,
    DrainBToA,
    FinalRotate,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Seed => "seed",
            Phase::BulkMoveToB => "bulk-move-to-b",
            Phase::SortLast3 => "sort-last-3",
            Phase::DrainBToA => "drain-b-to-a",
            Phase::FinalRotate => "final-rotate",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

pub fn is_sorted<I>(data: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    data.into_iter().tuple_windows().all(|(a, b)| a <= b)
}

/// Sorts the (at most three) elements of A in place, ascending from the top.
pub fn sort_last_three(stacks: &mut DualStack) -> Vec<Move> {
    let mut instructions = Vec::new();
    let len = stacks.a.len();
    if !(2..=3).contains(&len) {
        return instructions;
    }

    let maximums = find_maximums(&stacks.a);
    // Push the maximum to the bottom unless every element is a maximum.
    if len == 3 && maximums.len() < 3 {
        match maximums[0] {
            0 => instructions.push(stacks.rotate_a()),
            1 => instructions.push(stacks.reverse_rotate_a()),
            _ => {}
        }
    }

    if stacks.a[0] > stacks.a[1] {
        instructions.push(stacks.swap_a());
    }
    instructions
}

/// Step-wise sorter; each [`TurkSorter::step`] runs one phase.
#[derive(Debug, Clone)]
pub struct TurkSorter {
    stacks: DualStack,
    phase: Phase,
    log: Vec<Move>,
}

impl TurkSorter {
    pub fn new(values: &[f64]) -> Self {
        let phase = if is_sorted(values.iter()) {
            Phase::Done
        } else {
            Phase::Seed
        };
        Self {
            stacks: DualStack::new(values.iter().copied()),
            phase,
            log: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stacks(&self) -> &DualStack {
        &self.stacks
    }

    pub fn instructions(&self) -> &[Move] {
        &self.log
    }

    /// Runs the current phase to completion and returns the next one.
    pub fn step(&mut self) -> Phase {
        let next = match self.phase {
            Phase::Seed => self.seed(),
            Phase::BulkMoveToB => self.bulk_move_to_b(),
            Phase::SortLast3 => {
                let moves = sort_last_three(&mut self.stacks);
                self.log.extend(moves);
                Phase::DrainBToA
            }
            Phase::DrainBToA => self.drain_b_to_a(),
            Phase::FinalRotate => self.final_rotate(),
            Phase::Done => Phase::Done,
        };
        if next != self.phase {
            debug!(
                from = %self.phase,
                to = %next,
                a = self.stacks.a.len(),
                b = self.stacks.b.len(),
                instructions = self.log.len(),
                "phase finished"
            );
        }
        self.phase = next;
        next
    }

    pub fn run(mut self) -> Vec<Move> {
        while self.step() != Phase::Done {}
        self.log
    }

    fn seed(&mut self) -> Phase {
        if self.stacks.a.len() <= 3 {
            return Phase::SortLast3;
        }
        for _ in 0..2 {
            self.log.extend(self.stacks.push_b());
        }
        Phase::BulkMoveToB
    }

    fn bulk_move_to_b(&mut self) -> Phase {
        while self.stacks.a.len() > 3 {
            self.move_cheapest(StackSelector::B);
        }
        Phase::SortLast3
    }

    fn drain_b_to_a(&mut self) -> Phase {
        while !self.stacks.b.is_empty() {
            self.move_cheapest(StackSelector::A);
        }
        Phase::FinalRotate
    }

    fn move_cheapest(&mut self, destination: StackSelector) {
        let Some(candidate) = find_cheapest_move(&self.stacks, destination) else {
            panic!(
                "no insertion target into {destination:?} with {} elements in A and {} in B",
                self.stacks.a.len(),
                self.stacks.b.len()
            );
        };
        trace!(
            from = candidate.from_index,
            to = candidate.to_index,
            cost = candidate.cost,
            route = ?candidate.route,
            ?destination,
            "moving element"
        );

        let mut moves = generate_instructions(&self.stacks, &candidate);
        moves.push(match destination {
            StackSelector::A => Move::PushA,
            StackSelector::B => Move::PushB,
        });
        execute_instructions(&mut self.stacks, &moves);
        self.log.extend(moves);
    }

    fn final_rotate(&mut self) -> Phase {
        let len = self.stacks.a.len();
        let minimums = run_heads(&self.stacks.a, find_minimums(&self.stacks.a));
        let Some(&index) = minimums.first() else {
            return Phase::Done;
        };

        let moves: Vec<Move> = if index < len - index {
            iter::repeat(Move::RotateA).take(index).collect()
        } else {
            iter::repeat(Move::RevRotateA).take(len - index).collect()
        };
        execute_instructions(&mut self.stacks, &moves);
        self.log.extend(moves);
        Phase::Done
    }
}

/// Instructions that sort `values` onto stack A, smallest on top.
///
/// Replaying the result on a fresh [`DualStack`] built from `values` leaves A
/// ascending and B empty. Already sorted input yields no instructions.
pub fn sort(values: &[f64]) -> Vec<Move> {
    if is_sorted(values.iter()) {
        return Vec::new();
    }
    TurkSorter::new(values).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move::*;
    use crate::stack::Stack;

    fn sort_a(values: &[f64]) -> (Vec<Move>, Vec<f64>) {
        let mut ds = DualStack::new(values.iter().copied());
        let moves = sort_last_three(&mut ds);
        (moves, ds.a.values().collect())
    }

    fn replay(values: &[f64], moves: &[Move]) -> DualStack {
        let mut ds = DualStack::new(values.iter().copied());
        execute_instructions(&mut ds, moves);
        ds
    }

    #[test]
    fn last_three() {
        let cases: [(&[f64], &[Move], &[f64]); 11] = [
            (&[], &[], &[]),
            (&[5.], &[], &[5.]),
            (&[4., 3., 2., 1.], &[], &[4., 3., 2., 1.]),
            (&[1., 2.], &[], &[1., 2.]),
            (&[2., 1.], &[SwapA], &[1., 2.]),
            (&[1., 2., 3.], &[], &[1., 2., 3.]),
            (&[2., 1., 3.], &[SwapA], &[1., 2., 3.]),
            (&[3., 1., 2.], &[RotateA], &[1., 2., 3.]),
            (&[1., 3., 2.], &[RevRotateA, SwapA], &[1., 2., 3.]),
            (&[2., 3., 1.], &[RevRotateA], &[1., 2., 3.]),
            (&[3., 2., 1.], &[RotateA, SwapA], &[1., 2., 3.]),
        ];
        for (input, want_moves, want_a) in cases {
            let (moves, a) = sort_a(input);
            assert_eq!(moves, want_moves, "moves for {input:?}");
            assert_eq!(a, want_a, "order for {input:?}");
        }
    }

    #[test]
    fn last_three_with_duplicates() {
        let inputs = [
            [3., 3., 1.],
            [3., 1., 3.],
            [1., 3., 3.],
            [2., 2., 2.],
            [1., 1., 2.],
            [2., 1., 1.],
        ];
        for input in inputs {
            let (_, a) = sort_a(&input);
            assert!(is_sorted(a.iter()), "{input:?} gave {a:?}");
        }
    }

    #[test]
    fn small_examples() {
        assert_eq!(sort(&[2., 1.]), [SwapA]);
        assert_eq!(sort(&[3., 1., 2.]), [RotateA]);
        assert_eq!(sort(&[1., 3., 2.]), [RevRotateA, SwapA]);
    }

    #[test]
    fn sorted_input_needs_nothing() {
        assert!(sort(&[]).is_empty());
        assert!(sort(&[1.]).is_empty());
        assert!(sort(&[1., 2.]).is_empty());
        assert!(sort(&[1., 2., 3., 4., 5.]).is_empty());
        assert!(sort(&[1., 1., 2., 2.]).is_empty());

        let sorter = TurkSorter::new(&[1., 2., 3., 4.]);
        assert_eq!(sorter.phase(), Phase::Done);
        assert!(sorter.run().is_empty());
    }

    #[test]
    fn sorter_walks_every_phase() {
        let mut sorter = TurkSorter::new(&[5., 4., 3., 2., 1., 0.]);
        let mut seen = vec![sorter.phase()];
        while sorter.phase() != Phase::Done {
            seen.push(sorter.step());
        }
        assert_eq!(
            seen,
            [
                Phase::Seed,
                Phase::BulkMoveToB,
                Phase::SortLast3,
                Phase::DrainBToA,
                Phase::FinalRotate,
                Phase::Done
            ]
        );
        assert!(sorter.stacks().b.is_empty());
        assert!(is_sorted(sorter.stacks().a.values()));
        assert_eq!(sorter.instructions()[..2], [PushB, PushB]);
    }

    #[test]
    fn sorts_assorted_inputs() {
        let inputs: [&[f64]; 9] = [
            &[2., 3., 1.],
            &[4., 2., 3., 1.],
            &[5., 4., 3., 2., 1.],
            &[3., 1., 4., 5., 2.],
            &[8., 3., 6., 1., 7., 2., 5., 4.],
            &[10., 1., 9., 2., 8., 3., 7., 4., 6., 5.],
            &[-3., 0., -1., 2., -5.],
            &[3.5, 1.1, 2.7, 0.5],
            &[f64::INFINITY, 0., f64::NEG_INFINITY, 1e300, -1e-300],
        ];
        for input in inputs {
            let moves = sort(input);
            let ds = replay(input, &moves);
            assert!(ds.b.is_empty(), "{input:?}");
            let mut want = input.to_vec();
            want.sort_by(f64::total_cmp);
            assert_eq!(ds.a, want.into_iter().collect::<Stack>(), "{input:?}");
        }
    }

    #[test]
    fn sorts_with_duplicates() {
        let inputs: [&[f64]; 5] = [
            &[2., 2., 1.],
            &[3., 1., 3., 1., 2., 2.],
            &[5., 5., 5., 5., 1.],
            &[1., 4., 4., 2., 4., 3., 4., 0., 4.],
            &[7., 7., 7., 7., 7., 6.],
        ];
        for input in inputs {
            let ds = replay(input, &sort(input));
            assert!(ds.b.is_empty(), "{input:?}");
            assert!(is_sorted(ds.a.values()), "{input:?} gave {:?}", ds.a);
        }
    }
}
