//! Cost model and move selection.
//!
//! B is kept sorted descending (top to bottom, up to rotation) and A sorted
//! ascending once elements flow back, so every element has exactly one slot in
//! the destination: directly above the closest value beyond it.

use itertools::{Itertools, MinMaxResult};

use crate::{
    dual_stack::{DualStack, StackSelector},
    search::{find_greater_targets, find_maximums, find_minimums, find_smaller_targets, run_heads},
};

/// How both stacks are turned before the push.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Route {
    /// `rr` for the shared part, forward single rotations for the rest.
    RotateBoth,
    /// `rrr` for the shared part, reverse single rotations for the rest.
    ReverseRotateBoth,
    /// Each stack takes its own shortest direction.
    Independent,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MoveCandidate {
    /// Index of the element in the source stack.
    pub from_index: usize,
    /// Index of the element it must land on top of in the destination.
    pub to_index: usize,
    pub cost: usize,
    pub destination: StackSelector,
    pub route: Route,
}

/// Rotations needed to bring `index` to the top of a stack of `len` elements.
pub fn shortest_route_to_top(index: usize, len: usize) -> usize {
    if index > len / 2 {
        len - index
    } else {
        index
    }
}

/// Cheapest way to move the element at `from_index` of the source stack into
/// `destination`. `None` when the destination is empty or `from_index` is out
/// of range.
pub fn find_cheapest_target(
    stacks: &DualStack,
    from_index: usize,
    destination: StackSelector,
) -> Option<MoveCandidate> {
    let from = stacks.stack(destination.other());
    let to = stacks.stack(destination);
    let reference = from.peek(from_index)?;

    let mut targets = match destination {
        StackSelector::B => find_smaller_targets(to, reference),
        StackSelector::A => find_greater_targets(to, reference),
    };
    if targets.is_empty() {
        // Nothing beyond the reference: it becomes the new extreme and goes
        // next to the opposite one.
        targets = match destination {
            StackSelector::B => find_maximums(to),
            StackSelector::A => find_minimums(to),
        };
    }
    if targets.is_empty() {
        return None;
    }

    // Landing inside a run of equal values would split it.
    let targets = match run_heads(to, targets).into_iter().minmax() {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(i) => vec![i],
        MinMaxResult::MinMax(lo, hi) => vec![lo, hi],
    };

    let mut cheapest: Option<MoveCandidate> = None;
    for to_index in targets {
        let rotate = from_index + to_index;
        let reverse = (from.len() - from_index) + (to.len() - to_index);
        let independent = shortest_route_to_top(from_index, from.len())
            + shortest_route_to_top(to_index, to.len());
        let cost = rotate.min(reverse).min(independent);

        if cheapest.map_or(true, |c| cost < c.cost) {
            let route = if cost == rotate {
                Route::RotateBoth
            } else if cost == reverse {
                Route::ReverseRotateBoth
            } else {
                Route::Independent
            };
            cheapest = Some(MoveCandidate {
                from_index,
                to_index,
                cost,
                destination,
                route,
            });
        }
    }

    cheapest
}

/// Cheapest move of any source element into `destination`.
///
/// Cheap candidates sit close to either end of the source, so the scan walks
/// inwards from both ends and stops as soon as no remaining element can beat
/// the best cost found so far.
pub fn find_cheapest_move(stacks: &DualStack, destination: StackSelector) -> Option<MoveCandidate> {
    let len = stacks.stack(destination.other()).len();
    if len == 0 {
        return None;
    }

    let beats =
        |distance: usize, best: Option<MoveCandidate>| best.map_or(true, |c| distance < c.cost);
    let mut cheapest: Option<MoveCandidate> = None;
    let (mut top, mut bottom) = (0, len - 1);
    while top <= bottom {
        if beats(top, cheapest) {
            cheapest = pick(cheapest, find_cheapest_target(stacks, top, destination));
        }
        if bottom != top && beats(len - bottom, cheapest) {
            cheapest = pick(cheapest, find_cheapest_target(stacks, bottom, destination));
        }

        if cheapest.is_some_and(|c| c.cost < 3) {
            break;
        }
        if !beats(top + 1, cheapest) && !beats(len - bottom + 1, cheapest) {
            break;
        }
        if bottom == 0 {
            break;
        }
        top += 1;
        bottom -= 1;
    }

    cheapest
}

fn pick(best: Option<MoveCandidate>, candidate: Option<MoveCandidate>) -> Option<MoveCandidate> {
    match (best, candidate) {
        (Some(b), Some(c)) if c.cost < b.cost => Some(c),
        (Some(b), _) => Some(b),
        (None, c) => c,
    }
}
