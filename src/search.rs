//! Lookups over a [`Stack`] of values.
//!
//! Everything except [`find_extremes`] assumes the stack is a cyclic rotation
//! of a sorted sequence, ascending or descending from top to bottom.

use crate::stack::Stack;

/// Indices of every occurrence of the minimum (or maximum) value, ascending.
pub fn find_extremes(stack: &Stack, want_max: bool) -> Vec<usize> {
    let mut extreme = if want_max {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut indices = Vec::new();

    for (i, value) in stack.iter() {
        if (want_max && value > extreme) || (!want_max && value < extreme) {
            indices.clear();
            indices.push(i);
            extreme = value;
        } else if value == extreme {
            indices.push(i);
        }
    }

    indices
}

pub fn find_maximums(stack: &Stack) -> Vec<usize> {
    find_extremes(stack, true)
}

pub fn find_minimums(stack: &Stack) -> Vec<usize> {
    find_extremes(stack, false)
}

/// `true` when `prev` may not directly precede `next` in the given order.
fn breaks_order(prev: f64, next: f64, ascending: bool) -> bool {
    if ascending {
        prev > next
    } else {
        prev < next
    }
}

/// Index where the sorted sequence starts, found by binary search.
///
/// Runs of equal values at both ends of the window hide which half holds the
/// rotation point, so the window then shrinks by one from each side.
pub fn find_pivot(stack: &Stack, ascending: bool) -> usize {
    if stack.is_empty() {
        return 0;
    }
    let mut top = 0;
    let mut bottom = stack.len() - 1;

    while top < bottom {
        let mid = top + (bottom - top) / 2;
        let (top_val, mid_val, bottom_val) = (stack[top], stack[mid], stack[bottom]);

        if mid_val == bottom_val && top_val == bottom_val {
            if top > 0 && breaks_order(stack[top - 1], top_val, ascending) {
                return top;
            }
            if breaks_order(stack[bottom - 1], bottom_val, ascending) {
                return bottom;
            }
            top += 1;
            bottom -= 1;
        } else if breaks_order(mid_val, bottom_val, ascending) {
            top = mid + 1;
        } else {
            bottom = mid;
        }
    }

    top
}

/// Binary search of the monotonic segment `[lo, hi)` for the value closest to
/// `reference` on the requested side.
fn search_segment(
    stack: &Stack,
    mut lo: usize,
    mut hi: usize,
    reference: f64,
    want_greater: bool,
    ascending: bool,
) -> Option<(f64, usize)> {
    // Qualifying values get closer to `reference` towards the top of the
    // segment exactly when this is true.
    let closer_towards_top = ascending == want_greater;
    let mut best: Option<(f64, usize)> = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let value = stack[mid];
        let qualifies = if want_greater {
            value > reference
        } else {
            value < reference
        };

        if qualifies && best.map_or(true, |(b, _)| is_closer(value, b, want_greater)) {
            best = Some((value, mid));
        }

        if qualifies == closer_towards_top {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    best
}

fn is_closer(candidate: f64, current: f64, want_greater: bool) -> bool {
    if want_greater {
        candidate < current
    } else {
        candidate > current
    }
}

/// Indices holding the closest value strictly beyond `reference`: the
/// smallest value greater than it when `want_greater`, otherwise the largest
/// value smaller than it. Empty when nothing qualifies.
///
/// `O(log n + k)` with `k` the number of copies of the returned value.
pub fn find_closest_beyond(
    stack: &Stack,
    reference: f64,
    want_greater: bool,
    ascending: bool,
) -> Vec<usize> {
    let len = stack.len();
    if len == 0 {
        return Vec::new();
    }

    let pivot = find_pivot(stack, ascending);
    let before = search_segment(stack, 0, pivot, reference, want_greater, ascending);
    let after = search_segment(stack, pivot, len, reference, want_greater, ascending);

    let (target, start) = match (before, after) {
        (None, None) => return Vec::new(),
        (Some(found), None) | (None, Some(found)) => found,
        (Some(b), Some(a)) => {
            if is_closer(a.0, b.0, want_greater) {
                a
            } else {
                b
            }
        }
    };

    // Equal values sit next to each other, possibly across the wrap.
    let mut indices = vec![start];
    let mut i = (start + 1) % len;
    while i != start && stack[i] == target {
        indices.push(i);
        i = (i + 1) % len;
    }
    if indices.len() < len {
        let mut i = (start + len - 1) % len;
        while i != start && stack[i] == target {
            indices.push(i);
            i = (i + len - 1) % len;
        }
    }

    indices
}

/// Smallest value greater than `reference` in an ascending rotated stack.
pub fn find_greater_targets(stack: &Stack, reference: f64) -> Vec<usize> {
    find_closest_beyond(stack, reference, true, true)
}

/// Largest value smaller than `reference` in a descending rotated stack.
pub fn find_smaller_targets(stack: &Stack, reference: f64) -> Vec<usize> {
    find_closest_beyond(stack, reference, false, false)
}

/// Keeps only the indices that start a run of equal values when the stack is
/// read cyclically. A stack made of a single run keeps everything.
pub fn run_heads(stack: &Stack, mut indices: Vec<usize>) -> Vec<usize> {
    let len = stack.len();
    let heads: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|&i| stack[(i + len - 1) % len] != stack[i])
        .collect();
    if heads.is_empty() {
        indices.sort_unstable();
        indices
    } else {
        heads
    }
}
