//! Ring-buffer stack with O(1) rotations.
//!
//! Index 0 is the top of the stack, `len() - 1` the bottom. The backing
//! `VecDeque` keeps every element in a growable circular buffer, so moving
//! the top element to the bottom (or back) is a pop at one end and a push at
//! the other. Slots freed by `pop` are reused by the next `push`.

use std::{collections::VecDeque, ops::Index};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack<T = f64> {
    items: VecDeque<T>,
}

impl<T: Copy> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Empty stack that can hold `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Value at distance `index` from the top.
    pub fn peek(&self, index: usize) -> Option<T> {
        self.items.get(index).copied()
    }

    /// Exchanges the two topmost elements.
    pub fn swap_top(&mut self) {
        if self.items.len() >= 2 {
            self.items.swap(0, 1);
        }
    }

    /// The top element becomes the bottom one.
    pub fn rotate(&mut self) {
        if self.items.len() < 2 {
            return;
        }
        if let Some(top) = self.items.pop_front() {
            self.items.push_back(top);
        }
    }

    /// The bottom element becomes the top one.
    pub fn reverse_rotate(&mut self) {
        if self.items.len() < 2 {
            return;
        }
        if let Some(bottom) = self.items.pop_back() {
            self.items.push_front(bottom);
        }
    }

    /// `(index, value)` pairs from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.items.iter().copied().enumerate()
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.items.iter().copied()
    }
}

impl<T> Index<usize> for Stack<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// The first item yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(stack: &Stack<i32>) -> Vec<i32> {
        stack.values().collect()
    }

    #[test]
    fn first_value_is_top() {
        let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(stack.peek(0), Some(1));
        assert_eq!(stack.peek(2), Some(3));
        assert_eq!(stack.peek(3), None);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn push_and_pop() {
        let mut stack = Stack::with_capacity(2);
        assert_eq!(stack.pop(), None);
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(contents(&stack), [3, 2, 1]);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(contents(&stack), [1]);
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn swap_top_two() {
        let mut stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        stack.swap_top();
        assert_eq!(contents(&stack), [2, 1, 3]);

        let mut single: Stack<i32> = [7].into_iter().collect();
        single.swap_top();
        assert_eq!(contents(&single), [7]);

        let mut empty = Stack::<i32>::new();
        empty.swap_top();
        assert!(empty.is_empty());
    }

    #[test]
    fn rotations() {
        let mut stack: Stack<i32> = [1, 2, 3, 4].into_iter().collect();
        stack.rotate();
        assert_eq!(contents(&stack), [2, 3, 4, 1]);
        stack.reverse_rotate();
        stack.reverse_rotate();
        assert_eq!(contents(&stack), [4, 1, 2, 3]);
    }

    #[test]
    fn full_cycle_restores_order() {
        for size in 0..8 {
            let original: Stack<i32> = (0..size).collect();
            let mut forward = original.clone();
            let mut backward = original.clone();
            for _ in 0..size {
                forward.rotate();
                backward.reverse_rotate();
            }
            assert_eq!(forward, original);
            assert_eq!(backward, original);
        }
    }

    #[test]
    fn rotate_then_reverse_is_identity() {
        let mut stack: Stack<i32> = [5, 3, 9, 1].into_iter().collect();
        stack.push(4);
        stack.pop();
        stack.swap_top();
        let before = contents(&stack);
        stack.rotate();
        stack.reverse_rotate();
        assert_eq!(contents(&stack), before);
    }

    #[test]
    fn iteration_is_restartable() {
        let stack: Stack<i32> = [10, 20, 30].into_iter().collect();
        let first: Vec<_> = stack.iter().collect();
        let second: Vec<_> = stack.iter().collect();
        assert_eq!(first, [(0, 10), (1, 20), (2, 30)]);
        assert_eq!(first, second);
    }
}
