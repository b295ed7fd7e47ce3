//! Push-swap instruction generator.
//!
//! Sorts a list of numbers using two stacks and the eleven push-swap
//! instructions, choosing at every step the element that is cheapest to move
//! to its place in the other stack.

pub mod checker;
pub mod dual_stack;
pub mod executor;
pub mod input;
pub mod moves;
pub mod planner;
pub mod search;
pub mod stack;
pub mod stats;
pub mod turk;

pub use dual_stack::{DualStack, StackSelector};
pub use moves::Move;
pub use stack::Stack;
pub use turk::{sort, TurkSorter};
