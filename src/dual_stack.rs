use crate::{moves::Move, stack::Stack};

/// Names one side of a [`DualStack`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum StackSelector {
    A,
    B,
}

impl StackSelector {
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The A/B pair every instruction operates on.
///
/// Each method performs its effect and returns the instruction it stands for.
/// Pushes return `None` when the source stack is empty and leave both stacks
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DualStack {
    pub a: Stack,
    pub b: Stack,
}

impl DualStack {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let a: Stack = values.into_iter().collect();
        let b = Stack::with_capacity(a.len());
        Self { a, b }
    }

    pub fn stack(&self, selector: StackSelector) -> &Stack {
        match selector {
            StackSelector::A => &self.a,
            StackSelector::B => &self.b,
        }
    }

    pub fn push_a(&mut self) -> Option<Move> {
        let value = self.b.pop()?;
        self.a.push(value);
        Some(Move::PushA)
    }

    pub fn push_b(&mut self) -> Option<Move> {
        let value = self.a.pop()?;
        self.b.push(value);
        Some(Move::PushB)
    }

    pub fn swap_a(&mut self) -> Move {
        self.a.swap_top();
        Move::SwapA
    }

    pub fn swap_b(&mut self) -> Move {
        self.b.swap_top();
        Move::SwapB
    }

    pub fn swap_both(&mut self) -> Move {
        self.a.swap_top();
        self.b.swap_top();
        Move::SwapBoth
    }

    pub fn rotate_a(&mut self) -> Move {
        self.a.rotate();
        Move::RotateA
    }

    pub fn rotate_b(&mut self) -> Move {
        self.b.rotate();
        Move::RotateB
    }

    pub fn rotate_both(&mut self) -> Move {
        self.a.rotate();
        self.b.rotate();
        Move::RotateBoth
    }

    pub fn reverse_rotate_a(&mut self) -> Move {
        self.a.reverse_rotate();
        Move::RevRotateA
    }

    pub fn reverse_rotate_b(&mut self) -> Move {
        self.b.reverse_rotate();
        Move::RevRotateB
    }

    pub fn reverse_rotate_both(&mut self) -> Move {
        self.a.reverse_rotate();
        self.b.reverse_rotate();
        Move::RevRotateBoth
    }

    /// Dispatches `m` to the matching method. `None` only for a push whose
    /// source is empty.
    pub fn apply(&mut self, m: Move) -> Option<Move> {
        match m {
            Move::PushA => self.push_a(),
            Move::PushB => self.push_b(),
            Move::SwapA => Some(self.swap_a()),
            Move::SwapB => Some(self.swap_b()),
            Move::SwapBoth => Some(self.swap_both()),
            Move::RotateA => Some(self.rotate_a()),
            Move::RotateB => Some(self.rotate_b()),
            Move::RotateBoth => Some(self.rotate_both()),
            Move::RevRotateA => Some(self.reverse_rotate_a()),
            Move::RevRotateB => Some(self.reverse_rotate_b()),
            Move::RevRotateBoth => Some(self.reverse_rotate_both()),
        }
    }
}
