use std::{fmt, str::FromStr};

use thiserror::Error;

/// One instruction of the two-stack machine.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Copy)]
pub enum Move {
    RotateA,
    RotateB,
    RotateBoth,
    RevRotateA,
    RevRotateB,
    RevRotateBoth,
    PushA,
    PushB,
    SwapA,
    SwapB,
    SwapBoth,
}

#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("invalid move {0:?}")]
pub struct InvalidMove(pub String);

impl Move {
    pub const ALL: [Move; 11] = [
        Move::PushA,
        Move::PushB,
        Move::SwapA,
        Move::SwapB,
        Move::SwapBoth,
        Move::RotateA,
        Move::RotateB,
        Move::RotateBoth,
        Move::RevRotateA,
        Move::RevRotateB,
        Move::RevRotateBoth,
    ];

    pub fn mnemonic(self) -> &'static str {
        use Move::*;
        match self {
            PushA => "PA",
            PushB => "PB",
            SwapA => "SA",
            SwapB => "SB",
            SwapBoth => "SS",
            RotateA => "RA",
            RotateB => "RB",
            RotateBoth => "RR",
            RevRotateA => "RRA",
            RevRotateB => "RRB",
            RevRotateBoth => "RRR",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Move::*;
        match s.to_ascii_lowercase().as_str() {
            "pa" => Ok(PushA),
            "pb" => Ok(PushB),
            "sa" => Ok(SwapA),
            "sb" => Ok(SwapB),
            "ss" => Ok(SwapBoth),
            "ra" => Ok(RotateA),
            "rb" => Ok(RotateB),
            "rr" => Ok(RotateBoth),
            "rra" => Ok(RevRotateA),
            "rrb" => Ok(RevRotateB),
            "rrr" => Ok(RevRotateBoth),
            _ => Err(InvalidMove(s.to_owned())),
        }
    }
}
