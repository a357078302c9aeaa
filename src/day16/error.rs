use thiserror::Error;

use super::packet::PacketType;

/// Why decoding one transmission line failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidInput { digit: char, position: usize },

    #[error("malformed packet at bit {offset}: {reason}")]
    MalformedPacket { offset: usize, reason: Malformed },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Malformed {
    #[error("needed {requested} bits, only {available} left")]
    Truncated { requested: usize, available: usize },

    #[error("literal has no terminating group")]
    UnterminatedLiteral,

    #[error("sub-packets take {actual} bits, declared {declared}")]
    LengthOverrun { declared: usize, actual: usize },

    #[error("{op} takes exactly {expected} operands, got {count}")]
    Arity { op: PacketType, expected: usize, count: usize },

    #[error("{0} has no operands")]
    NoOperands(PacketType),

    #[error("nested deeper than {0} packets")]
    TooDeep(usize),

    #[error("value does not fit in 64 bits")]
    Overflow,
}

impl DecodeError {
    pub(crate) fn malformed(offset: usize, reason: Malformed) -> Self {
        DecodeError::MalformedPacket { offset, reason }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DecodeError::MalformedPacket { .. })
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
