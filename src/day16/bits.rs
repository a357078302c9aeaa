//! Hex transmissions as MSB-first bit streams, and a cursor for reading
//! fixed-width fields out of them.

use bitvec::prelude::*;

use super::error::{DecodeError, Malformed, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The bits of a hex transmission, four per digit, most significant first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitStream(BitVec<u8, Msb0>);

impl BitStream {
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut bits = BitVec::with_capacity(4 * hex.len());
        for (position, digit) in hex.chars().enumerate() {
            let nibble = digit
                .to_digit(16)
                .ok_or(DecodeError::InvalidInput { digit, position })?;
            for shift in (0 .. 4).rev() {
                bits.push(nibble >> shift & 1 == 1);
            }
        }
        Ok(BitStream(bits))
    }

    /// Groups every four bits back into an uppercase hex digit. A trailing
    /// partial group is read as if it were the top bits of a nibble.
    pub fn to_hex(&self) -> String {
        self.0.chunks(4).map(|nibble| {
            let n = nibble.iter().by_vals().fold(0, |acc, bit| acc << 1 | bit as usize);
            HEX_DIGITS[n << (4 - nibble.len())] as char
        }).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn reader(&self) -> BitReader<'_> {
        BitReader::new(&self.0)
    }
}

impl From<BitVec<u8, Msb0>> for BitStream {
    fn from(bits: BitVec<u8, Msb0>) -> Self {
        BitStream(bits)
    }
}

/// Converts a hex string into its bit stream.
pub fn hex_to_bits(hex: &str) -> Result<BitStream> {
    BitStream::from_hex(hex)
}

/// Forward-only cursor over a bit slice.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bits: &'a BitSlice<u8, Msb0>) -> Self {
        BitReader { bits, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// Bits not consumed yet.
    pub fn rest(&self) -> &'a BitSlice<u8, Msb0> {
        &self.bits[self.pos ..]
    }

    /// Reads `width` bits (at most 64) as an unsigned big-endian number.
    pub fn read(&mut self, width: usize) -> Result<u64> {
        debug_assert!(width <= 64);
        let available = self.remaining();
        if width > available {
            return Err(DecodeError::malformed(
                self.pos,
                Malformed::Truncated { requested: width, available },
            ));
        }
        let value = self.bits[self.pos .. self.pos + width]
            .iter()
            .by_vals()
            .fold(0u64, |acc, bit| acc << 1 | bit as u64);
        self.pos += width;
        Ok(value)
    }

    pub fn read_flag(&mut self) -> Result<bool> {
        self.read(1).map(|bit| bit == 1)
    }
}
