use std::fmt;

use tracing::trace;

use super::bits::BitReader;
use super::error::{DecodeError, Malformed, Result};

/// Packets nested deeper than this are rejected instead of recursing further.
pub const MAX_DEPTH: usize = 64;

const HEADER_BITS: usize = 6;
const GROUP_BITS: usize = 5;
const TOTAL_LENGTH_BITS: usize = 15;
const COUNT_BITS: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacketType {
    Sum, Product, Minimum, Maximum, Literal, GreaterThan, LessThan, Equal
}

impl PacketType {
    /// Maps a 3-bit type id; higher bits are ignored.
    pub fn from_id(id: u64) -> Self {
        use PacketType::*;
        match id & 0b111 {
            0 => Sum, 1 => Product, 2 => Minimum, 3 => Maximum,
            4 => Literal, 5 => GreaterThan, 6 => LessThan, _ => Equal
        }
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PacketType::Sum => "sum",
            PacketType::Product => "product",
            PacketType::Minimum => "minimum",
            PacketType::Maximum => "maximum",
            PacketType::Literal => "literal",
            PacketType::GreaterThan => "greater-than",
            PacketType::LessThan => "less-than",
            PacketType::Equal => "equal",
        })
    }
}

/// One decoded node of a transmission.
///
/// `value` of an operator is the fold of its children's values, computed
/// while parsing. `bit_size` counts the header and every nested packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Packet {
    Literal {version: u8, value: u64, bit_size: usize},
    Operator {version: u8, op: PacketType, children: Vec<Packet>, value: u64, bit_size: usize},
}

impl Packet {
    pub fn version(&self) -> u8 {
        match self {
            Packet::Literal {version, ..} | Packet::Operator {version, ..} => *version
        }
    }

    pub fn packet_type(&self) -> PacketType {
        match self {
            Packet::Literal {..} => PacketType::Literal,
            Packet::Operator {op, ..} => *op,
        }
    }

    pub fn value(&self) -> u64 {
        match self {
            Packet::Literal {value, ..} | Packet::Operator {value, ..} => *value
        }
    }

    pub fn bit_size(&self) -> usize {
        match self {
            Packet::Literal {bit_size, ..} | Packet::Operator {bit_size, ..} => *bit_size
        }
    }

    pub fn children(&self) -> &[Packet] {
        match self {
            Packet::Literal {..} => &[],
            Packet::Operator {children, ..} => children.as_slice(),
        }
    }

    /// This packet's version plus the versions of everything nested in it.
    pub fn total_version(&self) -> u64 {
        self.version() as u64 + self.children().iter().map(Packet::total_version).sum::<u64>()
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        writeln!(
            f, "{:indent$}{} v{} = {} ({} bits)",
            "", self.packet_type(), self.version(), self.value(), self.bit_size()
        )?;
        self.children().iter().try_for_each(|child| child.fmt_indented(f, indent + 2))
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// Parses one packet at the reader's position, recursing into sub-packets.
/// `depth` is the number of enclosing operator packets.
pub fn parse_packet(reader: &mut BitReader<'_>, depth: usize) -> Result<Packet> {
    let start = reader.position();
    if depth >= MAX_DEPTH {
        return Err(DecodeError::malformed(start, Malformed::TooDeep(MAX_DEPTH)));
    }

    let version = reader.read(3)? as u8;
    let packet_type = PacketType::from_id(reader.read(3)?);
    let packet = if packet_type == PacketType::Literal {
        let (value, size) = parse_literal(reader)?;
        Packet::Literal {version, value, bit_size: HEADER_BITS + size}
    } else {
        let (children, size) = parse_operator(reader, depth)?;
        let values = children.iter().map(Packet::value).collect::<Vec<_>>();
        let value = packet_type.apply(&values)
            .map_err(|reason| DecodeError::malformed(start, reason))?;
        Packet::Operator {version, op: packet_type, children, value, bit_size: HEADER_BITS + size}
    };

    trace!(offset = start, depth, %packet_type, version, value = packet.value(), "parsed packet");
    debug_assert_eq!(packet.bit_size(), reader.position() - start);
    Ok(packet)
}

/// Reads the 5-bit groups of a literal payload, returning its value and the
/// bits consumed.
pub fn parse_literal(reader: &mut BitReader<'_>) -> Result<(u64, usize)> {
    let start = reader.position();
    let mut value = 0u64;
    loop {
        if reader.remaining() < GROUP_BITS {
            return Err(DecodeError::malformed(reader.position(), Malformed::UnterminatedLiteral));
        }
        let more = reader.read_flag()?;
        if value >> 60 != 0 {
            return Err(DecodeError::malformed(start, Malformed::Overflow));
        }
        value = value << 4 | reader.read(4)?;
        if !more {break}
    }
    Ok((value, reader.position() - start))
}

/// Reads the length type and sub-packets of an operator payload, returning
/// the children and the bits consumed.
pub fn parse_operator(reader: &mut BitReader<'_>, depth: usize) -> Result<(Vec<Packet>, usize)> {
    let start = reader.position();
    let mut children = Vec::new();

    if reader.read_flag()? {
        let count = reader.read(COUNT_BITS)?;
        for _ in 0 .. count {
            children.push(parse_packet(reader, depth + 1)?);
        }
    } else {
        let declared = reader.read(TOTAL_LENGTH_BITS)? as usize;
        let body = reader.position();
        let mut consumed = 0;
        while consumed < declared {
            let child = parse_packet(reader, depth + 1)?;
            consumed += child.bit_size();
            if consumed > declared {
                return Err(DecodeError::malformed(
                    body,
                    Malformed::LengthOverrun {declared, actual: consumed},
                ));
            }
            children.push(child);
        }
    }

    Ok((children, reader.position() - start))
}
