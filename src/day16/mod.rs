//! Packet Decoder: hex transmissions carrying a nested expression of
//! versioned packets.

mod bits;
mod error;
mod eval;
mod packet;

use anyhow::bail;
use itertools::Itertools;
use tracing::{debug, trace, warn};

pub use bits::{hex_to_bits, BitReader, BitStream};
pub use error::{DecodeError, Malformed};
pub use eval::evaluate;
pub use packet::{parse_literal, parse_operator, parse_packet, Packet, PacketType, MAX_DEPTH};

/// Decodes the root packet of one hex line. Bits left after it are padding.
pub fn decode(hex: &str) -> Result<Packet, DecodeError> {
    let bits = BitStream::from_hex(hex)?;
    let mut reader = bits.reader();
    let packet = parse_packet(&mut reader, 0)?;
    let padding = reader.rest();
    if padding.any() {
        trace!(bits = padding.len(), "non-zero padding after root packet");
    }
    Ok(packet)
}

/// Every decodable root packet of an input, one per non-empty line.
#[derive(Debug, Default)]
pub struct Transmission {
    pub packets: Vec<Packet>,
    pub rejected: usize,
}

impl Transmission {
    /// Decodes line by line. A malformed line is logged and skipped, the
    /// rest still decode.
    pub fn decode(input: &str) -> Self {
        let mut transmission = Transmission::default();
        for (line_no, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {continue}
            match decode(line) {
                Ok(packet) => {
                    debug!("line {}:\n{}", line_no + 1, packet);
                    transmission.packets.push(packet);
                },
                Err(err) => {
                    warn!(line = line_no + 1, %err, "skipping transmission");
                    transmission.rejected += 1;
                }
            }
        }
        transmission
    }
}

pub fn day16(part: u8, input: &str) -> anyhow::Result<String> {
    let transmission = Transmission::decode(input);
    if transmission.packets.is_empty() {
        bail!("no decodable transmission ({} lines rejected)", transmission.rejected);
    }
    Ok(transmission.packets.iter().map(|packet|
        if part == 1 {packet.total_version()} else {packet.value()}
    ).join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part1_sums_versions_per_line() {
        let input = "8A004A801A8002F478\n620080001611562C8802118E34\n";
        assert_eq!(day16(1, input).unwrap(), "16\n12");
    }

    #[test]
    fn part2_evaluates_per_line() {
        assert_eq!(day16(2, "C200B40A82\n04005AC33890\n").unwrap(), "3\n54");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let transmission = Transmission::decode("D2FE28\nD2F\nXYZ\n\nC200B40A82\n");
        assert_eq!(transmission.rejected, 2);
        assert_eq!(transmission.packets.iter().map(Packet::value).collect::<Vec<_>>(), [2021, 3]);
        assert_eq!(day16(2, "D2F\nC200B40A82").unwrap(), "3");
    }

    #[test]
    fn nothing_decodable_is_an_error() {
        assert!(day16(1, "D2F\n").is_err());
        assert!(day16(1, "").is_err());
    }

    #[test]
    fn decode_reports_invalid_input() {
        assert_eq!(decode("D2FE2x"), Err(DecodeError::InvalidInput {digit: 'x', position: 5}));
    }

    #[test]
    fn trailing_padding_is_ignored() {
        let literal = Packet::Literal {version: 6, value: 2021, bit_size: 21};
        assert_eq!(decode("D2FE28"), Ok(literal.clone()));
        assert_eq!(decode("D2FE29"), Ok(literal.clone()));
        assert_eq!(decode("D2FE28FF"), Ok(literal));
    }
}
