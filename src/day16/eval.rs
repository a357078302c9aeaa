use super::error::Malformed;
use super::packet::{Packet, PacketType};

impl PacketType {
    /// Folds operand values the way a packet of this type combines its
    /// children. A literal passes its single value through.
    pub fn apply(self, values: &[u64]) -> Result<u64, Malformed> {
        use PacketType::*;
        match (self, values) {
            (Sum, _) => values.iter().try_fold(0u64, |acc, &x| acc.checked_add(x))
                              .ok_or(Malformed::Overflow),
            (Product, _) => values.iter().try_fold(1u64, |acc, &x| acc.checked_mul(x))
                                  .ok_or(Malformed::Overflow),
            (Minimum, _) => values.iter().copied().min().ok_or(Malformed::NoOperands(self)),
            (Maximum, _) => values.iter().copied().max().ok_or(Malformed::NoOperands(self)),
            (Literal, &[value]) => Ok(value),
            (GreaterThan, &[a, b]) => Ok((a > b) as u64),
            (LessThan, &[a, b]) => Ok((a < b) as u64),
            (Equal, &[a, b]) => Ok((a == b) as u64),
            (Literal, _) => Err(Malformed::Arity {op: self, expected: 1, count: values.len()}),
            (GreaterThan | LessThan | Equal, _) =>
                Err(Malformed::Arity {op: self, expected: 2, count: values.len()}),
        }
    }
}

/// Recomputes a packet's value from its literals up, independently of the
/// value recorded while parsing.
pub fn evaluate(packet: &Packet) -> Result<u64, Malformed> {
    match packet {
        Packet::Literal {value, ..} => Ok(*value),
        Packet::Operator {op, children, ..} => {
            let values = children.iter().map(evaluate).collect::<Result<Vec<_>, _>>()?;
            op.apply(&values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day16::decode;

    #[test]
    fn evaluates_puzzle_expressions() {
        for (hex, expected) in [
            ("C200B40A82", 3),
            ("04005AC33890", 54),
            ("880086C3E88112", 7),
            ("CE00C43D881120", 9),
            ("D8005AC2A8F0", 1),
            ("F600BC2D8F", 0),
            ("9C005AC2F8F0", 0),
            ("9C0141080250320F1802104A08", 1),
        ] {
            let packet = decode(hex).unwrap();
            assert_eq!(packet.value(), expected, "{}", hex);
            assert_eq!(evaluate(&packet), Ok(expected), "{}", hex);
        }
    }

    #[test]
    fn comparisons_need_two_operands() {
        assert_eq!(
            PacketType::Equal.apply(&[1, 1, 1]),
            Err(Malformed::Arity {op: PacketType::Equal, expected: 2, count: 3})
        );
        assert_eq!(
            PacketType::LessThan.apply(&[4]),
            Err(Malformed::Arity {op: PacketType::LessThan, expected: 2, count: 1})
        );
    }

    #[test]
    fn empty_operands() {
        assert_eq!(PacketType::Sum.apply(&[]), Ok(0));
        assert_eq!(PacketType::Product.apply(&[]), Ok(1));
        assert_eq!(PacketType::Minimum.apply(&[]), Err(Malformed::NoOperands(PacketType::Minimum)));
        assert_eq!(PacketType::Maximum.apply(&[]), Err(Malformed::NoOperands(PacketType::Maximum)));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(PacketType::Sum.apply(&[u64::MAX, 1]), Err(Malformed::Overflow));
        assert_eq!(PacketType::Product.apply(&[1 << 32, 1 << 32]), Err(Malformed::Overflow));
    }

    #[test]
    fn comparison_with_three_children_is_malformed() {
        // equal (type 7) with a count of three literal children
        let err = decode("9E00D40C823060").unwrap_err();
        assert!(err.is_malformed(), "{}", err);
    }
}
