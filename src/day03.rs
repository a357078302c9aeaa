use anyhow::{ensure, Context, Result};

use crate::input;

fn count_ones(readings: &[u32], bit: usize) -> usize {
    readings.iter().filter(|&&r| r >> bit & 1 == 1).count()
}

/// Narrows the readings column by column, most significant first, keeping
/// those whose bit matches `keep(ones, zeros)`, until one is left.
fn rating(readings: &[u32], width: usize, keep: fn(usize, usize) -> bool) -> u32 {
    let mut left = readings.to_vec();
    for bit in (0 .. width).rev() {
        if left.len() <= 1 {break}
        let ones = count_ones(&left, bit);
        let zeros = left.len() - ones;
        if ones == 0 || zeros == 0 {continue}
        let wanted = keep(ones, zeros) as u32;
        left.retain(|&r| r >> bit & 1 == wanted);
    }
    left.first().copied().unwrap_or(0)
}

pub fn day3(part: u8, input: &str) -> Result<String> {
    let lines = input::lines(input).collect::<Vec<_>>();
    let width = lines.first().map_or(0, |line| line.len());
    ensure!(width <= 32, "readings wider than 32 bits");
    ensure!(lines.iter().all(|line| line.len() == width), "readings differ in width");
    let readings = lines.iter().map(|line|
        u32::from_str_radix(line, 2).with_context(|| format!("not binary: {:?}", line))
    ).collect::<Result<Vec<_>>>()?;

    if part == 1 {
        let (mut gamma, mut epsilon) = (0u32, 0u32);
        for bit in (0 .. width).rev() {
            let ones = count_ones(&readings, bit);
            let zeros = readings.len() - ones;
            gamma = gamma << 1 | (ones > zeros) as u32;
            epsilon = epsilon << 1 | (zeros > ones) as u32;
        }
        Ok((gamma as u64 * epsilon as u64).to_string())
    } else {
        let oxygen = rating(&readings, width, |ones, zeros| ones >= zeros);
        let co2 = rating(&readings, width, |ones, zeros| ones < zeros);
        Ok((oxygen as u64 * co2 as u64).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    #[test]
    fn example() {
        assert_eq!(day3(1, EXAMPLE).unwrap(), "198");
        assert_eq!(day3(2, EXAMPLE).unwrap(), "230");
    }

    #[test]
    fn ratings() {
        let readings = input::lines(EXAMPLE).map(|l| u32::from_str_radix(l, 2).unwrap()).collect::<Vec<_>>();
        assert_eq!(rating(&readings, 5, |ones, zeros| ones >= zeros), 23);
        assert_eq!(rating(&readings, 5, |ones, zeros| ones < zeros), 10);
    }

    #[test]
    fn ragged_input() {
        assert!(day3(1, "101\n10\n").is_err());
        assert!(day3(1, "102\n").is_err());
    }
}
