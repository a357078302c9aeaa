use anyhow::{bail, Context, Result};

use crate::input;

/// Lit segments of each digit 0-9, in canonical wiring.
const DIGITS: [&str; 10] = [
    "abcefg", "cf", "acdeg", "acdfg", "bcdf", "abdfg", "abdefg", "acf", "abcdefg", "abcdfg"
];

fn wire(b: u8) -> Result<usize> {
    match b {
        b'a' ..= b'g' => Ok((b - b'a') as usize),
        _ => bail!("unexpected wire {:?}", b as char)
    }
}

/// Works out which segment each wire drives. Across the ten patterns,
/// b, e and f are lit a unique number of times (6, 4, 9); a and c both
/// 8 times and d and g both 7, told apart by whether the digit 4 uses them.
fn segment_mapping(patterns: &str) -> Result<[u8; 7]> {
    let mut occurrences = [0; 7];
    for b in patterns.bytes().filter(|b| !b.is_ascii_whitespace()) {
        occurrences[wire(b)?] += 1;
    }
    let four = patterns.split_whitespace().find(|p| p.len() == 4)
        .with_context(|| format!("no pattern for 4 in {:?}", patterns))?;

    let mut mapping = [0; 7];
    for (w, &count) in occurrences.iter().enumerate() {
        let in_four = four.as_bytes().contains(&(b'a' + w as u8));
        mapping[w] = match (count, in_four) {
            (6, _) => b'b',
            (4, _) => b'e',
            (9, _) => b'f',
            (8, true) => b'c',
            (8, false) => b'a',
            (7, true) => b'd',
            (7, false) => b'g',
            _ => bail!("wire {} lit {} times in {:?}", (b'a' + w as u8) as char, count, patterns)
        };
    }
    Ok(mapping)
}

fn decode_display(line: &str) -> Result<u32> {
    let (patterns, output) = line.split_once(" | ")
        .with_context(|| format!("cannot parse display {:?}", line))?;
    let mapping = segment_mapping(patterns)?;
    output.split_whitespace().try_fold(0, |acc, digit| {
        let mut segments = digit.bytes().map(|b| wire(b).map(|w| mapping[w])).collect::<Result<Vec<_>>>()?;
        segments.sort_unstable();
        let value = DIGITS.iter().position(|d| d.as_bytes() == segments)
            .with_context(|| format!("{:?} is not a digit", digit))?;
        Ok(acc * 10 + value as u32)
    })
}

pub fn day8(part: u8, input: &str) -> Result<String> {
    if part == 1 {
        let mut unique = 0;
        for line in input::lines(input) {
            let (_, output) = line.split_once(" | ")
                .with_context(|| format!("cannot parse display {:?}", line))?;
            unique += output.split_whitespace().filter(|d| matches!(d.len(), 2 | 3 | 4 | 7)).count();
        }
        Ok(unique.to_string())
    } else {
        input::lines(input).map(decode_display)
            .sum::<Result<u32>>()
            .map(|total| total.to_string())
    }
}
