use anyhow::{Context, Result};

use crate::input;

pub fn day1(part: u8, input: &str) -> Result<String> {
    let depths = input::lines(input).map(|line|
        line.parse::<u32>().with_context(|| format!("cannot parse depth {:?}", line))
    ).collect::<Result<Vec<_>>>()?;

    // two overlapping windows differ only in the value leaving and the value entering
    let window = if part == 1 {1} else {3};
    let later = depths.get(window ..).unwrap_or_default();
    Ok(depths.iter().zip(later).filter(|(before, after)| after > before).count().to_string())
}
