use anyhow::{Context, Result};
use itertools::Itertools;

use crate::input;

pub fn day7(part: u8, input: &str) -> Result<String> {
    let crabs = input::parse_list::<i64>(input, ',')?;
    let (&min, &max) = crabs.iter().minmax().into_option().context("no crabs")?;
    let cost = |distance: i64| if part == 1 {distance} else {distance * (distance + 1) / 2};

    let fuel = (min ..= max).map(|target|
        crabs.iter().map(|crab| cost((crab - target).abs())).sum::<i64>()
    ).min().unwrap_or(0);
    Ok(fuel.to_string())
}
