use anyhow::{ensure, Context, Result};
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::input;

pub fn day5(part: u8, input: &str) -> Result<String> {
    let re = Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$")?;
    let mut covered = FxHashMap::<(i32, i32), u32>::default();

    for line in input::lines(input) {
        let caps = re.captures(line).with_context(|| format!("cannot parse vent {:?}", line))?;
        let [x1, y1, x2, y2] = [1, 2, 3, 4].map(|i| caps[i].parse::<i32>());
        let (x1, y1, x2, y2) = (x1?, y1?, x2?, y2?);
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        if dx != 0 && dy != 0 {
            ensure!((x2 - x1).abs() == (y2 - y1).abs(), "vent {:?} is not at 45 degrees", line);
            if part == 1 {continue}
        }

        let steps = (x2 - x1).abs().max((y2 - y1).abs());
        for i in 0 ..= steps {
            *covered.entry((x1 + i * dx, y1 + i * dy)).or_default() += 1;
        }
    }

    Ok(covered.values().filter(|&&vents| vents > 1).count().to_string())
}
