use anyhow::{bail, Context, Result};

use crate::input;

pub fn day2(part: u8, input: &str) -> Result<String> {
    let (mut position, mut depth, mut aim) = (0i64, 0i64, 0i64);
    for line in input::lines(input) {
        let (command, n) = line.split_once(' ')
            .with_context(|| format!("cannot parse command {:?}", line))?;
        let n: i64 = n.parse().with_context(|| format!("cannot parse distance in {:?}", line))?;
        match (command, part) {
            ("forward", 1) => position += n,
            ("down", 1) => depth += n,
            ("up", 1) => depth -= n,
            ("forward", _) => {position += n; depth += aim * n},
            ("down", _) => aim += n,
            ("up", _) => aim -= n,
            _ => bail!("unknown command {:?}", command)
        }
    }
    Ok((position * depth).to_string())
}
