//! Advent of Code 2021 solvers, one `dayN(part, input)` function per puzzle.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use tracing::info;

mod input;
pub mod logging;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day16;

/// Solves one part (1 or 2) of a day's puzzle for the given input text.
pub type Solver = fn(u8, &str) -> Result<String>;

pub const DAYS: [Solver; 16] = [
    day01::day1, day02::day2, day03::day3, day04::day4, day05::day5, day06::day6,
    day07::day7, day08::day8, day09::day9, day10::day10, day11::day11, day12::day12,
    day13::day13, day14::day14, day15::day15, day16::day16,
];

pub fn solve(day: usize, part: u8, input: &str) -> Result<String> {
    ensure!(part == 1 || part == 2, "part must be 1 or 2, got {}", part);
    let solver = day.checked_sub(1).and_then(|i| DAYS.get(i))
        .with_context(|| format!("no solver for day {}", day))?;
    solver(part, input)
}

/// `day{N}.in`, or `day{N}test{T}.in` for a worked example, under `dir`.
pub fn input_path(dir: &Path, day: usize, test: Option<u32>) -> PathBuf {
    match test {
        Some(test) => dir.join(format!("day{}test{}.in", day, test)),
        None => dir.join(format!("day{}.in", day)),
    }
}

/// Reads the input file and solves it.
pub fn run(day: usize, part: u8, path: &Path) -> Result<String> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read input {}", path.display()))?;
    info!(day, part, path = %path.display(), bytes = input.len(), "solving");
    solve(day, part, &input).with_context(|| format!("day {} part {} failed", day, part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_day() {
        assert_eq!(solve(1, 1, "1\n2\n1\n3\n").unwrap(), "2");
        assert_eq!(solve(16, 2, "C200B40A82").unwrap(), "3");
    }

    #[test]
    fn rejects_unknown_day_or_part() {
        assert!(solve(0, 1, "").is_err());
        assert!(solve(17, 1, "").is_err());
        assert!(solve(1, 3, "1").is_err());
    }

    #[test]
    fn input_names() {
        let dir = Path::new("inputs");
        assert_eq!(input_path(dir, 16, None), Path::new("inputs/day16.in"));
        assert_eq!(input_path(dir, 4, Some(2)), Path::new("inputs/day4test2.in"));
    }
}
