//! Line and grid parsing shared by the day solvers.

use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

/// Non-empty lines with surrounding whitespace removed.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parses a `sep`-separated list such as `3,4,3,1,2`.
pub fn parse_list<T>(s: &str, sep: char) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim().split(sep).map(|x|
        x.trim().parse::<T>().with_context(|| format!("cannot parse {:?}", x))
    ).collect()
}

/// A rectangular grid of single decimal digits, one row per line.
pub fn digit_grid(input: &str) -> Result<Vec<Vec<u8>>> {
    let grid = lines(input).map(|line|
        line.bytes().map(|b| match b {
            b'0' ..= b'9' => Ok(b - b'0'),
            _ => bail!("unexpected character {:?} in {:?}", b as char, line)
        }).collect::<Result<Vec<_>>>()
    ).collect::<Result<Vec<_>>>()?;
    ensure!(!grid.is_empty(), "empty grid");
    ensure!(grid.iter().all(|row| row.len() == grid[0].len()), "grid rows differ in length");
    Ok(grid)
}

/// In-bounds neighbours of `(r, c)` in a `rows` x `cols` grid, orthogonal
/// only or including diagonals.
pub fn neighbors(r: usize, c: usize, rows: usize, cols: usize, diagonal: bool)
    -> impl Iterator<Item = (usize, usize)>
{
    (-1isize ..= 1).flat_map(move |dr| (-1isize ..= 1).map(move |dc| (dr, dc)))
        .filter(move |&(dr, dc)| (dr, dc) != (0, 0) && (diagonal || dr == 0 || dc == 0))
        .filter_map(move |(dr, dc)| {
            let nr = r.checked_add_signed(dr).filter(|&nr| nr < rows)?;
            let nc = c.checked_add_signed(dc).filter(|&nc| nc < cols)?;
            Some((nr, nc))
        })
}
