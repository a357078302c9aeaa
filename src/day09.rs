use anyhow::Result;
use bitvec::prelude::*;
use itertools::Itertools;

use crate::input;

pub fn day9(part: u8, input: &str) -> Result<String> {
    let heights = input::digit_grid(input)?;
    let (rows, cols) = (heights.len(), heights[0].len());
    let low_points = (0 .. rows).cartesian_product(0 .. cols).filter(|&(r, c)|
        input::neighbors(r, c, rows, cols, false).all(|(nr, nc)| heights[nr][nc] > heights[r][c])
    ).collect::<Vec<_>>();

    if part == 1 {
        return Ok(low_points.iter().map(|&(r, c)| heights[r][c] as u32 + 1).sum::<u32>().to_string());
    }

    let mut visited = bitvec![0; rows * cols];
    let basins = low_points.iter().map(|&low| {
        let mut size = 0;
        let mut stack = vec![low];
        visited.set(low.0 * cols + low.1, true);
        while let Some((r, c)) = stack.pop() {
            size += 1;
            for (nr, nc) in input::neighbors(r, c, rows, cols, false) {
                if heights[nr][nc] < 9 && !visited.replace(nr * cols + nc, true) {
                    stack.push((nr, nc));
                }
            }
        }
        size
    }).collect::<Vec<u64>>();

    Ok(basins.into_iter().sorted_unstable().rev().take(3).product::<u64>().to_string())
}
