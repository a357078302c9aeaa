use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::{ensure, Context, Result};

use crate::input;

/// The cave seen as `tiles` x `tiles` copies of the scanned grid, each copy
/// one riskier per step right or down, wrapping 9 back to 1.
struct Cave {risk: Vec<Vec<u8>>, tiles: usize}

impl Cave {
    fn rows(&self) -> usize {self.risk.len() * self.tiles}
    fn cols(&self) -> usize {self.risk[0].len() * self.tiles}

    fn risk_at(&self, r: usize, c: usize) -> u32 {
        let (h, w) = (self.risk.len(), self.risk[0].len());
        let base = self.risk[r % h][c % w] as usize + r / h + c / w;
        ((base + 8) % 9 + 1) as u32
    }

    /// Dijkstra from the top-left to the bottom-right corner.
    fn lowest_total_risk(&self) -> Option<u32> {
        let (rows, cols) = (self.rows(), self.cols());
        let mut best = vec![u32::MAX; rows * cols];
        let mut queue = BinaryHeap::new();
        best[0] = 0;
        queue.push(Reverse((0, 0, 0)));

        while let Some(Reverse((total, r, c))) = queue.pop() {
            if (r, c) == (rows - 1, cols - 1) {return Some(total)}
            if total > best[r * cols + c] {continue}
            for (nr, nc) in input::neighbors(r, c, rows, cols, false) {
                let through = total + self.risk_at(nr, nc);
                if through < best[nr * cols + nc] {
                    best[nr * cols + nc] = through;
                    queue.push(Reverse((through, nr, nc)));
                }
            }
        }
        None
    }
}

pub fn day15(part: u8, input: &str) -> Result<String> {
    let risk = input::digit_grid(input)?;
    ensure!(risk.iter().flatten().all(|&r| r > 0), "risk levels run from 1 to 9");
    let cave = Cave {risk, tiles: if part == 1 {1} else {5}};
    Ok(cave.lowest_total_risk().context("no path through the cave")?.to_string())
}
