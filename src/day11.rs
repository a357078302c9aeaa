use anyhow::Result;
use bitvec::prelude::*;
use tracing::trace;

use crate::input;

const FLASH_AT: u8 = 10;

/// Advances the octopus grid one step, returning how many flashed.
fn step(energy: &mut [Vec<u8>]) -> usize {
    let (rows, cols) = (energy.len(), energy[0].len());
    let mut flashed = bitvec![0; rows * cols];
    let mut charged = vec![];

    for (r, row) in energy.iter_mut().enumerate() {
        for (c, level) in row.iter_mut().enumerate() {
            *level += 1;
            if *level >= FLASH_AT {charged.push((r, c))}
        }
    }

    while let Some((r, c)) = charged.pop() {
        if flashed.replace(r * cols + c, true) {continue}
        for (nr, nc) in input::neighbors(r, c, rows, cols, true) {
            energy[nr][nc] += 1;
            if energy[nr][nc] >= FLASH_AT && !flashed[nr * cols + nc] {
                charged.push((nr, nc));
            }
        }
    }

    for i in flashed.iter_ones() {
        energy[i / cols][i % cols] = 0;
    }
    flashed.count_ones()
}

pub fn day11(part: u8, input: &str) -> Result<String> {
    let mut energy = input::digit_grid(input)?;
    let octopuses = energy.len() * energy[0].len();

    if part == 1 {
        Ok((0 .. 100).map(|_| step(&mut energy)).sum::<usize>().to_string())
    } else {
        let mut steps = 1;
        loop {
            let flashes = step(&mut energy);
            trace!(steps, flashes, "stepped");
            if flashes == octopuses {break}
            steps += 1;
        }
        Ok(steps.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn example() {
        assert_eq!(day11(1, EXAMPLE).unwrap(), "1656");
        assert_eq!(day11(2, EXAMPLE).unwrap(), "195");
    }

    #[test]
    fn small_grid_steps() {
        let mut energy = input::digit_grid("11111\n19991\n19191\n19991\n11111\n").unwrap();
        assert_eq!(step(&mut energy), 9);
        assert_eq!(energy, input::digit_grid("34543\n40004\n50005\n40004\n34543\n").unwrap());
        assert_eq!(step(&mut energy), 0);
        assert_eq!(energy, input::digit_grid("45654\n51115\n61116\n51115\n45654\n").unwrap());
    }
}
