use anyhow::{ensure, Context, Result};
use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::input;

const SIZE: usize = 5;
const ROW: u32 = 0b11111;
const COLUMN: u32 = 1 | 1 << 5 | 1 << 10 | 1 << 15 | 1 << 20;

struct Board {cells: ArrayVec<u32, {SIZE * SIZE}>, marked: u32}

impl Board {
    fn parse(rows: &[&str]) -> Result<Board> {
        let numbers = rows.iter().flat_map(|row| row.split_whitespace()).map(|n|
            n.parse::<u32>().with_context(|| format!("cannot parse board number {:?}", n))
        ).collect::<Result<Vec<_>>>()?;
        let cells = ArrayVec::try_from(&numbers[..])
            .ok().filter(|cells: &ArrayVec<_, {SIZE * SIZE}>| cells.is_full())
            .with_context(|| format!("board {:?} is not {}x{}", rows, SIZE, SIZE))?;
        Ok(Board {cells, marked: 0})
    }

    /// Marks `n` and reports whether the board now has a full row or column.
    fn mark(&mut self, n: u32) -> bool {
        if let Some(at) = self.cells.iter().position(|&cell| cell == n) {
            self.marked |= 1 << at;
        }
        (0 .. SIZE).any(|i| {
            let row = ROW << (SIZE * i);
            let column = COLUMN << i;
            self.marked & row == row || self.marked & column == column
        })
    }

    fn unmarked_sum(&self) -> u32 {
        self.cells.iter().enumerate()
            .filter(|&(at, _)| self.marked >> at & 1 == 0)
            .map(|(_, &cell)| cell)
            .sum()
    }
}

pub fn day4(part: u8, input: &str) -> Result<String> {
    let mut lines = input::lines(input);
    let callouts = input::parse_list::<u32>(lines.next().context("missing callouts")?, ',')?;
    let mut boards = lines.chunks(SIZE).into_iter()
        .map(|rows| Board::parse(&rows.collect::<Vec<_>>()))
        .collect::<Result<Vec<_>>>()?;
    ensure!(!boards.is_empty(), "no boards");

    let mut scores = vec![];
    for n in callouts {
        boards.retain_mut(|board| {
            let bingo = board.mark(n);
            if bingo {scores.push(board.unmarked_sum() * n)}
            !bingo
        });
        if boards.is_empty() {break}
    }

    let score = if part == 1 {scores.first()} else {scores.last()};
    Ok(score.context("no board ever wins")?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn example() {
        assert_eq!(day4(1, EXAMPLE).unwrap(), "4512");
        assert_eq!(day4(2, EXAMPLE).unwrap(), "1924");
    }

    #[test]
    fn column_wins() {
        let rows = ["1 2 3 4 5", "6 7 8 9 10", "11 12 13 14 15", "16 17 18 19 20", "21 22 23 24 25"];
        let mut board = Board::parse(&rows).unwrap();
        for n in [3, 8, 13, 18] {
            assert!(!board.mark(n));
        }
        assert!(board.mark(23));
        assert_eq!(board.unmarked_sum(), 325 - 65);
    }

    #[test]
    fn short_board() {
        assert!(day4(1, "1,2\n\n1 2 3\n").is_err());
        assert!(day4(1, "1,2\n").is_err());
    }
}
