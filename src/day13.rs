use anyhow::{bail, Context, Result};
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::input;

#[derive(Clone, Copy, Debug)]
enum Fold {Left(u32), Up(u32)}

struct Sheet {dots: FxHashSet<(u32, u32)>, width: u32, height: u32}

impl Sheet {
    /// Dots further from the line than its distance to the edge have nowhere
    /// to land, and fail the fold.
    fn fold(&mut self, fold: Fold) -> Result<()> {
        let mirror = |v: u32, at: u32| if v > at {
            at.checked_mul(2).and_then(|edge| edge.checked_sub(v))
        } else {
            Some(v)
        };
        self.dots = self.dots.iter().filter_map(|&(x, y)| {
            let dot = match fold {
                Fold::Left(at) if x != at => mirror(x, at).map(|x| (x, y)),
                Fold::Up(at) if y != at => mirror(y, at).map(|y| (x, y)),
                _ => return None
            };
            Some(dot.with_context(|| format!("dot {},{} lands off the sheet on {:?}", x, y, fold)))
        }).collect::<Result<_>>()?;
        match fold {
            Fold::Left(at) => self.width = at,
            Fold::Up(at) => self.height = at,
        }
        Ok(())
    }

    fn render(&self) -> String {
        (0 .. self.height).map(|y|
            (0 .. self.width).map(|x| if self.dots.contains(&(x, y)) {'#'} else {'.'}).collect::<String>()
        ).join("\n")
    }
}

fn parse(input: &str) -> Result<(Sheet, Vec<Fold>)> {
    let fold_re = Regex::new(r"^fold along ([xy])=(\d+)$")?;
    let mut sheet = Sheet {dots: FxHashSet::default(), width: 0, height: 0};
    let mut folds = vec![];

    for line in input::lines(input) {
        if let Some(caps) = fold_re.captures(line) {
            let at = caps[2].parse()?;
            folds.push(if &caps[1] == "x" {Fold::Left(at)} else {Fold::Up(at)});
        } else if let Some((x, y)) = line.split_once(',') {
            if !folds.is_empty() {bail!("dot {:?} after fold instructions", line)}
            let (x, y) = (x.parse::<u32>()?, y.parse::<u32>()?);
            sheet.width = sheet.width.max(x + 1);
            sheet.height = sheet.height.max(y + 1);
            sheet.dots.insert((x, y));
        } else {
            bail!("cannot parse {:?}", line)
        }
    }
    Ok((sheet, folds))
}

pub fn day13(part: u8, input: &str) -> Result<String> {
    let (mut sheet, folds) = parse(input)?;
    if part == 1 {
        sheet.fold(*folds.first().context("no fold instructions")?)?;
        Ok(sheet.dots.len().to_string())
    } else {
        for fold in folds {
            sheet.fold(fold)?;
        }
        Ok(sheet.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn example() {
        assert_eq!(day13(1, EXAMPLE).unwrap(), "17");
        assert_eq!(day13(2, EXAMPLE).unwrap(), "\
#####
#...#
#...#
#...#
#####
.....
.....");
    }

    #[test]
    fn bad_instruction() {
        assert!(day13(1, "1,1\nfold along z=3\n").is_err());
        assert!(day13(1, "1,1\n").is_err());
    }

    #[test]
    fn fold_past_the_edge() {
        assert!(day13(1, "20,0\n1,1\n\nfold along x=5\n").is_err());
        assert!(day13(2, "0,20\n1,1\n\nfold along y=5\n").is_err());
        assert_eq!(day13(1, "10,0\n1,1\n\nfold along x=5\n").unwrap(), "2");
    }
}
