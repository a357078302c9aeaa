use anyhow::{bail, ensure, Context, Result};

use crate::input;

enum Outcome {Corrupted(u64), Incomplete(u64)}

fn check(line: &str) -> Result<Outcome> {
    let mut open = Vec::with_capacity(line.len());
    for b in line.bytes() {
        let (expected, score) = match b {
            b'(' | b'[' | b'{' | b'<' => {
                open.push(b);
                continue
            },
            b')' => (b'(', 3),
            b']' => (b'[', 57),
            b'}' => (b'{', 1197),
            b'>' => (b'<', 25137),
            _ => bail!("unexpected character {:?} in {:?}", b as char, line)
        };
        if open.pop() != Some(expected) {
            return Ok(Outcome::Corrupted(score));
        }
    }
    let score = open.iter().rev().try_fold(0u64, |acc, b| {
        acc.checked_mul(5)?.checked_add(match b {b'(' => 1, b'[' => 2, b'{' => 3, _ => 4})
    }).with_context(|| format!("completion score overflows for {:?}", line))?;
    Ok(Outcome::Incomplete(score))
}

pub fn day10(part: u8, input: &str) -> Result<String> {
    let mut corrupted = 0;
    let mut completions = vec![];
    for line in input::lines(input) {
        match check(line)? {
            Outcome::Corrupted(score) => corrupted += score,
            Outcome::Incomplete(score) => completions.push(score),
        }
    }

    if part == 1 {
        Ok(corrupted.to_string())
    } else {
        ensure!(!completions.is_empty(), "no incomplete lines");
        completions.sort_unstable();
        Ok(completions[completions.len() / 2].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

    #[test]
    fn example() {
        assert_eq!(day10(1, EXAMPLE).unwrap(), "26397");
        assert_eq!(day10(2, EXAMPLE).unwrap(), "288957");
    }

    #[test]
    fn completion_score() {
        let Outcome::Incomplete(score) = check("<{([{{}}[<[[[<>{}]]]>[]]").unwrap() else {
            panic!("expected an incomplete line")
        };
        assert_eq!(score, 294);
    }

    #[test]
    fn foreign_character() {
        assert!(day10(1, "(a)\n").is_err());
    }

    #[test]
    fn deep_nesting() {
        let deep = "(".repeat(200);
        assert_eq!(day10(1, &deep).unwrap(), "0");
        assert!(day10(2, &deep).is_err());
        let closed = format!("{}{}", "(".repeat(150), ")".repeat(140));
        assert_eq!(day10(2, &closed).unwrap(), "2441406");
    }
}
