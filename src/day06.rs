use anyhow::{ensure, Result};

use crate::input;

pub fn day6(part: u8, input: &str) -> Result<String> {
    let mut timers = [0u64; 9];
    for timer in input::parse_list::<usize>(input, ',')? {
        ensure!(timer < timers.len(), "timer {} out of range", timer);
        timers[timer] += 1;
    }

    let days = if part == 1 {80} else {256};
    for _ in 0 .. days {
        timers.rotate_left(1);
        timers[6] += timers[8];
    }
    Ok(timers.iter().sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(day6(1, "3,4,3,1,2\n").unwrap(), "5934");
        assert_eq!(day6(2, "3,4,3,1,2\n").unwrap(), "26984457539");
    }

    #[test]
    fn bad_timer() {
        assert!(day6(1, "3,9\n").is_err());
    }
}
