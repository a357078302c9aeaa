use anyhow::{ensure, Context, Result};
use rustc_hash::FxHashMap;

use crate::input;

type Caves<'a> = FxHashMap<&'a str, Vec<&'a str>>;

fn is_small(cave: &str) -> bool {
    cave.bytes().all(|b| b.is_ascii_lowercase())
}

/// Counts paths from the last cave of `path` to `end`. `revisit` is whether
/// one small cave may still be entered a second time.
fn count_paths<'a>(caves: &Caves<'a>, path: &mut Vec<&'a str>, revisit: bool) -> usize {
    let Some(&here) = path.last() else {return 0};
    if here == "end" {return 1}

    let mut paths = 0;
    for &next in caves.get(here).into_iter().flatten() {
        if next == "start" {continue}
        let again = is_small(next) && path.contains(&next);
        if again && !revisit {continue}
        path.push(next);
        paths += count_paths(caves, path, revisit && !again);
        path.pop();
    }
    paths
}

pub fn day12(part: u8, input: &str) -> Result<String> {
    let mut caves = Caves::default();
    for line in input::lines(input) {
        let (a, b) = line.split_once('-').with_context(|| format!("cannot parse passage {:?}", line))?;
        caves.entry(a).or_default().push(b);
        caves.entry(b).or_default().push(a);
    }
    ensure!(caves.contains_key("start") && caves.contains_key("end"), "missing start or end cave");

    Ok(count_paths(&caves, &mut vec!["start"], part == 2).to_string())
}
