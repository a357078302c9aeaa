use anyhow::{ensure, Context, Result};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::input;

pub fn day14(part: u8, input: &str) -> Result<String> {
    let mut lines = input::lines(input);
    let template = lines.next().context("missing polymer template")?.as_bytes();
    ensure!(template.len() >= 2, "template {:?} is too short", String::from_utf8_lossy(template));

    let rules = lines.map(|line| {
        let (pair, product) = line.split_once(" -> ")
            .with_context(|| format!("cannot parse rule {:?}", line))?;
        match (pair.as_bytes(), product.as_bytes()) {
            (&[a, b], &[p]) => Ok(([a, b], p)),
            _ => anyhow::bail!("cannot parse rule {:?}", line)
        }
    }).collect::<Result<FxHashMap<_, _>>>()?;

    let mut pairs = template.iter().copied().tuple_windows()
        .map(|(a, b)| [a, b]).counts();
    let mut elements = template.iter().copied().counts();

    let steps = if part == 1 {10} else {40};
    for step in 1 ..= steps {
        let mut next = FxHashMap::<[u8; 2], usize>::default();
        for (pair @ [a, b], n) in pairs {
            if let Some(&p) = rules.get(&pair) {
                *next.entry([a, p]).or_default() += n;
                *next.entry([p, b]).or_default() += n;
                *elements.entry(p).or_default() += n;
            } else {
                *next.entry(pair).or_default() += n;
            }
        }
        pairs = next.into_iter().collect();
        debug!(step, length = elements.values().sum::<usize>(), "polymer grew");
    }

    let (least, most) = elements.values().minmax().into_option().context("empty polymer")?;
    Ok((most - least).to_string())
}
