use anyhow::{Context, Result};
use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

use crate::error::field;

fn blink(stone: u64) -> Result<ArrayVec<u64, 2>> {
    let mut next = ArrayVec::new();
    if stone == 0 {
        next.push(1);
    } else {
        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            next.push(stone / half);
            next.push(stone % half);
        } else {
            next.push(stone.checked_mul(2024).with_context(|| format!("stone {} overflows", stone))?);
        }
    }
    Ok(next)
}

/// Stone counts memoized on (stone, blinks left).
#[derive(Default)]
struct Expansion {
    cache: FxHashMap<(u64, u32), u64>,
}

impl Expansion {
    fn count(&mut self, stone: u64, blinks: u32) -> Result<u64> {
        if blinks == 0 {return Ok(1)}
        if let Some(&count) = self.cache.get(&(stone, blinks)) {return Ok(count)}
        let mut count = 0;
        for next in blink(stone)? {
            count += self.count(next, blinks - 1)?;
        }
        self.cache.insert((stone, blinks), count);
        Ok(count)
    }
}

fn count_after(stones: &[u64], blinks: u32) -> Result<u64> {
    let mut expansion = Expansion::default();
    stones.iter().map(|&stone| expansion.count(stone, blinks)).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let stones = input.split_whitespace()
        .map(|stone| field(1, stone, "a stone number"))
        .collect::<Result<Vec<u64>, _>>()?;
    let blinks = if part == 1 {25} else {75};
    Ok(count_after(&stones, blinks)?.to_string())
}
