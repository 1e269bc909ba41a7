use std::iter::zip;

use anyhow::Result;
use itertools::Itertools;
use rayon::prelude::*;

use crate::error::{field, ParseError};

fn location_lists(input: &str) -> Result<(Vec<i64>, Vec<i64>), ParseError> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for (li, line) in input.trim().lines().enumerate() {
        let Some((left, right)) = line.split_whitespace().collect_tuple() else {
            return Err(ParseError::malformed(li + 1, "two location ids", line));
        };
        lefts.push(field(li + 1, left, "a location id")?);
        rights.push(field(li + 1, right, "a location id")?);
    }
    Ok((lefts, rights))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (mut lefts, mut rights) = location_lists(input)?;

    if part == 1 {
        lefts.sort_unstable();
        rights.sort_unstable();
        Ok(zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum::<i64>().to_string())
    } else {
        let occurrences = rights.iter().counts();
        Ok(lefts.par_iter()
            .map(|left| left * occurrences.get(left).copied().unwrap_or(0) as i64)
            .sum::<i64>().to_string())
    }
}
