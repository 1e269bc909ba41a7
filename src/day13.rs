use anyhow::{ensure, Result};
use log::debug;
use regex::Regex;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Presses of A and B landing exactly on the prize, by Cramer's rule.
    fn presses(&self) -> Option<(i64, i64)> {
        let Machine {a: (ax, ay), b: (bx, by), prize: (px, py)} = *self;
        let det = ax * by - ay * bx;
        if det == 0 {
            debug!("degenerate machine {:?}", self);
            return None;
        }
        let (a, b) = (px * by - py * bx, ax * py - ay * px);
        if a % det != 0 || b % det != 0 {return None}
        let (a, b) = (a / det, b / det);
        (a >= 0 && b >= 0).then_some((a, b))
    }
}

fn machines(input: &str) -> Result<Vec<Machine>> {
    let coords = Regex::new(r"X[+=](\d+), Y[+=](\d+)")?
        .captures_iter(input)
        .map(|m| -> Result<(i64, i64)> {Ok((m[1].parse()?, m[2].parse()?))})
        .collect::<Result<Vec<_>>>()?;
    ensure!(coords.len() % 3 == 0, "expected button A, button B and prize per machine, found {} lines", coords.len());
    Ok(coords.chunks_exact(3).map(|chunk| Machine {a: chunk[0], b: chunk[1], prize: chunk[2]}).collect())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    Ok(machines(input)?.into_iter().filter_map(|mut machine| {
        if part == 2 {
            machine.prize.0 += PRIZE_OFFSET;
            machine.prize.1 += PRIZE_OFFSET;
        }
        let (a, b) = machine.presses()?;
        (part == 2 || a <= 100 && b <= 100).then_some(3 * a + b)
    }).sum::<i64>().to_string())
}
