use anyhow::Result;
use rayon::prelude::*;

use crate::error::{field, ParseError};

struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl Equation {
    fn parse(li: usize, line: &str) -> Result<Equation, ParseError> {
        let Some((target, operands)) = line.split_once(':') else {
            return Err(ParseError::malformed(li + 1, "target: operands", line));
        };
        let operands = operands.split_whitespace()
            .map(|operand| field(li + 1, operand, "an operand"))
            .collect::<Result<Vec<_>, _>>()?;
        if operands.is_empty() {
            return Err(ParseError::malformed(li + 1, "at least one operand", line));
        }
        Ok(Equation {target: field(li + 1, target, "a target")?, operands})
    }

    fn solvable(&self, concat: bool) -> bool {
        unwind(self.target, &self.operands, concat)
    }
}

/// The power of ten that `n` gets shifted by when concatenated onto, if it fits in a u64.
fn decade(n: u64) -> Option<u64> {
    10u64.checked_pow(n.checked_ilog10().unwrap_or(0) + 1)
}

/// What `target` must have been before `last` was concatenated onto it.
fn unconcat(target: u64, last: u64) -> Option<u64> {
    match decade(last) {
        Some(shift) => (target % shift == last).then_some(target / shift),
        // anything but a zero prefix would overflow
        None => (target == last).then_some(0),
    }
}

/// Peels operators off from the right: the last operand must be undoable from `target`.
fn unwind(target: u64, operands: &[u64], concat: bool) -> bool {
    let [rest @ .., last] = operands else {return false};
    let last = *last;
    if rest.is_empty() {return target == last}

    last == 0 && target == 0 ||
    target >= last && unwind(target - last, rest, concat) ||
    last != 0 && target % last == 0 && unwind(target / last, rest, concat) ||
    concat && unconcat(target, last).is_some_and(|prefix| unwind(prefix, rest, concat))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let equations = input.trim().lines().enumerate()
        .map(|(li, line)| Equation::parse(li, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(equations.par_iter()
        .filter(|equation| equation.solvable(part == 2))
        .map(|equation| equation.target)
        .sum::<u64>().to_string())
}
