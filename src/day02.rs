use anyhow::Result;
use itertools::{Itertools, MinMaxResult};

use crate::error::field;

/// Strictly monotonic, with every step between 1 and 3.
fn is_safe(levels: &[i64]) -> bool {
    match levels.iter().tuple_windows().map(|(x, y)| x - y).minmax() {
        MinMaxResult::NoElements => true,
        MinMaxResult::OneElement(diff) => (1 ..= 3).contains(&diff.abs()),
        MinMaxResult::MinMax(min, max) => min > -4 && max < 0 || min > 0 && max < 4,
    }
}

fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels) || (0 .. levels.len()).any(|skip| {
        let mut damped = levels.to_vec();
        damped.remove(skip);
        is_safe(&damped)
    })
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let reports = input.trim().lines().enumerate().map(|(li, line)|
        line.split_ascii_whitespace()
            .map(|level| field(li + 1, level, "a level"))
            .collect::<Result<Vec<i64>, _>>()
    ).collect::<Result<Vec<_>, _>>()?;

    let check = if part == 1 {is_safe} else {is_safe_dampened};
    Ok(reports.iter().filter(|levels| check(levels)).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "2");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "4");
    }

    #[test]
    fn dampener_can_drop_either_end() {
        assert!(!is_safe(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[1, 2, 3, 9]));
        assert!(!is_safe_dampened(&[1, 5, 9, 13]));
    }

    #[test]
    fn flat_step_is_unsafe() {
        assert!(!is_safe(&[4, 4]));
        assert!(is_safe(&[4]));
    }
}
