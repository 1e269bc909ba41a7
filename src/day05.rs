use anyhow::Result;
use bitvec::prelude::*;
use itertools::Itertools;

use crate::error::{field, ParseError};

/// Page numbers are two digits at most, so a rule `x|y` is bit `100 * x + y`.
struct Rules(BitArr!(for 10000));

impl Rules {
    fn before(&self, x: usize, y: usize) -> bool {self.0[100 * x + y]}

    fn in_order(&self, update: &[usize]) -> bool {
        update.iter().tuple_combinations().all(|(&x, &y)| !self.before(y, x))
    }

    /// Repeatedly takes a page that no remaining page has to precede.
    fn reorder(&self, update: &[usize]) -> Vec<usize> {
        let mut unsorted = update.to_vec();
        let mut sorted = Vec::with_capacity(unsorted.len());
        while !unsorted.is_empty() {
            // a cycle has no free page; keep the rest as given
            let at = unsorted.iter()
                .position(|&x| unsorted.iter().all(|&y| !self.before(y, x)))
                .unwrap_or(0);
            sorted.push(unsorted.remove(at));
        }
        sorted
    }
}

fn page(line: usize, text: &str) -> Result<usize, ParseError> {
    let page: usize = field(line, text, "a page number")?;
    if page < 100 {Ok(page)} else {Err(ParseError::malformed(line, "a page below 100", text))}
}

fn parse(input: &str) -> Result<(Rules, Vec<Vec<usize>>), ParseError> {
    let mut lines = input.trim().lines().enumerate();
    let mut rules = Rules(bitarr![0; 10000]);
    for (li, line) in lines.by_ref().take_while(|(_, line)| !line.trim().is_empty()) {
        let Some((x, y)) = line.split_once('|') else {
            return Err(ParseError::malformed(li + 1, "a rule X|Y", line));
        };
        rules.0.set(100 * page(li + 1, x)? + page(li + 1, y)?, true);
    }

    let updates = lines.map(|(li, line)|
        line.split(',').map(|text| page(li + 1, text)).collect::<Result<Vec<_>, _>>()
    ).collect::<Result<Vec<_>, _>>()?;
    Ok((rules, updates))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (rules, updates) = parse(input)?;
    let middle = |update: &[usize]| update[update.len() / 2];

    if part == 1 {
        Ok(updates.iter().filter(|update| rules.in_order(update))
            .map(|update| middle(update)).sum::<usize>().to_string())
    } else {
        Ok(updates.iter().filter(|update| !rules.in_order(update))
            .map(|update| middle(&rules.reorder(update))).sum::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "143");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "123");
    }

    #[test]
    fn order_checks_every_pair() {
        let (rules, _) = parse("3|1\n\n1,2,3").unwrap();
        assert!(!rules.in_order(&[1, 2, 3]));
        assert!(rules.in_order(&[3, 2, 1]));
        assert!(rules.in_order(&[2]));
    }

    #[test]
    fn reorders_pages_without_a_rule_between_them() {
        // 1 and 2 are unrelated, as are 2 and 3, so a comparison sort may leave 1 before 3
        let (rules, updates) = parse("3|1\n\n1,2,3").unwrap();
        let reordered = rules.reorder(&updates[0]);
        assert_eq!(reordered, [2, 3, 1]);
        assert!(rules.in_order(&reordered));
        assert_eq!(solve(2, "3|1\n\n1,2,3").unwrap(), "3");
    }

    #[test]
    fn rejects_three_digit_pages() {
        assert_eq!(
            parse("47|100\n\n47").err(),
            Some(ParseError::malformed(1, "a page below 100", "100"))
        );
    }
}
