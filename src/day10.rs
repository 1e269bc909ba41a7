use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::grid::{Dir, Grid, Pos};

/// Every summit reached from `pos` by climbing one level per step, once per distinct trail.
fn summits(grid: &Grid, pos: Pos, found: &mut Vec<Pos>) {
    let height = grid[pos];
    if height == b'9' {
        found.push(pos);
        return;
    }
    for dir in Dir::ALL {
        if let Some(next) = grid.step(pos, dir).filter(|&next| grid[next] == height + 1) {
            summits(grid, next, found);
        }
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let mut found = vec![];
    Ok(grid.find(b'0').map(|trailhead| {
        found.clear();
        summits(&grid, trailhead, &mut found);
        if part == 1 {
            found.iter().collect::<FxHashSet<_>>().len()
        } else {
            found.len()
        }
    }).sum::<usize>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "36");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "81");
    }

    #[test]
    fn impassable_tiles() {
        let input = "\
..90..9
...1.98
...2..7
6543456
765.987
876....
987....
";
        assert_eq!(solve(1, input).unwrap(), "4");
    }

    #[test]
    fn single_trail() {
        assert_eq!(solve(1, "0123\n1234\n8765\n9876").unwrap(), "1");
        assert_eq!(solve(2, "0123\n1234\n8765\n9876").unwrap(), "16");
    }
}
