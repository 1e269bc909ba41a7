use anyhow::Result;
use itertools::iproduct;

use crate::grid::{Grid, Pos};

const WORD: &[u8] = b"XMAS";

fn spells_from(grid: &Grid, start: Pos, delta: (isize, isize)) -> bool {
    let mut pos = start;
    for (i, &letter) in WORD.iter().enumerate() {
        if i > 0 {
            let Some(next) = grid.offset(pos, delta) else {return false};
            pos = next;
        }
        if grid[pos] != letter {return false}
    }
    true
}

/// Both diagonals through `pos` read MAS, forwards or backwards.
fn is_x_mas(grid: &Grid, pos: Pos) -> bool {
    let corner = |delta| grid.offset(pos, delta).map(|at| grid[at]);
    let mas = |a: Option<u8>, b: Option<u8>| matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')));
    grid[pos] == b'A' &&
        mas(corner((-1, -1)), corner((1, 1))) &&
        mas(corner((-1, 1)), corner((1, -1)))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    if part == 1 {
        Ok(grid.find(WORD[0]).map(|pos|
            iproduct!(-1 ..= 1, -1 ..= 1)
                .filter(|&delta| delta != (0, 0) && spells_from(&grid, pos, delta))
                .count()
        ).sum::<usize>().to_string())
    } else {
        Ok(grid.find(b'A').filter(|&pos| is_x_mas(&grid, pos)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "18");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "9");
    }

    #[test]
    fn words_stop_at_the_edge() {
        assert_eq!(solve(1, "XMA\n...\n...").unwrap(), "0");
        assert_eq!(solve(1, "SAMX\n....").unwrap(), "1");
    }

    #[test]
    fn x_mas_needs_full_corners() {
        assert_eq!(solve(2, "M.S\n.A.\nM.S").unwrap(), "1");
        assert_eq!(solve(2, "M.M\n.A.\nS.S").unwrap(), "1");
        assert_eq!(solve(2, "M.S\n.A.\nS.M").unwrap(), "0");
        assert_eq!(solve(2, ".A.\nM.S").unwrap(), "0");
    }
}
