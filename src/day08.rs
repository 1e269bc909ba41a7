use anyhow::Result;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::ParseError;
use crate::grid::{Grid, Pos};

fn antennas(grid: &Grid) -> Result<FxHashMap<u8, Vec<Pos>>, ParseError> {
    let mut freqs = FxHashMap::<u8, Vec<Pos>>::default();
    for pos in grid.positions() {
        match grid[pos] {
            b'.' => (),
            freq if freq.is_ascii_alphanumeric() => freqs.entry(freq).or_default().push(pos),
            other => return Err(ParseError::unexpected(other, pos.0, pos.1)),
        }
    }
    Ok(freqs)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let freqs = antennas(&grid)?;
    debug!("{} frequencies over {} antennas", freqs.len(), freqs.values().map(Vec::len).sum::<usize>());

    let mut antinodes = FxHashSet::default();
    for antennas in freqs.values() {
        for &a in antennas {
            for &b in antennas.iter().filter(|&&b| b != a) {
                let delta = (a.0 as isize - b.0 as isize, a.1 as isize - b.1 as isize);
                let mut node = if part == 1 {grid.offset(a, delta)} else {Some(a)};
                while let Some(pos) = node {
                    antinodes.insert(pos);
                    node = if part == 1 {None} else {grid.offset(pos, delta)};
                }
            }
        }
    }
    Ok(antinodes.len().to_string())
}
