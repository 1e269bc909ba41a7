use anyhow::Result;
use bitvec::prelude::*;
use log::debug;

use crate::grid::{Dir, Grid, Pos};

struct Region {
    plant: u8,
    plots: Vec<Pos>,
}

impl Region {
    fn area(&self) -> usize {self.plots.len()}
}

fn same(grid: &Grid, pos: Pos, delta: (isize, isize), plant: u8) -> bool {
    grid.offset(pos, delta).is_some_and(|next| grid[next] == plant)
}

fn perimeter(grid: &Grid, region: &Region) -> usize {
    region.plots.iter().map(|&pos|
        Dir::ALL.iter().filter(|dir| !same(grid, pos, dir.delta(), region.plant)).count()
    ).sum()
}

/// A region has as many sides as it has corners.
fn sides(grid: &Grid, region: &Region) -> usize {
    let plant = region.plant;
    region.plots.iter().map(|&pos| {
        [(-1, -1), (-1, 1), (1, -1), (1, 1)].iter().filter(|&&(dr, dc)| {
            let vertical = same(grid, pos, (dr, 0), plant);
            let horizontal = same(grid, pos, (0, dc), plant);
            let diagonal = same(grid, pos, (dr, dc), plant);
            !vertical && !horizontal || vertical && horizontal && !diagonal
        }).count()
    }).sum()
}

fn regions(grid: &Grid) -> Vec<Region> {
    let mut seen = bitvec![0; grid.rows() * grid.cols()];
    let index = |(row, col): Pos| row * grid.cols() + col;
    let mut regions = vec![];
    for start in grid.positions() {
        if seen[index(start)] {continue}
        seen.set(index(start), true);
        let plant = grid[start];
        let mut plots = vec![];
        let mut stack = vec![start];
        while let Some(pos) = stack.pop() {
            plots.push(pos);
            for dir in Dir::ALL {
                let Some(next) = grid.step(pos, dir) else {continue};
                if grid[next] == plant && !seen[index(next)] {
                    seen.set(index(next), true);
                    stack.push(next);
                }
            }
        }
        regions.push(Region {plant, plots});
    }
    regions
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let regions = regions(&grid);
    debug!("{} regions in a {}x{} garden", regions.len(), grid.rows(), grid.cols());

    let fence = if part == 1 {perimeter} else {sides};
    Ok(regions.iter().map(|region| region.area() * fence(&grid, region)).sum::<usize>().to_string())
}
