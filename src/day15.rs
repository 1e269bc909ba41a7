use anyhow::{Context, Result};
use log::debug;

use crate::error::ParseError;
use crate::grid::{Dir, Grid, Pos};

struct Warehouse {
    grid: Grid,
    robot: Pos,
}

impl Warehouse {
    fn new(grid: Grid) -> Result<Warehouse> {
        let robot = grid.find(b'@').next().context("warehouse has no robot")?;
        Ok(Warehouse {grid, robot})
    }

    /// Everything is twice as wide, except the robot.
    fn widen(map: &str) -> String {
        let mut wide = String::with_capacity(2 * map.len());
        for cell in map.chars() {
            match cell {
                '#' => wide.push_str("##"),
                'O' => wide.push_str("[]"),
                '.' => wide.push_str(".."),
                '@' => wide.push_str("@."),
                other => wide.push(other),
            }
        }
        wide
    }

    /// Moves the robot one step, pushing whatever boxes are in the way unless they are blocked.
    fn push(&mut self, dir: Dir) {
        let mut moving = vec![self.robot];
        let mut ix = 0;
        while ix < moving.len() {
            let Some(next) = self.grid.step(moving[ix], dir) else {return};
            ix += 1;
            if moving.contains(&next) {continue}
            match self.grid[next] {
                b'#' => return,
                b'O' => moving.push(next),
                b'[' => {
                    moving.push(next);
                    if dir.is_vertical() {moving.push((next.0, next.1 + 1))}
                },
                b']' => {
                    moving.push(next);
                    if dir.is_vertical() {moving.push((next.0, next.1 - 1))}
                },
                _ => (),
            }
        }

        // farthest cells first, so nothing is overwritten before it moves
        for &pos in moving.iter().rev() {
            if let Some(next) = self.grid.step(pos, dir) {
                self.grid[next] = self.grid[pos];
                self.grid[pos] = b'.';
            }
        }
        if let Some(next) = self.grid.step(self.robot, dir) {self.robot = next}
    }

    fn gps_sum(&self) -> usize {
        self.grid.positions()
            .filter(|&pos| matches!(self.grid[pos], b'O' | b'['))
            .map(|(row, col)| 100 * row + col)
            .sum()
    }
}

fn moves(text: &str, first_line: usize) -> Result<Vec<Dir>, ParseError> {
    text.lines().enumerate().flat_map(|(li, line)|
        line.trim_end().bytes().enumerate().map(move |(ci, arrow)|
            Dir::from_arrow(arrow).ok_or_else(|| ParseError::unexpected(arrow, first_line + li, ci))
        )
    ).collect()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let input = input.replace("\r\n", "\n");
    let (map, arrows) = input.trim().split_once("\n\n").context("expected a map and moves separated by a blank line")?;
    let grid = Grid::parse(map)?;
    if let Some((row, col)) = grid.positions().find(|&pos| !b"#.O@".contains(&grid[pos])) {
        return Err(ParseError::unexpected(grid[(row, col)], row, col).into());
    }
    let moves = moves(arrows, grid.rows() + 1)?;
    let grid = if part == 1 {grid} else {Grid::parse(&Warehouse::widen(map))?};
    let mut warehouse = Warehouse::new(grid)?;

    for dir in moves {
        warehouse.push(dir);
    }
    debug!("warehouse after moving:\n{}", warehouse.grid);
    Ok(warehouse.gps_sum().to_string())
}
