use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::ParseError;

/// `(row, col)`, with `(0, 0)` in the top left corner.
pub type Pos = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {N, E, S, W}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::N, Dir::E, Dir::S, Dir::W];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::N => (-1, 0), Dir::E => (0, 1),
            Dir::S => (1, 0), Dir::W => (0, -1),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Dir::N | Dir::S)
    }

    pub fn from_arrow(arrow: u8) -> Option<Dir> {
        match arrow {
            b'^' => Some(Dir::N), b'>' => Some(Dir::E),
            b'v' => Some(Dir::S), b'<' => Some(Dir::W),
            _ => None
        }
    }
}

/// A rectangular grid of bytes, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Grid, ParseError> {
        let mut lines = input.trim().lines().map(str::trim_end);
        let first = lines.next().filter(|line| !line.is_empty()).ok_or(ParseError::Empty)?;
        let cols = first.len();
        let mut cells = first.as_bytes().to_vec();
        let mut rows = 1;
        for line in lines {
            if line.len() != cols {
                return Err(ParseError::Ragged {row: rows + 1, found: line.len(), expected: cols});
            }
            cells.extend_from_slice(line.as_bytes());
            rows += 1;
        }
        Ok(Grid {cells, rows, cols})
    }

    pub fn rows(&self) -> usize {self.rows}
    pub fn cols(&self) -> usize {self.cols}

    pub fn get(&self, (row, col): Pos) -> Option<u8> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    pub fn offset(&self, (row, col): Pos, (dr, dc): (isize, isize)) -> Option<Pos> {
        let row = row.checked_add_signed(dr).filter(|&row| row < self.rows)?;
        let col = col.checked_add_signed(dc).filter(|&col| col < self.cols)?;
        Some((row, col))
    }

    pub fn step(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        self.offset(pos, dir.delta())
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0 .. self.rows * cols).map(move |ix| (ix / cols, ix % cols))
    }

    pub fn find(&self, cell: u8) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self[pos] == cell)
    }
}

impl Index<Pos> for Grid {
    type Output = u8;

    fn index(&self, (row, col): Pos) -> &u8 {
        assert!(col < self.cols, "column {} out of bounds", col);
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, (row, col): Pos) -> &mut u8 {
        assert!(col < self.cols, "column {} out of bounds", col);
        &mut self.cells[row * self.cols + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
