//! Board storage and coordinates.
//!
//! [`BoardGrid`] is plain storage with bounds checks; it knows nothing about
//! captures or turns.

use std::fmt;

use serde::Serialize;

use crate::constants::{EMPTY, N, NEIGHBOR_OFFSETS, STONE_BLACK, STONE_WHITE};
use crate::error::{GoError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// An intersection, zero-indexed by `(row, col)`.
///
/// A `Point` may hold any coordinates; only those in `[0, N)` are on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a point from signed coordinates, rejecting anything off the board.
    pub fn checked(row: isize, col: isize) -> Result<Self> {
        if in_bounds(row, col) {
            Ok(Self::new(row as usize, col as usize))
        } else {
            Err(GoError::OutOfBounds { row, col })
        }
    }

    pub fn is_on_board(self) -> bool {
        self.row < N && self.col < N
    }

    /// Display label: column letter from `A`, then the 1-based rank (`row + 1`).
    pub fn label(self) -> String {
        let file = (b'A' + self.col as u8) as char;
        format!("{file}{}", self.row + 1)
    }

    /// Parse a label such as `"C4"` (case-insensitive) back into a point.
    pub fn parse_label(s: &str) -> Result<Self> {
        let bad = || GoError::ParseCoord(s.to_string());
        let s = s.trim();
        let mut chars = s.chars();
        let file = chars.next().ok_or_else(bad)?.to_ascii_uppercase();
        if !file.is_ascii_uppercase() {
            return Err(bad());
        }
        let rank: usize = chars.as_str().parse().map_err(|_| bad())?;
        if rank == 0 {
            return Err(bad());
        }
        let point = Point::new(rank - 1, (file as u8 - b'A') as usize);
        if point.is_on_board() { Ok(point) } else { Err(bad()) }
    }

    /// In-bounds orthogonal neighbors in the order Up, Down, Left, Right.
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row as isize + dr;
            let col = self.col as isize + dc;
            in_bounds(row, col).then(|| Point::new(row as usize, col as usize))
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}", self.label())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

fn in_bounds(row: isize, col: isize) -> bool {
    (0..N as isize).contains(&row) && (0..N as isize).contains(&col)
}

fn check(point: Point) -> Result<()> {
    if point.is_on_board() {
        Ok(())
    } else {
        Err(GoError::OutOfBounds {
            row: point.row as isize,
            col: point.col as isize,
        })
    }
}

/// Fixed NxN grid of cells. `None` is an empty intersection.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BoardGrid {
    cells: [[Option<Color>; N]; N],
}

impl BoardGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, point: Point) -> Result<Option<Color>> {
        check(point)?;
        Ok(self.cells[point.row][point.col])
    }

    pub fn set(&mut self, point: Point, cell: Option<Color>) -> Result<()> {
        check(point)?;
        self.cells[point.row][point.col] = cell;
        Ok(())
    }

    pub fn is_empty(&self, point: Point) -> Result<bool> {
        Ok(self.get(point)?.is_none())
    }

    /// Raw rows, for snapshots.
    pub fn rows(&self) -> [[Option<Color>; N]; N] {
        self.cells
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(color))
            .count()
    }

    /// Every empty intersection in row-major order.
    pub fn empty_points(&self) -> Vec<Point> {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| Point::new(row, col)))
            .filter(|p| self.cells[p.row][p.col].is_none())
            .collect()
    }

    // Callers have already validated `point`.
    pub(crate) fn at(&self, point: Point) -> Option<Color> {
        self.cells[point.row][point.col]
    }

    pub(crate) fn put(&mut self, point: Point, cell: Option<Color>) {
        self.cells[point.row][point.col] = cell;
    }
}

impl fmt::Display for BoardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..N {
            write!(f, " {}", (b'A' + col as u8) as char)?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{:>2}", row + 1)?;
            for cell in cells {
                let ch = match cell {
                    Some(Color::Black) => STONE_BLACK,
                    Some(Color::White) => STONE_WHITE,
                    None => EMPTY,
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
