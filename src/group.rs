//! Stone groups and their liberties.
//!
//! Both queries are pure functions of the board. Groups are found with an
//! explicit worklist flood fill, so board size never affects stack depth.

use std::collections::BTreeSet;

use tracing::trace;

use crate::board::{BoardGrid, Color, Point};
use crate::error::{GoError, Result};

/// A maximal orthogonally connected set of same-colored stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: BTreeSet<Point>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }
}

/// Collect the group containing the stone at `start`.
///
/// # Errors
/// - `OutOfBounds` if `start` is off the board
/// - `InvalidInput` if `start` is empty
pub fn find_group(board: &BoardGrid, start: Point) -> Result<Group> {
    let color = board.get(start)?.ok_or(GoError::InvalidInput(start))?;
    let mut stones = BTreeSet::new();
    let mut stack = vec![start];

    while let Some(pt) = stack.pop() {
        if !stones.insert(pt) {
            continue;
        }
        for n in pt.neighbors() {
            if board.at(n) == Some(color) && !stones.contains(&n) {
                stack.push(n);
            }
        }
    }

    trace!(%start, ?color, size = stones.len(), "found group");
    Ok(Group { color, stones })
}

/// Distinct empty intersections orthogonally adjacent to any stone of `group`.
pub fn liberties(board: &BoardGrid, group: &Group) -> BTreeSet<Point> {
    let libs: BTreeSet<Point> = group
        .stones
        .iter()
        .flat_map(|pt| pt.neighbors())
        .filter(|&n| board.at(n).is_none())
        .collect();
    trace!(size = group.len(), liberties = libs.len(), "counted liberties");
    libs
}
