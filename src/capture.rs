//! Capture resolution after a placement.

use tracing::debug;

use crate::board::{BoardGrid, Color, Point};
use crate::error::Result;
use crate::group::{find_group, liberties};

/// Remove every opponent group adjacent to `placed` that has no liberties left.
///
/// Neighbors are examined in the order Up, Down, Left, Right, and the removed
/// stones of each captured group are appended in that order. The placed
/// stone's own group is never examined, so a self-surrounded stone stays on
/// the board.
///
/// Returns the removed points; `board` is updated in place.
pub fn resolve_captures(board: &mut BoardGrid, placed: Point, color: Color) -> Result<Vec<Point>> {
    let opp = color.opponent();
    let mut captured = Vec::new();

    for n in placed.neighbors() {
        // An earlier neighbor's capture may already have emptied this point.
        if board.get(n)? != Some(opp) {
            continue;
        }
        let group = find_group(board, n)?;
        if !liberties(board, &group).is_empty() {
            continue;
        }
        for &pt in &group.stones {
            board.put(pt, None);
            captured.push(pt);
        }
        debug!(at = %placed, group = %n, size = group.len(), "captured group");
    }

    Ok(captured)
}
