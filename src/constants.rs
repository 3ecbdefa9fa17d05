//! Board geometry constants.
//!
//! The ruleset only knows one board: a 5x5 grid indexed by `(row, col)`,
//! both zero-based. Row 0 is displayed as rank 1 and column 0 as file `A`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 5;

/// Number of intersections on the board.
pub const BOARD_AREA: usize = N * N;

/// Default cap on the number of moves in a random demo game.
pub const MAX_DEMO_MOVES: usize = BOARD_AREA * 3;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Orthogonal `(d_row, d_col)` offsets.
/// Order: Up, Down, Left, Right. Capture resolution visits neighbors in this order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [
    (-1, 0), // Up (previous row)
    (1, 0),  // Down (next row)
    (0, -1), // Left (previous column)
    (0, 1),  // Right (next column)
];

// =============================================================================
// Display Characters
// =============================================================================

/// Black stone in text diagrams.
pub const STONE_BLACK: char = 'X';

/// White stone in text diagrams.
pub const STONE_WHITE: char = 'O';

/// Empty point in text diagrams.
pub const EMPTY: char = '.';
