//! Positional bonus tables.
//!
//! Tables are indexed `[advance][col]`, where `advance` counts rows away from
//! the piece's own back row (0 = back row, 7 = the far row). Both colors read
//! the same tables from their own side.

pub(crate) const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub(crate) const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Flat bonus for a queen or bishop on the central block.
pub(crate) const CENTER_BONUS: i32 = 10;

/// Central block: rows 3-4, cols 2-5.
#[inline]
pub(crate) const fn is_center(row: usize, col: usize) -> bool {
    row >= 3 && row <= 4 && col >= 2 && col <= 5
}
