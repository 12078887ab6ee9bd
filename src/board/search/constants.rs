//! Search constants.

/// Score returned when the side to move is checkmated (negated for the
/// minimizing side).
pub const MATE_SCORE: i32 = 999_999;

/// Open window bound standing in for infinity.
pub const INFINITY: i32 = i32::MAX;
