//! Search constants.

/// Score bound standing in for infinity. Larger than any material balance.
pub const INFINITY: i32 = 1_000_000;

/// Plies searched by default; the interactive opponent plays at this depth.
pub const DEFAULT_DEPTH: u32 = 2;
