use crate::coord::Coordinate;

/// A set of board squares packed into a u64, one bit per square.
/// Bit 0 = a1, bit 1 = b1, ..., bit 63 = h8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    fn bit(at: Coordinate) -> u64 {
        debug_assert!(at.in_bounds(), "square set indexed off the board");
        1u64 << (at.y as u64 * 8 + at.x as u64)
    }

    pub fn insert(&mut self, at: Coordinate) {
        self.0 |= Self::bit(at);
    }

    pub fn contains(self, at: Coordinate) -> bool {
        self.0 & Self::bit(at) != 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
#[path = "squareset_tests.rs"]
mod squareset_tests;
