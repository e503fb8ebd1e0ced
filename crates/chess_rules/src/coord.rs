use std::fmt;

use serde::{Deserialize, Serialize};

/// A square address. `x` is the file (0 = a-file), `y` is the rank
/// (0 = rank 1).
///
/// Out-of-range values are representable on purpose: candidate generation
/// works in two phases, producing raw offsets first and culling with
/// `in_bounds` before anything touches the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i8,
    pub y: i8,
}

impl Coordinate {
    pub const fn new(x: i8, y: i8) -> Self {
        Coordinate { x, y }
    }

    /// Parse algebraic square text, e.g. "e4" -> (4, 3).
    pub fn from_algebraic(text: &str) -> Option<Coordinate> {
        let b = text.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Coordinate::new((f - b'a') as i8, (r - b'1') as i8))
    }

    pub fn to_algebraic(self) -> String {
        debug_assert!(self.in_bounds(), "algebraic form of off-board square");
        format!("{}{}", (b'a' + self.x as u8) as char, self.y + 1)
    }

    pub const fn in_bounds(self) -> bool {
        0 <= self.x && self.x < 8 && 0 <= self.y && self.y < 8
    }

    pub const fn offset(self, dx: i8, dy: i8) -> Coordinate {
        Coordinate::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

#[cfg(test)]
#[path = "coord_tests.rs"]
mod coord_tests;
