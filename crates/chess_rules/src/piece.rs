use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank direction this color's pawns advance in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// FEN piece letter to (color, kind). Uppercase is White.
    pub fn from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
        let color = if ch.is_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }

    pub fn fen_char(self, color: Color) -> char {
        let ch = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }
}

/// Geometric verdict for a from/to pair, before occupancy is considered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathValidity {
    Invalid,
    /// Any destination: empty square or enemy piece.
    Valid,
    /// Destination must be empty (pawn pushes never capture).
    MoveOnly,
    /// Destination must hold an enemy piece, or match the pseudo-capture
    /// square (pawn diagonals, en passant).
    CaptureOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

pub(crate) const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Piece {
    /// A piece with no movement history, as FEN decoding creates them.
    pub fn fresh(color: Color, kind: PieceKind) -> Piece {
        Piece {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Pure geometry check for moving from `start` to `end`. Occupancy,
    /// blocking, and check safety are the board's and game's business.
    pub fn path_validity(&self, start: Coordinate, end: Coordinate) -> PathValidity {
        match self.kind {
            PieceKind::Pawn => self.pawn_validity(start, end),
            PieceKind::Rook => as_validity(rook_valid(start, end)),
            PieceKind::Knight => as_validity(knight_valid(start, end)),
            PieceKind::Bishop => as_validity(bishop_valid(start, end)),
            PieceKind::Queen => as_validity(rook_valid(start, end) || bishop_valid(start, end)),
            PieceKind::King => as_validity(king_valid(start, end)),
        }
    }

    fn pawn_validity(&self, start: Coordinate, end: Coordinate) -> PathValidity {
        let dir = self.color.forward();
        if start.x == end.x {
            // Straight ahead: one step always, two steps only before the
            // first move. Either way the destination must be empty.
            if end.y == start.y + dir {
                PathValidity::MoveOnly
            } else if end.y == start.y + 2 * dir && !self.has_moved {
                PathValidity::MoveOnly
            } else {
                PathValidity::Invalid
            }
        } else if (end.x - start.x).abs() == 1 && end.y == start.y + dir {
            // Diagonal, forward only. Valid only as a capture.
            PathValidity::CaptureOnly
        } else {
            PathValidity::Invalid
        }
    }

    /// The ordered squares the piece crosses, intermediate squares first,
    /// destination last. Leapers (and pawn captures) cross nothing.
    ///
    /// Only meaningful for a `start`/`end` pair `path_validity` accepted.
    pub fn path(&self, start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
        debug_assert!(start != end, "path of a null move");
        if self.kind == PieceKind::Knight {
            return vec![end];
        }
        let dx = (end.x - start.x).signum();
        let dy = (end.y - start.y).signum();
        let mut path = Vec::new();
        let mut cur = start.offset(dx, dy);
        loop {
            path.push(cur);
            if cur == end {
                break;
            }
            cur = cur.offset(dx, dy);
        }
        path
    }

    /// Every square the piece could land on from `start`, ignoring other
    /// pieces, bounds-filtered. Castling destinations are handled a layer
    /// up, in `Game`.
    pub fn candidate_ends(&self, start: Coordinate) -> Vec<Coordinate> {
        let mut ends = Vec::new();
        match self.kind {
            PieceKind::Pawn => {
                let dir = self.color.forward();
                ends.push(start.offset(0, dir));
                ends.push(start.offset(1, dir));
                ends.push(start.offset(-1, dir));
                if !self.has_moved {
                    ends.push(start.offset(0, 2 * dir));
                }
            }
            PieceKind::Knight => {
                for (dx, dy) in KNIGHT_OFFSETS {
                    ends.push(start.offset(dx, dy));
                }
            }
            PieceKind::King => {
                for (dx, dy) in KING_OFFSETS {
                    ends.push(start.offset(dx, dy));
                }
            }
            PieceKind::Rook => ray_ends(start, &ORTHO_DIRS, &mut ends),
            PieceKind::Bishop => ray_ends(start, &DIAG_DIRS, &mut ends),
            PieceKind::Queen => {
                ray_ends(start, &ORTHO_DIRS, &mut ends);
                ray_ends(start, &DIAG_DIRS, &mut ends);
            }
        }
        ends.retain(|c| c.in_bounds());
        ends
    }
}

fn as_validity(ok: bool) -> PathValidity {
    if ok {
        PathValidity::Valid
    } else {
        PathValidity::Invalid
    }
}

fn rook_valid(start: Coordinate, end: Coordinate) -> bool {
    // Exactly one axis constant: horizontal or vertical, never both
    // (a null move) and never neither.
    (start.x == end.x) ^ (start.y == end.y)
}

fn bishop_valid(start: Coordinate, end: Coordinate) -> bool {
    (start.x - end.x).abs() == (start.y - end.y).abs() && start != end
}

fn knight_valid(start: Coordinate, end: Coordinate) -> bool {
    let dx = (start.x - end.x).abs();
    let dy = (start.y - end.y).abs();
    // L-shape: magnitude 2 on one axis xor the other, same for magnitude 1.
    ((dx == 2) ^ (dy == 2)) && ((dx == 1) ^ (dy == 1))
}

fn king_valid(start: Coordinate, end: Coordinate) -> bool {
    (start.x - end.x).abs() <= 1 && (start.y - end.y).abs() <= 1 && start != end
}

fn ray_ends(start: Coordinate, dirs: &[(i8, i8)], ends: &mut Vec<Coordinate>) {
    for &(dx, dy) in dirs {
        for step in 1..8 {
            ends.push(start.offset(dx * step, dy * step));
        }
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
