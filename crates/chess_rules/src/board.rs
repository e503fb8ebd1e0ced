use crate::coord::Coordinate;
use crate::error::FenError;
use crate::piece::{Color, DIAG_DIRS, ORTHO_DIRS, PathValidity, Piece, PieceKind};
use crate::squareset::SquareSet;

type Grid = [[Option<Piece>; 8]; 8];

/// The 8x8 grid plus one attacked-square set per color.
///
/// The board validates geometry and occupancy (`can_move`) separately from
/// applying a move (`move_piece`); the split lets `Game` wrap side effects
/// like en-passant removal and the castling rook hop around one primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid, // grid[rank][file]
    attacked: [SquareSet; 2],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            attacked: [SquareSet::EMPTY; 2],
        }
    }

    /// The standard starting arrangement.
    pub fn standard() -> Board {
        let mut board = Board {
            grid: standard_grid(),
            attacked: [SquareSet::EMPTY; 2],
        };
        board.update_attacked_squares();
        board
    }

    pub fn get(&self, at: Coordinate) -> Option<Piece> {
        debug_assert!(at.in_bounds(), "board read off the board: {at}");
        self.grid[at.y as usize][at.x as usize]
    }

    pub fn set(&mut self, at: Coordinate, piece: Option<Piece>) {
        debug_assert!(at.in_bounds(), "board write off the board: {at}");
        self.grid[at.y as usize][at.x as usize] = piece;
    }

    /// Check whether the piece on `from` may move to `to`, given the board
    /// as it stands. `pseudo_capture` is a square treated as capturable even
    /// though empty (the en-passant target).
    ///
    /// Returns `(allowed, is_capture)`.
    pub fn can_move(
        &self,
        from: Coordinate,
        to: Coordinate,
        pseudo_capture: Option<Coordinate>,
    ) -> (bool, bool) {
        if !from.in_bounds() || !to.in_bounds() {
            return (false, false);
        }
        let Some(piece) = self.get(from) else {
            return (false, false);
        };
        let validity = piece.path_validity(from, to);
        if validity == PathValidity::Invalid {
            return (false, false);
        }

        let dest = self.get(to);
        if let Some(occupant) = dest
            && occupant.color == piece.color
        {
            return (false, false);
        }

        // Every square strictly between source and destination must be empty.
        let path = piece.path(from, to);
        for square in &path[..path.len() - 1] {
            if self.get(*square).is_some() {
                return (false, false);
            }
        }

        match validity {
            PathValidity::MoveOnly => {
                if dest.is_some() {
                    (false, false)
                } else {
                    (true, false)
                }
            }
            PathValidity::CaptureOnly => {
                // dest, if present, is an enemy piece at this point.
                if dest.is_some() {
                    (true, true)
                } else if pseudo_capture == Some(to) {
                    (true, true)
                } else {
                    (false, false)
                }
            }
            _ => (true, dest.is_some()),
        }
    }

    /// Relocate whatever sits on `from` to `to`, returning any captured
    /// piece. No legality checks; callers go through `can_move` first.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        let Some(mut piece) = self.get(from) else {
            return None;
        };
        let captured = self.get(to);
        piece.has_moved = true;
        self.set(to, Some(piece));
        self.set(from, None);
        captured
    }

    /// Recompute the full attacked-square set for both colors. Must run
    /// after every successful mutation; check detection and castling-path
    /// safety read these sets.
    pub fn update_attacked_squares(&mut self) {
        let mut attacked = [SquareSet::EMPTY; 2];
        for y in 0..8 {
            for x in 0..8 {
                let from = Coordinate::new(x, y);
                let Some(piece) = self.get(from) else {
                    continue;
                };
                let set = &mut attacked[piece.color.idx()];
                match piece.kind {
                    // A pawn attacks only its two forward diagonals, never
                    // the squares it pushes to.
                    PieceKind::Pawn => {
                        for dx in [-1, 1] {
                            let to = from.offset(dx, piece.color.forward());
                            if to.in_bounds() {
                                set.insert(to);
                            }
                        }
                    }
                    PieceKind::Knight | PieceKind::King => {
                        for to in piece.candidate_ends(from) {
                            set.insert(to);
                        }
                    }
                    PieceKind::Rook => self.project_rays(from, &ORTHO_DIRS, set),
                    PieceKind::Bishop => self.project_rays(from, &DIAG_DIRS, set),
                    PieceKind::Queen => {
                        self.project_rays(from, &ORTHO_DIRS, set);
                        self.project_rays(from, &DIAG_DIRS, set);
                    }
                }
            }
        }
        self.attacked = attacked;
    }

    /// Sliding attacks stop at the first occupied square, inclusive.
    fn project_rays(&self, from: Coordinate, dirs: &[(i8, i8)], set: &mut SquareSet) {
        for &(dx, dy) in dirs {
            let mut cur = from.offset(dx, dy);
            while cur.in_bounds() {
                set.insert(cur);
                if self.get(cur).is_some() {
                    break;
                }
                cur = cur.offset(dx, dy);
            }
        }
    }

    /// Is `at` attacked by the opponent of `defending`? Reads the sets from
    /// the last `update_attacked_squares` call.
    pub fn is_attacked(&self, at: Coordinate, defending: Color) -> bool {
        self.attacked[defending.other().idx()].contains(at)
    }

    pub fn attacked_squares(&self, by: Color) -> SquareSet {
        self.attacked[by.idx()]
    }

    pub fn find_king(&self, color: Color) -> Option<Coordinate> {
        for y in 0..8 {
            for x in 0..8 {
                let at = Coordinate::new(x, y);
                if let Some(piece) = self.get(at)
                    && piece.color == color
                    && piece.kind == PieceKind::King
                {
                    return Some(at);
                }
            }
        }
        None
    }

    /// Encode the piece-placement FEN field (rank 8 first, digit runs for
    /// empty squares).
    pub fn placement_fen(&self) -> String {
        let mut out = String::new();
        for y in (0..8).rev() {
            let mut run = 0u32;
            for x in 0..8 {
                match self.grid[y as usize][x as usize] {
                    None => run += 1,
                    Some(piece) => {
                        if run > 0 {
                            out.push(char::from_digit(run, 10).unwrap());
                            run = 0;
                        }
                        out.push(piece.kind.fen_char(piece.color));
                    }
                }
            }
            if run > 0 {
                out.push(char::from_digit(run, 10).unwrap());
            }
            if y > 0 {
                out.push('/');
            }
        }
        out
    }

    /// Decode a piece-placement FEN field.
    ///
    /// FEN carries no per-piece move history, so `has_moved` is
    /// reconstructed by diffing against the standard start: any occupied
    /// square whose occupant differs from the starting arrangement is
    /// marked moved.
    pub fn from_placement(text: &str) -> Result<Board, FenError> {
        let err = |reason| FenError::Placement {
            text: text.to_string(),
            reason,
        };

        let mut board = Board::empty();
        let ranks: Vec<&str> = text.split('/').collect();
        if ranks.len() != 8 {
            return Err(err("expected 8 ranks"));
        }

        for (i, rank_text) in ranks.iter().enumerate() {
            let y = 7 - i as i8; // FEN lists rank 8 first
            let mut x: i8 = 0;
            for ch in rank_text.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 {
                        return Err(err("zero-length empty run"));
                    }
                    x += d as i8;
                } else {
                    let (color, kind) = PieceKind::from_fen_char(ch)
                        .ok_or_else(|| err("unrecognized piece letter"))?;
                    if x >= 8 {
                        return Err(err("too many files in rank"));
                    }
                    board.set(Coordinate::new(x, y), Some(Piece::fresh(color, kind)));
                    x += 1;
                }
                if x > 8 {
                    return Err(err("too many files in rank"));
                }
            }
            if x != 8 {
                return Err(err("rank does not span 8 files"));
            }
        }

        let start = standard_grid();
        for y in 0..8 {
            for x in 0..8 {
                if let Some(piece) = &mut board.grid[y][x] {
                    piece.has_moved = start[y][x]
                        .is_none_or(|s| s.color != piece.color || s.kind != piece.kind);
                }
            }
        }

        board.update_attacked_squares();
        Ok(board)
    }
}

fn standard_grid() -> Grid {
    let mut grid: Grid = [[None; 8]; 8];
    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (x, &kind) in back.iter().enumerate() {
        grid[0][x] = Some(Piece::fresh(Color::White, kind));
        grid[7][x] = Some(Piece::fresh(Color::Black, kind));
        grid[1][x] = Some(Piece::fresh(Color::White, PieceKind::Pawn));
        grid[6][x] = Some(Piece::fresh(Color::Black, PieceKind::Pawn));
    }
    grid
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
