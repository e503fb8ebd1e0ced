use tracing::{debug, trace};

use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::FenError;
use crate::piece::{Color, DIAG_DIRS, ORTHO_DIRS, Piece, PieceKind};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The four rook home corners, the destinations a castling request names.
const CORNERS: [Coordinate; 4] = [
    Coordinate::new(0, 0),
    Coordinate::new(7, 0),
    Coordinate::new(0, 7),
    Coordinate::new(7, 7),
];

/// A full game position: board, turn, en-passant state, clocks, and the
/// pieces each side has captured.
///
/// `Game` is the unit of "position". Cloning produces a deep, unaliased
/// snapshot; the clone is what legality simulation mutates and what history
/// logs keep. Snapshots are also the supported way to inspect a game from
/// another thread: clone, then inspect the clone.
#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub side_to_move: Color,
    /// Square a pawn skipped with its last double step, capturable en
    /// passant by the reply move only.
    pub en_passant_target: Option<Coordinate>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// Captured pieces, indexed by the capturing color.
    pub captures: [Vec<Piece>; 2],
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A fresh game in the standard starting position.
    pub fn new() -> Game {
        Game {
            board: Board::standard(),
            side_to_move: Color::White,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            captures: [Vec::new(), Vec::new()],
        }
    }

    /// Every legal destination for the piece on `from` (empty if the square
    /// is empty). Answers for the occupant's color regardless of whose turn
    /// it is, so state pollers can ask about either side.
    pub fn legal_moves(&self, from: Coordinate) -> Vec<Coordinate> {
        if !from.in_bounds() {
            return Vec::new();
        }
        let Some(piece) = self.board.get(from) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        match piece.kind {
            PieceKind::Rook => self.slider_moves(from, piece, &ORTHO_DIRS, &mut out),
            PieceKind::Bishop => self.slider_moves(from, piece, &DIAG_DIRS, &mut out),
            PieceKind::Queen => {
                self.slider_moves(from, piece, &ORTHO_DIRS, &mut out);
                self.slider_moves(from, piece, &DIAG_DIRS, &mut out);
            }
            _ => {
                for to in piece.candidate_ends(from) {
                    let (ok, _) = self.board.can_move(from, to, self.en_passant_target);
                    if ok && self.move_is_safe(from, to, piece) {
                        out.push(to);
                    }
                }
                if piece.kind == PieceKind::King {
                    // Castling is requested by targeting the rook's corner.
                    for corner in CORNERS {
                        if self.can_castle(from, corner) {
                            out.push(corner);
                        }
                    }
                }
            }
        }
        out
    }

    /// Slider destinations, bucketed by direction. Outside of check the
    /// safety verdict is constant along a ray (a pin either forbids the
    /// whole ray or none of it), so one simulation per direction suffices
    /// and the rest get the cheap `can_move` filter. In check, every
    /// candidate is simulated; interpositions are square-specific.
    fn slider_moves(
        &self,
        from: Coordinate,
        piece: Piece,
        dirs: &[(i8, i8)],
        out: &mut Vec<Coordinate>,
    ) {
        let checked = self.in_check(piece.color);
        for &(dx, dy) in dirs {
            let mut verdict: Option<bool> = None;
            for step in 1..8 {
                let to = from.offset(dx * step, dy * step);
                if !to.in_bounds() {
                    break;
                }
                let (ok, is_capture) = self.board.can_move(from, to, None);
                if !ok {
                    // Along a clear ray the only refusal is a same-color
                    // blocker; nothing past it is reachable either.
                    break;
                }
                let safe = if checked {
                    self.move_is_safe(from, to, piece)
                } else {
                    *verdict.get_or_insert_with(|| self.move_is_safe(from, to, piece))
                };
                if safe {
                    out.push(to);
                }
                if is_capture {
                    break;
                }
            }
        }
    }

    /// `legal_moves` for every occupied square of `color` that has at least
    /// one destination.
    pub fn all_legal_moves(&self, color: Color) -> Vec<(Coordinate, Vec<Coordinate>)> {
        let mut out = Vec::new();
        for y in 0..8 {
            for x in 0..8 {
                let from = Coordinate::new(x, y);
                if let Some(piece) = self.board.get(from)
                    && piece.color == color
                {
                    let moves = self.legal_moves(from);
                    if !moves.is_empty() {
                        out.push((from, moves));
                    }
                }
            }
        }
        out
    }

    fn has_any_legal_move(&self, color: Color) -> bool {
        for y in 0..8 {
            for x in 0..8 {
                let from = Coordinate::new(x, y);
                if let Some(piece) = self.board.get(from)
                    && piece.color == color
                    && !self.legal_moves(from).is_empty()
                {
                    return true;
                }
            }
        }
        false
    }

    /// Play the move on a full copy and see whether our own king ends up
    /// attacked.
    fn move_is_safe(&self, from: Coordinate, to: Coordinate, piece: Piece) -> bool {
        let mut copy = self.clone();
        copy.board.move_piece(from, to);
        if piece.kind == PieceKind::Pawn && Some(to) == self.en_passant_target {
            // The en-passant victim sits behind the destination square.
            let behind = to.offset(0, -piece.color.forward());
            if behind.in_bounds() {
                copy.board.set(behind, None);
            }
        }
        copy.board.update_attacked_squares();
        match copy.board.find_king(piece.color) {
            Some(king) => !copy.board.is_attacked(king, piece.color),
            None => true,
        }
    }

    /// Attempt a move for the side to move. Returns false and leaves the
    /// game untouched on any rejection.
    ///
    /// Dropping the king onto its own corner rook requests castling. A pawn
    /// reaching the back rank becomes a queen when `auto_promote` is set;
    /// otherwise it stays a pawn for a later `promote` call.
    pub fn make_move(&mut self, from: Coordinate, to: Coordinate, auto_promote: bool) -> bool {
        if !from.in_bounds() || !to.in_bounds() {
            return false;
        }
        let Some(piece) = self.board.get(from) else {
            return false;
        };
        if piece.color != self.side_to_move {
            trace!(%from, %to, "move out of turn rejected");
            return false;
        }

        if piece.kind == PieceKind::King
            && let Some(target) = self.board.get(to)
            && target.color == piece.color
            && target.kind == PieceKind::Rook
        {
            if !self.can_castle(from, to) {
                trace!(%from, %to, "castling rejected");
                return false;
            }
            self.castle(from, to);
            self.en_passant_target = None;
            self.halfmove_clock += 1;
            self.finish_turn();
            return true;
        }

        let (ok, is_capture) = self.board.can_move(from, to, self.en_passant_target);
        if !ok || !self.move_is_safe(from, to, piece) {
            trace!(%from, %to, "illegal move rejected");
            return false;
        }

        let mut captured = self.board.move_piece(from, to);
        if piece.kind == PieceKind::Pawn
            && captured.is_none()
            && Some(to) == self.en_passant_target
        {
            let behind = to.offset(0, -piece.color.forward());
            captured = self.board.get(behind);
            self.board.set(behind, None);
        }
        if let Some(victim) = captured {
            self.captures[piece.color.idx()].push(victim);
        }

        // The reply may capture en passant only after a double pawn push.
        self.en_passant_target =
            if piece.kind == PieceKind::Pawn && (to.y - from.y).abs() == 2 {
                Some(Coordinate::new(from.x, (from.y + to.y) / 2))
            } else {
                None
            };

        let back_rank = match piece.color {
            Color::White => 7,
            Color::Black => 0,
        };
        if auto_promote && piece.kind == PieceKind::Pawn && to.y == back_rank {
            self.board.set(
                to,
                Some(Piece {
                    color: piece.color,
                    kind: PieceKind::Queen,
                    has_moved: true,
                }),
            );
        }

        self.halfmove_clock = if is_capture || piece.kind == PieceKind::Pawn {
            0
        } else {
            self.halfmove_clock + 1
        };
        self.finish_turn();
        true
    }

    fn finish_turn(&mut self) {
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();
        self.board.update_attacked_squares();
    }

    /// May the king on `king_from` castle with its rook on `rook_to`?
    /// Requires an unmoved king/rook pair (the FEN castling letter), no
    /// current check, an empty corridor, and an unattacked king transit.
    pub fn can_castle(&self, king_from: Coordinate, rook_to: Coordinate) -> bool {
        if !king_from.in_bounds() || !CORNERS.contains(&rook_to) {
            return false;
        }
        let Some(king) = self.board.get(king_from) else {
            return false;
        };
        let Some(rook) = self.board.get(rook_to) else {
            return false;
        };
        if king.kind != PieceKind::King
            || rook.kind != PieceKind::Rook
            || king.color != rook.color
            || king.has_moved
            || rook.has_moved
            || king_from.y != rook_to.y
        {
            return false;
        }
        if self.in_check(king.color) {
            return false;
        }

        let dir: i8 = if rook_to.x > king_from.x { 1 } else { -1 };

        // Corridor between king and rook must be empty.
        let mut x = king_from.x + dir;
        while x != rook_to.x {
            if self.board.get(Coordinate::new(x, king_from.y)).is_some() {
                return false;
            }
            x += dir;
        }
        // The king's transit squares must not be attacked.
        for step in 1..=2 {
            let square = Coordinate::new(king_from.x + dir * step, king_from.y);
            if self.board.is_attacked(square, king.color) {
                return false;
            }
        }
        true
    }

    /// Relocate king and rook for castling: king two squares toward the
    /// rook, rook onto the square the king crossed. No validation; callers
    /// go through `can_castle` first.
    pub fn castle(&mut self, king_from: Coordinate, rook_to: Coordinate) {
        let dir: i8 = if rook_to.x > king_from.x { 1 } else { -1 };
        let king_to = Coordinate::new(king_from.x + 2 * dir, king_from.y);
        let rook_dest = Coordinate::new(king_from.x + dir, king_from.y);
        self.board.move_piece(king_from, king_to);
        self.board.move_piece(rook_to, rook_dest);
    }

    /// Replace the pawn on `at` with a new piece of `kind`. Rejects king
    /// and pawn targets and non-pawn sources without mutating anything.
    pub fn promote(&mut self, at: Coordinate, kind: PieceKind) -> bool {
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return false;
        }
        if !at.in_bounds() {
            return false;
        }
        let Some(piece) = self.board.get(at) else {
            return false;
        };
        if piece.kind != PieceKind::Pawn {
            return false;
        }
        self.board.set(
            at,
            Some(Piece {
                color: piece.color,
                kind,
                has_moved: true,
            }),
        );
        self.board.update_attacked_squares();
        true
    }

    pub fn in_check(&self, color: Color) -> bool {
        match self.board.find_king(color) {
            Some(king) => self.board.is_attacked(king, color),
            None => false,
        }
    }

    pub fn in_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_any_legal_move(color)
    }

    /// Drawn position: the side to move has no legal move while not in
    /// check, the fifty-move rule applies, or mating material is gone.
    pub fn in_stalemate(&self) -> bool {
        (!self.in_check(self.side_to_move) && !self.has_any_legal_move(self.side_to_move))
            || self.is_fifty_move_draw()
            || self.is_insufficient_material()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// K vs K, K+B vs K, K+N vs K, and K+B vs K+B with both bishops on the
    /// same square color. Anything else counts as mating material.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: [Vec<(PieceKind, bool)>; 2] = [Vec::new(), Vec::new()];
        for y in 0..8 {
            for x in 0..8 {
                let Some(piece) = self.board.get(Coordinate::new(x, y)) else {
                    continue;
                };
                match piece.kind {
                    PieceKind::King => {}
                    PieceKind::Bishop | PieceKind::Knight => {
                        let dark = (x + y) % 2 == 0;
                        minors[piece.color.idx()].push((piece.kind, dark));
                    }
                    // A pawn, rook, or queen can still mate.
                    _ => return false,
                }
            }
        }
        match (minors[0].as_slice(), minors[1].as_slice()) {
            ([], []) => true,
            ([_], []) | ([], [_]) => true,
            ([(PieceKind::Bishop, a)], [(PieceKind::Bishop, b)]) => a == b,
            _ => false,
        }
    }

    /// The full 6-field FEN for this position.
    pub fn get_fen(&self) -> String {
        let mut fen = self.board.placement_fen();
        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        fen.push(' ');
        let rights = self.castling_field();
        fen.push_str(&rights);
        fen.push(' ');
        match self.en_passant_target {
            Some(square) => fen.push_str(&square.to_algebraic()),
            None => fen.push('-'),
        }
        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    /// Castling availability, derived from king/rook `has_moved` flags.
    fn castling_field(&self) -> String {
        let mut out = String::new();
        for (color, letters) in [(Color::White, ['K', 'Q']), (Color::Black, ['k', 'q'])] {
            for (letter, corner_x) in letters.into_iter().zip([7, 0]) {
                if castling_available(&self.board, color, corner_x) {
                    out.push(letter);
                }
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }

    /// Load a full 6-field FEN, replacing the entire game state. The
    /// castling field is cross-checked against the placement: a letter
    /// without its unmoved king/rook pair is an error, and an absent letter
    /// marks the corresponding rook as moved so the rights survive a
    /// round trip.
    pub fn set_fen(&mut self, text: &str) -> Result<(), FenError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::FieldCount(text.to_string()));
        }

        let mut board = Board::from_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::SideToMove(text.to_string())),
        };

        let mut rights = [false; 4]; // K, Q, k, q
        if fields[2] != "-" {
            for ch in fields[2].chars() {
                let slot = match ch {
                    'K' => 0,
                    'Q' => 1,
                    'k' => 2,
                    'q' => 3,
                    _ => return Err(FenError::Castling(text.to_string())),
                };
                rights[slot] = true;
            }
        }
        let sides = [
            (Color::White, 7),
            (Color::White, 0),
            (Color::Black, 7),
            (Color::Black, 0),
        ];
        for (slot, (color, corner_x)) in sides.into_iter().enumerate() {
            let available = castling_available(&board, color, corner_x);
            if rights[slot] && !available {
                return Err(FenError::CastlingMismatch(text.to_string()));
            }
            if !rights[slot] && available {
                let corner = Coordinate::new(corner_x, home_rank(color));
                if let Some(mut rook) = board.get(corner) {
                    rook.has_moved = true;
                    board.set(corner, Some(rook));
                }
            }
        }

        let en_passant_target = match fields[3] {
            "-" => None,
            square => Some(
                Coordinate::from_algebraic(square)
                    .ok_or_else(|| FenError::EnPassant(text.to_string()))?,
            ),
        };

        let halfmove_clock: u32 = fields[4]
            .parse()
            .map_err(|_| FenError::Clock(text.to_string()))?;
        let fullmove_number: u32 = fields[5]
            .parse()
            .map_err(|_| FenError::Clock(text.to_string()))?;

        self.board = board;
        self.side_to_move = side_to_move;
        self.en_passant_target = en_passant_target;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self.captures = [Vec::new(), Vec::new()];
        debug!(fen = text, "position loaded");
        Ok(())
    }
}

fn home_rank(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// An unmoved king on its home square plus an unmoved rook in the corner.
fn castling_available(board: &Board, color: Color, corner_x: i8) -> bool {
    let rank = home_rank(color);
    let king_ok = matches!(
        board.get(Coordinate::new(4, rank)),
        Some(k) if k.kind == PieceKind::King && k.color == color && !k.has_moved
    );
    let rook_ok = matches!(
        board.get(Coordinate::new(corner_x, rank)),
        Some(r) if r.kind == PieceKind::Rook && r.color == color && !r.has_moved
    );
    king_ok && rook_ok
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
