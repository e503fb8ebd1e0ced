//! Move-text helpers for talking to a UCI engine.
//!
//! The engine subprocess itself lives outside this crate; callers feed it
//! `get_fen()` output and hand its `bestmove` replies (`e2e4`, `e7e8q`)
//! back through these parsers.

use crate::coord::Coordinate;
use crate::piece::PieceKind;

/// Parse engine move text into coordinates plus an optional promotion kind.
pub fn parse_move_text(text: &str) -> Option<(Coordinate, Coordinate, Option<PieceKind>)> {
    if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
        return None;
    }
    let from = Coordinate::from_algebraic(&text[0..2])?;
    let to = Coordinate::from_algebraic(&text[2..4])?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b) => Some(match b.to_ascii_lowercase() {
            b'q' => PieceKind::Queen,
            b'r' => PieceKind::Rook,
            b'b' => PieceKind::Bishop,
            b'n' => PieceKind::Knight,
            _ => return None,
        }),
    };
    Some((from, to, promotion))
}

/// Format a move the way UCI engines expect it.
pub fn move_text(from: Coordinate, to: Coordinate, promotion: Option<PieceKind>) -> String {
    let mut out = String::new();
    out.push_str(&from.to_algebraic());
    out.push_str(&to.to_algebraic());
    if let Some(kind) = promotion {
        out.push(match kind {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        });
    }
    out
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
