//! Mutable chess rules engine: board state, legality, FEN, and history.
//!
//! The entry point is [`Game`]. It owns a mailbox [`Board`], tracks whose
//! turn it is, and exposes the mutation surface (`make_move`, `promote`,
//! `set_fen`) alongside the query surface (`legal_moves`, `in_checkmate`,
//! `get_fen`). [`GameLog`] layers snapshot-based undo on top.

pub mod board;
pub mod coord;
pub mod error;
pub mod game;
pub mod history;
pub mod piece;
pub mod squareset;
pub mod uci;

pub use board::Board;
pub use coord::Coordinate;
pub use error::FenError;
pub use game::{Game, STARTING_FEN};
pub use history::GameLog;
pub use piece::{Color, PathValidity, Piece, PieceKind};
pub use squareset::SquareSet;
pub use uci::{move_text, parse_move_text};
