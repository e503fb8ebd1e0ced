use thiserror::Error;

/// Invalid position text. Every variant carries the offending string;
/// parsing never silently repairs its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("invalid FEN `{0}`: expected 6 fields")]
    FieldCount(String),

    #[error("invalid piece placement `{text}`: {reason}")]
    Placement { text: String, reason: &'static str },

    #[error("invalid FEN `{0}`: bad side-to-move field")]
    SideToMove(String),

    #[error("invalid FEN `{0}`: bad castling availability field")]
    Castling(String),

    #[error("invalid FEN `{0}`: castling rights contradict piece placement")]
    CastlingMismatch(String),

    #[error("invalid FEN `{0}`: bad en passant field")]
    EnPassant(String),

    #[error("invalid FEN `{0}`: bad clock field")]
    Clock(String),
}
