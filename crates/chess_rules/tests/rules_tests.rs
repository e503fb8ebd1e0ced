//! Tests for move legality
//!
//! Covers check and checkmate detection, pins, castling, and en passant,
//! each driven from a FEN position.

use chess_rules::{Color, Coordinate, Game, PieceKind};

fn load(fen: &str) -> Game {
    let mut game = Game::new();
    game.set_fen(fen).expect("test FEN should parse");
    game
}

fn at(text: &str) -> Coordinate {
    Coordinate::from_algebraic(text).unwrap()
}

// =============================================================================
// Check and Checkmate Tests
// =============================================================================

#[test]
fn test_fools_mate_is_checkmate() {
    // After 1.f3 e5 2.g4 Qh4#
    let game = load("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");

    assert!(game.in_check(Color::White));
    assert!(game.in_checkmate(Color::White));
    assert!(!game.in_checkmate(Color::Black));
    assert!(game.all_legal_moves(Color::White).is_empty());
}

#[test]
fn test_check_is_not_checkmate() {
    // Queen gives check on h5; Black can block or step aside
    let game = load("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");

    assert!(game.in_check(Color::Black));
    assert!(!game.in_checkmate(Color::Black));
    assert!(!game.all_legal_moves(Color::Black).is_empty());
}

#[test]
fn test_check_evasion_only_moves() {
    // White king on e1 faces the rook on e8; only the blocking or
    // sidestepping replies survive.
    let game = load("4r1k1/8/8/8/8/8/3Q4/4K3 w - - 0 1");

    assert!(game.in_check(Color::White));
    let king_moves = game.legal_moves(at("e1"));
    assert!(!king_moves.contains(&at("e2")), "e2 stays on the rook's file");
    assert!(king_moves.contains(&at("d1")));
    assert!(king_moves.contains(&at("f1")));

    // The queen may interpose on the e-file but not wander off.
    let queen_moves = game.legal_moves(at("d2"));
    assert!(queen_moves.contains(&at("e2")));
    assert!(queen_moves.contains(&at("e3")));
    assert!(!queen_moves.contains(&at("a5")));
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Bishop on e2 shields the king from the rook on e8.
    let game = load("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");

    assert!(!game.in_check(Color::White));
    assert!(
        game.legal_moves(at("e2")).is_empty(),
        "a pinned bishop has no legal moves off the file"
    );
}

#[test]
fn test_pinned_slider_may_slide_along_the_pin() {
    // A rook pinned on a file can still move along that file.
    let game = load("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");

    let moves = game.legal_moves(at("e2"));
    assert!(moves.contains(&at("e5")));
    assert!(moves.contains(&at("e8")), "capturing the pinner is legal");
    assert!(!moves.contains(&at("a2")), "leaving the file exposes the king");
}

// =============================================================================
// Castling Tests
// =============================================================================

#[test]
fn test_castling_both_sides_available() {
    let mut game = load("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");

    let king_moves = game.legal_moves(at("e1"));
    assert!(king_moves.contains(&at("h1")), "kingside request targets h1");
    assert!(king_moves.contains(&at("a1")), "queenside request targets a1");

    // Castle kingside: king to g1, rook to f1.
    assert!(game.make_move(at("e1"), at("h1"), true));
    assert_eq!(game.board.get(at("g1")).unwrap().kind, PieceKind::King);
    assert_eq!(game.board.get(at("f1")).unwrap().kind, PieceKind::Rook);
    assert!(game.board.get(at("e1")).is_none());
    assert!(game.board.get(at("h1")).is_none());
    assert_eq!(game.side_to_move, Color::Black);
}

#[test]
fn test_castle_queenside() {
    let mut game = load("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");

    assert!(game.make_move(at("e8"), at("a8"), true));
    assert_eq!(game.board.get(at("c8")).unwrap().kind, PieceKind::King);
    assert_eq!(game.board.get(at("d8")).unwrap().kind, PieceKind::Rook);
    assert!(game.board.get(at("b8")).is_none());
}

#[test]
fn test_castling_blocked_by_corridor_pieces() {
    let game = Game::new();
    assert!(!game.can_castle(at("e1"), at("h1")), "f1 and g1 are occupied");
    assert!(!game.can_castle(at("e1"), at("a1")));
}

#[test]
fn test_castling_through_attacked_square_rejected() {
    // Black rook on f2 covers f1, the king's first transit square.
    let game = load("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1");

    assert!(!game.can_castle(at("e1"), at("h1")));
    assert!(game.can_castle(at("e1"), at("a1")), "queenside transit is clear");
}

#[test]
fn test_castling_while_in_check_rejected() {
    let game = load("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1");

    assert!(game.in_check(Color::White));
    assert!(!game.can_castle(at("e1"), at("h1")));
    assert!(!game.can_castle(at("e1"), at("a1")));
}

#[test]
fn test_castling_rights_lost_after_king_moves() {
    let mut game = load("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");

    assert!(game.make_move(at("e1"), at("d1"), true));
    assert!(game.make_move(at("a7"), at("a6"), true));
    assert!(game.make_move(at("d1"), at("e1"), true));
    assert!(game.make_move(at("a6"), at("a5"), true));

    assert!(!game.can_castle(at("e1"), at("h1")), "the king has moved");
    assert!(game.can_castle(at("e8"), at("h8")), "Black's rights survive");
    assert!(game.get_fen().contains(" kq "), "FEN reflects the lost rights");
}

// =============================================================================
// En Passant Tests
// =============================================================================

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut game = Game::new();
    assert!(game.make_move(at("e2"), at("e4"), true));

    assert_eq!(game.en_passant_target, Some(at("e3")));
    assert!(game.get_fen().contains(" e3 "));

    // Any reply that is not an en-passant capture clears it.
    assert!(game.make_move(at("g8"), at("f6"), true));
    assert_eq!(game.en_passant_target, None);
}

#[test]
fn test_en_passant_capture_removes_the_double_pusher() {
    let mut game = Game::new();
    game.make_move(at("e2"), at("e4"), true);
    game.make_move(at("a7"), at("a6"), true);
    game.make_move(at("e4"), at("e5"), true);
    game.make_move(at("d7"), at("d5"), true);
    assert_eq!(game.en_passant_target, Some(at("d6")));

    assert!(game.legal_moves(at("e5")).contains(&at("d6")));
    assert!(game.make_move(at("e5"), at("d6"), true));

    assert!(game.board.get(at("d5")).is_none(), "the pushed pawn is gone");
    assert_eq!(game.board.get(at("d6")).unwrap().kind, PieceKind::Pawn);
    assert_eq!(game.captures[Color::White.idx()].len(), 1);
    assert_eq!(game.halfmove_clock, 0);
}

#[test]
fn test_en_passant_window_closes_after_one_move() {
    let mut game = Game::new();
    game.make_move(at("e2"), at("e4"), true);
    game.make_move(at("a7"), at("a6"), true);
    game.make_move(at("e4"), at("e5"), true);
    game.make_move(at("d7"), at("d5"), true);

    // White declines the capture.
    game.make_move(at("b1"), at("c3"), true);
    game.make_move(at("a6"), at("a5"), true);

    assert_eq!(game.en_passant_target, None);
    assert!(
        !game.legal_moves(at("e5")).contains(&at("d6")),
        "the capture is gone once the window closes"
    );
}

// =============================================================================
// Pawn Movement Tests
// =============================================================================

#[test]
fn test_pawn_cannot_capture_straight_ahead() {
    let mut game = Game::new();
    game.make_move(at("e2"), at("e4"), true);
    game.make_move(at("e7"), at("e5"), true);

    assert!(!game.legal_moves(at("e4")).contains(&at("e5")));
    assert!(!game.make_move(at("e4"), at("e5"), true));
}

#[test]
fn test_pawn_double_push_only_from_home_rank() {
    let mut game = Game::new();
    game.make_move(at("e2"), at("e3"), true);
    game.make_move(at("a7"), at("a6"), true);

    assert!(!game.legal_moves(at("e3")).contains(&at("e5")));
}

#[test]
fn test_pawn_double_push_blocked_by_interposed_piece() {
    let game = load("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");

    let moves = game.legal_moves(at("e2"));
    assert!(!moves.contains(&at("e3")), "the knight sits on e3");
    assert!(!moves.contains(&at("e4")), "the double push is blocked too");
}
