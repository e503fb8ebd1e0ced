use super::*;

fn at(text: &str) -> Coordinate {
    Coordinate::from_algebraic(text).unwrap()
}

#[test]
fn test_parse_plain_move() {
    assert_eq!(parse_move_text("e2e4"), Some((at("e2"), at("e4"), None)));
    assert_eq!(parse_move_text("g8f6"), Some((at("g8"), at("f6"), None)));
}

#[test]
fn test_parse_promotion_suffix() {
    assert_eq!(
        parse_move_text("e7e8q"),
        Some((at("e7"), at("e8"), Some(PieceKind::Queen)))
    );
    assert_eq!(
        parse_move_text("a2a1N"),
        Some((at("a2"), at("a1"), Some(PieceKind::Knight)))
    );
}

#[test]
fn test_parse_rejects_malformed_text() {
    assert_eq!(parse_move_text(""), None);
    assert_eq!(parse_move_text("e2"), None);
    assert_eq!(parse_move_text("e2e9"), None);
    assert_eq!(parse_move_text("e2e4x"), None);
    assert_eq!(parse_move_text("e2e4qq"), None);
}

#[test]
fn test_move_text_round_trip() {
    let text = move_text(at("e7"), at("e8"), Some(PieceKind::Rook));
    assert_eq!(text, "e7e8r");
    assert_eq!(
        parse_move_text(&text),
        Some((at("e7"), at("e8"), Some(PieceKind::Rook)))
    );
    assert_eq!(move_text(at("b1"), at("c3"), None), "b1c3");
}
