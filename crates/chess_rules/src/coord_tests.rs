use super::*;

#[test]
fn test_algebraic_parse() {
    assert_eq!(Coordinate::from_algebraic("a1"), Some(Coordinate::new(0, 0)));
    assert_eq!(Coordinate::from_algebraic("e4"), Some(Coordinate::new(4, 3)));
    assert_eq!(Coordinate::from_algebraic("h8"), Some(Coordinate::new(7, 7)));
}

#[test]
fn test_algebraic_rejects_garbage() {
    assert_eq!(Coordinate::from_algebraic(""), None);
    assert_eq!(Coordinate::from_algebraic("e"), None);
    assert_eq!(Coordinate::from_algebraic("e44"), None);
    assert_eq!(Coordinate::from_algebraic("i1"), None);
    assert_eq!(Coordinate::from_algebraic("a9"), None);
    assert_eq!(Coordinate::from_algebraic("4e"), None);
}

#[test]
fn test_algebraic_round_trip() {
    for x in 0..8 {
        for y in 0..8 {
            let c = Coordinate::new(x, y);
            assert_eq!(Coordinate::from_algebraic(&c.to_algebraic()), Some(c));
        }
    }
}

#[test]
fn test_in_bounds() {
    assert!(Coordinate::new(0, 0).in_bounds());
    assert!(Coordinate::new(7, 7).in_bounds());
    assert!(!Coordinate::new(-1, 0).in_bounds());
    assert!(!Coordinate::new(0, 8).in_bounds());
    assert!(!Coordinate::new(8, 3).in_bounds());
}

#[test]
fn test_offset_may_leave_board() {
    // Transient off-board values are allowed; callers cull them.
    let c = Coordinate::new(0, 0).offset(-2, 1);
    assert_eq!(c, Coordinate::new(-2, 1));
    assert!(!c.in_bounds());
}

#[test]
fn test_serde_round_trip() {
    let c = Coordinate::new(4, 3);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(serde_json::from_str::<Coordinate>(&json).unwrap(), c);
}
