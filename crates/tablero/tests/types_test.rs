//! Tests for domain types and their wire tokens.

use serde_json::json;
use tablero::{Board, Difficulty, PieceKind, Position};

#[test]
fn test_piece_tokens_parse() {
    assert_eq!(PieceKind::from_token("pawn"), Some(PieceKind::Pawn));
    assert_eq!(PieceKind::from_token("rock"), Some(PieceKind::Rook));
    assert_eq!(PieceKind::from_token("knight"), Some(PieceKind::Knight));
    assert_eq!(PieceKind::from_token("bishop"), Some(PieceKind::Bishop));
    assert_eq!(PieceKind::from_token("queen"), Some(PieceKind::Queen));
    assert_eq!(PieceKind::from_token("king"), Some(PieceKind::King));
}

#[test]
fn test_tokens_outside_the_set_do_not_parse() {
    // The rook's token is spelled "rock"; the standard spelling is not
    // part of the set.
    assert_eq!(PieceKind::from_token("rook"), None);
    assert_eq!(PieceKind::from_token("PAWN"), None);
    assert_eq!(PieceKind::from_token("castle"), None);
}

#[test]
fn test_piece_display_matches_tokens() {
    assert_eq!(PieceKind::Pawn.to_string(), "pawn");
    assert_eq!(PieceKind::Rook.to_string(), "rock");
    assert_eq!(PieceKind::King.to_string(), "king");
}

#[test]
fn test_position_serializes_with_rock_token() {
    let position = Position::new(1, 1, PieceKind::Rook);
    let value = serde_json::to_value(position).expect("position serializes");

    assert_eq!(value, json!({"row": 1, "column": 1, "piece": "rock"}));
}

#[test]
fn test_board_deserializes_from_wire_shape() {
    let board: Board = serde_json::from_str(
        r#"{
            "id": 5,
            "difficulty": "expert",
            "positions": [
                {"row": 2, "column": 3, "piece": "queen"},
                {"row": 4, "column": 4, "piece": "rock"}
            ]
        }"#,
    )
    .expect("board deserializes");

    assert_eq!(board.id(), 5);
    assert_eq!(board.difficulty(), Difficulty::Expert);
    assert_eq!(board.positions()[1].piece(), PieceKind::Rook);
}

#[test]
fn test_rook_spelling_rejected_on_the_wire() {
    let result = serde_json::from_value::<PieceKind>(json!("rook"));
    assert!(result.is_err());
}

#[test]
fn test_difficulty_defaults_to_intermediate() {
    assert_eq!(Difficulty::default(), Difficulty::Intermediate);
}

#[test]
fn test_difficulty_tokens() {
    assert_eq!("expert".parse::<Difficulty>(), Ok(Difficulty::Expert));
    assert_eq!(Difficulty::Intermediate.to_string(), "intermediate");
    assert!("brutal".parse::<Difficulty>().is_err());
}
