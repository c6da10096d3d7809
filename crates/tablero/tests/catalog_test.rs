//! Tests for the board catalog.

use tablero::{Board, BoardCatalog, Difficulty, PieceKind, Position};

#[test]
fn test_standard_catalog_holds_two_boards() {
    let catalog = BoardCatalog::standard();
    assert_eq!(catalog.boards().len(), 2);
}

#[test]
fn test_get_board_one() {
    let catalog = BoardCatalog::standard();
    let board = catalog
        .get(1, Difficulty::Intermediate)
        .expect("board 1 exists");

    assert_eq!(board.id(), 1);
    assert_eq!(board.positions().len(), 5);
    assert!(
        board
            .positions()
            .contains(&Position::new(1, 1, PieceKind::Rook))
    );
}

#[test]
fn test_get_board_two() {
    let catalog = BoardCatalog::standard();
    let board = catalog
        .get(2, Difficulty::Intermediate)
        .expect("board 2 exists");

    assert!(
        board
            .positions()
            .contains(&Position::new(4, 3, PieceKind::Pawn))
    );
}

#[test]
fn test_get_unknown_id_absent() {
    let catalog = BoardCatalog::standard();
    assert_eq!(catalog.get(99, Difficulty::Intermediate), None);
}

#[test]
fn test_get_wrong_difficulty_absent() {
    let catalog = BoardCatalog::standard();
    assert_eq!(catalog.get(1, Difficulty::Easy), None);
    assert_eq!(catalog.get(2, Difficulty::Expert), None);
}

#[test]
fn test_duplicate_entries_are_absent() {
    let duplicated = BoardCatalog::new(vec![
        Board::new(7, Difficulty::Hard, vec![Position::new(1, 1, PieceKind::King)]),
        Board::new(7, Difficulty::Hard, vec![Position::new(2, 2, PieceKind::Queen)]),
    ]);

    // An ambiguous pair answers exactly like a missing one.
    assert_eq!(duplicated.get(7, Difficulty::Hard), None);
}

#[test]
fn test_random_board_never_varies() {
    let catalog = BoardCatalog::standard();
    let expected = catalog.get(2, Difficulty::Intermediate);

    for _ in 0..10 {
        assert_eq!(catalog.random_board(), expected);
    }
    assert!(expected.is_some());
}

#[test]
fn test_random_board_absent_without_board_two() {
    let catalog = BoardCatalog::new(vec![Board::new(
        1,
        Difficulty::Intermediate,
        vec![Position::new(1, 1, PieceKind::Pawn)],
    )]);

    assert_eq!(catalog.random_board(), None);
}

#[test]
fn test_default_is_standard() {
    assert_eq!(BoardCatalog::default(), BoardCatalog::standard());
}
