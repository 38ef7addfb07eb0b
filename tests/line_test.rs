//! Tests for the line and dot enums.

use dots_and_boxes::{Board, Dot, Line};

#[test]
fn test_line_to_index() {
    assert_eq!(Line::NorthNorthwest.to_index(), 0);
    assert_eq!(Line::EastCenter.to_index(), 6);
    assert_eq!(Line::SouthSoutheast.to_index(), 11);
}

#[test]
fn test_line_from_index() {
    assert_eq!(Line::from_index(0), Some(Line::NorthNorthwest));
    assert_eq!(Line::from_index(6), Some(Line::EastCenter));
    assert_eq!(Line::from_index(11), Some(Line::SouthSoutheast));
    assert_eq!(Line::from_index(12), None);
}

#[test]
fn test_canonical_names() {
    assert_eq!(Line::NorthNorthwest.name(), "North_Northwest");
    assert_eq!(Line::WestSouthwest.name(), "West_Southwest");
    assert_eq!(Line::from_name("East_Northeast"), Some(Line::EastNortheast));
    assert_eq!(Line::from_name("not a line"), None);
}

#[test]
fn test_between_maps_dot_pairs() {
    // The pairs a presentation layer produces from clicks or typed digits.
    assert_eq!(
        Line::between(Dot::Northwest, Dot::North),
        Some(Line::NorthNorthwest)
    );
    assert_eq!(
        Line::between(Dot::West, Dot::Northwest),
        Some(Line::WestNorthwest)
    );
    assert_eq!(
        Line::between(Dot::South, Dot::Southeast),
        Some(Line::SouthSoutheast)
    );
    // Diagonals never connect.
    assert_eq!(Line::between(Dot::Center, Dot::Southeast), None);
}

#[test]
fn test_open_lines_empty_board() {
    let board = Board::new();
    let open = Line::open_lines(&board);
    assert_eq!(open.len(), 12); // All lines open on an empty board
}

#[test]
fn test_open_lines_filters_drawn() {
    let mut board = Board::new();
    board.set_line(Line::NorthNorthwest);
    board.set_line(Line::EastCenter);

    let open = Line::open_lines(&board);
    assert_eq!(open.len(), 10); // 2 drawn, 10 open
    assert!(!open.contains(&Line::NorthNorthwest));
    assert!(!open.contains(&Line::EastCenter));
    assert!(open.contains(&Line::SouthSoutheast));
}
