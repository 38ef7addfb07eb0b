//! Line and dot enums for the 3x3 grid.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A dot on the playing surface.
///
/// Dots are indexed 0-8 in reading order:
///
/// ```text
/// 0---1---2
/// |   |   |
/// 3---4---5
/// |   |   |
/// 6---7---8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Dot {
    /// Top-left dot (index 0).
    Northwest,
    /// Top-center dot (index 1).
    North,
    /// Top-right dot (index 2).
    Northeast,
    /// Middle-left dot (index 3).
    West,
    /// Middle dot (index 4).
    Center,
    /// Middle-right dot (index 5).
    East,
    /// Bottom-left dot (index 6).
    Southwest,
    /// Bottom-center dot (index 7).
    South,
    /// Bottom-right dot (index 8).
    Southeast,
}

impl Dot {
    /// All 9 dots in reading order.
    pub const ALL: [Dot; 9] = [
        Dot::Northwest,
        Dot::North,
        Dot::Northeast,
        Dot::West,
        Dot::Center,
        Dot::East,
        Dot::Southwest,
        Dot::South,
        Dot::Southeast,
    ];

    /// Converts the dot to its grid index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Dot::Northwest => 0,
            Dot::North => 1,
            Dot::Northeast => 2,
            Dot::West => 3,
            Dot::Center => 4,
            Dot::East => 5,
            Dot::Southwest => 6,
            Dot::South => 7,
            Dot::Southeast => 8,
        }
    }

    /// Creates a dot from its grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Dot::Northwest),
            1 => Some(Dot::North),
            2 => Some(Dot::Northeast),
            3 => Some(Dot::West),
            4 => Some(Dot::Center),
            5 => Some(Dot::East),
            6 => Some(Dot::Southwest),
            7 => Some(Dot::South),
            8 => Some(Dot::Southeast),
            _ => None,
        }
    }
}

/// A line connecting two adjacent dots.
///
/// One of 12 fixed named positions. Canonical names follow the compass
/// layout of the board:
///
/// ```text
/// @---North_Northwest---@---North_Northeast---@
/// |                     |                     |
/// West_Northwest   North_Center      East_Northeast
/// |                     |                     |
/// @-----West_Center-----@-----East_Center-----@
/// |                     |                     |
/// West_Southwest   South_Center      East_Southeast
/// |                     |                     |
/// @---South_Southwest---@---South_Southeast---@
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Top-left horizontal line.
    NorthNorthwest,
    /// Top-right horizontal line.
    NorthNortheast,
    /// Upper-left vertical line.
    WestNorthwest,
    /// Upper-middle vertical line.
    NorthCenter,
    /// Upper-right vertical line.
    EastNortheast,
    /// Middle-left horizontal line.
    WestCenter,
    /// Middle-right horizontal line.
    EastCenter,
    /// Lower-left vertical line.
    WestSouthwest,
    /// Lower-middle vertical line.
    SouthCenter,
    /// Lower-right vertical line.
    EastSoutheast,
    /// Bottom-left horizontal line.
    SouthSouthwest,
    /// Bottom-right horizontal line.
    SouthSoutheast,
}

impl Line {
    /// All 12 lines in reading order.
    pub const ALL: [Line; 12] = [
        Line::NorthNorthwest,
        Line::NorthNortheast,
        Line::WestNorthwest,
        Line::NorthCenter,
        Line::EastNortheast,
        Line::WestCenter,
        Line::EastCenter,
        Line::WestSouthwest,
        Line::SouthCenter,
        Line::EastSoutheast,
        Line::SouthSouthwest,
        Line::SouthSoutheast,
    ];

    /// The canonical name of this line.
    pub fn name(&self) -> &'static str {
        match self {
            Line::NorthNorthwest => "North_Northwest",
            Line::NorthNortheast => "North_Northeast",
            Line::WestNorthwest => "West_Northwest",
            Line::NorthCenter => "North_Center",
            Line::EastNortheast => "East_Northeast",
            Line::WestCenter => "West_Center",
            Line::EastCenter => "East_Center",
            Line::WestSouthwest => "West_Southwest",
            Line::SouthCenter => "South_Center",
            Line::EastSoutheast => "East_Southeast",
            Line::SouthSouthwest => "South_Southwest",
            Line::SouthSoutheast => "South_Southeast",
        }
    }

    /// Parses a canonical line name.
    ///
    /// Matching is exact first, then ASCII case-insensitive. Unknown names
    /// yield `None` so callers can treat them as a no-op.
    #[instrument]
    pub fn from_name(s: &str) -> Option<Line> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|line| line.name() == s)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|line| line.name().eq_ignore_ascii_case(s))
            })
    }

    /// Converts the line to its board index (0-11).
    pub fn to_index(self) -> usize {
        match self {
            Line::NorthNorthwest => 0,
            Line::NorthNortheast => 1,
            Line::WestNorthwest => 2,
            Line::NorthCenter => 3,
            Line::EastNortheast => 4,
            Line::WestCenter => 5,
            Line::EastCenter => 6,
            Line::WestSouthwest => 7,
            Line::SouthCenter => 8,
            Line::EastSoutheast => 9,
            Line::SouthSouthwest => 10,
            Line::SouthSoutheast => 11,
        }
    }

    /// Creates a line from its board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The two dots this line connects.
    pub fn endpoints(self) -> (Dot, Dot) {
        match self {
            Line::NorthNorthwest => (Dot::Northwest, Dot::North),
            Line::NorthNortheast => (Dot::North, Dot::Northeast),
            Line::WestNorthwest => (Dot::Northwest, Dot::West),
            Line::NorthCenter => (Dot::North, Dot::Center),
            Line::EastNortheast => (Dot::Northeast, Dot::East),
            Line::WestCenter => (Dot::West, Dot::Center),
            Line::EastCenter => (Dot::Center, Dot::East),
            Line::WestSouthwest => (Dot::West, Dot::Southwest),
            Line::SouthCenter => (Dot::Center, Dot::South),
            Line::EastSoutheast => (Dot::East, Dot::Southeast),
            Line::SouthSouthwest => (Dot::Southwest, Dot::South),
            Line::SouthSoutheast => (Dot::South, Dot::Southeast),
        }
    }

    /// Maps an unordered pair of dots to the line connecting them.
    ///
    /// Returns `None` when the dots are not adjacent, e.g. diagonal
    /// neighbors or the same dot twice. Presentation layers use this to
    /// turn a pair of selected dots into a move.
    #[instrument]
    pub fn between(a: Dot, b: Dot) -> Option<Line> {
        Self::ALL.iter().copied().find(|line| {
            let (p, q) = line.endpoints();
            (p == a && q == b) || (p == b && q == a)
        })
    }

    /// Filters lines by board state - returns only undrawn lines.
    ///
    /// These are the legal moves in the current position.
    #[instrument(skip(board))]
    pub fn open_lines(board: &Board) -> Vec<Line> {
        Self::ALL
            .iter()
            .copied()
            .filter(|&line| !board.has_line(line))
            .collect()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_twelve_lines() {
        assert_eq!(Line::iter().count(), 12);
        assert_eq!(Line::ALL.len(), 12);
    }

    #[test]
    fn test_index_round_trip() {
        for (index, line) in Line::ALL.iter().enumerate() {
            assert_eq!(line.to_index(), index);
            assert_eq!(Line::from_index(index), Some(*line));
        }
        assert_eq!(Line::from_index(12), None);
    }

    #[test]
    fn test_from_name_exact() {
        assert_eq!(
            Line::from_name("North_Northwest"),
            Some(Line::NorthNorthwest)
        );
        assert_eq!(Line::from_name("East_Center"), Some(Line::EastCenter));
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(
            Line::from_name("south_southeast"),
            Some(Line::SouthSoutheast)
        );
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Line::from_name("No line"), None);
        assert_eq!(Line::from_name(""), None);
        assert_eq!(Line::from_name("North"), None);
    }

    #[test]
    fn test_name_round_trip() {
        for line in Line::ALL {
            assert_eq!(Line::from_name(line.name()), Some(line));
        }
    }

    #[test]
    fn test_between_adjacent_dots() {
        assert_eq!(
            Line::between(Dot::Northwest, Dot::North),
            Some(Line::NorthNorthwest)
        );
        // Order does not matter.
        assert_eq!(
            Line::between(Dot::North, Dot::Northwest),
            Some(Line::NorthNorthwest)
        );
        assert_eq!(Line::between(Dot::Center, Dot::South), Some(Line::SouthCenter));
    }

    #[test]
    fn test_between_rejects_non_adjacent() {
        // Diagonal neighbors share no line.
        assert_eq!(Line::between(Dot::Northwest, Dot::Center), None);
        // Two dots apart.
        assert_eq!(Line::between(Dot::Northwest, Dot::Northeast), None);
        // Same dot twice.
        assert_eq!(Line::between(Dot::Center, Dot::Center), None);
    }

    #[test]
    fn test_every_line_reachable_from_endpoints() {
        for line in Line::ALL {
            let (a, b) = line.endpoints();
            assert_eq!(Line::between(a, b), Some(line));
        }
    }

    #[test]
    fn test_open_lines_empty_board() {
        let board = Board::new();
        assert_eq!(Line::open_lines(&board).len(), 12);
    }

    #[test]
    fn test_open_lines_filters_drawn() {
        let mut board = Board::new();
        board.set_line(Line::NorthNorthwest);
        board.set_line(Line::SouthCenter);

        let open = Line::open_lines(&board);
        assert_eq!(open.len(), 10);
        assert!(!open.contains(&Line::NorthNorthwest));
        assert!(!open.contains(&Line::SouthCenter));
        assert!(open.contains(&Line::EastCenter));
    }

    #[test]
    fn test_dot_index_round_trip() {
        for (index, dot) in Dot::ALL.iter().enumerate() {
            assert_eq!(dot.to_index(), index);
            assert_eq!(Dot::from_index(index), Some(*dot));
        }
        assert_eq!(Dot::from_index(9), None);
    }
}
