//! Square enum and the bounding-line map.

use crate::line::Line;
use serde::{Deserialize, Serialize};

/// One of the four 1x1 cells of the board.
///
/// A square is captured by the player who draws the last of its four
/// bounding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Square {
    /// Upper-left cell (`top_left`).
    TopLeft,
    /// Upper-right cell (`top_right`).
    TopRight,
    /// Lower-left cell (`bottom_left`).
    BottomLeft,
    /// Lower-right cell (`bottom_right`).
    BottomRight,
}

impl Square {
    /// All 4 squares.
    pub const ALL: [Square; 4] = [
        Square::TopLeft,
        Square::TopRight,
        Square::BottomLeft,
        Square::BottomRight,
    ];

    /// The canonical name of this square.
    pub fn name(&self) -> &'static str {
        match self {
            Square::TopLeft => "top_left",
            Square::TopRight => "top_right",
            Square::BottomLeft => "bottom_left",
            Square::BottomRight => "bottom_right",
        }
    }

    /// Parses a canonical square name.
    ///
    /// Unknown names yield `None` so callers can treat them as a no-op.
    pub fn from_name(s: &str) -> Option<Square> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|square| square.name() == s)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|square| square.name().eq_ignore_ascii_case(s))
            })
    }

    /// Converts the square to its board index (0-3).
    pub fn to_index(self) -> usize {
        match self {
            Square::TopLeft => 0,
            Square::TopRight => 1,
            Square::BottomLeft => 2,
            Square::BottomRight => 3,
        }
    }

    /// Creates a square from its board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The four lines bounding this square.
    ///
    /// The map is fixed by the board geometry. Inner lines (`North_Center`,
    /// `West_Center`, `East_Center`, `South_Center`) each bound two squares,
    /// so one move can capture two squares at once.
    pub fn sides(self) -> [Line; 4] {
        match self {
            Square::TopLeft => [
                Line::NorthNorthwest,
                Line::NorthCenter,
                Line::WestCenter,
                Line::WestNorthwest,
            ],
            Square::TopRight => [
                Line::NorthNortheast,
                Line::EastNortheast,
                Line::EastCenter,
                Line::NorthCenter,
            ],
            Square::BottomLeft => [
                Line::WestCenter,
                Line::SouthCenter,
                Line::SouthSouthwest,
                Line::WestSouthwest,
            ],
            Square::BottomRight => [
                Line::EastCenter,
                Line::EastSoutheast,
                Line::SouthSoutheast,
                Line::SouthCenter,
            ],
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
