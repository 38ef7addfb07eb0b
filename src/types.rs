//! Core domain types for dots-and-boxes.

use crate::line::Line;
use crate::square::Square;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (opens the game).
    X,
    /// Player Y (moves second).
    Y,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::Y,
            Player::Y => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::Y => write!(f, "Y"),
        }
    }
}

/// The 3x3-dot playing surface: 12 line slots and 4 square owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Line presence flags, indexed by `Line::to_index`.
    lines: [bool; 12],
    /// Square owners, indexed by `Square::to_index`.
    owners: [Option<Player>; 4],
}

impl Board {
    /// Creates an empty board: no lines drawn, no squares owned.
    pub fn new() -> Self {
        Self {
            lines: [false; 12],
            owners: [None; 4],
        }
    }

    /// Reconstructs a board from raw parts, bypassing the game engine.
    pub fn from_parts(lines: [bool; 12], owners: [Option<Player>; 4]) -> Self {
        Self { lines, owners }
    }

    /// Whether the given line has been drawn.
    pub fn has_line(&self, line: Line) -> bool {
        self.lines[line.to_index()]
    }

    /// Marks a line as drawn (unchecked - use the game engine for validated moves).
    pub fn set_line(&mut self, line: Line) {
        self.lines[line.to_index()] = true;
    }

    /// Returns the owner of a square, or `None` while unclaimed.
    pub fn owner(&self, square: Square) -> Option<Player> {
        self.owners[square.to_index()]
    }

    /// Assigns a square to a player (unchecked - use the game engine for validated moves).
    pub fn claim(&mut self, square: Square, player: Player) {
        self.owners[square.to_index()] = Some(player);
    }

    /// Whether all four sides of the square are drawn.
    pub fn is_enclosed(&self, square: Square) -> bool {
        square.sides().iter().all(|&line| self.has_line(line))
    }

    /// Number of lines drawn so far.
    pub fn lines_drawn(&self) -> usize {
        self.lines.iter().filter(|&&drawn| drawn).count()
    }

    /// Whether every one of the 12 lines is drawn.
    pub fn is_full(&self) -> bool {
        self.lines.iter().all(|&drawn| drawn)
    }

    /// Renders the board as a text snapshot.
    ///
    /// Dots are `@`, drawn lines are `---` and `|`, and owned squares show
    /// the owner's letter:
    ///
    /// ```text
    /// @---@   @
    /// | Y |
    /// @---@   @
    ///
    /// @   @   @
    /// ```
    pub fn render(&self) -> String {
        let h = |line: Line| if self.has_line(line) { "---" } else { "   " };
        let v = |line: Line| if self.has_line(line) { '|' } else { ' ' };
        let o = |square: Square| match self.owner(square) {
            Some(Player::X) => 'X',
            Some(Player::Y) => 'Y',
            None => ' ',
        };
        format!(
            "@{}@{}@\n{} {} {} {} {}\n@{}@{}@\n{} {} {} {} {}\n@{}@{}@",
            h(Line::NorthNorthwest),
            h(Line::NorthNortheast),
            v(Line::WestNorthwest),
            o(Square::TopLeft),
            v(Line::NorthCenter),
            o(Square::TopRight),
            v(Line::EastNortheast),
            h(Line::WestCenter),
            h(Line::EastCenter),
            v(Line::WestSouthwest),
            o(Square::BottomLeft),
            v(Line::SouthCenter),
            o(Square::BottomRight),
            v(Line::EastSoutheast),
            h(Line::SouthSouthwest),
            h(Line::SouthSoutheast),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
