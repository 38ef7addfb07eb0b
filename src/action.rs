//! First-class action types for dots-and-boxes.
//!
//! Moves are domain events, not side effects. They represent the player's
//! intent and can be validated independently of execution.

use crate::line::Line;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player drawing a line between two adjacent dots.
///
/// Moves are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
/// - Reasoned about by contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The line the player draws.
    pub line: Line,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, line: Line) -> Self {
        Self { player, line }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the line of this move.
    pub fn line(&self) -> Line {
        self.line
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.line.name())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The line is already drawn.
    #[display("Line {} is already drawn", _0)]
    LineAlreadyPresent(Line),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
