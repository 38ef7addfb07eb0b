//! Dots-and-boxes game logic for a 3x3 grid of dots.
//!
//! Two players, X and Y, alternately draw lines between adjacent dots:
//!
//! ```text
//! @---@   @
//! |   |
//! @   @---@
//!     | Y |
//! @   @---@
//! ```
//!
//! Drawing the fourth side of a square captures it for the mover, who keeps
//! the turn; a move that captures nothing passes control to the opponent.
//! When all four squares are owned the player with more squares wins, and
//! 2-2 is a draw.
//!
//! # Architecture
//!
//! - **Domain types**: closed enums for [`Player`], [`Line`], [`Square`] and
//!   [`Dot`], plus the [`Board`] storing line flags and square owners.
//! - **Rules**: pure functions for capture and outcome evaluation.
//! - **Typestate engine**: [`GameSetup`] -> [`GameInProgress`] ->
//!   [`GameFinished`], with consuming transitions and contract validation.
//! - **Facade**: [`Game`], a phase-erased wrapper with the permissive
//!   command/query surface presentation layers consume.
//!
//! # Example
//!
//! ```
//! use dots_and_boxes::{Game, Line, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_player(), Player::X);
//!
//! // X opens; no capture, so control passes to Y.
//! assert!(game.add_line(Line::NorthNorthwest));
//! assert_eq!(game.current_player(), Player::Y);
//!
//! // The same line is rejected as a no-op.
//! assert!(!game.add_line(Line::NorthNorthwest));
//! assert_eq!(game.current_player(), Player::Y);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod game;
mod invariants;
#[cfg(kani)]
mod kani_support;
mod line;
mod outcome;
mod rules;
mod square;
mod types;
mod typestate;

// Crate-level exports - actions
pub use action::{Move, MoveError};

// Crate-level exports - contracts
pub use contracts::{
    Contract, HistoryComplete, LegalMove, LineIsAbsent, MoveContract, OwnersEnclosed, PlayersTurn,
};

// Crate-level exports - facade
pub use game::Game;

// Crate-level exports - invariants
pub use invariants::{
    DotsInvariants, EnclosedOwnershipInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicLinesInvariant, TurnConsistentInvariant,
};

// Crate-level exports - board geometry
pub use line::{Dot, Line};
pub use square::Square;

// Crate-level exports - outcome and rules
pub use outcome::Outcome;
pub use rules::{check_outcome, completed_squares, tally};

// Crate-level exports - core types
pub use types::{Board, Player};

// Crate-level exports - typestate engine
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
