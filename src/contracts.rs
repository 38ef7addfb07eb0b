//! Contract-based validation for dots-and-boxes moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{DotsInvariants, InvariantSet};
use crate::square::Square;
use crate::types::Board;
use crate::typestate::GameInProgress;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The move's line must not be drawn yet.
pub struct LineIsAbsent;

impl LineIsAbsent {
    /// Checks that the move's line is still open.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().has_line(mov.line) {
            Err(MoveError::LineAlreadyPresent(mov.line))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks that the move is made by the player to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the line is absent and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        LineIsAbsent::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Line must not be drawn yet
/// - Must be player's turn
///
/// Postconditions:
/// - Line placement remains monotonic
/// - Owned squares stay enclosed
/// - Turn order follows the capture rule
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        // Verify all invariants using the composed set
        DotsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Cheap sanity checks (warn-logging)
// ─────────────────────────────────────────────────────────────

/// Invariant: every owned square is fully enclosed.
pub struct OwnersEnclosed;

impl OwnersEnclosed {
    /// Checks the board, logging the offending square on violation.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        for square in Square::ALL {
            if board.owner(square).is_some() && !board.is_enclosed(square) {
                warn!(%square, "owned square missing a side");
                return false;
            }
        }
        true
    }
}

/// Invariant: history length matches drawn lines.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Checks that every drawn line has exactly one history entry.
    #[instrument(skip(game))]
    pub fn holds(game: &GameInProgress) -> bool {
        let drawn = game.board().lines_drawn();
        let history_len = game.history().len();

        let valid = drawn == history_len;
        if !valid {
            warn!(drawn, history_len, "history does not match drawn lines");
        }
        valid
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameInProgress) {
    debug_assert!(
        OwnersEnclosed::holds(game.board()),
        "Ownership enclosure violated"
    );
    debug_assert!(HistoryComplete::holds(game), "History completeness violated");
}
