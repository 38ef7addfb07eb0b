//! Phase-specific typestate structs for dots-and-boxes.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes invariants at compile time - a `GameFinished` ALWAYS
//! has an outcome, not `Option<Outcome>`, and only a `GameInProgress`
//! can accept moves.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract, assert_invariants};
use crate::line::Line;
use crate::outcome::Outcome;
use crate::rules;
use crate::types::{Board, Player};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty. No history, no outcome.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game (consumes setup, returns in-progress).
    ///
    /// Player X always opens.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: Player::X,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Invariants enforced by type:
/// - Some square is still unowned (the finished state is `GameFinished`)
/// - No outcome yet
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Draws the line, awards every square it encloses to the mover, and
    /// applies the turn rule: control passes to the opponent only when the
    /// move captured nothing. Capturing the last open square finishes the
    /// game.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns `MoveError::LineAlreadyPresent` if the line is drawn, or
    /// `MoveError::WrongPlayer` if it is not the mover's turn.
    #[instrument(skip(self), fields(line = %action.line, player = %action.player))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        // Precondition: Check contract
        MoveContract::pre(&self, &action)?;

        // Apply the move
        let mut game = self;
        game.board.set_line(action.line);
        game.history.push(action);

        // Capture pass: the mover claims every square this line encloses.
        let captured = rules::completed_squares(&game.board);
        for &square in &captured {
            game.board.claim(square, action.player);
        }

        // All four squares owned ends the game.
        if let Some(outcome) = rules::check_outcome(&game.board) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                last_player: action.player,
                outcome,
            }));
        }

        // Extra turn on capture, otherwise control passes.
        if captured.is_empty() {
            game.to_move = game.to_move.opponent();
        }

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        assert_invariants(&game);

        Ok(GameResult::InProgress(game))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the undrawn lines (the legal moves).
    #[instrument(skip(self))]
    pub fn open_lines(&self) -> Vec<Line> {
        Line::open_lines(&self.board)
    }

    /// Replays moves from the initial state.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is ALWAYS present (not Option).
/// This struct encodes the invariant at the type level.
#[derive(Debug, Clone)]
pub struct GameFinished {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) last_player: Player,
    pub(crate) outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    ///
    /// Never returns Option - the outcome is guaranteed.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the player who made the final move.
    pub fn last_player(&self) -> Player {
        self.last_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
