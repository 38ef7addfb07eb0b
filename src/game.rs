//! Phase-erased game wrapper with the presentation-facing API.
//!
//! Typestate phases are precise but awkward for presentation callers that
//! poll and mutate in place. `Game` erases the phase, keeps the full move
//! history, and exposes the permissive command/query surface: rejected
//! commands are no-ops reported as `false` rather than errors.

use crate::action::{Move, MoveError};
use crate::line::Line;
use crate::outcome::Outcome;
use crate::square::Square;
use crate::types::{Board, Player};
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A complete game in any phase.
///
/// Since typestate phases can't be directly serialized, this enum wraps
/// both possible phases and drives transitions by replaying the stored
/// history through the typestate engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    /// Game in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Player to move.
        to_move: Player,
        /// Moves played so far.
        history: Vec<Move>,
    },
    /// Game over: all four squares are owned.
    Finished {
        /// The board state.
        board: Board,
        /// The player who made the final move.
        last_player: Player,
        /// The outcome.
        outcome: Outcome,
        /// Moves played.
        history: Vec<Move>,
    },
}

impl Game {
    /// Starts a fresh game: no lines, no owners, X to move.
    #[instrument]
    pub fn new() -> Self {
        GameSetup::new().start().into()
    }

    /// Resets the game to its initial state.
    ///
    /// Idempotent: resetting twice yields the same state as resetting once.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Attempts to draw a line, reporting the reason on rejection.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` when the game is finished and
    /// `MoveError::LineAlreadyPresent` when the line is drawn; the state
    /// is unchanged in both cases.
    #[instrument(skip(self))]
    pub fn try_add_line(&mut self, line: Line) -> Result<(), MoveError> {
        match self {
            Game::Finished { .. } => Err(MoveError::GameOver),
            Game::InProgress {
                to_move, history, ..
            } => {
                let mut moves = history.clone();
                moves.push(Move::new(*to_move, line));

                debug!(
                    move_count = moves.len(),
                    "replaying history with contract validation"
                );

                let result = GameInProgress::replay(&moves)?;
                *self = result.into();
                Ok(())
            }
        }
    }

    /// Attempts to draw a line.
    ///
    /// On success the mover claims every square the line encloses and the
    /// turn passes to the opponent unless a square was captured. Returns
    /// `false` - leaving the state unchanged - when the line is already
    /// drawn or the game is over.
    pub fn add_line(&mut self, line: Line) -> bool {
        match self.try_add_line(line) {
            Ok(()) => true,
            Err(error) => {
                debug!(%error, %line, "line rejected");
                false
            }
        }
    }

    /// Whether the given line has been drawn.
    pub fn check_line(&self, line: Line) -> bool {
        self.board().has_line(line)
    }

    /// Returns the owner of a square, or `None` while unclaimed.
    pub fn square_owner(&self, square: Square) -> Option<Player> {
        self.board().owner(square)
    }

    /// The player entitled to place the next line.
    ///
    /// After the game finishes this reports the player who made the final
    /// move.
    pub fn current_player(&self) -> Player {
        match self {
            Game::InProgress { to_move, .. } => *to_move,
            Game::Finished { last_player, .. } => *last_player,
        }
    }

    /// The game outcome, or `None` while any square is unowned.
    pub fn winner(&self) -> Option<Outcome> {
        match self {
            Game::InProgress { .. } => None,
            Game::Finished { outcome, .. } => Some(*outcome),
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, Game::Finished { .. })
    }

    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            Game::InProgress { board, .. } | Game::Finished { board, .. } => board,
        }
    }

    /// Returns the move history for any phase.
    pub fn history(&self) -> &[Move] {
        match self {
            Game::InProgress { history, .. } | Game::Finished { history, .. } => history,
        }
    }

    /// Returns a status line for display.
    pub fn status_string(&self) -> String {
        match self {
            Game::InProgress { to_move, .. } => {
                format!("In progress. Player {} to move.", to_move)
            }
            Game::Finished {
                outcome: Outcome::Winner(player),
                ..
            } => format!("Game over. Player {} wins!", player),
            Game::Finished {
                outcome: Outcome::Draw,
                ..
            } => "Game over. Draw!".to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.board().render(), self.status_string())
    }
}

impl From<GameInProgress> for Game {
    fn from(game: GameInProgress) -> Self {
        Game::InProgress {
            to_move: game.to_move,
            history: game.history,
            board: game.board,
        }
    }
}

impl From<GameFinished> for Game {
    fn from(game: GameFinished) -> Self {
        Game::Finished {
            last_player: game.last_player,
            outcome: game.outcome,
            history: game.history,
            board: game.board,
        }
    }
}

impl From<GameResult> for Game {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}
