//! Monotonic line invariant: lines are drawn at most once and never removed.

use super::Invariant;
use crate::line::Line;
use crate::types::Board;
use crate::typestate::GameInProgress;

/// Invariant: Line placement is monotonic.
///
/// Every history entry draws a line that was absent, and the drawn lines
/// on the board are exactly those in the history. Verified by replaying
/// the move history and comparing.
pub struct MonotonicLinesInvariant;

impl Invariant<GameInProgress> for MonotonicLinesInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            // Line must be absent before drawing
            if reconstructed.has_line(mov.line) {
                return false;
            }
            reconstructed.set_line(mov.line);
        }

        // Reconstructed line flags must match the current board
        Line::ALL
            .iter()
            .all(|&line| reconstructed.has_line(line) == game.board().has_line(line))
    }

    fn description() -> &'static str {
        "Lines are drawn at most once and never removed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::types::Player;
    use crate::typestate::{GameResult, GameSetup};

    #[test]
    fn test_fresh_game_holds() {
        let game = GameSetup::new().start();
        assert!(MonotonicLinesInvariant::holds(&game));
    }

    #[test]
    fn test_single_move_holds() {
        let game = GameSetup::new().start();
        let action = Move::new(Player::X, Line::NorthCenter);

        if let Ok(GameResult::InProgress(game)) = game.make_move(action) {
            assert!(MonotonicLinesInvariant::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_multiple_moves_hold() {
        let moves = vec![
            Move::new(Player::X, Line::NorthNorthwest),
            Move::new(Player::Y, Line::EastCenter),
            Move::new(Player::X, Line::SouthSoutheast),
            Move::new(Player::Y, Line::WestNorthwest),
        ];

        if let Ok(GameResult::InProgress(game)) = GameInProgress::replay(&moves) {
            assert!(MonotonicLinesInvariant::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_undrawn_history_line_violates() {
        let game = GameSetup::new().start();
        let action = Move::new(Player::X, Line::NorthCenter);

        if let Ok(GameResult::InProgress(mut game)) = game.make_move(action) {
            // Corrupt the board by drawing a line with no history entry.
            game.board.set_line(Line::SouthCenter);

            assert!(!MonotonicLinesInvariant::holds(&game));
        }
    }
}
