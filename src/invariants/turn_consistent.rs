//! Turn consistency invariant: history replays to the current state.

use super::Invariant;
use crate::rules;
use crate::square::Square;
use crate::types::{Board, Player};
use crate::typestate::GameInProgress;

/// Invariant: The turn order follows the capture rule.
///
/// Replaying the history from an empty board, awarding enclosed squares to
/// the mover and toggling the turn only on non-capturing moves, must
/// reproduce the recorded movers, the square owners, and the player to move.
pub struct TurnConsistentInvariant;

impl Invariant<GameInProgress> for TurnConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut board = Board::new();
        let mut to_move = Player::X;

        for mov in game.history() {
            if mov.player != to_move {
                return false;
            }
            board.set_line(mov.line);

            let captured = rules::completed_squares(&board);
            for &square in &captured {
                board.claim(square, mov.player);
            }
            if captured.is_empty() {
                to_move = to_move.opponent();
            }
        }

        to_move == game.to_move()
            && Square::ALL
                .iter()
                .all(|&square| board.owner(square) == game.board().owner(square))
    }

    fn description() -> &'static str {
        "Replaying the history reproduces the square owners and the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::line::Line;
    use crate::typestate::{GameResult, GameSetup};

    #[test]
    fn test_fresh_game_holds() {
        let game = GameSetup::new().start();
        assert!(TurnConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let moves = vec![
            Move::new(Player::X, Line::NorthNorthwest),
            Move::new(Player::Y, Line::SouthSouthwest),
            Move::new(Player::X, Line::EastNortheast),
        ];

        if let Ok(GameResult::InProgress(game)) = GameInProgress::replay(&moves) {
            assert!(TurnConsistentInvariant::holds(&game));
            assert_eq!(game.to_move(), Player::Y);
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_capturing_move_retains_turn() {
        // Y draws the fourth side of top_left and keeps the turn.
        let moves = vec![
            Move::new(Player::X, Line::NorthNorthwest),
            Move::new(Player::Y, Line::NorthCenter),
            Move::new(Player::X, Line::WestCenter),
            Move::new(Player::Y, Line::WestNorthwest),
        ];

        if let Ok(GameResult::InProgress(game)) = GameInProgress::replay(&moves) {
            assert!(TurnConsistentInvariant::holds(&game));
            assert_eq!(game.to_move(), Player::Y);
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_corrupted_turn_violates() {
        let game = GameSetup::new().start();
        let action = Move::new(Player::X, Line::NorthCenter);

        if let Ok(GameResult::InProgress(mut game)) = game.make_move(action) {
            // A non-capturing move must have passed the turn to Y.
            assert_eq!(game.to_move(), Player::Y);
            game.to_move = Player::X;

            assert!(!TurnConsistentInvariant::holds(&game));
        }
    }

    #[test]
    fn test_corrupted_owner_violates() {
        let moves = vec![
            Move::new(Player::X, Line::NorthNorthwest),
            Move::new(Player::Y, Line::NorthCenter),
            Move::new(Player::X, Line::WestCenter),
            Move::new(Player::Y, Line::WestNorthwest),
        ];

        if let Ok(GameResult::InProgress(mut game)) = GameInProgress::replay(&moves) {
            // Reassign Y's capture to X.
            game.board.claim(crate::Square::TopLeft, Player::X);

            assert!(!TurnConsistentInvariant::holds(&game));
        }
    }
}
