//! Enclosed ownership invariant: an owned square has all four sides drawn.

use super::Invariant;
use crate::square::Square;
use crate::typestate::GameInProgress;

/// Invariant: Ownership implies enclosure.
///
/// A square can only be owned once all four of its bounding lines exist.
pub struct EnclosedOwnershipInvariant;

impl Invariant<GameInProgress> for EnclosedOwnershipInvariant {
    fn holds(game: &GameInProgress) -> bool {
        Square::ALL.iter().copied().all(|square| {
            game.board().owner(square).is_none() || game.board().is_enclosed(square)
        })
    }

    fn description() -> &'static str {
        "A square is owned only when all four of its sides are drawn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::line::Line;
    use crate::types::Player;
    use crate::typestate::{GameInProgress, GameResult, GameSetup};

    #[test]
    fn test_fresh_game_holds() {
        let game = GameSetup::new().start();
        assert!(EnclosedOwnershipInvariant::holds(&game));
    }

    #[test]
    fn test_captured_square_holds() {
        // X encloses top_left on the seventh move.
        let moves = vec![
            Move::new(Player::X, Line::NorthCenter),
            Move::new(Player::Y, Line::EastSoutheast),
            Move::new(Player::X, Line::WestCenter),
            Move::new(Player::Y, Line::SouthSoutheast),
            Move::new(Player::X, Line::NorthNorthwest),
            Move::new(Player::Y, Line::EastCenter),
            Move::new(Player::X, Line::WestNorthwest),
        ];

        if let Ok(GameResult::InProgress(game)) = GameInProgress::replay(&moves) {
            assert_eq!(game.board().owner(crate::Square::TopLeft), Some(Player::X));
            assert!(EnclosedOwnershipInvariant::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_unenclosed_owner_violates() {
        let game = GameSetup::new().start();
        let action = Move::new(Player::X, Line::NorthCenter);

        if let Ok(GameResult::InProgress(mut game)) = game.make_move(action) {
            // Corrupt the board: claim a square missing three sides.
            game.board.claim(Square::TopRight, Player::X);

            assert!(!EnclosedOwnershipInvariant::holds(&game));
        }
    }
}
