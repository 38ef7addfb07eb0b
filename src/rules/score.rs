//! Scoring and outcome detection for dots-and-boxes.

use crate::outcome::Outcome;
use crate::square::Square;
use crate::types::{Board, Player};
use tracing::instrument;

/// Counts the squares owned by each player, as `(x, y)`.
#[instrument]
pub fn tally(board: &Board) -> (usize, usize) {
    let mut x_count = 0;
    let mut y_count = 0;
    for square in Square::ALL {
        match board.owner(square) {
            Some(Player::X) => x_count += 1,
            Some(Player::Y) => y_count += 1,
            None => {}
        }
    }
    (x_count, y_count)
}

/// Determines the game outcome.
///
/// Returns `None` while any square is unowned. Once all four squares are
/// owned, the player with strictly more squares wins; 2-2 is a draw.
#[instrument]
pub fn check_outcome(board: &Board) -> Option<Outcome> {
    let (x_count, y_count) = tally(board);
    if x_count + y_count < 4 {
        return None;
    }
    Some(if x_count > y_count {
        Outcome::Winner(Player::X)
    } else if y_count > x_count {
        Outcome::Winner(Player::Y)
    } else {
        Outcome::Draw
    })
}
