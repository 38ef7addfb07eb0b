//! Capture detection for dots-and-boxes.

use crate::square::Square;
use crate::types::Board;
use tracing::instrument;

/// Returns the squares that are unowned but fully enclosed.
///
/// These are the squares the mover captures after drawing a line. An inner
/// line borders two squares, so the result can hold two entries at once.
#[instrument]
pub fn completed_squares(board: &Board) -> Vec<Square> {
    Square::ALL
        .iter()
        .copied()
        .filter(|&square| board.owner(square).is_none() && board.is_enclosed(square))
        .collect()
}
