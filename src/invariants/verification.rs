//! Formal verification of invariants using the Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible game states (bounded).

use crate::rules;
use crate::typestate::{GameInProgress, GameResult};
use crate::{Board, DotsInvariants, InvariantSet, Move};

/// Verify the invariant set survives any accepted move sequence.
///
/// Proves: replaying arbitrary moves either fails validation or yields a
/// state where every invariant holds.
#[kani::proof]
#[kani::unwind(6)]
fn verify_accepted_moves_preserve_invariants() {
    let moves: [Move; 3] = [kani::any(), kani::any(), kani::any()];

    // Three moves can never finish a game (that needs all 12 lines).
    if let Ok(GameResult::InProgress(game)) = GameInProgress::replay(&moves) {
        assert!(
            DotsInvariants::check_all(&game).is_ok(),
            "Invariant violated after accepted moves"
        );
    }
}

/// Verify the capture pass only reports unowned, fully enclosed squares.
#[kani::proof]
fn verify_completed_squares_enclosed() {
    let board: Board = kani::any();

    for square in rules::completed_squares(&board) {
        assert!(board.is_enclosed(square), "Captured square missing a side");
        assert!(board.owner(square).is_none(), "Captured square already owned");
    }
}
