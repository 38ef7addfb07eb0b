//! Kani arbitrary implementations for dots-and-boxes types.
//!
//! These implementations allow Kani to explore all possible values of our
//! types during model checking.

use crate::action::Move;
use crate::line::Line;
use crate::square::Square;
use crate::types::{Board, Player};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::Y }
    }
}

impl kani::Arbitrary for Line {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 12);
        Line::from_index(index as usize).unwrap()
    }
}

impl kani::Arbitrary for Square {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 4);
        Square::from_index(index as usize).unwrap()
    }
}

impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any())
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        let lines: [bool; 12] = kani::any();
        let mut owners: [Option<Player>; 4] = [None; 4];
        for owner in &mut owners {
            if kani::any() {
                *owner = Some(kani::any());
            }
        }
        Board::from_parts(lines, owners)
    }
}
