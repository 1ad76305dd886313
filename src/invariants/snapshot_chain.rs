//! Snapshot succession invariant: history is a chain of single moves.

use super::Invariant;
use crate::game::Game;
use crate::types::{Player, Square};

/// Invariant: Each snapshot extends its predecessor by exactly one mark.
///
/// The new mark belongs to the mover at that ply, and no existing mark
/// is ever cleared or rewritten. Together with the parity invariant this
/// pins history to a legal alternating game.
pub struct SnapshotChain;

impl Invariant<Game> for SnapshotChain {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).enumerate().all(|(ply, pair)| {
            let (prev, next) = (&pair[0], &pair[1]);
            let mover = Player::for_ply(ply);

            let mut added = 0usize;
            for (before, after) in prev.squares().iter().zip(next.squares().iter()) {
                match (before, after) {
                    (b, a) if b == a => {}
                    (Square::Empty, Square::Occupied(p)) if *p == mover => added += 1,
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark by the mover at that ply"
    }
}
