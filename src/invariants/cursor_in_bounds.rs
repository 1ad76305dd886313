//! Cursor validity invariant: the replay cursor always selects a snapshot.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: History is well-rooted and the cursor stays in range.
///
/// History holds at least the initial snapshot, that snapshot is fully
/// empty, and the cursor indexes an existing snapshot.
pub struct CursorInBounds;

impl Invariant<Game> for CursorInBounds {
    fn holds(game: &Game) -> bool {
        let Some(root) = game.history().first() else {
            return false;
        };

        root.squares().iter().all(|s| *s == Square::Empty)
            && game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "History starts at an empty snapshot and the cursor is in range"
    }
}
