//! Turn alternation invariant: mark counts follow ply parity.

use super::Invariant;
use crate::game::Game;
use crate::types::{Player, Square};

/// Invariant: Snapshot *k* holds exactly the marks of *k* alternating plies.
///
/// X moves on even plies and O on odd plies, so snapshot *k* must hold
/// ⌈k/2⌉ X marks and ⌊k/2⌋ O marks. This holds for every snapshot in
/// history, not just the one under the cursor.
pub struct AlternatingMarks;

impl Invariant<Game> for AlternatingMarks {
    fn holds(game: &Game) -> bool {
        game.history().iter().enumerate().all(|(ply, board)| {
            let x_count = board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(Player::X))
                .count();
            let o_count = board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(Player::O))
                .count();

            x_count == ply.div_ceil(2) && o_count == ply / 2
        })
    }

    fn description() -> &'static str {
        "Every snapshot's X and O mark counts match its ply parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_fresh_game_holds() {
        assert!(AlternatingMarks::holds(&Game::new()));
    }

    #[test]
    fn test_holds_across_full_history() {
        let mut game = Game::new();
        for cell in [0, 4, 1, 5] {
            game.submit_move(cell);
        }
        assert!(AlternatingMarks::holds(&game));
    }

    #[test]
    fn test_double_mark_violates() {
        let mut game = Game::new();
        game.submit_move(0);

        // A second X without an intervening O breaks parity.
        game.history[1].set(Position::Center, Square::Occupied(Player::X));
        assert!(!AlternatingMarks::holds(&game));
    }
}
