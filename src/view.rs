//! Renderable snapshots of controller state for the presentation layer.
//!
//! The engine has no opinion on widgets; instead every mutation hands
//! back a [`GameView`] and the caller redraws from it. Status text and
//! history labels live here so all frontends agree on them.

use crate::game::Game;
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};

/// One entry in the jump-to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Snapshot index this entry jumps to.
    pub index: usize,
    /// Label to render: "Game start" or "You are at move #N".
    pub label: String,
    /// True for the entry under the cursor.
    pub current: bool,
}

impl HistoryEntry {
    fn label_for(index: usize) -> String {
        if index == 0 {
            "Game start".to_string()
        } else {
            format!("You are at move #{index}")
        }
    }
}

/// Everything a frontend needs to redraw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The board under the cursor.
    pub board: Board,
    /// Player to move, if the board is still in progress.
    pub to_move: Option<Player>,
    /// Derived outcome of the board under the cursor.
    pub outcome: Outcome,
    /// Status line: "Player: X", "Winner: O", or "Draw".
    pub status: String,
    /// Jump-to list entries, one per snapshot.
    pub entries: Vec<HistoryEntry>,
    /// True when the game is full or decided; gates the restart control.
    pub capped: bool,
}

impl GameView {
    /// Captures a view of the given game.
    pub fn capture(game: &Game) -> Self {
        let outcome = game.outcome();
        let to_move = match outcome {
            Outcome::InProgress => Some(game.to_move()),
            _ => None,
        };

        let status = if let Some(winner) = outcome.winner() {
            format!("Winner: {winner}")
        } else if outcome.is_decided() {
            "Draw".to_string()
        } else {
            format!("Player: {}", game.to_move())
        };

        let entries = (0..game.history().len())
            .map(|index| HistoryEntry {
                index,
                label: HistoryEntry::label_for(index),
                current: index == game.cursor(),
            })
            .collect();

        Self {
            board: game.board().clone(),
            to_move,
            outcome,
            status,
            entries,
            capped: game.is_capped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_view() {
        let view = Game::new().view();
        assert_eq!(view.status, "Player: X");
        assert_eq!(view.to_move, Some(Player::X));
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].label, "Game start");
        assert!(view.entries[0].current);
        assert!(!view.capped);
    }

    #[test]
    fn test_labels_and_current_flag_track_cursor() {
        let mut game = Game::new();
        game.submit_move(0);
        game.submit_move(4);
        let view = game.jump_to(1);

        let labels: Vec<&str> = view.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Game start", "You are at move #1", "You are at move #2"]);

        let current: Vec<bool> = view.entries.iter().map(|e| e.current).collect();
        assert_eq!(current, [false, true, false]);
    }
}
