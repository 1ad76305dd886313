//! First-class move actions and ignored-action reporting.
//!
//! Moves are domain events, not side effects. Illegal submissions are
//! not errors either: the engine ignores them and says why, so a caller
//! can log the reason without treating the click as a failure.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a submitted move was ignored.
///
/// Ignored moves leave the game untouched. These are reported as plain
/// values rather than raised, matching the interactive contract where an
/// illegal click simply has no effect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum IgnoredMove {
    /// The cell index was not in 0-8.
    #[display("Cell index {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The cell is already occupied on the current board.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The current board is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for IgnoredMove {}
