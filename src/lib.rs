//! Tic-tac-toe game logic with snapshot history and replay navigation.
//!
//! The crate is the game core only: rules evaluation, turn alternation,
//! and a history of immutable board snapshots with a cursor that can
//! jump to any prior move and resume play from there, discarding the
//! future. Rendering and input belong to the caller, which redraws from
//! the [`GameView`] returned by every mutation.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! game.submit_move(0); // X
//! game.submit_move(4); // O
//! assert_eq!(game.to_move(), Player::X);
//!
//! // Step back before O's reply and branch: the future is discarded.
//! game.jump_to(1);
//! game.submit_move(8);
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

pub use action::{IgnoredMove, Move};
pub use contracts::{CellVacant, Contract, GameLive, LegalMove, MoveContract, assert_invariants};
pub use game::{Game, MoveOutcome};
pub use invariants::{
    AlternatingMarks, CursorInBounds, HistoryInvariants, Invariant, InvariantSet,
    InvariantViolation, SnapshotChain,
};
pub use position::Position;
pub use rules::{check_winner, evaluate, is_full};
pub use types::{Board, Outcome, Player, Square};
pub use view::{GameView, HistoryEntry};
