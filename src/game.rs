//! Snapshot-history game controller with replay navigation.

use crate::action::{IgnoredMove, Move};
use crate::contracts::{Contract, MoveContract, assert_invariants};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome, Player};
use crate::view::GameView;
use tracing::{debug, instrument, warn};

/// Snapshot count at which the game is treated as capped.
///
/// Nine moves fill the board, so ten snapshots mean no move is left.
/// Kept as an independent check next to the outcome check rather than
/// folded into it, in case a rule variant decouples board size from
/// move count.
const SNAPSHOT_CAP: usize = 10;

/// Tic-tac-toe game with full-snapshot history and a replay cursor.
///
/// The controller owns an ordered sequence of immutable board snapshots
/// (element 0 is always the initial empty board) plus a cursor selecting
/// the board currently in play. Whose turn it is, and whether the game is
/// over, are derived from the cursor - never stored - so jumping around
/// history re-derives both for free.
///
/// Submitting a move while the cursor sits before the latest snapshot
/// discards the future and starts a new branch from the cursor. Illegal
/// submissions are ignored, not failed: the engine reports the reason as
/// a value and leaves all state untouched.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) cursor: usize,
}

/// Result of submitting a move - explicit state transition.
///
/// Each applied mutation carries a fresh [`GameView`] so the caller can
/// redraw without re-querying the controller.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// The move was applied; here is the new view to render.
    Applied(GameView),
    /// The move was ignored and nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// Returns the reason the move was ignored, if it was.
    pub fn ignored(&self) -> Option<IgnoredMove> {
        match self {
            MoveOutcome::Applied(_) => None,
            MoveOutcome::Ignored(reason) => Some(*reason),
        }
    }
}

impl Game {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns the board under the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Returns the player whose turn it is at the cursor.
    ///
    /// Derived from cursor parity alone: X on even plies, O on odd.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.cursor)
    }

    /// Evaluates the board under the cursor for a winner or draw.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Returns all snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the cursor (index of the snapshot in play).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true when the game has reached its natural end state.
    ///
    /// Either the history holds a full game's worth of snapshots or the
    /// board in play is already decided. Callers use this to offer a
    /// restart control.
    pub fn is_capped(&self) -> bool {
        self.history.len() >= SNAPSHOT_CAP || self.outcome().is_decided()
    }

    /// Submits a move at the given cell index (0-8, row-major).
    ///
    /// On success, truncates any future beyond the cursor, appends the
    /// new snapshot, advances the cursor, and returns the new view. An
    /// out-of-bounds index, an occupied cell, or a decided board makes
    /// the submission an ignored no-op.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn submit_move(&mut self, cell: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(cell) else {
            warn!(cell, "Move ignored: cell index out of bounds");
            return MoveOutcome::Ignored(IgnoredMove::OutOfBounds(cell));
        };
        let action = Move::new(self.to_move(), position);

        if let Err(reason) = MoveContract::pre(self, &action) {
            debug!(%action, %reason, "Move ignored");
            return MoveOutcome::Ignored(reason);
        }

        let next = self.board().with(action.position, action.player);
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        assert_invariants(self);

        debug!(%action, cursor = self.cursor, board = %self.board().display(), "Move applied");
        MoveOutcome::Applied(self.view())
    }

    /// Moves the cursor to the given snapshot index.
    ///
    /// History is never altered; an out-of-range index is ignored.
    /// Jumping back to an undecided snapshot of an otherwise finished
    /// game re-enables [`Game::submit_move`] from that point.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> GameView {
        if index < self.history.len() {
            debug!(index, "Jumping to snapshot");
            self.cursor = index;
        } else {
            warn!(index, len = self.history.len(), "Jump ignored: no such snapshot");
        }
        self.view()
    }

    /// Resets to a fresh game: one empty snapshot, cursor at the start.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> GameView {
        debug!("Restarting game");
        self.history = vec![Board::new()];
        self.cursor = 0;
        self.view()
    }

    /// Captures a renderable view of the current state.
    pub fn view(&self) -> GameView {
        GameView::capture(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
