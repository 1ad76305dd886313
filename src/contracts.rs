//! Contract-based validation for move submission.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}. Preconditions
//! decide whether a submission is applied or ignored; postconditions
//! re-check the invariant set after a transition.

use crate::action::{IgnoredMove, Move};
use crate::game::Game;
use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::types::Outcome;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    ///
    /// A violated precondition means the action is ignored, not failed.
    fn pre(state: &S, action: &A) -> Result<(), IgnoredMove>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: The cell at the move's position must be vacant.
pub struct CellVacant;

impl CellVacant {
    /// Checks that the move's target cell is empty on the current board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IgnoredMove> {
        if !game.board().is_empty(mov.position) {
            Err(IgnoredMove::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The board under the cursor must still be in progress.
pub struct GameLive;

impl GameLive {
    /// Checks that the current board is neither won nor drawn.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), IgnoredMove> {
        if game.outcome() == Outcome::InProgress {
            Ok(())
        } else {
            Err(IgnoredMove::GameOver)
        }
    }
}

/// Composite precondition: a move lands on a vacant cell of a live board.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IgnoredMove> {
        CellVacant::check(mov, game)?;
        GameLive::check(game)?;
        Ok(())
    }
}

/// Contract for move submissions.
///
/// Preconditions:
/// - Target cell is vacant
/// - Current board is in progress
///
/// Postconditions:
/// - Cursor stays in range of a well-rooted history
/// - Mark counts still follow ply parity
/// - Snapshots still chain by single moves
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), IgnoredMove> {
        LegalMove::check(action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        HistoryInvariants::check_all(after)
    }
}

/// Asserts that all history invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = HistoryInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "History invariants violated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_precondition_vacant_cell() {
        let game = Game::new();
        let action = Move::new(Player::X, Position::Center);

        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = Game::new();
        game.submit_move(4);

        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(IgnoredMove::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_decided_board() {
        let mut game = Game::new();
        // X takes the top row.
        for cell in [0, 4, 1, 5, 2] {
            game.submit_move(cell);
        }

        let action = Move::new(Player::O, Position::BottomLeft);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(IgnoredMove::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.submit_move(4);

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        after.submit_move(4);

        after.history[1].set(
            Position::TopLeft,
            crate::types::Square::Occupied(Player::O),
        );

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
