//! First-class invariants for the snapshot-history game model.
//!
//! Each invariant is a standalone, independently testable property of a
//! whole [`Game`](crate::game::Game); together they pin history to a
//! legal alternating game with a valid cursor. The controller re-checks
//! the full set after every applied move in debug builds.

/// A logical property over a state, checked as a whole.
pub trait Invariant<S> {
    /// Returns true when the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the property.
    fn description() -> &'static str;
}

/// Record of a property that failed to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A group of invariants checked in one step.
///
/// Implemented for tuples of [`Invariant`]s, so a whole set can be named
/// as a type alias and verified with a single call.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set against `state`.
    ///
    /// Collects all violations rather than stopping at the first, so a
    /// failed check names everything that broke.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod snapshot_chain;

pub use alternating_marks::AlternatingMarks;
pub use cursor_in_bounds::CursorInBounds;
pub use snapshot_chain::SnapshotChain;

/// All history invariants as a composable set.
pub type HistoryInvariants = (CursorInBounds, AlternatingMarks, SnapshotChain);
