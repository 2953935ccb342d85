//! Integrity rules for histories using Validation.

use crate::core::{detect, HistoryEntry, Mark};
use crate::enforcement::context::HistoryContext;
use crate::enforcement::violations::IntegrityViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check.
pub type Checked = Validation<(), NonEmptyVec<IntegrityViolation>>;

/// Type alias for caller-supplied check functions
pub type IntegrityCheck = Box<dyn Fn(&HistoryContext<'_>) -> Checked + Send + Sync>;

fn ensure(ok: bool, violation: impl FnOnce() -> IntegrityViolation) -> Checked {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Integrity rules for a (history, cursor) pair.
/// Uses Validation to accumulate ALL violations.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::enforcement::{HistoryContext, IntegrityRules};
/// use tictactoe_timeline::session::GameSession;
///
/// let mut game = GameSession::new();
/// game.play_move(4).unwrap();
///
/// let rules = IntegrityRules::standard();
/// let context = HistoryContext::new(game.history(), game.cursor());
/// assert!(rules.enforce(&context).is_success());
/// ```
#[derive(Default)]
pub struct IntegrityRules {
    required_checks: Vec<IntegrityCheck>,
}

impl IntegrityRules {
    /// Rules covering every built-in session invariant.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&HistoryContext<'_>) -> Checked + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&HistoryContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &HistoryContext<'_>| {
            ensure(predicate(ctx), || IntegrityViolation::CustomCheckFailed {
                message: error_msg.clone(),
            })
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    pub fn enforce(&self, context: &HistoryContext<'_>) -> Checked {
        let entries = context.history.entries();
        let len = entries.len();
        let mut checks: Vec<Checked> = Vec::new();

        checks.push(ensure(len > 0, || IntegrityViolation::EmptyHistory));
        checks.push(ensure(len == 0 || context.cursor < len, || {
            IntegrityViolation::CursorOutOfRange {
                cursor: context.cursor,
                len,
            }
        }));

        if let Some(initial) = entries.first() {
            checks.push(ensure(initial.board.is_empty(), || {
                IntegrityViolation::InitialBoardNotEmpty
            }));
            if let Some(cell) = initial.last_move {
                checks.push(Validation::fail(IntegrityViolation::InitialEntryHasMove {
                    cell,
                }));
            }
        }

        for (entry, pair) in entries.windows(2).enumerate() {
            checks.extend(check_step(entry + 1, &pair[0], &pair[1]));
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        // Accumulate ALL failures using all_vec
        Validation::all_vec(checks).map(|_| ())
    }
}

/// Checks on entry `entry`, given its predecessor.
fn check_step(entry: usize, prev: &HistoryEntry, next: &HistoryEntry) -> Vec<Checked> {
    let mut checks = vec![ensure(detect(&prev.board).is_none(), || {
        IntegrityViolation::PlayedAfterWin { entry }
    })];

    let changed = prev.board.diff(&next.board);
    checks.push(ensure(changed.len() == 1, || {
        IntegrityViolation::NotSingleChange {
            entry,
            changed: changed.len(),
        }
    }));

    let Some(cell) = next.last_move else {
        checks.push(Validation::fail(IntegrityViolation::MissingMove { entry }));
        return checks;
    };
    let (Some(before), Some(after)) = (prev.board.get(cell), next.board.get(cell)) else {
        checks.push(Validation::fail(IntegrityViolation::MoveOffBoard { entry, cell }));
        return checks;
    };

    if let [only] = changed.as_slice() {
        checks.push(ensure(*only == cell, || IntegrityViolation::ChangedWrongCell {
            entry,
            recorded: cell,
            changed: *only,
        }));
    }
    checks.push(ensure(before.is_empty(), || IntegrityViolation::OverwroteCell {
        entry,
        cell,
    }));

    let expected = Mark::for_move(entry - 1);
    checks.push(ensure(after.mark() == Some(expected), || {
        IntegrityViolation::WrongMark {
            entry,
            expected,
            found: after.mark(),
        }
    }));

    checks
}
