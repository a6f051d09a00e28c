//! The rule contract
//!
//! A rule is a named, prioritized condition plus actions. Engines always
//! call `evaluate` and, when it reports triggered, immediately call
//! `execute` with the `Evaluation` it returned. Composite rules rely on
//! that pairing: their child selection travels inside the record, so a
//! stale record replays a stale selection.

use crate::error::{EvaluationError, ExecutionError};
use crate::facts::Facts;
use std::cmp::Ordering;

/// Default rule priority: the "lowest priority" sentinel, so rules that
/// never set one fire after every rule that did.
pub const DEFAULT_PRIORITY: i32 = i32::MAX;

/// Outcome of evaluating a rule against working memory.
///
/// For primitive rules this is just the triggered flag. Composite rules
/// record which children matched (and each child's own record), and
/// `execute` replays exactly that selection.
#[derive(Debug, Clone)]
pub struct Evaluation {
    triggered: bool,
    children: Vec<(String, Evaluation)>,
}

impl Evaluation {
    /// A record with no child selection
    pub fn new(triggered: bool) -> Self {
        Evaluation {
            triggered,
            children: Vec::new(),
        }
    }

    /// A record carrying the ordered child selection to execute
    pub fn with_children(triggered: bool, children: Vec<(String, Evaluation)>) -> Self {
        Evaluation {
            triggered,
            children,
        }
    }

    /// Whether the rule's condition held
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// The selected children, in execution order
    pub fn children(&self) -> &[(String, Evaluation)] {
        &self.children
    }
}

/// A named, prioritized condition+actions pair
pub trait Rule: Send + Sync {
    /// Rule name, unique within one registry
    fn name(&self) -> &str;

    /// Informational description
    fn description(&self) -> &str {
        ""
    }

    /// Rule priority; lower values fire earlier
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Evaluate the condition against working memory.
    ///
    /// Side-effect free by convention. A condition that depends on an
    /// absent fact returns `EvaluationError::MissingFact` so the engine
    /// can apply its missing-fact policy; any other error fails the run.
    fn evaluate(&self, facts: &Facts) -> Result<Evaluation, EvaluationError>;

    /// Execute the actions, replaying the given evaluation record.
    ///
    /// `evaluation` must come from an immediately preceding `evaluate`
    /// call against the same facts.
    fn execute(&self, facts: &mut Facts, evaluation: &Evaluation) -> Result<(), ExecutionError>;
}

/// Natural rule order: priority ascending, then name ascending.
///
/// The name tiebreak makes the order total and deterministic even among
/// equal priorities; two rules compare equal iff same priority and name.
pub fn natural_order(a: &dyn Rule, b: &dyn Rule) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.name().cmp(b.name()))
}
