//! Listener hooks
//!
//! Observers invoked around individual evaluate/execute steps
//! (`RuleListener`) and around whole fire/check batches
//! (`EngineListener`). Every engine instance owns its listener lists,
//! injected at construction and empty by default. Listeners are expected
//! to be well-behaved: one that panics aborts the run.

use verdict_core::{ExecutionError, Facts, Rule, Rules};

/// Observer of per-rule evaluate/execute steps
pub trait RuleListener: Send + Sync {
    /// Gate called before a rule is evaluated. Returning `false` skips
    /// the rule entirely: it is not evaluated, not executed, invisible
    /// to every skip policy, and omitted from check results.
    fn before_evaluate(&self, _rule: &dyn Rule, _facts: &Facts) -> bool {
        true
    }

    /// Called after a rule's condition was evaluated
    fn after_evaluate(&self, _rule: &dyn Rule, _facts: &Facts, _triggered: bool) {}

    /// Called right before a triggered rule's actions run
    fn before_execute(&self, _rule: &dyn Rule, _facts: &Facts) {}

    /// Called after a rule's actions completed successfully
    fn on_success(&self, _rule: &dyn Rule, _facts: &Facts) {}

    /// Called after a rule's actions failed. This is the only way an
    /// action failure is observable from outside the engine.
    fn on_failure(&self, _rule: &dyn Rule, _facts: &Facts, _error: &ExecutionError) {}
}

/// Observer of whole fire/check batches
pub trait EngineListener: Send + Sync {
    /// Called before the rule set is evaluated (fire and check)
    fn before_evaluate(&self, _rules: &Rules, _facts: &Facts) {}

    /// Called after a fire batch finished executing
    fn after_execute(&self, _rules: &Rules, _facts: &Facts) {}
}
