//! The engine contract

use crate::error::Result;
use crate::parameters::EngineParameters;
use std::collections::HashMap;
use verdict_core::{Facts, Rules};

/// A rule engine: evaluates a registry of rules against working memory
/// and executes the ones whose conditions hold
pub trait RulesEngine {
    /// The parameters this engine runs with
    fn parameters(&self) -> EngineParameters;

    /// Evaluate and execute the rules against the facts. Facts are
    /// mutated in place by whichever actions ran; individual action
    /// failures do not fail the call.
    fn fire(&self, rules: &Rules, facts: &mut Facts) -> Result<()>;

    /// Dry run: evaluate the rules without executing any action,
    /// returning each evaluated rule's name mapped to its result.
    fn check(&self, rules: &Rules, facts: &Facts) -> Result<HashMap<String, bool>>;
}
