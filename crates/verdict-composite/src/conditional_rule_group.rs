//! Conditional rule group
//!
//! The single highest-priority child is the gate: the group triggers iff
//! the gate does, and the gate's truth decides whether the remaining
//! children are considered at all. Two children tied for highest
//! priority make the gate ambiguous, which is a configuration error
//! detected when the group is evaluated, not when children are added.

use crate::replay::execute_selection;
use std::sync::Arc;
use verdict_core::{
    Evaluation, EvaluationError, ExecutionError, Facts, Rule, Rules, DEFAULT_PRIORITY,
};

/// Composite rule gated by its highest-priority child
pub struct ConditionalRuleGroup {
    name: String,
    description: String,
    priority: i32,
    rules: Rules,
}

impl ConditionalRuleGroup {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        ConditionalRuleGroup {
            name: name.into(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            rules: Rules::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the group priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Add a child rule
    pub fn add_rule(&mut self, rule: impl Rule + 'static) {
        self.rules.register(rule);
    }

    /// Remove the child with the given name (case-insensitive)
    pub fn remove_rule(&mut self, name: &str) {
        self.rules.unregister_by_name(name);
    }

    /// The unique highest-priority child, or an error when the gate is
    /// ambiguous
    fn gate(&self) -> Result<Option<Arc<dyn Rule>>, EvaluationError> {
        let sorted = self.rules.sorted();
        let Some(gate) = sorted.first() else {
            return Ok(None);
        };
        if let Some(runner_up) = sorted.get(1) {
            if runner_up.priority() == gate.priority() {
                return Err(EvaluationError::InvalidGroup(format!(
                    "conditional group '{}': rules '{}' and '{}' share highest priority {}",
                    self.name,
                    gate.name(),
                    runner_up.name(),
                    gate.priority(),
                )));
            }
        }
        Ok(Some(gate.clone()))
    }
}

impl Rule for ConditionalRuleGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn evaluate(&self, facts: &Facts) -> Result<Evaluation, EvaluationError> {
        let Some(gate) = self.gate()? else {
            // No children, no gate
            return Ok(Evaluation::new(false));
        };

        let gate_evaluation = gate.evaluate(facts)?;
        if !gate_evaluation.is_triggered() {
            return Ok(Evaluation::new(false));
        }
        log::debug!(
            "conditional group '{}' gate '{}' holds",
            self.name,
            gate.name()
        );

        // Gate first, then every other child that also holds
        let mut selection = vec![(gate.name().to_string(), gate_evaluation)];
        for child in self.rules.sorted() {
            if child.name() == gate.name() && child.priority() == gate.priority() {
                continue;
            }
            let child_evaluation = child.evaluate(facts)?;
            if child_evaluation.is_triggered() {
                selection.push((child.name().to_string(), child_evaluation));
            }
        }

        Ok(Evaluation::with_children(true, selection))
    }

    fn execute(&self, facts: &mut Facts, evaluation: &Evaluation) -> Result<(), ExecutionError> {
        execute_selection(&self.name, &self.rules, facts, evaluation)
    }
}
