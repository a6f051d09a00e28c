//! Unit rule group
//!
//! An all-or-nothing group: triggered only when every child's condition
//! holds, in which case every child executes in natural order. An empty
//! group never triggers.

use crate::replay::execute_selection;
use verdict_core::{
    Evaluation, EvaluationError, ExecutionError, Facts, Rule, Rules, DEFAULT_PRIORITY,
};

/// Composite rule that triggers only when all of its children do
pub struct UnitRuleGroup {
    name: String,
    description: String,
    priority: i32,
    rules: Rules,
}

impl UnitRuleGroup {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        UnitRuleGroup {
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
}

impl Rule for UnitRuleGroup {
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
        if self.rules.is_empty() {
            return Ok(Evaluation::new(false));
        }

        let mut selection = Vec::new();
        for child in self.rules.sorted() {
            let child_evaluation = child.evaluate(facts)?;
            if !child_evaluation.is_triggered() {
                return Ok(Evaluation::new(false));
            }
            selection.push((child.name().to_string(), child_evaluation));
        }

        Ok(Evaluation::with_children(true, selection))
    }

    fn execute(&self, facts: &mut Facts, evaluation: &Evaluation) -> Result<(), ExecutionError> {
        execute_selection(&self.name, &self.rules, facts, evaluation)
    }
}
