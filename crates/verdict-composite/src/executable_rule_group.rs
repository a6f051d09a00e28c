//! Executable rule group
//!
//! Same all-or-nothing evaluation as the unit group, with one group
//! level action bound at construction that runs after the children.

use crate::replay::execute_selection;
use verdict_core::{
    Action, Evaluation, EvaluationError, ExecutionError, Facts, Rule, Rules, DEFAULT_PRIORITY,
};

/// All-or-nothing group with a trailing group-level action
pub struct ExecutableRuleGroup {
    name: String,
    description: String,
    priority: i32,
    rules: Rules,
    action: Box<dyn Action>,
}

impl ExecutableRuleGroup {
    /// Create an empty group with its group-level action
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut Facts) -> Result<(), ExecutionError> + Send + Sync + 'static,
    {
        Self::from_action(name, action)
    }

    /// Create an empty group from an [`Action`] implementation
    pub fn from_action(name: impl Into<String>, action: impl Action + 'static) -> Self {
        ExecutableRuleGroup {
            name: name.into(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            rules: Rules::new(),
            action: Box::new(action),
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

impl Rule for ExecutableRuleGroup {
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
        execute_selection(&self.name, &self.rules, facts, evaluation)?;
        self.action.execute(facts)
    }
}
