//! Path rule
//!
//! One designated primary rule gates a set of secondaries. The group's
//! truth is the primary's truth alone; when it holds, the secondaries
//! are evaluated and the true ones execute after the primary. A false
//! secondary costs nothing, it is simply left out of the path.

use crate::replay::execute_selection;
use std::sync::Arc;
use verdict_core::{
    Evaluation, EvaluationError, ExecutionError, Facts, Rule, Rules, DEFAULT_PRIORITY,
};

/// Composite rule where a primary rule opens a path for secondaries
pub struct PathRule {
    name: String,
    description: String,
    priority: i32,
    primary: Arc<dyn Rule>,
    rules: Rules,
}

impl PathRule {
    /// Create a path rule around its primary
    pub fn new(name: impl Into<String>, primary: impl Rule + 'static) -> Self {
        PathRule {
            name: name.into(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            primary: Arc::new(primary),
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

    /// Add a secondary rule
    pub fn add_rule(&mut self, rule: impl Rule + 'static) {
        self.rules.register(rule);
    }

    /// Remove the secondary with the given name (case-insensitive)
    pub fn remove_rule(&mut self, name: &str) {
        self.rules.unregister_by_name(name);
    }
}

impl Rule for PathRule {
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
        let primary_evaluation = self.primary.evaluate(facts)?;
        if !primary_evaluation.is_triggered() {
            return Ok(Evaluation::new(false));
        }

        // Primary first, then whichever secondaries hold; their truth
        // does not affect the group's own
        let mut selection = vec![(self.primary.name().to_string(), primary_evaluation)];
        for child in self.rules.sorted() {
            let child_evaluation = child.evaluate(facts)?;
            if child_evaluation.is_triggered() {
                selection.push((child.name().to_string(), child_evaluation));
            }
        }

        Ok(Evaluation::with_children(true, selection))
    }

    fn execute(&self, facts: &mut Facts, evaluation: &Evaluation) -> Result<(), ExecutionError> {
        let mut children = evaluation.children().iter();

        // The leading entry is the primary, which lives outside the
        // secondary registry
        if let Some((name, primary_evaluation)) = children.next() {
            if name != self.primary.name() {
                return Err(ExecutionError::ActionFailed(format!(
                    "path rule '{}' record does not start with its primary (stale evaluation record?)",
                    self.name,
                )));
            }
            self.primary.execute(facts, primary_evaluation)?;
        }

        let secondaries = Evaluation::with_children(
            evaluation.is_triggered(),
            children.cloned().collect(),
        );
        execute_selection(&self.name, &self.rules, facts, &secondaries)
    }
}
