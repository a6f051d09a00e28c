//! Activation rule group
//!
//! First match wins: children are tried in natural order and the first
//! one whose condition holds is the group's selection; only that child
//! executes. Children effectively compete, priority deciding who gets
//! the first try.

use crate::replay::execute_selection;
use verdict_core::{
    Evaluation, EvaluationError, ExecutionError, Facts, Rule, Rules, DEFAULT_PRIORITY,
};

/// Composite rule where the first matching child wins
pub struct ActivationRuleGroup {
    name: String,
    description: String,
    priority: i32,
    rules: Rules,
}

impl ActivationRuleGroup {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        ActivationRuleGroup {
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

impl Rule for ActivationRuleGroup {
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
        for child in self.rules.sorted() {
            let child_evaluation = child.evaluate(facts)?;
            if child_evaluation.is_triggered() {
                log::debug!(
                    "activation group '{}' selected rule '{}'",
                    self.name,
                    child.name()
                );
                return Ok(Evaluation::with_children(
                    true,
                    vec![(child.name().to_string(), child_evaluation)],
                ));
            }
        }
        Ok(Evaluation::new(false))
    }

    fn execute(&self, facts: &mut Facts, evaluation: &Evaluation) -> Result<(), ExecutionError> {
        execute_selection(&self.name, &self.rules, facts, evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use verdict_core::RuleBuilder;

    fn child(name: &str, priority: i32, triggers: bool, trace: Arc<Mutex<Vec<String>>>) -> impl Rule {
        let label = name.to_string();
        RuleBuilder::new(name)
            .priority(priority)
            .when(move |_: &Facts| Ok(triggers))
            .then(move |_: &mut Facts| {
                trace.lock().unwrap().push(label.clone());
                Ok(())
            })
            .build()
    }

    #[test]
    fn test_first_match_in_priority_order_wins() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let mut group = ActivationRuleGroup::new("group");
        group.add_rule(child("fallback", 2, true, trace.clone()));
        group.add_rule(child("preferred", 1, true, trace.clone()));

        let mut facts = Facts::new();
        let evaluation = group.evaluate(&facts).unwrap();
        assert!(evaluation.is_triggered());

        group.execute(&mut facts, &evaluation).unwrap();
        assert_eq!(*trace.lock().unwrap(), vec!["preferred"]);
    }

    #[test]
    fn test_skips_non_matching_children() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let mut group = ActivationRuleGroup::new("group");
        group.add_rule(child("first", 1, false, trace.clone()));
        group.add_rule(child("second", 2, true, trace.clone()));

        let mut facts = Facts::new();
        let evaluation = group.evaluate(&facts).unwrap();
        group.execute(&mut facts, &evaluation).unwrap();

        assert_eq!(*trace.lock().unwrap(), vec!["second"]);
    }

    #[test]
    fn test_no_match_means_not_triggered() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let mut group = ActivationRuleGroup::new("group");
        group.add_rule(child("a", 1, false, trace.clone()));
        group.add_rule(child("b", 2, false, trace));

        let facts = Facts::new();
        assert!(!group.evaluate(&facts).unwrap().is_triggered());
    }

    #[test]
    fn test_empty_group_evaluates_false() {
        let group = ActivationRuleGroup::new("empty");
        assert!(!group.evaluate(&Facts::new()).unwrap().is_triggered());
    }
}
