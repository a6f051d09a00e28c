//! Basic rule and builder
//!
//! `BasicRule` is the primitive rule shape: one condition, ordered
//! actions. `RuleBuilder` is the explicit adaptation point for plain
//! functions and closures; anything needing richer behavior implements
//! `Rule` directly.

use crate::condition::{Action, Condition};
use crate::error::{EvaluationError, ExecutionError};
use crate::facts::Facts;
use crate::rule::{Evaluation, Rule, DEFAULT_PRIORITY};

/// A rule built from one condition and a list of actions
pub struct BasicRule {
    name: String,
    description: String,
    priority: i32,
    condition: Option<Box<dyn Condition>>,
    actions: Vec<Box<dyn Action>>,
}

impl Rule for BasicRule {
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
        match &self.condition {
            Some(condition) => condition.evaluate(facts).map(Evaluation::new),
            // A rule with no condition never triggers
            None => Ok(Evaluation::new(false)),
        }
    }

    fn execute(&self, facts: &mut Facts, _evaluation: &Evaluation) -> Result<(), ExecutionError> {
        for action in &self.actions {
            action.execute(facts)?;
        }
        Ok(())
    }
}

/// Builder for [`BasicRule`]
///
/// # Example
///
/// ```
/// use verdict_core::{Facts, RuleBuilder, Value};
///
/// let rule = RuleBuilder::new("weather rule")
///     .description("if it rains then take an umbrella")
///     .priority(1)
///     .when(|facts: &Facts| Ok(facts.get("rain") == Some(&Value::Bool(true))))
///     .then(|facts: &mut Facts| {
///         facts.put("umbrella", true);
///         Ok(())
///     })
///     .build();
/// ```
pub struct RuleBuilder {
    name: String,
    description: String,
    priority: i32,
    condition: Option<Box<dyn Condition>>,
    actions: Vec<Box<dyn Action>>,
}

impl RuleBuilder {
    /// Start a rule with the given name
    pub fn new(name: impl Into<String>) -> Self {
        RuleBuilder {
            name: name.into(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            condition: None,
            actions: Vec::new(),
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority (lower fires earlier)
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the condition from a closure
    pub fn when<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Facts) -> Result<bool, EvaluationError> + Send + Sync + 'static,
    {
        self.condition = Some(Box::new(condition));
        self
    }

    /// Set the condition from a [`Condition`] implementation
    pub fn when_condition(mut self, condition: impl Condition + 'static) -> Self {
        self.condition = Some(Box::new(condition));
        self
    }

    /// Append an action from a closure; actions run in the order they
    /// were added
    pub fn then<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut Facts) -> Result<(), ExecutionError> + Send + Sync + 'static,
    {
        self.actions.push(Box::new(action));
        self
    }

    /// Append an action from an [`Action`] implementation
    pub fn then_action(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Build the rule
    pub fn build(self) -> BasicRule {
        BasicRule {
            name: self.name,
            description: self.description,
            priority: self.priority,
            condition: self.condition,
            actions: self.actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_builder_defaults() {
        let rule = RuleBuilder::new("noop").build();

        assert_eq!(rule.name(), "noop");
        assert_eq!(rule.description(), "");
        assert_eq!(rule.priority(), DEFAULT_PRIORITY);

        // No condition: never triggers
        let facts = Facts::new();
        assert!(!rule.evaluate(&facts).unwrap().is_triggered());
    }

    #[test]
    fn test_rule_triggers_and_executes() {
        let rule = RuleBuilder::new("weather rule")
            .priority(1)
            .when(|facts: &Facts| Ok(facts.get("rain") == Some(&Value::Bool(true))))
            .then(|facts: &mut Facts| {
                facts.put("umbrella", true);
                Ok(())
            })
            .build();

        let mut facts = Facts::new();
        facts.put("rain", true);

        let evaluation = rule.evaluate(&facts).unwrap();
        assert!(evaluation.is_triggered());

        rule.execute(&mut facts, &evaluation).unwrap();
        assert_eq!(facts.get("umbrella"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_actions_run_in_declared_order() {
        let rule = RuleBuilder::new("ordered")
            .when(|_: &Facts| Ok(true))
            .then(|facts: &mut Facts| {
                facts.put("trace", "first");
                Ok(())
            })
            .then(|facts: &mut Facts| {
                let seen = facts.get("trace").and_then(|v| v.as_str()).unwrap_or("");
                let trace = format!("{},second", seen);
                facts.put("trace", trace);
                Ok(())
            })
            .build();

        let mut facts = Facts::new();
        let evaluation = rule.evaluate(&facts).unwrap();
        rule.execute(&mut facts, &evaluation).unwrap();

        assert_eq!(
            facts.get("trace").and_then(|v| v.as_str()),
            Some("first,second")
        );
    }

    #[test]
    fn test_execute_stops_at_first_failing_action() {
        let rule = RuleBuilder::new("fails")
            .when(|_: &Facts| Ok(true))
            .then(|_: &mut Facts| Err(ExecutionError::ActionFailed("boom".to_string())))
            .then(|facts: &mut Facts| {
                facts.put("unreachable", true);
                Ok(())
            })
            .build();

        let mut facts = Facts::new();
        let evaluation = rule.evaluate(&facts).unwrap();
        let err = rule.execute(&mut facts, &evaluation).unwrap_err();

        assert!(matches!(err, ExecutionError::ActionFailed(_)));
        assert!(!facts.contains("unreachable"));
    }
}
