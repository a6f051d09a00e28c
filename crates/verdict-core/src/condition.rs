//! Condition and action boundary
//!
//! A `Condition` is any `(&Facts) -> bool` function, an `Action` any
//! `(&mut Facts)` procedure. Expression-language adapters and rule
//! definition readers plug into the engine by producing values of these
//! traits; the core treats them opaquely.

use crate::error::{EvaluationError, ExecutionError};
use crate::facts::Facts;

/// A predicate over working memory
pub trait Condition: Send + Sync {
    /// Evaluate against working memory; side-effect free by convention
    fn evaluate(&self, facts: &Facts) -> Result<bool, EvaluationError>;
}

impl<F> Condition for F
where
    F: Fn(&Facts) -> Result<bool, EvaluationError> + Send + Sync,
{
    fn evaluate(&self, facts: &Facts) -> Result<bool, EvaluationError> {
        self(facts)
    }
}

/// A side effect run when a rule triggers
pub trait Action: Send + Sync {
    /// Execute against working memory; may mutate it
    fn execute(&self, facts: &mut Facts) -> Result<(), ExecutionError>;
}

impl<F> Action for F
where
    F: Fn(&mut Facts) -> Result<(), ExecutionError> + Send + Sync,
{
    fn execute(&self, facts: &mut Facts) -> Result<(), ExecutionError> {
        self(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_closure_condition() {
        let condition = |facts: &Facts| -> Result<bool, EvaluationError> {
            Ok(facts.get("rain") == Some(&Value::Bool(true)))
        };

        let mut facts = Facts::new();
        assert!(!condition.evaluate(&facts).unwrap());

        facts.put("rain", true);
        assert!(condition.evaluate(&facts).unwrap());
    }

    #[test]
    fn test_closure_condition_missing_fact() {
        let condition = |facts: &Facts| -> Result<bool, EvaluationError> {
            let age = facts.require("age")?;
            Ok(age.as_number().unwrap_or(0.0) >= 18.0)
        };

        let facts = Facts::new();
        let err = condition.evaluate(&facts).unwrap_err();
        assert!(matches!(err, EvaluationError::MissingFact(_)));
    }

    #[test]
    fn test_closure_action_mutates_facts() {
        let action = |facts: &mut Facts| -> Result<(), ExecutionError> {
            facts.put("umbrella", true);
            Ok(())
        };

        let mut facts = Facts::new();
        action.execute(&mut facts).unwrap();
        assert_eq!(facts.get("umbrella"), Some(&Value::Bool(true)));
    }
}
