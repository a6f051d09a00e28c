//! Unit tests for verdict-core
//!
//! Covers the data model and registry contracts the engines depend on.

use verdict_core::{
    natural_order, Evaluation, EvaluationError, Fact, Facts, Rule, RuleBuilder, Rules, Value,
    DEFAULT_PRIORITY,
};

// ========== Facts Tests ==========

#[test]
fn test_facts_uniqueness() {
    let mut facts = Facts::new();
    facts.put("x", 1);
    facts.put("x", 2);

    assert_eq!(facts.len(), 1);
    assert_eq!(facts.get("x"), Some(&Value::Number(2.0)));
}

#[test]
fn test_facts_from_json() -> anyhow::Result<()> {
    let facts: Facts = serde_json::from_str(r#"{"rain": true, "age": 18, "name": "Ada"}"#)?;

    assert_eq!(facts.get("rain"), Some(&Value::Bool(true)));
    assert_eq!(facts.get("age"), Some(&Value::Number(18.0)));
    assert_eq!(facts.get("name"), Some(&Value::String("Ada".to_string())));
    Ok(())
}

#[test]
fn test_facts_collected_from_pairs() {
    let facts: Facts = vec![
        ("rain".to_string(), Value::Bool(true)),
        ("age".to_string(), Value::Number(18.0)),
    ]
    .into_iter()
    .collect();

    assert_eq!(facts.len(), 2);
    assert!(facts.contains("rain"));
}

#[test]
fn test_fact_identity_by_name() {
    assert_eq!(Fact::new("a", 1), Fact::new("a", 2));
    assert_ne!(Fact::new("a", 1), Fact::new("b", 1));
}

// ========== Rule Contract Tests ==========

#[test]
fn test_rule_natural_order_example() {
    // rules named "a" priority 1 and "b" priority 0: "b" comes first
    let a = RuleBuilder::new("a").priority(1).build();
    let b = RuleBuilder::new("b").priority(0).build();

    assert_eq!(natural_order(&b, &a), std::cmp::Ordering::Less);
}

#[test]
fn test_missing_fact_surfaces_from_evaluate() {
    let rule = RuleBuilder::new("age rule")
        .when(|facts: &Facts| {
            let age = facts.require("age")?;
            Ok(age.as_number().unwrap_or(0.0) >= 18.0)
        })
        .build();

    let facts = Facts::new();
    let err = rule.evaluate(&facts).unwrap_err();
    assert!(matches!(err, EvaluationError::MissingFact(name) if name == "age"));
}

#[test]
fn test_default_priority_sentinel() {
    let rule = RuleBuilder::new("late").build();
    assert_eq!(rule.priority(), DEFAULT_PRIORITY);
}

// ========== Registry Tests ==========

#[test]
fn test_registry_orders_and_dedups() {
    let mut rules = Rules::new();
    rules.register(RuleBuilder::new("b").priority(0).build());
    rules.register(RuleBuilder::new("a").priority(1).build());
    rules.register(RuleBuilder::new("a").priority(1).build());

    let view = rules.sorted();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].name(), "b");
    assert_eq!(view[1].name(), "a");
}

#[test]
fn test_registry_sorted_view_is_fresh() {
    // A rule whose priority changes between calls: the view must follow
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Arc;

    struct Movable {
        name: String,
        priority: Arc<AtomicI32>,
    }

    impl Rule for Movable {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> i32 {
            self.priority.load(Ordering::Relaxed)
        }

        fn evaluate(&self, _: &Facts) -> Result<Evaluation, EvaluationError> {
            Ok(Evaluation::new(false))
        }

        fn execute(
            &self,
            _: &mut Facts,
            _: &Evaluation,
        ) -> Result<(), verdict_core::ExecutionError> {
            Ok(())
        }
    }

    let priority = Arc::new(AtomicI32::new(10));
    let mut rules = Rules::new();
    rules.register(Movable {
        name: "movable".to_string(),
        priority: priority.clone(),
    });
    rules.register(RuleBuilder::new("fixed").priority(5).build());

    assert_eq!(rules.sorted()[0].name(), "fixed");

    priority.store(0, Ordering::Relaxed);
    assert_eq!(rules.sorted()[0].name(), "movable");
}
