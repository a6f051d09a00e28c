//! Single-pass rule engine
//!
//! Iterates the sorted rule set exactly once per `fire` or `check`
//! call. The control flow distinguishes two kinds of early exit: a
//! listener gate or a missing fact skips the one rule (continue), while
//! the priority threshold and the skip policies abandon the rest of the
//! pass (break). Everything after a break never gets a chance to run.

use crate::engine::RulesEngine;
use crate::error::{EngineError, Result};
use crate::listener::{EngineListener, RuleListener};
use crate::parameters::EngineParameters;
use std::collections::HashMap;
use verdict_core::{EvaluationError, Facts, Rule, Rules};

/// Single-pass rule engine
pub struct DefaultEngine {
    parameters: EngineParameters,
    rule_listeners: Vec<Box<dyn RuleListener>>,
    engine_listeners: Vec<Box<dyn EngineListener>>,
}

impl Default for DefaultEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultEngine {
    /// Create an engine with default parameters and no listeners
    pub fn new() -> Self {
        Self::with_parameters(EngineParameters::default())
    }

    /// Create an engine with the given parameters and no listeners
    pub fn with_parameters(parameters: EngineParameters) -> Self {
        DefaultEngine {
            parameters,
            rule_listeners: Vec::new(),
            engine_listeners: Vec::new(),
        }
    }

    /// Start building an engine with listeners
    pub fn builder() -> DefaultEngineBuilder {
        DefaultEngineBuilder::new()
    }

    /// The rule listeners attached to this engine
    pub fn rule_listeners(&self) -> &[Box<dyn RuleListener>] {
        &self.rule_listeners
    }

    /// One full apply pass over the sorted rule set
    pub(crate) fn do_fire(&self, rules: &Rules, facts: &mut Facts) -> Result<()> {
        if rules.is_empty() {
            tracing::warn!("no rules registered, nothing to apply");
            return Ok(());
        }

        // Fresh order every pass: priorities are read now, not cached
        for rule in rules.sorted() {
            let name = rule.name();

            if !self.accept(rule.as_ref(), facts) {
                // Gate skip: the rule stays invisible to skip policies
                continue;
            }

            if rule.priority() > self.parameters.priority_threshold() {
                tracing::debug!(
                    rule = name,
                    priority = rule.priority(),
                    threshold = self.parameters.priority_threshold(),
                    "rule priority exceeds threshold, abandoning remaining rules"
                );
                break;
            }

            let evaluation = match rule.evaluate(facts) {
                Ok(evaluation) => evaluation,
                Err(EvaluationError::MissingFact(fact))
                    if self.parameters.skip_on_missing_fact() =>
                {
                    tracing::debug!(rule = name, fact = %fact, "missing fact, skipping rule");
                    continue;
                }
                Err(source) => {
                    return Err(EngineError::Evaluation {
                        rule: name.to_string(),
                        source,
                    });
                }
            };

            if evaluation.is_triggered() {
                tracing::debug!(rule = name, "rule triggered");
                for listener in &self.rule_listeners {
                    listener.after_evaluate(rule.as_ref(), facts, true);
                }
                for listener in &self.rule_listeners {
                    listener.before_execute(rule.as_ref(), facts);
                }

                match rule.execute(facts, &evaluation) {
                    Ok(()) => {
                        tracing::debug!(rule = name, "rule executed");
                        for listener in &self.rule_listeners {
                            listener.on_success(rule.as_ref(), facts);
                        }
                        if self.parameters.skip_on_first_applied_rule() {
                            tracing::debug!("skip_on_first_applied_rule, stopping");
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::error!(rule = name, error = %error, "rule execution failed");
                        for listener in &self.rule_listeners {
                            listener.on_failure(rule.as_ref(), facts, &error);
                        }
                        if self.parameters.skip_on_first_failed_rule() {
                            tracing::debug!("skip_on_first_failed_rule, stopping");
                            break;
                        }
                    }
                }
            } else {
                tracing::debug!(rule = name, "rule not triggered");
                for listener in &self.rule_listeners {
                    listener.after_evaluate(rule.as_ref(), facts, false);
                }
                if self.parameters.skip_on_first_non_triggered_rule() {
                    tracing::debug!("skip_on_first_non_triggered_rule, stopping");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Consult every rule listener's gate; any `false` vote skips the rule
    fn accept(&self, rule: &dyn Rule, facts: &Facts) -> bool {
        self.rule_listeners
            .iter()
            .all(|listener| listener.before_evaluate(rule, facts))
    }
}

impl RulesEngine for DefaultEngine {
    fn parameters(&self) -> EngineParameters {
        self.parameters
    }

    fn fire(&self, rules: &Rules, facts: &mut Facts) -> Result<()> {
        for listener in &self.engine_listeners {
            listener.before_evaluate(rules, facts);
        }
        let result = self.do_fire(rules, facts);
        for listener in &self.engine_listeners {
            listener.after_execute(rules, facts);
        }
        result
    }

    fn check(&self, rules: &Rules, facts: &Facts) -> Result<HashMap<String, bool>> {
        for listener in &self.engine_listeners {
            listener.before_evaluate(rules, facts);
        }

        let mut results = HashMap::new();
        for rule in rules.sorted() {
            let name = rule.name();

            if !self.accept(rule.as_ref(), facts) {
                continue;
            }

            if rule.priority() > self.parameters.priority_threshold() {
                tracing::debug!(
                    rule = name,
                    "rule priority exceeds threshold, abandoning remaining rules"
                );
                break;
            }

            match rule.evaluate(facts) {
                Ok(evaluation) => {
                    let triggered = evaluation.is_triggered();
                    for listener in &self.rule_listeners {
                        listener.after_evaluate(rule.as_ref(), facts, triggered);
                    }
                    results.insert(name.to_string(), triggered);
                }
                Err(EvaluationError::MissingFact(fact))
                    if self.parameters.skip_on_missing_fact() =>
                {
                    tracing::debug!(rule = name, fact = %fact, "missing fact, skipping rule");
                }
                Err(source) => {
                    return Err(EngineError::Evaluation {
                        rule: name.to_string(),
                        source,
                    });
                }
            }
        }

        Ok(results)
    }
}

/// Builder for [`DefaultEngine`]
pub struct DefaultEngineBuilder {
    parameters: EngineParameters,
    rule_listeners: Vec<Box<dyn RuleListener>>,
    engine_listeners: Vec<Box<dyn EngineListener>>,
}

impl Default for DefaultEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultEngineBuilder {
    /// Start with default parameters and no listeners
    pub fn new() -> Self {
        DefaultEngineBuilder {
            parameters: EngineParameters::default(),
            rule_listeners: Vec::new(),
            engine_listeners: Vec::new(),
        }
    }

    /// Set the engine parameters
    pub fn parameters(mut self, parameters: EngineParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Attach a rule listener
    pub fn rule_listener(mut self, listener: impl RuleListener + 'static) -> Self {
        self.rule_listeners.push(Box::new(listener));
        self
    }

    /// Attach an engine listener
    pub fn engine_listener(mut self, listener: impl EngineListener + 'static) -> Self {
        self.engine_listeners.push(Box::new(listener));
        self
    }

    /// Build the engine
    pub fn build(self) -> DefaultEngine {
        DefaultEngine {
            parameters: self.parameters,
            rule_listeners: self.rule_listeners,
            engine_listeners: self.engine_listeners,
        }
    }
}
