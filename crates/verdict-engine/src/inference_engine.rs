//! Fixed-point rule engine
//!
//! Wraps the single-pass engine in a loop: select the rules whose
//! conditions currently hold, fire them, and repeat until an iteration
//! selects none. Actions usually retract or rewrite the facts that made
//! them true, so the candidate set shrinks; if it never does, the loop
//! never ends. Termination is the rule author's responsibility unless
//! an explicit iteration cap is configured.

use crate::default_engine::DefaultEngine;
use crate::engine::RulesEngine;
use crate::error::{EngineError, Result};
use crate::parameters::EngineParameters;
use std::collections::HashMap;
use verdict_core::{EvaluationError, Facts, Rules};

/// Rule engine that fires rules until a fixed point is reached
pub struct InferenceEngine {
    engine: DefaultEngine,
    max_iterations: Option<usize>,
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceEngine {
    /// Create an inference engine with default parameters
    pub fn new() -> Self {
        Self::with_parameters(EngineParameters::default())
    }

    /// Create an inference engine with the given parameters
    pub fn with_parameters(parameters: EngineParameters) -> Self {
        InferenceEngine {
            engine: DefaultEngine::with_parameters(parameters),
            max_iterations: None,
        }
    }

    /// Wrap an already-configured single-pass engine (listeners apply
    /// within each iteration)
    pub fn from_engine(engine: DefaultEngine) -> Self {
        InferenceEngine {
            engine,
            max_iterations: None,
        }
    }

    /// Bound the number of firing iterations. Unbounded by default;
    /// exceeding the bound fails with [`EngineError::IterationLimit`]
    /// instead of looping forever.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Evaluate every rule against the current facts and collect the
    /// ones whose conditions hold. A pure scan: thresholds and skip
    /// policies play no part here, only the missing-fact policy does.
    fn select_candidates(&self, rules: &Rules, facts: &Facts) -> Result<Rules> {
        let mut candidates = Rules::new();
        for rule in rules.sorted() {
            match rule.evaluate(facts) {
                Ok(evaluation) if evaluation.is_triggered() => {
                    candidates.register_arc(rule.clone());
                }
                Ok(_) => {}
                Err(EvaluationError::MissingFact(fact))
                    if self.engine.parameters().skip_on_missing_fact() =>
                {
                    tracing::debug!(
                        rule = rule.name(),
                        fact = %fact,
                        "missing fact, not a candidate"
                    );
                }
                Err(source) => {
                    return Err(EngineError::Evaluation {
                        rule: rule.name().to_string(),
                        source,
                    });
                }
            }
        }
        Ok(candidates)
    }
}

impl RulesEngine for InferenceEngine {
    fn parameters(&self) -> EngineParameters {
        self.engine.parameters()
    }

    fn fire(&self, rules: &Rules, facts: &mut Facts) -> Result<()> {
        let mut iterations = 0usize;
        loop {
            tracing::debug!(iteration = iterations, "selecting candidate rules");
            let candidates = self.select_candidates(rules, facts)?;
            if candidates.is_empty() {
                tracing::debug!(iterations, "fixed point reached");
                return Ok(());
            }

            if let Some(limit) = self.max_iterations {
                if iterations >= limit {
                    return Err(EngineError::IterationLimit { limit });
                }
            }
            iterations += 1;

            self.engine.fire(&candidates, facts)?;
        }
    }

    /// Read-only diagnostic: a single evaluate pass, no fixed-point
    /// iteration
    fn check(&self, rules: &Rules, facts: &Facts) -> Result<HashMap<String, bool>> {
        self.engine.check(rules, facts)
    }
}
