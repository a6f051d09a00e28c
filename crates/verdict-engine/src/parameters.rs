//! Engine parameters
//!
//! Configuration bundle controlling short-circuit and threshold behavior
//! of a single fire or check pass. Values are read once per pass; the
//! struct is `Copy`, so getters hand out copies and the caller's
//! instance stays untouched.

/// No threshold: every priority passes
const NO_THRESHOLD: i32 = i32::MAX;

/// Configuration for a rule engine
#[derive(Debug, Clone, Copy)]
pub struct EngineParameters {
    skip_on_first_applied_rule: bool,
    skip_on_first_failed_rule: bool,
    skip_on_first_non_triggered_rule: bool,
    skip_on_missing_fact: bool,
    priority_threshold: i32,
}

impl Default for EngineParameters {
    fn default() -> Self {
        EngineParameters {
            skip_on_first_applied_rule: false,
            skip_on_first_failed_rule: false,
            skip_on_first_non_triggered_rule: false,
            skip_on_missing_fact: false,
            priority_threshold: NO_THRESHOLD,
        }
    }
}

impl EngineParameters {
    /// Default parameters: no short-circuiting, no threshold, strict
    /// missing-fact handling
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the pass after the first rule that executes successfully
    pub fn with_skip_on_first_applied_rule(mut self, skip: bool) -> Self {
        self.skip_on_first_applied_rule = skip;
        self
    }

    /// Stop the pass after the first rule whose actions fail
    pub fn with_skip_on_first_failed_rule(mut self, skip: bool) -> Self {
        self.skip_on_first_failed_rule = skip;
        self
    }

    /// Stop the pass at the first rule whose condition does not hold
    pub fn with_skip_on_first_non_triggered_rule(mut self, skip: bool) -> Self {
        self.skip_on_first_non_triggered_rule = skip;
        self
    }

    /// Skip a rule whose condition needs an absent fact instead of
    /// failing the whole run
    pub fn with_skip_on_missing_fact(mut self, skip: bool) -> Self {
        self.skip_on_missing_fact = skip;
        self
    }

    /// Abandon the pass once a rule's priority exceeds this threshold
    pub fn with_priority_threshold(mut self, threshold: i32) -> Self {
        self.priority_threshold = threshold;
        self
    }

    pub fn skip_on_first_applied_rule(&self) -> bool {
        self.skip_on_first_applied_rule
    }

    pub fn skip_on_first_failed_rule(&self) -> bool {
        self.skip_on_first_failed_rule
    }

    pub fn skip_on_first_non_triggered_rule(&self) -> bool {
        self.skip_on_first_non_triggered_rule
    }

    pub fn skip_on_missing_fact(&self) -> bool {
        self.skip_on_missing_fact
    }

    pub fn priority_threshold(&self) -> i32 {
        self.priority_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = EngineParameters::new();

        assert!(!params.skip_on_first_applied_rule());
        assert!(!params.skip_on_first_failed_rule());
        assert!(!params.skip_on_first_non_triggered_rule());
        assert!(!params.skip_on_missing_fact());
        assert_eq!(params.priority_threshold(), i32::MAX);
    }

    #[test]
    fn test_builder_setters() {
        let params = EngineParameters::new()
            .with_skip_on_first_applied_rule(true)
            .with_priority_threshold(10);

        assert!(params.skip_on_first_applied_rule());
        assert_eq!(params.priority_threshold(), 10);
        assert!(!params.skip_on_first_failed_rule());
    }

    #[test]
    fn test_copy_preserves_caller_instance() {
        let params = EngineParameters::new().with_priority_threshold(5);
        let copy = params;
        let modified = copy.with_priority_threshold(7);

        assert_eq!(params.priority_threshold(), 5);
        assert_eq!(modified.priority_threshold(), 7);
    }
}
