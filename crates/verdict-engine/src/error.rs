//! Engine error types

use thiserror::Error;
use verdict_core::EvaluationError;

/// Error terminating a fire or check run.
///
/// Action failures never appear here: the single-pass engine reports
/// them to listeners and keeps going (or stops, per policy) without
/// propagating them to the caller.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A rule's condition failed in a way the run cannot recover from
    #[error("rule '{rule}' failed to evaluate: {source}")]
    Evaluation {
        /// Name of the rule whose evaluation failed
        rule: String,
        /// The underlying evaluation error
        #[source]
        source: EvaluationError,
    },

    /// The inference engine hit its configured iteration cap
    #[error("no fixed point reached within {limit} iterations")]
    IterationLimit {
        /// The configured cap
        limit: usize,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
