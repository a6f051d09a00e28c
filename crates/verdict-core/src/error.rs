//! Error types for verdict-core

use thiserror::Error;

/// Error raised while evaluating a rule's condition.
///
/// `MissingFact` is a recoverable signal the engine can be configured to
/// skip on; every other variant fails the run that encounters it.
#[derive(Error, Debug)]
pub enum EvaluationError {
    /// A condition required a fact that is absent from working memory
    #[error("missing fact: {0}")]
    MissingFact(String),

    /// A composite rule is misconfigured (e.g. ambiguous gate)
    #[error("invalid rule group: {0}")]
    InvalidGroup(String),

    /// Condition evaluation failed
    #[error("evaluation failed: {0}")]
    Fatal(String),
}

/// Error raised while executing a rule's actions
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// An action required a fact that is absent from working memory
    #[error("missing fact: {0}")]
    MissingFact(String),

    /// Action execution failed
    #[error("action failed: {0}")]
    ActionFailed(String),
}

impl From<EvaluationError> for ExecutionError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::MissingFact(name) => ExecutionError::MissingFact(name),
            other => ExecutionError::ActionFailed(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
