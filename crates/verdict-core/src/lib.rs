//! verdict-core - Core types for the verdict rules engine
//!
//! This crate provides the building blocks shared across the verdict
//! workspace:
//! - `Value`, `Fact`, `Facts` for working memory
//! - The `Rule` contract and its `Evaluation` record
//! - The `Condition`/`Action` boundary
//! - `BasicRule` and `RuleBuilder`
//! - The `Rules` registry

pub mod basic_rule;
pub mod condition;
pub mod error;
pub mod fact;
pub mod facts;
pub mod rule;
pub mod rules;
pub mod value;

// Re-export commonly used types
pub use basic_rule::{BasicRule, RuleBuilder};
pub use condition::{Action, Condition};
pub use error::{EvaluationError, ExecutionError};
pub use fact::Fact;
pub use facts::Facts;
pub use rule::{natural_order, Evaluation, Rule, DEFAULT_PRIORITY};
pub use rules::Rules;
pub use value::Value;
