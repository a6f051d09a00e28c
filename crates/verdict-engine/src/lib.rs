//! verdict-engine - Rule execution engines
//!
//! Two engines over the same contract:
//! - [`DefaultEngine`]: one deterministic pass over the sorted rule set,
//!   with listener gating, a priority threshold, and skip policies.
//! - [`InferenceEngine`]: repeats single passes over the currently-true
//!   subset of rules until a fixed point.

pub mod default_engine;
pub mod engine;
pub mod error;
pub mod inference_engine;
pub mod listener;
pub mod parameters;

// Re-export main types
pub use default_engine::{DefaultEngine, DefaultEngineBuilder};
pub use engine::RulesEngine;
pub use error::{EngineError, Result};
pub use inference_engine::InferenceEngine;
pub use listener::{EngineListener, RuleListener};
pub use parameters::EngineParameters;

// Re-export commonly used types from verdict-core
pub use verdict_core::{Facts, Rule, Rules};
