//! verdict-composite - Composite rules
//!
//! Rules whose evaluate/execute semantics derive from a set of child
//! rules. Each variant owns a child registry and records its child
//! selection in the `Evaluation` it returns; `execute` replays exactly
//! that record, which is why evaluate must always run first (the engines
//! always pair them that way).
//!
//! - [`UnitRuleGroup`]: all children or none
//! - [`ActivationRuleGroup`]: first matching child wins
//! - [`ConditionalRuleGroup`]: highest-priority child gates the rest
//! - [`ExecutableRuleGroup`]: all children or none, plus a group action
//! - [`PathRule`]: a primary rule gates a set of secondaries

pub mod activation_rule_group;
pub mod conditional_rule_group;
pub mod executable_rule_group;
pub mod path_rule;
pub mod unit_rule_group;

mod replay;

pub use activation_rule_group::ActivationRuleGroup;
pub use conditional_rule_group::ConditionalRuleGroup;
pub use executable_rule_group::ExecutableRuleGroup;
pub use path_rule::PathRule;
pub use unit_rule_group::UnitRuleGroup;
