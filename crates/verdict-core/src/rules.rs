//! Rule registry
//!
//! An ordered, deduplicated collection of rules. Members are held behind
//! `Arc` so one rule instance can belong to several registries. Engines
//! never iterate the registry directly: they take `sorted()` once per
//! run, so a priority changed between runs is always honored.

use crate::rule::{natural_order, Rule};
use std::sync::Arc;

/// Registry of rules, iterated in natural order (priority asc, name asc)
#[derive(Clone, Default)]
pub struct Rules {
    rules: Vec<Arc<dyn Rule>>,
}

impl Rules {
    /// Create an empty registry
    pub fn new() -> Self {
        Rules { rules: Vec::new() }
    }

    /// Register a rule.
    ///
    /// A member that compares equal under the natural order (same name
    /// and same priority) is replaced silently. The same name with a
    /// different priority registers a distinct member.
    pub fn register(&mut self, rule: impl Rule + 'static) {
        self.register_arc(Arc::new(rule));
    }

    /// Register a shared rule instance
    pub fn register_arc(&mut self, rule: Arc<dyn Rule>) {
        let before = self.rules.len();
        self.rules
            .retain(|r| !(r.name() == rule.name() && r.priority() == rule.priority()));
        if self.rules.len() < before {
            log::debug!("rule '{}' re-registered, replacing previous entry", rule.name());
        }
        self.rules.push(rule);
    }

    /// Remove the member matching the given rule's name and priority
    pub fn unregister(&mut self, rule: &dyn Rule) {
        self.rules
            .retain(|r| !(r.name() == rule.name() && r.priority() == rule.priority()));
    }

    /// Remove the member with the given name (case-insensitive); no-op
    /// when no member matches
    pub fn unregister_by_name(&mut self, name: &str) {
        self.rules.retain(|r| !r.name().eq_ignore_ascii_case(name));
    }

    /// Look up a member by exact name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.iter().find(|r| r.name() == name).cloned()
    }

    /// True if no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Remove all rules
    pub fn clear(&mut self) {
        self.rules.clear()
    }

    /// The members in natural order, sorted fresh at every call.
    ///
    /// Priorities are read at call time, never cached, so a priority
    /// mutated since the last run reorders the next one.
    pub fn sorted(&self) -> Vec<Arc<dyn Rule>> {
        let mut view = self.rules.clone();
        view.sort_by(|a, b| natural_order(a.as_ref(), b.as_ref()));
        view
    }

    /// Iterate members in natural order
    pub fn iter(&self) -> impl Iterator<Item = Arc<dyn Rule>> {
        self.sorted().into_iter()
    }
}

impl IntoIterator for &Rules {
    type Item = Arc<dyn Rule>;
    type IntoIter = std::vec::IntoIter<Arc<dyn Rule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorted().into_iter()
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sorted().iter().map(|r| (r.name().to_string(), r.priority())))
            .finish()
    }
}
