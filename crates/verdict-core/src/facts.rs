//! Working memory
//!
//! `Facts` maps unique names to values for the duration of one engine
//! run. The caller builds it, conditions read it, actions mutate it in
//! place; there is no snapshotting, so a rule sees the effects of every
//! rule that executed before it in the same run.

use crate::error::EvaluationError;
use crate::fact::Fact;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Working memory: a mapping from unique fact names to values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Facts {
    entries: HashMap<String, Value>,
}

impl Facts {
    /// Create empty working memory
    pub fn new() -> Self {
        Facts {
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the value bound to `name`, returning the
    /// previous value if the name was already bound. Replacement is
    /// silent.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    /// Insert a fact, replacing any value already bound to its name
    pub fn insert(&mut self, fact: Fact) -> Option<Value> {
        let (name, value) = fact.into_parts();
        self.entries.insert(name, value)
    }

    /// Remove the value bound to `name`, if any
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    /// Look up the value bound to `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// True if `name` is bound, even to `Value::Null`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up a fact a condition or action cannot do without.
    ///
    /// Returns `EvaluationError::MissingFact` when the name is unbound,
    /// which is the signal the engine's missing-fact policy branches on.
    pub fn require(&self, name: &str) -> Result<&Value, EvaluationError> {
        self.entries
            .get(name)
            .ok_or_else(|| EvaluationError::MissingFact(name.to_string()))
    }

    /// Iterate over `(name, value)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of facts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if working memory is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all facts
    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Borrow the underlying name-to-value map
    pub fn as_map(&self) -> &HashMap<String, Value> {
        &self.entries
    }
}

impl From<HashMap<String, Value>> for Facts {
    fn from(entries: HashMap<String, Value>) -> Self {
        Facts { entries }
    }
}

impl FromIterator<(String, Value)> for Facts {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Facts {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Facts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted by name so diagnostics are deterministic
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort();
        write!(f, "[")?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", name, self.entries[*name])?;
        }
        write!(f, "]")
    }
}
