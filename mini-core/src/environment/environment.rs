use std::collections::{btree_map, BTreeMap};
use std::fmt::Display;

use super::value::Value;

/// Flat variable namespace shared by every statement of a run.
///
/// Keys are kept ordered so that iteration and rendering are sorted by name.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    store: BTreeMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.store.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Binds `name`, overwriting an existing binding. Returns the replaced value.
    pub fn declare(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.store.insert(name.into(), value)
    }

    /// Overwrites an existing binding. Unbound names are left untouched and yield `None`.
    pub fn set(&mut self, name: &str, value: Value) -> Option<Value> {
        let var = self.store.get_mut(name)?;

        Some(std::mem::replace(var, value))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.store.iter()
    }

    pub fn clear(&mut self) {
        self.store.clear()
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self {
            store: iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect()
        }
    }
}

/// One `name = value` line per binding.
impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in &self.store {
            writeln!(f, "{name} = {value}")?;
        }

        Ok(())
    }
}
