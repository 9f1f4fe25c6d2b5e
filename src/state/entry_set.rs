use std::collections::HashSet;

/// A set of string entries that remembers first-seen order
///
/// Duplicates are ignored on insert, and iteration yields entries in the
/// order they were first added, so output files are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl EntrySet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning false if it was already present
    pub fn insert(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        if self.seen.contains(&entry) {
            return false;
        }
        self.seen.insert(entry.clone());
        self.order.push(entry);
        true
    }

    /// Returns true if the entry is present
    pub fn contains(&self, entry: &str) -> bool {
        self.seen.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Consumes the set, returning entries in first-seen order
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<S: Into<String>> FromIterator<S> for EntrySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for EntrySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}
