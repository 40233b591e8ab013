//! The caller's deduplicated set of object-type names.

use std::collections::HashSet;

/// Object-type names to count, deduplicated.
///
/// Iterates in order of first occurrence, so zero-filled entries come out in
/// the order the names were given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedObjectSet {
    names: Vec<String>,
}

impl RequestedObjectSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name. Surrounding whitespace is trimmed; blank names are ignored.
    /// Returns `true` if the name was not already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_owned());
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Comma-joined names, as sent in the `sObjects` query parameter.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        self.names.join(",")
    }
}

impl<S: AsRef<str>> FromIterator<S> for RequestedObjectSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut names = Vec::new();
        for name in iter {
            let name = name.as_ref().trim();
            if !name.is_empty() && seen.insert(name.to_owned()) {
                names.push(name.to_owned());
            }
        }
        Self { names }
    }
}
