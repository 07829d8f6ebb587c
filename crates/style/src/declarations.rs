//! An ordered CSS declaration block in canonical `prop:value;` form.
use crate::parsers::split_top_level;
use itertools::Itertools;
use std::fmt;

/// An ordered list of `property: value` pairs.
///
/// Each property appears at most once. Setting a property that already
/// exists moves it to the end, mirroring "last declaration wins" so that the
/// serialized block means the same thing as the sequence of `set` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `prop:value;prop:value` string.
    ///
    /// Separators inside parentheses or quotes are respected, property names
    /// are lower-cased, and pieces without a `:` are ignored.
    pub fn parse(css: &str) -> Self {
        let mut decls = Self::new();
        for piece in split_top_level(css, ';') {
            if let Some((prop, value)) = piece.split_once(':') {
                let prop = prop.trim();
                let value = value.trim();
                if !prop.is_empty() && !value.is_empty() {
                    decls.set(prop.to_ascii_lowercase(), value);
                }
            }
        }
        decls
    }

    pub fn set(&mut self, prop: impl Into<String>, value: impl Into<String>) {
        let prop = prop.into();
        self.entries.retain(|(existing, _)| *existing != prop);
        self.entries.push((prop, value.into()));
    }

    /// Replaces the value of an existing property without moving it, or
    /// appends the property when it is absent.
    pub fn set_in_place(&mut self, prop: &str, value: impl Into<String>) {
        match self.entries.iter_mut().find(|(p, _)| p == prop) {
            Some(entry) => entry.1 = value.into(),
            None => self.entries.push((prop.to_string(), value.into())),
        }
    }

    /// Sets the property only when it is not present yet.
    pub fn set_default(&mut self, prop: &str, value: impl Into<String>) {
        if !self.contains(prop) {
            self.entries.push((prop.to_string(), value.into()));
        }
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, prop: &str) -> bool {
        self.entries.iter().any(|(p, _)| p == prop)
    }

    pub fn remove(&mut self, prop: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(p, _)| p == prop)?;
        Some(self.entries.remove(idx).1)
    }

    /// Removes every property for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|(p, v)| keep(p, v));
    }

    /// Appends all declarations of `other`, overriding existing ones.
    pub fn extend(&mut self, other: &Declarations) {
        for (prop, value) in &other.entries {
            self.set(prop.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Canonical serialization: `prop:value;` per entry, no whitespace.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(p, v)| format!("{}:{};", p, v))
            .join("")
    }
}

impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<&str> for Declarations {
    fn from(css: &str) -> Self {
        Self::parse(css)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Declarations {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut decls = Declarations::new();
        for (k, v) in iter {
            decls.set(k, v);
        }
        decls
    }
}
