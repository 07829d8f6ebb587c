//! Promotion of repeated residual declaration blocks to shared classes.
use crate::selector::escape_class;
use itertools::Itertools;
use std::collections::HashMap;

/// Exact residual CSS string to generated class name, for one document.
///
/// Classes are named `sc-<n>` with `n` counting promoted strings in order of
/// their first occurrence, so the same document always yields the same
/// names.
#[derive(Debug, Clone, Default)]
pub struct SharedClassPool {
    classes: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SharedClassPool {
    /// Counts `residuals` and promotes every non-empty string occurring at
    /// least `threshold` times.
    pub fn from_residuals<'a>(residuals: impl IntoIterator<Item = &'a str>, threshold: usize) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for css in residuals {
            if css.is_empty() {
                continue;
            }
            let count = counts.entry(css).or_insert(0);
            if *count == 0 {
                order.push(css);
            }
            *count += 1;
        }

        let mut pool = SharedClassPool::default();
        for css in order {
            if counts.get(css).copied().unwrap_or(0) >= threshold.max(1) {
                let name = format!("sc-{}", pool.classes.len() + 1);
                pool.index.insert(css.to_string(), pool.classes.len());
                pool.classes.push((css.to_string(), name));
            }
        }
        if !pool.classes.is_empty() {
            log::debug!("Promoted {} repeated style blocks to shared classes", pool.classes.len());
        }
        pool
    }

    pub fn class_for(&self, css: &str) -> Option<&str> {
        self.index.get(css).map(|&i| self.classes[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// One rule per shared class, in naming order.
    pub fn stylesheet(&self) -> String {
        self.classes
            .iter()
            .map(|(css, name)| format!(".{}{{{}}}", escape_class(name), css))
            .join("\n")
    }
}
