//! Ordered item holder used to populate containers.

use serde::{Deserialize, Serialize};

/// Ordered collection of items with a count accessor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Adapter<T> {
    /// Items in display order
    pub data: Vec<T>,
}

impl<T> Adapter<T> {
    /// Create an adapter over the given items.
    #[must_use]
    pub const fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Iterate items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> From<Vec<T>> for Adapter<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<'a, T> IntoIterator for &'a Adapter<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
