use serde::Serialize;
use std::fmt::Display;

/// A single operation of an edit script.
///
/// `index_a`/`index_b` are 1-based line numbers in the old and new source
/// respectively, present only on the side the operation touches: an equal
/// line exists in both sources, a deleted line only in the old one, an
/// inserted line only in the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Edit<T> {
    Delete { index_a: usize, value: T },
    Insert { index_b: usize, value: T },
    Equal { index_a: usize, index_b: usize, value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value, .. } | Edit::Insert { value, .. } | Edit::Equal { value, .. } => {
                value
            }
        }
    }

    /// Line number in the old source, when the operation touches it.
    pub fn index_a(&self) -> Option<usize> {
        match self {
            Edit::Delete { index_a, .. } | Edit::Equal { index_a, .. } => Some(*index_a),
            Edit::Insert { .. } => None,
        }
    }

    /// Line number in the new source, when the operation touches it.
    pub fn index_b(&self) -> Option<usize> {
        match self {
            Edit::Insert { index_b, .. } | Edit::Equal { index_b, .. } => Some(*index_b),
            Edit::Delete { .. } => None,
        }
    }

    /// Convert the carried value while keeping the operation and its line
    /// numbers intact.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Edit<U> {
        match self {
            Edit::Delete { index_a, value } => Edit::Delete {
                index_a,
                value: f(value),
            },
            Edit::Insert { index_b, value } => Edit::Insert {
                index_b,
                value: f(value),
            },
            Edit::Equal {
                index_a,
                index_b,
                value,
            } => Edit::Equal {
                index_a,
                index_b,
                value: f(value),
            },
        }
    }
}

impl<T> Edit<T>
where
    T: Display,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { value, .. } => format!("-{}", value),
            Edit::Insert { value, .. } => format!("+{}", value),
            Edit::Equal { value, .. } => format!(" {}", value),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
