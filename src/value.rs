//! Typed field values for request parameters.
//!
//! A [`FieldValue`] is the caller-supplied value for one logical parameter.
//! The shape decision — one comma-joined string versus a sequence of tokens —
//! is made at construction time through `From`, so the validation operations
//! never introspect types at runtime.

use std::collections::{BTreeSet, HashSet};

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A caller-supplied value for a single request parameter.
///
/// # Examples
///
/// ```
/// use yt_params::value::FieldValue;
///
/// let single = FieldValue::from("id,snippet");
/// let many = FieldValue::from(vec!["id", "snippet"]);
///
/// assert_eq!(single.tokens(), many.tokens());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single token, or several tokens already joined by commas.
    Single(String),
    /// An ordered sequence of tokens.
    Many(Vec<String>),
}

impl FieldValue {
    /// The individual tokens this value denotes.
    ///
    /// A [`Single`](FieldValue::Single) is split on literal commas; a
    /// [`Many`](FieldValue::Many) yields its elements in order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => s.split(',').collect(),
            Self::Many(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(value: &[&str]) -> Self {
        Self::Many(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldValue {
    fn from(value: [&str; N]) -> Self {
        Self::Many(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl From<BTreeSet<String>> for FieldValue {
    fn from(value: BTreeSet<String>) -> Self {
        Self::Many(value.into_iter().collect())
    }
}

/// Hash sets iterate in arbitrary order, so the token order of the
/// resulting value is arbitrary too. A warning is logged; prefer an
/// ordered collection when order matters.
impl From<HashSet<String>> for FieldValue {
    fn from(value: HashSet<String>) -> Self {
        tracing::warn!(
            tokens = value.len(),
            "hash set iteration order is unreliable; joined token order will be arbitrary"
        );
        Self::Many(value.into_iter().collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_splits_on_commas() {
        let value = FieldValue::from("id,snippet,statistics");
        assert_eq!(value.tokens(), vec!["id", "snippet", "statistics"]);
    }

    #[test]
    fn many_preserves_order() {
        let value = FieldValue::from(vec!["snippet", "id"]);
        assert_eq!(value.tokens(), vec!["snippet", "id"]);
    }

    #[test]
    fn btree_set_converts_in_sorted_order() {
        let set: BTreeSet<String> = ["b", "a", "c"].iter().map(|s| (*s).to_string()).collect();
        let value = FieldValue::from(set);
        assert_eq!(value.tokens(), vec!["a", "b", "c"]);
    }

    #[test]
    fn hash_set_converts_to_many_with_same_elements() {
        let set: HashSet<String> = ["a", "b"].iter().map(|s| (*s).to_string()).collect();
        let value = FieldValue::from(set);
        let mut tokens = value.tokens();
        tokens.sort_unstable();
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn array_converts_to_many() {
        let value = FieldValue::from(["id", "snippet"]);
        assert_eq!(value, FieldValue::Many(vec!["id".into(), "snippet".into()]));
    }
}
