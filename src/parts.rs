//! The resource→parts catalog.
//!
//! A part is a named sub-selector controlling which fields of a remote
//! resource an API call returns. Each resource permits a fixed set of parts;
//! this module holds that mapping as an immutable value injected into the
//! validator at construction. The crate ships no catalog data — callers
//! build one in code or deserialize it from configuration.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

// ============================================================================
// RESOURCE PARTS CATALOG
// ============================================================================

/// Immutable mapping from resource name to its permitted part tokens.
///
/// Read-only once constructed; the validator only ever looks resources up.
/// Part sets are `BTreeSet`s, so any output derived from them has a
/// deterministic (sorted) order.
///
/// # Examples
///
/// ```
/// use yt_params::parts::ResourceParts;
///
/// let mut catalog = ResourceParts::new();
/// catalog.insert("video", ["id", "snippet", "statistics"]);
///
/// assert!(catalog.contains("video"));
/// assert!(catalog.get("video").unwrap().contains("snippet"));
/// ```
///
/// A catalog can also come straight from configuration:
///
/// ```
/// use yt_params::parts::ResourceParts;
///
/// let catalog: ResourceParts = serde_json::from_str(
///     r#"{ "channel": ["id", "snippet"] }"#,
/// ).unwrap();
/// assert!(catalog.contains("channel"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceParts {
    map: HashMap<String, BTreeSet<String>>,
}

impl ResourceParts {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the permitted parts for a resource, replacing any
    /// previous entry.
    pub fn insert<R, P, I>(&mut self, resource: R, parts: I)
    where
        R: Into<String>,
        P: Into<String>,
        I: IntoIterator<Item = P>,
    {
        self.map.insert(
            resource.into(),
            parts.into_iter().map(Into::into).collect(),
        );
    }

    /// The permitted parts for a resource, if the resource is known.
    #[must_use]
    pub fn get(&self, resource: &str) -> Option<&BTreeSet<String>> {
        self.map.get(resource)
    }

    /// Whether the catalog knows this resource.
    #[must_use]
    pub fn contains(&self, resource: &str) -> bool {
        self.map.contains_key(resource)
    }

    /// Iterates over the known resource names in arbitrary order.
    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Number of known resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<R, P, I> FromIterator<(R, I)> for ResourceParts
where
    R: Into<String>,
    P: Into<String>,
    I: IntoIterator<Item = P>,
{
    fn from_iter<T: IntoIterator<Item = (R, I)>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for (resource, parts) in iter {
            catalog.insert(resource, parts);
        }
        catalog
    }
}

// ============================================================================
// TESTS
// ============================================================================
