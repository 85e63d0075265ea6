//! Parameter validation and normalization operations.
//!
//! Request-building code calls these immediately before constructing an
//! outgoing API call. The shape checks ([`comma_separated`], [`exactly_one`],
//! [`comma_join`]) need no shared data and are free functions; the parts
//! checks live on [`ParamValidator`], which holds the injected
//! [`ResourceParts`] catalog.
//!
//! Every operation either succeeds (possibly returning a normalized value)
//! or returns a single [`ValidationError`]; no partial results are produced.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::ValidationError;
use crate::parts::ResourceParts;
use crate::value::FieldValue;

// ============================================================================
// SHAPE CHECKS
// ============================================================================

/// Validates that every present parameter value is a string, and therefore
/// splittable as a comma-separated list.
///
/// Parameters assembled for an outgoing call arrive as `serde_json::Value`s;
/// absent (`None`) entries are skipped. Any present non-string value fails
/// with [`ErrorKind::InvalidParams`](crate::ErrorKind::InvalidParams),
/// naming the parameter.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use yt_params::validator::comma_separated;
///
/// let id = json!("abc,def");
/// let count = json!(5);
///
/// assert!(comma_separated(&[("id", Some(&id)), ("page", None)]).is_ok());
/// assert!(comma_separated(&[("count", Some(&count))]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`ValidationError`] for the first present non-string value.
pub fn comma_separated(params: &[(&str, Option<&Value>)]) -> Result<(), ValidationError> {
    for (name, value) in params {
        if let Some(value) = value
            && !value.is_string()
        {
            return Err(ValidationError::not_comma_separable(name));
        }
    }
    Ok(())
}

/// Validates that exactly one parameter of a mutually exclusive group is
/// present.
///
/// Each entry is a parameter name and a presence flag. Zero present fails
/// with [`ErrorKind::MissingParams`](crate::ErrorKind::MissingParams);
/// more than one fails with
/// [`ErrorKind::InvalidParams`](crate::ErrorKind::InvalidParams). Both
/// messages list every group member in input order. The check is
/// cardinality only — it does not report which member was given.
///
/// The [`exactly_one!`](crate::exactly_one!) macro builds the slice from
/// `Option` bindings.
///
/// # Errors
///
/// Returns [`ValidationError`] unless exactly one flag is set.
pub fn exactly_one(params: &[(&str, bool)]) -> Result<(), ValidationError> {
    let given = params.iter().filter(|(_, present)| *present).count();
    if given == 1 {
        return Ok(());
    }

    let names = params
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(",");
    if given == 0 {
        Err(ValidationError::none_given(&names))
    } else {
        Err(ValidationError::incompatible(&names))
    }
}

/// Normalizes an optional field value to a single comma-joined string.
///
/// `None` stays `None`. A [`FieldValue::Single`] passes through unchanged
/// (it is assumed already comma-separated), so the operation is idempotent
/// on its own output. A [`FieldValue::Many`] is joined with commas,
/// preserving element order.
///
/// A `Many` element that itself contains a comma would change meaning when
/// the joined string is later split, so it fails with
/// [`ErrorKind::InvalidParams`](crate::ErrorKind::InvalidParams) naming the
/// field and stating that list elements must not contain commas.
///
/// # Examples
///
/// ```
/// use yt_params::validator::comma_join;
///
/// let ids = comma_join("ids", Some(vec!["a", "b", "c"].into())).unwrap();
/// assert_eq!(ids.as_deref(), Some("a,b,c"));
///
/// assert_eq!(comma_join("ids", None).unwrap(), None);
/// ```
///
/// # Errors
///
/// Returns [`ValidationError`] when a sequence element contains a comma.
pub fn comma_join(
    field: &str,
    value: Option<FieldValue>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(FieldValue::Single(s)) => Ok(Some(s)),
        Some(FieldValue::Many(items)) => {
            if items.iter().any(|item| item.contains(',')) {
                return Err(ValidationError::comma_in_element(field));
            }
            Ok(Some(items.join(",")))
        }
    }
}

// ============================================================================
// PARTS VALIDATION
// ============================================================================

/// Validates requested parts against an injected [`ResourceParts`] catalog.
///
/// The catalog is read-only after construction, so a `ParamValidator` can be
/// shared freely across threads.
///
/// # Examples
///
/// ```
/// use yt_params::parts::ResourceParts;
/// use yt_params::validator::ParamValidator;
///
/// let mut catalog = ResourceParts::new();
/// catalog.insert("video", ["id", "snippet", "statistics"]);
/// let validator = ParamValidator::new(catalog);
///
/// assert!(validator.check_parts("video", Some("id,snippet")).is_ok());
/// assert!(validator.check_parts("video", Some("id,bogus")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ParamValidator {
    parts: ResourceParts,
}

impl ParamValidator {
    /// Creates a validator over the given catalog.
    #[must_use]
    pub fn new(parts: ResourceParts) -> Self {
        Self { parts }
    }

    /// The injected catalog.
    #[must_use]
    pub fn parts(&self) -> &ResourceParts {
        &self.parts
    }

    fn permitted(&self, resource: &str) -> Result<&BTreeSet<String>, ValidationError> {
        self.parts
            .get(resource)
            .ok_or_else(|| ValidationError::unknown_resource(resource))
    }

    /// Validates that every requested part is permitted for `resource`.
    ///
    /// `None` succeeds trivially. Otherwise `parts` is split on commas and
    /// every token must appear in the resource's permitted set; a violation
    /// names each unsupported token and the resource. Validation only — no
    /// normalized value is produced.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an unknown resource or any
    /// unsupported part.
    pub fn check_parts(&self, resource: &str, parts: Option<&str>) -> Result<(), ValidationError> {
        let Some(parts) = parts else {
            return Ok(());
        };
        let permitted = self.permitted(resource)?;
        let requested: BTreeSet<&str> = parts.split(',').collect();
        require_subset(resource, permitted, &requested)
    }

    /// Resolves an optional field value to a validated, comma-joined parts
    /// string.
    ///
    /// `None` defaults to the full permitted set for `resource`. A
    /// [`FieldValue::Single`] is split on commas; a [`FieldValue::Many`] is
    /// taken as-is. Either way the tokens are collected into a set (so
    /// duplicates collapse), validated exactly as [`check_parts`], and
    /// re-joined sorted.
    ///
    /// [`check_parts`]: Self::check_parts
    ///
    /// # Examples
    ///
    /// ```
    /// use yt_params::parts::ResourceParts;
    /// use yt_params::validator::ParamValidator;
    ///
    /// let mut catalog = ResourceParts::new();
    /// catalog.insert("video", ["id", "snippet"]);
    /// let validator = ParamValidator::new(catalog);
    ///
    /// // Default: everything the resource permits.
    /// assert_eq!(validator.enforce_parts("video", None).unwrap(), "id,snippet");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an unknown resource or any
    /// unsupported part.
    pub fn enforce_parts(
        &self,
        resource: &str,
        value: Option<FieldValue>,
    ) -> Result<String, ValidationError> {
        let permitted = self.permitted(resource)?;
        let Some(value) = value else {
            return Ok(join(permitted.iter().map(String::as_str)));
        };

        let requested: BTreeSet<&str> = value.tokens().into_iter().collect();
        require_subset(resource, permitted, &requested)?;
        Ok(join(requested.into_iter()))
    }
}

fn require_subset(
    resource: &str,
    permitted: &BTreeSet<String>,
    requested: &BTreeSet<&str>,
) -> Result<(), ValidationError> {
    let unsupported: Vec<&str> = requested
        .iter()
        .copied()
        .filter(|part| !permitted.contains(*part))
        .collect();
    if unsupported.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::unsupported_parts(
            resource,
            &unsupported.join(","),
        ))
    }
}

fn join<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(",")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn video_validator() -> ParamValidator {
        let mut catalog = ResourceParts::new();
        catalog.insert("video", ["id", "snippet", "statistics"]);
        ParamValidator::new(catalog)
    }

    #[test]
    fn comma_separated_accepts_strings_and_absent_values() {
        let id = json!("a,b,c");
        assert!(comma_separated(&[("id", Some(&id)), ("page", None)]).is_ok());
    }

    #[test]
    fn comma_separated_accepts_empty_string() {
        let empty = json!("");
        assert!(comma_separated(&[("id", Some(&empty))]).is_ok());
    }

    #[test]
    fn comma_separated_rejects_non_strings_naming_the_parameter() {
        let count = json!(42);
        let error = comma_separated(&[("count", Some(&count))]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidParams);
        assert!(error.message().contains("count"));
    }

    #[test]
    fn exactly_one_requires_a_member() {
        let error = exactly_one(&[("chart", false), ("id", false)]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingParams);
        assert!(error.message().contains("chart,id"));
    }

    #[test]
    fn exactly_one_rejects_two_members() {
        let error = exactly_one(&[("chart", true), ("id", true)]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidParams);
        assert!(error.message().contains("chart,id"));
    }

    #[test]
    fn exactly_one_passes_with_a_single_member() {
        assert!(exactly_one(&[("chart", false), ("id", true)]).is_ok());
    }

    #[test]
    fn comma_join_passes_single_through() {
        let out = comma_join("ids", Some("a,b,c".into())).unwrap();
        assert_eq!(out.as_deref(), Some("a,b,c"));
    }

    #[test]
    fn comma_join_joins_in_order() {
        let out = comma_join("ids", Some(vec!["c", "a", "b"].into())).unwrap();
        assert_eq!(out.as_deref(), Some("c,a,b"));
    }

    #[test]
    fn comma_join_rejects_embedded_commas() {
        let value = FieldValue::Many(vec!["a,b".into()]);
        let error = comma_join("ids", Some(value)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidParams);
        assert!(error.message().contains("ids"));
        assert!(error.message().contains("must not contain commas"));
    }

    #[test]
    fn check_parts_none_is_trivially_ok() {
        assert!(video_validator().check_parts("video", None).is_ok());
    }

    #[test]
    fn check_parts_names_every_unsupported_token() {
        let error = video_validator()
            .check_parts("video", Some("id,bogus,fake"))
            .unwrap_err();
        assert!(error.message().contains("bogus"));
        assert!(error.message().contains("fake"));
        assert!(error.message().contains("video"));
    }

    #[test]
    fn enforce_parts_defaults_to_full_permitted_set() {
        let out = video_validator().enforce_parts("video", None).unwrap();
        assert_eq!(out, "id,snippet,statistics");
    }

    #[test]
    fn enforce_parts_deduplicates_tokens() {
        let out = video_validator()
            .enforce_parts("video", Some("id,id,snippet".into()))
            .unwrap();
        assert_eq!(out, "id,snippet");
    }

    #[test]
    fn unknown_resource_is_invalid_params() {
        let error = video_validator()
            .enforce_parts("playlist", None)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidParams);
        assert!(error.message().contains("playlist"));
    }
}
