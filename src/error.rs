//! Error types for parameter validation failures.
//!
//! Every operation in this crate reports failure through a single structured
//! type, [`ValidationError`], carrying an [`ErrorKind`] and a human-readable
//! message. Messages use `Cow<'static, str>` so the common case of a
//! formatted message allocates once and nothing else does.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR KIND
// ============================================================================

/// Classifies a parameter validation failure.
///
/// There are exactly two classes: the caller supplied something malformed
/// or contradictory ([`InvalidParams`](ErrorKind::InvalidParams)), or the
/// caller supplied nothing where at least one member of a parameter group
/// was required ([`MissingParams`](ErrorKind::MissingParams)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed value shape, unsupported parts, unknown resource, or
    /// mutually incompatible parameters supplied together.
    InvalidParams,
    /// A required parameter group had zero members supplied.
    MissingParams,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams => f.write_str("invalid_params"),
            Self::MissingParams => f.write_str("missing_params"),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A parameter validation failure.
///
/// Raised by every operation in this crate and propagated unchanged to the
/// request-building caller; there is no recovery or suppression between
/// detection and propagation.
///
/// # Examples
///
/// ```
/// use yt_params::error::{ErrorKind, ValidationError};
///
/// let error = ValidationError::unknown_resource("playlst");
/// assert_eq!(error.kind(), ErrorKind::InvalidParams);
/// assert!(error.message().contains("playlst"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an error with an explicit kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The failure class.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A named parameter whose value does not support comma-splitting.
    pub fn not_comma_separable(name: &str) -> Self {
        Self::new(
            ErrorKind::InvalidParams,
            format!("Parameter {name} must be a string or comma-separated list string"),
        )
    }

    /// A sequence element that itself contains a comma, which would change
    /// meaning when the joined value is later split.
    pub fn comma_in_element(field: &str) -> Self {
        Self::new(
            ErrorKind::InvalidParams,
            format!("Parameter ({field}) list elements must not contain commas"),
        )
    }

    /// Requested parts that the resource does not permit.
    ///
    /// `parts` is the comma-joined list of offending tokens.
    pub fn unsupported_parts(resource: &str, parts: &str) -> Self {
        Self::new(
            ErrorKind::InvalidParams,
            format!("Parts {parts} for resource {resource} are not supported"),
        )
    }

    /// A resource name absent from the parts catalog.
    pub fn unknown_resource(resource: &str) -> Self {
        Self::new(
            ErrorKind::InvalidParams,
            format!("Unknown resource {resource}"),
        )
    }

    /// A parameter group where none of the members was supplied.
    ///
    /// `params` is the comma-joined list of group member names.
    pub fn none_given(params: &str) -> Self {
        Self::new(
            ErrorKind::MissingParams,
            format!("Specify at least one of {params}"),
        )
    }

    /// A parameter group where more than one member was supplied.
    pub fn incompatible(params: &str) -> Self {
        Self::new(
            ErrorKind::InvalidParams,
            format!("Incompatible parameters specified for {params}"),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let error = ValidationError::new(ErrorKind::InvalidParams, "bad value");
        assert_eq!(error.to_string(), "invalid_params: bad value");
    }

    #[test]
    fn none_given_is_missing_params() {
        let error = ValidationError::none_given("chart,id,my_rating");
        assert_eq!(error.kind(), ErrorKind::MissingParams);
        assert!(error.message().contains("chart,id,my_rating"));
    }

    #[test]
    fn incompatible_is_invalid_params() {
        let error = ValidationError::incompatible("chart,id");
        assert_eq!(error.kind(), ErrorKind::InvalidParams);
    }

    #[test]
    fn static_message_is_borrowed() {
        let error = ValidationError::new(ErrorKind::InvalidParams, "static");
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn kind_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorKind::InvalidParams).unwrap();
        assert_eq!(json, r#""INVALID_PARAMS""#);
        let json = serde_json::to_string(&ErrorKind::MissingParams).unwrap();
        assert_eq!(json, r#""MISSING_PARAMS""#);
    }
}
