//! # yt-params
//!
//! Validation and normalization of request parameters for YouTube-style web
//! API clients. Request-building code calls these helpers immediately before
//! constructing an outgoing call; every violation surfaces as a single
//! [`ValidationError`] with an [`ErrorKind`] and a descriptive message.
//!
//! ## Quick Start
//!
//! ```
//! use yt_params::prelude::*;
//!
//! // The resource→parts catalog is injected, not global.
//! let mut catalog = ResourceParts::new();
//! catalog.insert("video", ["id", "snippet", "statistics"]);
//! let validator = ParamValidator::new(catalog);
//!
//! // Requested parts must be permitted for the resource.
//! let parts = validator.enforce_parts("video", Some("id,snippet".into()))?;
//! assert_eq!(parts, "id,snippet");
//!
//! // Sequences normalize to comma-joined strings.
//! let ids = comma_join("ids", Some(vec!["a", "b", "c"].into()))?;
//! assert_eq!(ids.as_deref(), Some("a,b,c"));
//! # Ok::<(), ValidationError>(())
//! ```
//!
//! ## Operations
//!
//! - [`validator::comma_separated`] — present parameter values must be
//!   string-like (comma-splittable).
//! - [`validator::exactly_one`] — exactly one member of a mutually
//!   exclusive parameter group must be present (see the [`exactly_one!`]
//!   macro for call-site sugar).
//! - [`validator::comma_join`] — normalize an optional [`FieldValue`] to a
//!   comma-joined string.
//! - [`ParamValidator::check_parts`] / [`ParamValidator::enforce_parts`] —
//!   validate requested parts against the injected [`ResourceParts`]
//!   catalog.
//!
//! All operations are synchronous, stateless, and safe to call from any
//! thread; the only shared data is the read-only catalog.

pub mod error;
mod macros;
pub mod parts;
pub mod prelude;
pub mod validator;
pub mod value;

pub use error::{ErrorKind, ValidationError};
pub use parts::ResourceParts;
pub use validator::{ParamValidator, comma_join, comma_separated, exactly_one};
pub use value::FieldValue;
