//! Prelude module for convenient imports.
//!
//! A single `use yt_params::prelude::*;` brings in every type and operation
//! a request builder needs.

pub use crate::error::{ErrorKind, ValidationError};
pub use crate::parts::ResourceParts;
pub use crate::validator::{ParamValidator, comma_join, comma_separated, exactly_one};
pub use crate::value::FieldValue;
