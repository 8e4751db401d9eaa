// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for typed value resolution.
//!
//! This module defines the error type surfaced when resolution fails.
//! All errors use `thiserror` for proper error handling and conversion.

use crate::domain::target_type::TargetType;
use std::num::ParseIntError;
use thiserror::Error;

/// The error type for typed value resolution.
///
/// Resolution fails in exactly two ways: the call site carries no value
/// binding, or a present raw value cannot be coerced into the requested
/// target type. The enum is `#[non_exhaustive]` to allow future additions
/// without breaking backwards compatibility.
///
/// The display strings are a stable contract; operator tooling matches on
/// them, so they must not be reworded.
///
/// # Examples
///
/// ```
/// use configlands::domain::errors::ConfigError;
///
/// let err = ConfigError::BindingNotPresent;
/// assert_eq!(err.to_string(), "Annotation @ConfigurationValue is not present!");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The call site was constructed without a value binding, so there is
    /// no configuration key to resolve. Always a programmer error, raised
    /// before any provider lookup.
    #[error("Annotation @ConfigurationValue is not present!")]
    BindingNotPresent,

    /// A present raw value could not be coerced into the requested target type.
    #[error("Cannot parse given value as {target}: {raw}")]
    CoercionFailed {
        /// The target type the coercion attempted.
        target: TargetType,
        /// The raw value that failed to coerce.
        raw: String,
        /// The underlying parse error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `CoercionFailed` from a numeric parse failure.
    pub fn from_parse_int_error(target: TargetType, raw: &str, err: ParseIntError) -> Self {
        ConfigError::CoercionFailed {
            target,
            raw: raw.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `CoercionFailed` for a string that is not a representable path.
    pub fn invalid_path(raw: &str) -> Self {
        ConfigError::CoercionFailed {
            target: TargetType::Path,
            raw: raw.to_string(),
            source: None,
        }
    }
}

/// A specialized Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
