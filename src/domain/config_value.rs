// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe coercions.
//!
//! This module provides the `ConfigValue` type, which wraps raw configuration
//! values and provides coercion methods to the supported target types, and
//! the [`FromConfigValue`] trait that drives generic typed resolution.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::target_type::TargetType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The literal token in a raw path value that is substituted with the
/// platform temporary directory.
///
/// Every occurrence of this token is replaced before the value is parsed as
/// a path. If the temporary directory cannot be resolved, the token passes
/// through unchanged and parses as a literal path segment.
pub const TEMP_DIR_TOKEN: &str = "${tmpdir}";

/// A raw configuration value with type-safe coercions.
///
/// `ConfigValue` stores configuration values as strings internally and
/// provides coercion methods to the supported target types. Providers return
/// a uniform type while consumers keep type safety at the point of use.
/// Absence is modeled as `Option<ConfigValue>` at the provider boundary, not
/// inside this type.
///
/// # Examples
///
/// ```
/// use configlands::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("42".to_string());
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i32().unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    ///
    /// String coercion is the identity: no parsing, never fails.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the value to an `i32` via a base-10 signed parse.
    ///
    /// # Errors
    ///
    /// A non-numeric or out-of-range value fails with
    /// `Cannot parse given value as Integer: <raw>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use configlands::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("123");
    /// assert_eq!(value.as_i32().unwrap(), 123);
    ///
    /// assert!(ConfigValue::from("abc").as_i32().is_err());
    /// ```
    pub fn as_i32(&self) -> Result<i32> {
        self.0
            .parse::<i32>()
            .map_err(|e| ConfigError::from_parse_int_error(TargetType::Integer, &self.0, e))
    }

    /// Converts the value to an `i64` via a base-10 signed parse.
    ///
    /// # Errors
    ///
    /// A non-numeric or out-of-range value fails with
    /// `Cannot parse given value as Long: <raw>`.
    pub fn as_i64(&self) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(TargetType::Long, &self.0, e))
    }

    /// Converts the value to a boolean.
    ///
    /// Permissive by contract: `true` if and only if the value
    /// case-insensitively equals `"true"`. Every other value, including
    /// `"1"`, `"yes"`, and the empty string, is `false`. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use configlands::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("True").as_bool());
    /// assert!(!ConfigValue::from("yes").as_bool());
    /// assert!(!ConfigValue::from("").as_bool());
    /// ```
    pub fn as_bool(&self) -> bool {
        self.0.eq_ignore_ascii_case("true")
    }

    /// Converts the value to a filesystem path.
    ///
    /// Every occurrence of [`TEMP_DIR_TOKEN`] is first substituted with the
    /// resolved platform temporary directory. The lookup is best-effort: if
    /// it fails, substitution is skipped and the original string parses
    /// as-is.
    ///
    /// # Errors
    ///
    /// A string containing an interior NUL byte is not a representable OS
    /// path and fails with `Cannot parse given value as Path: <raw>`, where
    /// `<raw>` is the substituted string.
    ///
    /// # Examples
    ///
    /// ```
    /// use configlands::domain::config_value::ConfigValue;
    /// use std::path::PathBuf;
    ///
    /// let value = ConfigValue::from("/path/to/something");
    /// assert_eq!(value.as_path().unwrap(), PathBuf::from("/path/to/something"));
    /// ```
    pub fn as_path(&self) -> Result<PathBuf> {
        coerce_path(&self.0)
    }

    /// Converts the value to an ordered list of filesystem paths.
    ///
    /// The value splits on the fixed `;` delimiter, Java-style: trailing
    /// empty segments are dropped. Each remaining segment is coerced with
    /// the [`as_path`](Self::as_path) rule, preserving order and
    /// short-circuiting on the first failure.
    ///
    /// Returns `Ok(Some(vec![]))` for the empty string, and `Ok(None)` when
    /// the split yields no segments at all (a value consisting solely of
    /// delimiters).
    ///
    /// # Examples
    ///
    /// ```
    /// use configlands::domain::config_value::ConfigValue;
    /// use std::path::PathBuf;
    ///
    /// let value = ConfigValue::from("PATH1;PATH2");
    /// let paths = value.as_paths().unwrap().unwrap();
    /// assert_eq!(paths, vec![PathBuf::from("PATH1"), PathBuf::from("PATH2")]);
    ///
    /// assert_eq!(ConfigValue::from("").as_paths().unwrap(), Some(vec![]));
    /// assert_eq!(ConfigValue::from(";").as_paths().unwrap(), None);
    /// ```
    pub fn as_paths(&self) -> Result<Option<Vec<PathBuf>>> {
        if self.0.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let mut segments: Vec<&str> = self.0.split(';').collect();
        while segments.last() == Some(&"") {
            segments.pop();
        }

        if segments.is_empty() {
            return Ok(None);
        }

        let paths = segments
            .into_iter()
            .map(coerce_path)
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(paths))
    }
}

/// Coerces one raw string into a path, applying temp-directory substitution.
fn coerce_path(raw: &str) -> Result<PathBuf> {
    let value = match resolved_temp_dir() {
        Some(dir) => raw.replace(TEMP_DIR_TOKEN, &dir),
        None => raw.to_string(),
    };

    // The only string an OS path cannot represent.
    if value.contains('\0') {
        return Err(ConfigError::invalid_path(&value));
    }

    Ok(PathBuf::from(value))
}

/// Resolves the platform temporary directory as a UTF-8 string.
///
/// Returns `None` when the directory path is not valid UTF-8, in which case
/// substitution is skipped.
fn resolved_temp_dir() -> Option<String> {
    std::env::temp_dir().to_str().map(str::to_owned)
}

/// Coercion from a raw configuration value into a target type.
///
/// This trait is the dispatch seam for generic typed resolution: each
/// supported target type declares its [`TargetType`] tag and its coercion
/// rule. Coercion returns `Ok(None)` when a present raw value still
/// resolves to absence, which only the path-list rule uses.
///
/// # Examples
///
/// ```
/// use configlands::domain::config_value::{ConfigValue, FromConfigValue};
///
/// let value = ConfigValue::from("8080");
/// let port = i32::from_config_value(&value).unwrap();
/// assert_eq!(port, Some(8080));
/// ```
pub trait FromConfigValue: Sized {
    /// The target type tag, used for diagnostics.
    const TARGET: TargetType;

    /// Coerces a raw value into this type.
    fn from_config_value(value: &ConfigValue) -> Result<Option<Self>>;
}

impl FromConfigValue for String {
    const TARGET: TargetType = TargetType::String;

    fn from_config_value(value: &ConfigValue) -> Result<Option<Self>> {
        Ok(Some(value.as_string()))
    }
}

impl FromConfigValue for i32 {
    const TARGET: TargetType = TargetType::Integer;

    fn from_config_value(value: &ConfigValue) -> Result<Option<Self>> {
        value.as_i32().map(Some)
    }
}

impl FromConfigValue for i64 {
    const TARGET: TargetType = TargetType::Long;

    fn from_config_value(value: &ConfigValue) -> Result<Option<Self>> {
        value.as_i64().map(Some)
    }
}

impl FromConfigValue for bool {
    const TARGET: TargetType = TargetType::Boolean;

    fn from_config_value(value: &ConfigValue) -> Result<Option<Self>> {
        Ok(Some(value.as_bool()))
    }
}

impl FromConfigValue for PathBuf {
    const TARGET: TargetType = TargetType::Path;

    fn from_config_value(value: &ConfigValue) -> Result<Option<Self>> {
        value.as_path().map(Some)
    }
}

impl FromConfigValue for Vec<PathBuf> {
    const TARGET: TargetType = TargetType::PathList;

    fn from_config_value(value: &ConfigValue) -> Result<Option<Self>> {
        value.as_paths()
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
