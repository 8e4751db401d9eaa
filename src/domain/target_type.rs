// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target type tags for typed resolution.

use std::fmt;

/// The target types a raw configuration value can be coerced into.
///
/// The `Display` form of each variant is the name used in coercion error
/// messages, so it is part of the crate's observable message contract.
///
/// # Examples
///
/// ```
/// use configlands::domain::target_type::TargetType;
///
/// assert_eq!(TargetType::Integer.to_string(), "Integer");
/// assert_eq!(TargetType::Long.to_string(), "Long");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// A raw string, returned as-is.
    String,
    /// A base-10 signed 32-bit integer.
    Integer,
    /// A base-10 signed 64-bit integer.
    Long,
    /// A permissive boolean (`true` iff the raw value equals `"true"` ignoring case).
    Boolean,
    /// A filesystem path.
    Path,
    /// An ordered, semicolon-separated list of filesystem paths.
    PathList,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetType::String => "String",
            TargetType::Integer => "Integer",
            TargetType::Long => "Long",
            TargetType::Boolean => "Boolean",
            TargetType::Path => "Path",
            TargetType::PathList => "Paths",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(TargetType::String.to_string(), "String");
        assert_eq!(TargetType::Integer.to_string(), "Integer");
        assert_eq!(TargetType::Long.to_string(), "Long");
        assert_eq!(TargetType::Boolean.to_string(), "Boolean");
        assert_eq!(TargetType::Path.to_string(), "Path");
        assert_eq!(TargetType::PathList.to_string(), "Paths");
    }

    #[test]
    fn test_copy_and_equality() {
        let target = TargetType::Integer;
        let copied = target;
        assert_eq!(target, copied);
        assert_ne!(TargetType::Integer, TargetType::Long);
    }
}
