// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value provider trait definition.
//!
//! This module defines the `ValueProvider` trait, the port through which
//! the resolver obtains raw values. Any backing store (environment
//! variables, in-memory maps, remote services, etc.) can implement it.

use crate::domain::{ConfigKey, ConfigValue};

/// A source of raw configuration values.
///
/// The contract is deliberately narrow: a provider maps a configuration key
/// to a raw string value or to absence, nothing more. Whether and how a
/// provider caches, locks, or refreshes is its own concern; the resolver
/// performs exactly one lookup per resolution call and retrieves values
/// fresh every time.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow concurrent resolution
/// from multiple callers.
///
/// # Examples
///
/// ```rust
/// use configlands::ports::ValueProvider;
/// use configlands::domain::{ConfigKey, ConfigValue};
///
/// struct Fixed;
///
/// impl ValueProvider for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         (key.as_str() == "app.name").then(|| ConfigValue::from("demo"))
///     }
/// }
///
/// let provider = Fixed;
/// assert!(provider.get_str("app.name").is_some());
/// assert!(provider.get_str("other").is_none());
/// ```
pub trait ValueProvider: Send + Sync {
    /// Returns the name of this provider.
    ///
    /// Used for logging and debugging; a short identifier like "env" or
    /// "memory".
    fn name(&self) -> &str;

    /// Retrieves the raw value for the given key.
    ///
    /// Returns `Some(value)` if the key has a value in this provider, or
    /// `None` if it is absent.
    fn get(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Retrieves the raw value for the given key string.
    ///
    /// Convenience equivalent of `get(&ConfigKey::from(key))`.
    fn get_str(&self, key: &str) -> Option<ConfigValue> {
        self.get(&ConfigKey::from(key))
    }
}
