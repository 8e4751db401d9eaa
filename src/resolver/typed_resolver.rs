// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed value resolution engine.
//!
//! This module provides [`TypedResolver`], which turns raw string values
//! obtained from a [`ValueProvider`] into strongly-typed results. The
//! resolver itself is stateless and reentrant: every call is an independent,
//! single-pass transformation.

use crate::domain::{CallSite, ConfigError, FromConfigValue, Result};
use crate::ports::ValueProvider;
use std::path::PathBuf;

/// Resolves configuration keys into strongly-typed values.
///
/// Each resolution call follows the same shape: check that the call site
/// carries a value binding, look the key up in the provider, pass absence
/// through as `Ok(None)`, and otherwise coerce the raw value into the
/// requested target type. Coercion failures surface as [`ConfigError`]
/// naming the raw value and the attempted type; nothing is logged, retried,
/// or swallowed.
///
/// # Examples
///
/// ```rust
/// use configlands::adapters::MemoryProvider;
/// use configlands::domain::CallSite;
/// use configlands::resolver::TypedResolver;
///
/// # fn main() -> configlands::domain::Result<()> {
/// let provider = MemoryProvider::new().with_value("retry.limit", "3");
/// let resolver = TypedResolver::new(provider);
///
/// let limit = resolver.resolve_i32(&CallSite::bound("retry.limit"))?;
/// assert_eq!(limit, Some(3));
///
/// let missing = resolver.resolve_i32(&CallSite::bound("retry.delay"))?;
/// assert_eq!(missing, None);
/// # Ok(())
/// # }
/// ```
pub struct TypedResolver<P> {
    provider: P,
}

impl<P: ValueProvider> TypedResolver<P> {
    /// Creates a resolver over the given value provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves the call site's key into a value of type `T`.
    ///
    /// This is the generic entry point; the per-type methods below are thin
    /// wrappers over it. Fails with [`ConfigError::BindingNotPresent`] when
    /// the call site carries no binding, before the provider is consulted.
    /// An absent raw value resolves to `Ok(None)` for every target type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use configlands::adapters::MemoryProvider;
    /// use configlands::domain::CallSite;
    /// use configlands::resolver::TypedResolver;
    ///
    /// # fn main() -> configlands::domain::Result<()> {
    /// let provider = MemoryProvider::new().with_value("feature.enabled", "true");
    /// let resolver = TypedResolver::new(provider);
    ///
    /// let enabled: Option<bool> = resolver.resolve(&CallSite::bound("feature.enabled"))?;
    /// assert_eq!(enabled, Some(true));
    /// # Ok(())
    /// # }
    /// ```
    pub fn resolve<T: FromConfigValue>(&self, site: &CallSite) -> Result<Option<T>> {
        let binding = site.binding().ok_or(ConfigError::BindingNotPresent)?;

        let raw = match self.provider.get(binding.key()) {
            Some(value) => value,
            None => {
                tracing::trace!(
                    key = %binding.key(),
                    provider = self.provider.name(),
                    "no value for key"
                );
                return Ok(None);
            }
        };

        tracing::trace!(
            key = %binding.key(),
            target = %T::TARGET,
            "coercing configuration value"
        );

        T::from_config_value(&raw)
    }

    /// Resolves the call site's key as a string.
    pub fn resolve_string(&self, site: &CallSite) -> Result<Option<String>> {
        self.resolve(site)
    }

    /// Resolves the call site's key as a base-10 signed 32-bit integer.
    pub fn resolve_i32(&self, site: &CallSite) -> Result<Option<i32>> {
        self.resolve(site)
    }

    /// Resolves the call site's key as a base-10 signed 64-bit integer.
    pub fn resolve_i64(&self, site: &CallSite) -> Result<Option<i64>> {
        self.resolve(site)
    }

    /// Resolves the call site's key as a permissive boolean.
    ///
    /// `Some(true)` if and only if the raw value case-insensitively equals
    /// `"true"`; every other present value is `Some(false)`.
    pub fn resolve_bool(&self, site: &CallSite) -> Result<Option<bool>> {
        self.resolve(site)
    }

    /// Resolves the call site's key as a filesystem path, substituting the
    /// temp-directory token.
    pub fn resolve_path(&self, site: &CallSite) -> Result<Option<PathBuf>> {
        self.resolve(site)
    }

    /// Resolves the call site's key as a semicolon-separated list of paths.
    pub fn resolve_paths(&self, site: &CallSite) -> Result<Option<Vec<PathBuf>>> {
        self.resolve(site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigKey, ConfigValue};
    use std::collections::HashMap;

    // Mock provider for testing
    struct MockProvider {
        values: HashMap<String, String>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                values: HashMap::new(),
            }
        }

        fn with_value(mut self, key: &str, value: &str) -> Self {
            self.values.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl ValueProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
            self.values
                .get(key.as_str())
                .map(|v| ConfigValue::from(v.as_str()))
        }
    }

    #[test]
    fn test_resolve_string() {
        let resolver =
            TypedResolver::new(MockProvider::new().with_value("key", "STRING_CONFIGURATION_VALUE"));
        let value = resolver.resolve_string(&CallSite::bound("key")).unwrap();
        assert_eq!(value, Some("STRING_CONFIGURATION_VALUE".to_string()));
    }

    #[test]
    fn test_resolve_unbound_call_site() {
        let resolver = TypedResolver::new(MockProvider::new().with_value("key", "value"));
        let err = resolver.resolve_string(&CallSite::unbound()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Annotation @ConfigurationValue is not present!"
        );
    }

    #[test]
    fn test_resolve_i32() {
        let resolver = TypedResolver::new(MockProvider::new().with_value("key", "123"));
        let value = resolver.resolve_i32(&CallSite::bound("key")).unwrap();
        assert_eq!(value, Some(123));
    }

    #[test]
    fn test_resolve_i32_absent() {
        let resolver = TypedResolver::new(MockProvider::new());
        let value = resolver.resolve_i32(&CallSite::bound("missing")).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_resolve_i32_invalid() {
        let resolver =
            TypedResolver::new(MockProvider::new().with_value("key", "STRING_CONFIGURATION_VALUE"));
        let err = resolver.resolve_i32(&CallSite::bound("key")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot parse given value as Integer: STRING_CONFIGURATION_VALUE"
        );
    }

    #[test]
    fn test_resolve_i64() {
        let resolver =
            TypedResolver::new(MockProvider::new().with_value("key", "123456789123456789"));
        let value = resolver.resolve_i64(&CallSite::bound("key")).unwrap();
        assert_eq!(value, Some(123456789123456789));
    }

    #[test]
    fn test_resolve_bool_permissive() {
        let resolver = TypedResolver::new(
            MockProvider::new()
                .with_value("yes", "True")
                .with_value("no", "STRING_CONFIGURATION_VALUE"),
        );
        assert_eq!(
            resolver.resolve_bool(&CallSite::bound("yes")).unwrap(),
            Some(true)
        );
        assert_eq!(
            resolver.resolve_bool(&CallSite::bound("no")).unwrap(),
            Some(false)
        );
    }

    #[test]
    fn test_resolve_path() {
        let resolver =
            TypedResolver::new(MockProvider::new().with_value("key", "/path/to/something"));
        let value = resolver.resolve_path(&CallSite::bound("key")).unwrap();
        assert_eq!(value, Some(PathBuf::from("/path/to/something")));
    }

    #[test]
    fn test_resolve_paths() {
        let resolver = TypedResolver::new(MockProvider::new().with_value("key", "PATH1;PATH2"));
        let value = resolver.resolve_paths(&CallSite::bound("key")).unwrap();
        assert_eq!(
            value,
            Some(vec![PathBuf::from("PATH1"), PathBuf::from("PATH2")])
        );
    }

    #[test]
    fn test_resolve_paths_empty_vs_absent() {
        let resolver = TypedResolver::new(MockProvider::new().with_value("empty", ""));
        assert_eq!(
            resolver.resolve_paths(&CallSite::bound("empty")).unwrap(),
            Some(Vec::new())
        );
        assert_eq!(
            resolver.resolve_paths(&CallSite::bound("missing")).unwrap(),
            None
        );
    }

    #[test]
    fn test_resolve_generic() {
        let resolver = TypedResolver::new(MockProvider::new().with_value("key", "42"));
        let site = CallSite::bound("key");

        let as_i32: Option<i32> = resolver.resolve(&site).unwrap();
        assert_eq!(as_i32, Some(42));

        let as_string: Option<String> = resolver.resolve(&site).unwrap();
        assert_eq!(as_string, Some("42".to_string()));
    }

    #[test]
    fn test_provider_accessor() {
        let resolver = TypedResolver::new(MockProvider::new());
        assert_eq!(resolver.provider().name(), "mock");
    }
}
