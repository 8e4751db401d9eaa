// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable value provider.
//!
//! This module provides an adapter that reads raw configuration values from
//! environment variables.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ValueProvider;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Value provider backed by environment variables.
///
/// Supports optional prefix filtering (e.g., only read variables starting
/// with "APP_") and key transformation (lowercasing, converting underscores
/// to dots). The environment snapshot is cached lazily behind an `RwLock`;
/// caching is this provider's concern, not the resolver's, and [`refresh`]
/// discards the snapshot so the next lookup re-reads the environment.
///
/// [`refresh`]: EnvVarProvider::refresh
///
/// # Examples
///
/// ```rust
/// use configlands::adapters::EnvVarProvider;
///
/// // Read all environment variables
/// let provider = EnvVarProvider::new();
///
/// // Read only variables with a specific prefix
/// let provider = EnvVarProvider::with_prefix("APP_");
/// ```
#[derive(Debug)]
pub struct EnvVarProvider {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Whether to convert keys to lowercase
    lowercase_keys: bool,
    /// Whether to replace underscores with dots
    replace_underscores: bool,
    /// Cached environment variables with interior mutability for thread-safe lazy loading
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl EnvVarProvider {
    /// Creates a provider without prefix filtering.
    ///
    /// This will read all environment variables available to the process.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: true,
            cache: RwLock::new(None),
        }
    }

    /// Creates a provider with prefix filtering.
    ///
    /// Only environment variables starting with the given prefix will be
    /// read. The prefix is stripped from the key when storing values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use configlands::adapters::EnvVarProvider;
    ///
    /// let provider = EnvVarProvider::with_prefix("MYAPP_");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            lowercase_keys: false,
            replace_underscores: true,
            cache: RwLock::new(None),
        }
    }

    /// Sets whether to convert keys to lowercase.
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Sets whether to replace underscores with dots in keys.
    ///
    /// When enabled (default), underscores in environment variable names are
    /// replaced with dots to match the standard configuration key format.
    pub fn replace_underscores(mut self, enabled: bool) -> Self {
        self.replace_underscores = enabled;
        self
    }

    /// Discards the cached environment snapshot.
    ///
    /// The next lookup re-reads the process environment.
    pub fn refresh(&self) {
        let mut cache_guard = self.cache.write().unwrap();
        *cache_guard = None;
    }

    /// Loads environment variables into a new HashMap.
    fn load(&self) -> HashMap<String, String> {
        let mut cache = HashMap::new();

        for (key, value) in env::vars() {
            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            // Apply prefix filtering
            let key = if let Some(prefix) = &self.prefix {
                match key.strip_prefix(prefix) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                }
            } else {
                key
            };

            // Apply transformations
            let mut transformed_key = key;
            if self.lowercase_keys {
                transformed_key = transformed_key.to_lowercase();
            }
            if self.replace_underscores {
                transformed_key = transformed_key.replace('_', ".");
            }

            cache.insert(transformed_key, value);
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?}, lowercase={}, replace_underscores={})",
            cache.len(),
            self.prefix,
            self.lowercase_keys,
            self.replace_underscores
        );

        cache
    }

    /// Gets the cache, loading it if necessary.
    fn get_cache(&self) -> HashMap<String, String> {
        {
            let cache_guard = self.cache.read().unwrap();
            if let Some(cache) = cache_guard.as_ref() {
                return cache.clone();
            }
        }

        let new_cache = self.load();

        {
            let mut cache_guard = self.cache.write().unwrap();
            *cache_guard = Some(new_cache.clone());
        }

        new_cache
    }
}

impl Default for EnvVarProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueProvider for EnvVarProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        let cache = self.get_cache();

        cache
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }
}
