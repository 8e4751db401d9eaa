// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory value provider.
//!
//! This module provides the simplest possible value provider: a map of keys
//! to raw string values, populated up front. It doubles as the standard test
//! vehicle for the resolver.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ValueProvider;
use std::collections::HashMap;

/// A value provider backed by an in-memory map.
///
/// # Examples
///
/// ```rust
/// use configlands::adapters::MemoryProvider;
/// use configlands::ports::ValueProvider;
///
/// let provider = MemoryProvider::new()
///     .with_value("app.name", "demo")
///     .with_value("app.workers", "4");
///
/// assert_eq!(provider.get_str("app.name").unwrap().as_str(), "demo");
/// assert!(provider.get_str("app.missing").is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryProvider {
    values: HashMap<String, String>,
}

impl MemoryProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Creates a provider from an existing map of key-value pairs.
    pub fn from_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Adds a value, builder-style.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Inserts or replaces a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ValueProvider for MemoryProvider {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }
}
