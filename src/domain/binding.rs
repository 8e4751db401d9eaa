// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site descriptors binding a consumer to a configuration key.
//!
//! A consumer asks the resolver for a typed value through a [`CallSite`],
//! the opaque caller context of one resolution call. A call site either
//! carries a [`ValueBinding`] naming the configuration key to resolve, or
//! it carries nothing, in which case resolution fails before any provider
//! lookup.

use crate::domain::config_key::ConfigKey;

/// A binding from a call site to a configuration key.
///
/// The binding is an explicit descriptor constructed by the caller; the
/// desired target type is carried separately by the resolver's type
/// parameter.
///
/// # Examples
///
/// ```
/// use configlands::domain::binding::ValueBinding;
///
/// let binding = ValueBinding::new("database.host");
/// assert_eq!(binding.key().as_str(), "database.host");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueBinding {
    key: ConfigKey,
}

impl ValueBinding {
    /// Creates a binding to the given configuration key.
    pub fn new(key: impl Into<ConfigKey>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the configuration key this binding names.
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }
}

/// The caller context presented to the resolver.
///
/// A call site may or may not carry a value binding. Resolving through an
/// unbound call site is a programmer error and fails immediately, ahead of
/// type dispatch and without consulting the value provider.
///
/// # Examples
///
/// ```
/// use configlands::domain::binding::CallSite;
///
/// let bound = CallSite::bound("server.port");
/// assert!(bound.binding().is_some());
///
/// let unbound = CallSite::unbound();
/// assert!(unbound.binding().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    binding: Option<ValueBinding>,
}

impl CallSite {
    /// Creates a call site bound to the given configuration key.
    pub fn bound(key: impl Into<ConfigKey>) -> Self {
        Self {
            binding: Some(ValueBinding::new(key)),
        }
    }

    /// Creates a call site that carries no binding.
    pub fn unbound() -> Self {
        Self { binding: None }
    }

    /// Returns the value binding, if the call site carries one.
    pub fn binding(&self) -> Option<&ValueBinding> {
        self.binding.as_ref()
    }
}

impl From<ValueBinding> for CallSite {
    fn from(binding: ValueBinding) -> Self {
        Self {
            binding: Some(binding),
        }
    }
}
