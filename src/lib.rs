// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed resolution of configuration values.
//!
//! This crate converts raw string configuration values into strongly-typed
//! Rust values. A [`resolver::TypedResolver`] asks a value provider for the
//! raw string bound to a configuration key and coerces it into one of the
//! supported target types: string, `i32`, `i64`, boolean, filesystem path,
//! or a semicolon-separated list of filesystem paths.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and coercion rules (`ConfigKey`,
//!   `ConfigValue`, `CallSite`, errors)
//! - **Ports**: The [`ports::ValueProvider`] trait that supplies raw values
//! - **Adapters**: Provider implementations (in-memory map, environment
//!   variables)
//! - **Resolver**: The typed resolution engine that ties everything together
//!
//! # Coercion rules
//!
//! - An absent raw value resolves to `None` for every target type.
//! - Integer and long values are parsed as base-10 signed numbers; a
//!   malformed or out-of-range string is an error naming the raw value.
//! - Booleans are permissive: `true` if and only if the raw value
//!   case-insensitively equals `"true"`, everything else is `false`.
//! - Path values substitute the `${tmpdir}` token with the platform
//!   temporary directory before parsing.
//! - Path lists split on `;`, coercing each segment as a path in order.
//!
//! # Feature Flags
//!
//! - `env`: Enable the environment variable provider (default)
//!
//! # Quick Start
//!
//! ```rust
//! use configlands::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let provider = MemoryProvider::new()
//!         .with_value("server.port", "8080")
//!         .with_value("cache.dirs", "/var/cache/a;/var/cache/b");
//!
//!     let resolver = TypedResolver::new(provider);
//!
//!     let port = resolver.resolve_i32(&CallSite::bound("server.port"))?;
//!     assert_eq!(port, Some(8080));
//!
//!     let dirs = resolver.resolve_paths(&CallSite::bound("cache.dirs"))?;
//!     assert_eq!(dirs.map(|d| d.len()), Some(2));
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod resolver;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        CallSite, ConfigError, ConfigKey, ConfigValue, FromConfigValue, Result, TargetType,
        ValueBinding,
    };
    pub use crate::ports::ValueProvider;
    pub use crate::resolver::TypedResolver;

    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarProvider;
    pub use crate::adapters::MemoryProvider;
}
