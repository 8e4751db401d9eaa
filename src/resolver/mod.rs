// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolver layer containing the typed resolution engine.

pub mod typed_resolver;

// Re-export commonly used types
pub use typed_resolver::TypedResolver;
