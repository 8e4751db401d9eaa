// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that the resolver
//! depends on. The traits are implemented by adapters in the adapters layer.

pub mod provider;

// Re-export commonly used types
pub use provider::ValueProvider;
