// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing value provider implementations.
//!
//! This module contains concrete implementations of the [`ValueProvider`]
//! port defined in the ports layer.
//!
//! [`ValueProvider`]: crate::ports::ValueProvider

#[cfg(feature = "env")]
pub mod env_var;
pub mod memory;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarProvider;
pub use memory::MemoryProvider;
