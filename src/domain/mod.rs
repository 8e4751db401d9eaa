// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and coercion rules.
//!
//! This module contains the core domain types for the crate. It is
//! independent of any concrete value provider and defines the fundamental
//! concepts used throughout the library.

pub mod binding;
pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod target_type;

// Re-export commonly used types
pub use binding::{CallSite, ValueBinding};
pub use config_key::ConfigKey;
pub use config_value::{ConfigValue, FromConfigValue, TEMP_DIR_TOKEN};
pub use errors::{ConfigError, Result};
pub use target_type::TargetType;
