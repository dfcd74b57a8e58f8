//! envlink-core - resolves interdependent environment-variable
//! specifications into deterministic `.env` text
//!
//! This crate provides functionality to:
//! - Hold named variable specs whose attributes may be computed from other
//!   variables, resolved lazily and memoized per registry instance
//! - Merge externally supplied literal overrides onto the stock table
//! - Render the resolved set into ordered `.env` output
pub mod error;
pub mod generator;
pub mod profile;
pub mod registry;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use generator::EnvGenerator;
pub use profile::{BackendProfile, StaticProfile};
pub use registry::{
    OutputMode, RegistryBuilder, VariableOverride, VariableOverrides, VariableRegistry,
    VariableSpec,
};
