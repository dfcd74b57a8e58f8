//! Lazy environment-variable resolution.
//!
//! A [`VariableRegistry`] holds named [`VariableSpec`]s whose attributes may
//! be literals or functions of the registry itself; computed attributes
//! resolve on first read and memoize for the registry's lifetime.

pub mod builder;
pub mod defaults;
pub mod overrides;
pub mod source;
pub mod spec;
mod store;

// Re-export main types
pub use builder::RegistryBuilder;
pub use defaults::default_variables;
pub use overrides::{VariableOverride, VariableOverrides};
pub use source::{Resolver, Setting, ValueSource};
pub use spec::{OutputMode, VariableSpec, VariableSpecBuilder};
pub use store::VariableRegistry;
