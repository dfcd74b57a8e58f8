//! Workspace root crate, kept for the cross-crate integration tests in
//! `tests/`. The actual functionality lives in `envlink-core` and
//! `envlink-cli`.

pub use envlink_core as engine;
