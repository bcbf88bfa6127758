//! Commands module - CLI command implementations.

pub mod check;
pub mod module;
pub mod show;
