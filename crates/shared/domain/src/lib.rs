//! Domain layer - Configuration data model.
//!
//! This crate contains the option records and their invariants with no
//! infrastructure dependencies. The provider in `common` holds one
//! validated [`OptionsSnapshot`] for the lifetime of the process.

pub mod constants;
pub mod error;
pub mod global;
pub mod modules;
pub mod snapshot;

pub use constants::*;
pub use error::{DomainError, DomainResult, UrlField};
pub use global::{GlobalOptions, OriginPolicy, ScreenOptions};
pub use modules::{ModuleOptions, ModuleRecord, ModulesOptions, ModulesOptionsBuilder};
pub use snapshot::OptionsSnapshot;
