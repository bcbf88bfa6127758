//! Common utilities shared by the options provider and its tooling.
//!
//! This crate provides:
//! - The process-wide options provider
//! - Deployment manifest loading
//! - Unified error handling

pub mod config;
pub mod error;
pub mod manifest;

pub use config::*;
pub use error::{AppError, AppResult};
pub use manifest::{
    check_manifest, load_manifest, parse_manifest, render_json, render_manifest,
};
