//! Deployment manifests.
//!
//! A manifest is the JSON form of an [`OptionsSnapshot`]. It is read by
//! tooling at deploy time, before the values are baked into a build; the
//! running provider never touches the filesystem.

use std::fs;
use std::path::Path;

use domain::{OptionsSnapshot, OriginPolicy};
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Parse a manifest from its JSON text.
pub fn parse_manifest(json: &str) -> AppResult<OptionsSnapshot> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: impl AsRef<Path>) -> AppResult<OptionsSnapshot> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading manifest");

    let json = fs::read_to_string(path)?;
    parse_manifest(&json)
}

/// Read, parse and check a manifest file.
pub fn check_manifest(
    path: impl AsRef<Path>,
    policy: OriginPolicy,
) -> AppResult<OptionsSnapshot> {
    let snapshot = load_manifest(path)?;
    snapshot.check(policy)?;
    Ok(snapshot)
}

/// Render a snapshot in manifest form.
pub fn render_manifest(snapshot: &OptionsSnapshot) -> AppResult<String> {
    render_json(snapshot)
}

/// Render any part of a snapshot as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(AppError::render)
}
