//! Global options record and navigation screen defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::{Origin, Url};

use crate::constants::{API_PATH_SEGMENT, EXPECTED_WEB_SCHEME};
use crate::error::{DomainError, DomainResult, UrlField};

/// How a cross-origin `api` is treated when a snapshot is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Reject the snapshot
    #[default]
    Enforce,
    /// Log a warning and accept the snapshot
    Warn,
}

/// Default options applied to every navigation screen unless a route
/// overrides a key.
///
/// Keys belong to the navigation layer and are forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenOptions(BTreeMap<String, Value>);

impl ScreenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value for the key
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a boolean option (`None` if absent or not a boolean)
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Global options of one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalOptions {
    /// Deployment (tenant) identifier
    pub name: String,
    /// Base web URL
    pub url: String,
    /// Base API URL, expected to share `url`'s origin
    pub api: String,
    /// Default navigation screen options
    #[serde(default)]
    pub screen_options: ScreenOptions,
}

impl GlobalOptions {
    pub fn new(name: impl Into<String>, url: impl Into<String>, api: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            api: api.into(),
            screen_options: ScreenOptions::default(),
        }
    }

    /// Build options whose `api` is `url` followed by the standard API path.
    pub fn for_deployment(name: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        let api = format!("{}{}", url.trim_end_matches('/'), API_PATH_SEGMENT);
        Self::new(name, url, api)
    }

    pub fn with_screen_options(mut self, screen_options: ScreenOptions) -> Self {
        self.screen_options = screen_options;
        self
    }

    /// Parsed base web URL
    pub fn web_url(&self) -> DomainResult<Url> {
        parse_absolute(UrlField::Url, &self.url)
    }

    /// Parsed base API URL
    pub fn api_url(&self) -> DomainResult<Url> {
        parse_absolute(UrlField::Api, &self.api)
    }

    /// Origin (scheme, host, port) of the web URL
    pub fn origin(&self) -> DomainResult<Origin> {
        Ok(self.web_url()?.origin())
    }

    /// Resolve a path relative to the API base, keeping the base's own path.
    ///
    /// `api_endpoint("login/")` on `https://host/api/v1` yields
    /// `https://host/api/v1/login/`.
    pub fn api_endpoint(&self, path: &str) -> DomainResult<Url> {
        join_under(UrlField::Api, self.api_url()?, path)
    }

    /// Resolve a path relative to the web base, for user-facing links.
    pub fn web_link(&self, path: &str) -> DomainResult<Url> {
        join_under(UrlField::Url, self.web_url()?, path)
    }

    /// Check the record's invariants.
    ///
    /// Errors are returned in field order: name, url, api, origin.
    pub fn check(&self, policy: OriginPolicy) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        let web = self.web_url()?;
        let api = self.api_url()?;

        if web.scheme() != EXPECTED_WEB_SCHEME {
            tracing::warn!(
                deployment = %self.name,
                scheme = web.scheme(),
                "Web URL does not use {}",
                EXPECTED_WEB_SCHEME
            );
        }

        if web.origin() != api.origin() {
            let err = DomainError::OriginMismatch {
                url: web.origin().ascii_serialization(),
                api: api.origin().ascii_serialization(),
            };
            match policy {
                OriginPolicy::Enforce => return Err(err),
                OriginPolicy::Warn => tracing::warn!(deployment = %self.name, "{}", err),
            }
        }

        Ok(())
    }
}

fn parse_absolute(field: UrlField, value: &str) -> DomainResult<Url> {
    let url = Url::parse(value).map_err(|e| DomainError::malformed_url(field, value, e))?;

    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(DomainError::malformed_url(field, value, "URL has no host"));
    }

    Ok(url)
}

fn join_under(field: UrlField, mut base: Url, path: &str) -> DomainResult<Url> {
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }

    let joined = base
        .join(path.trim_start_matches('/'))
        .map_err(|e| DomainError::malformed_url(field, path, e))?;

    // Absolute URLs and `..` segments must not leave the base.
    if joined.origin() != base.origin() || !joined.path().starts_with(base.path()) {
        return Err(DomainError::malformed_url(
            field,
            path,
            format!("resolves outside {}", base),
        ));
    }

    Ok(joined)
}
