//! Process-wide options provider.
//!
//! The snapshot is checked and installed at most once per process. After
//! that every accessor hands out shared `'static` references to the same
//! records, so consumers can read from any thread without locking and can
//! never mutate what other consumers see.

use domain::{
    DomainResult, GlobalOptions, ModuleRecord, ModulesOptions, OptionsSnapshot, OriginPolicy,
};
use once_cell::sync::OnceCell;

use crate::error::{AppError, AppResult};

static PROVIDER: OnceCell<OptionsProvider> = OnceCell::new();

/// Immutable holder of a checked options snapshot.
#[derive(Debug)]
pub struct OptionsProvider {
    snapshot: OptionsSnapshot,
}

impl OptionsProvider {
    /// Check `snapshot` and wrap it.
    pub fn new(snapshot: OptionsSnapshot, policy: OriginPolicy) -> DomainResult<Self> {
        snapshot.check(policy)?;

        tracing::debug!(
            deployment = %snapshot.global.name,
            modules = snapshot.modules.len(),
            "Options snapshot checked"
        );

        Ok(Self { snapshot })
    }

    /// Provider over the options baked into this build.
    pub fn deployment() -> DomainResult<Self> {
        Self::new(OptionsSnapshot::deployment(), OriginPolicy::default())
    }

    pub fn global(&self) -> &GlobalOptions {
        &self.snapshot.global
    }

    pub fn modules(&self) -> &ModulesOptions {
        &self.snapshot.modules
    }

    /// A module's record, or `None` when the module should use its defaults
    pub fn module(&self, module_id: &str) -> Option<&ModuleRecord> {
        self.snapshot.modules.get(module_id)
    }

    pub fn snapshot(&self) -> &OptionsSnapshot {
        &self.snapshot
    }
}

/// Check and install the baked-in options.
///
/// Call this early in `main` to fail fast on a misconfigured build. If a
/// provider is already installed it is returned unchanged.
pub fn init() -> AppResult<&'static OptionsProvider> {
    PROVIDER.get_or_try_init(|| -> AppResult<OptionsProvider> {
        let provider = OptionsProvider::deployment()?;
        tracing::info!(deployment = %provider.global().name, "Options initialized");
        Ok(provider)
    })
}

/// Install a custom snapshot in place of the baked-in one.
///
/// Must run before the first read. Fails with
/// [`AppError::AlreadyInitialized`] otherwise, leaving the installed
/// snapshot untouched.
pub fn install(
    snapshot: OptionsSnapshot,
    policy: OriginPolicy,
) -> AppResult<&'static OptionsProvider> {
    let provider = OptionsProvider::new(snapshot, policy)?;

    let mut installed = false;
    let current = PROVIDER.get_or_init(|| {
        installed = true;
        provider
    });

    if !installed {
        return Err(AppError::AlreadyInitialized);
    }

    tracing::info!(deployment = %current.global().name, "Options installed");
    Ok(current)
}

/// Whether a snapshot has been installed yet
pub fn is_initialized() -> bool {
    PROVIDER.get().is_some()
}

/// The process-wide provider, initialized with the baked-in options on
/// first use.
///
/// # Panics
/// Panics if the baked-in options are invalid. Consumers must never
/// receive a misconfigured snapshot; call [`init`] at startup to surface
/// the error as a `Result` instead.
pub fn provider() -> &'static OptionsProvider {
    PROVIDER.get_or_init(|| match OptionsProvider::deployment() {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!(code = e.code(), "Baked-in options are invalid: {}", e);
            panic!("Baked-in options are invalid: {}", e);
        }
    })
}

/// Global options of this deployment
pub fn global_options() -> &'static GlobalOptions {
    provider().global()
}

/// Registry of per-module options
pub fn modules_options() -> &'static ModulesOptions {
    provider().modules()
}

/// Options of a single module; `None` means "use the module's defaults"
pub fn module_options(module_id: &str) -> Option<&'static ModuleRecord> {
    provider().module(module_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{DomainError, ScreenOptions, UrlField};

    #[test]
    fn test_deployment_provider() {
        let provider = OptionsProvider::deployment().unwrap();

        assert_eq!(provider.global().name, "testing-47394");
        assert_eq!(
            provider.module("@modules/app-menu").unwrap().get_str("copy"),
            Some("Routes available!")
        );
        assert!(provider.module("@modules/does-not-exist").is_none());
    }

    #[test]
    fn test_rejects_malformed_url() {
        let snapshot = OptionsSnapshot::new(
            GlobalOptions::new(
                "testing-47394",
                "not-a-url",
                "https://testing-47394.botics.co/api/v1",
            ),
            ModulesOptions::default(),
        );

        let err = OptionsProvider::new(snapshot, OriginPolicy::Enforce).unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedUrl { field: UrlField::Url, .. }
        ));
    }

    #[test]
    fn test_origin_policy_is_respected() {
        let global = GlobalOptions::new(
            "testing-47394",
            "https://testing-47394.botics.co",
            "https://api.botics.co/v1",
        )
        .with_screen_options(ScreenOptions::new().set("headerShown", false));
        let snapshot = OptionsSnapshot::new(global, ModulesOptions::default());

        assert!(matches!(
            OptionsProvider::new(snapshot.clone(), OriginPolicy::Enforce),
            Err(DomainError::OriginMismatch { .. })
        ));

        let provider = OptionsProvider::new(snapshot, OriginPolicy::Warn).unwrap();
        assert_eq!(provider.global().api, "https://api.botics.co/v1");
    }
}
