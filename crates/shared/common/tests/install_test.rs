//! Installing a custom snapshot before the first read.
//!
//! Runs as a single test so the steps against the process-wide singleton
//! happen in a fixed order.

use common::{global_options, init, install, is_initialized, module_options, AppError};
use domain::{
    DomainError, GlobalOptions, ModuleRecord, ModulesOptions, OptionsSnapshot, OriginPolicy,
    ScreenOptions,
};

fn staging() -> OptionsSnapshot {
    let global = GlobalOptions::for_deployment("staging-1001", "https://staging-1001.botics.co")
        .with_screen_options(
            ScreenOptions::new()
                .set("headerShown", true)
                .set("animation", "fade"),
        );
    let modules = ModulesOptions::builder()
        .module(
            "@modules/app-menu",
            ModuleRecord::new().with("copy", "Staging routes"),
        )
        .module("@modules/maps", ModuleRecord::new().with("zoom", 12))
        .build();

    OptionsSnapshot::new(global, modules)
}

#[test]
fn test_install_lifecycle() {
    // A rejected snapshot leaves nothing installed.
    let mut broken = staging();
    broken.global.url = "not-a-url".to_string();
    let err = install(broken, OriginPolicy::Enforce).unwrap_err();
    assert!(matches!(
        err,
        AppError::Options(DomainError::MalformedUrl { .. })
    ));
    assert!(!is_initialized());

    // A cross-origin api is accepted only under the warn policy.
    let mut split = staging();
    split.global.api = "https://api.botics.co/v1".to_string();
    let err = install(split.clone(), OriginPolicy::Enforce).unwrap_err();
    assert_eq!(err.code(), "ORIGIN_MISMATCH");
    assert!(!is_initialized());

    let installed = install(split, OriginPolicy::Warn).unwrap();
    assert!(is_initialized());
    assert!(std::ptr::eq(installed.global(), global_options()));
    assert_eq!(global_options().name, "staging-1001");
    assert_eq!(global_options().api, "https://api.botics.co/v1");
    assert_eq!(
        global_options().screen_options.get("animation"),
        Some(&serde_json::Value::from("fade"))
    );
    assert_eq!(
        module_options("@modules/app-menu").unwrap().get_str("copy"),
        Some("Staging routes")
    );
    assert_eq!(
        module_options("@modules/maps").unwrap().get("zoom"),
        Some(&serde_json::Value::from(12))
    );

    // Later installs and init keep the installed snapshot.
    assert!(matches!(
        install(OptionsSnapshot::deployment(), OriginPolicy::Enforce),
        Err(AppError::AlreadyInitialized)
    ));
    let current = init().unwrap();
    assert!(std::ptr::eq(current, installed));
    assert_eq!(global_options().name, "staging-1001");
}
