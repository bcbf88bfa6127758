//! The unit of configuration: global options plus the module registry.

use serde::{Deserialize, Serialize};

use crate::constants::{
    APP_MENU_COPY, DEPLOYMENT_API, DEPLOYMENT_NAME, DEPLOYMENT_URL, MODULE_APP_MENU,
    MODULE_OPTION_COPY, SCREEN_OPTION_HEADER_SHOWN,
};
use crate::error::DomainResult;
use crate::global::{GlobalOptions, OriginPolicy, ScreenOptions};
use crate::modules::{ModuleRecord, ModulesOptions};

/// Complete configuration of one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsSnapshot {
    #[serde(rename = "globalOptions")]
    pub global: GlobalOptions,
    #[serde(rename = "modulesOptions", default)]
    pub modules: ModulesOptions,
}

impl OptionsSnapshot {
    pub fn new(global: GlobalOptions, modules: ModulesOptions) -> Self {
        Self { global, modules }
    }

    /// Options baked into this build.
    pub fn deployment() -> Self {
        let global = GlobalOptions::new(DEPLOYMENT_NAME, DEPLOYMENT_URL, DEPLOYMENT_API)
            .with_screen_options(ScreenOptions::new().set(SCREEN_OPTION_HEADER_SHOWN, false));

        let modules = ModulesOptions::builder()
            .module(
                MODULE_APP_MENU,
                ModuleRecord::new().with(MODULE_OPTION_COPY, APP_MENU_COPY),
            )
            .build();

        Self::new(global, modules)
    }

    /// Check the snapshot before it is handed to consumers.
    ///
    /// Module records are opaque here; only the global options carry
    /// invariants.
    pub fn check(&self, policy: OriginPolicy) -> DomainResult<()> {
        self.global.check(policy)
    }
}
