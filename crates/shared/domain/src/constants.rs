//! Domain-level constants.
//!
//! Literal values baked into this build, plus the conventions the
//! deployment triple is checked against.

// =============================================================================
// Deployment
// =============================================================================

/// Deployment (tenant) identifier this build targets
pub const DEPLOYMENT_NAME: &str = "testing-47394";

/// Base web URL of the deployment
pub const DEPLOYMENT_URL: &str = "https://testing-47394.botics.co";

/// Base API URL of the deployment
pub const DEPLOYMENT_API: &str = "https://testing-47394.botics.co/api/v1";

// =============================================================================
// API Conventions
// =============================================================================

/// Path segment appended to the web URL to reach the API
pub const API_PATH_SEGMENT: &str = "/api/v1";

/// Scheme every deployment web URL is expected to use
pub const EXPECTED_WEB_SCHEME: &str = "https";

// =============================================================================
// Screen Options
// =============================================================================

/// Navigation option controlling header visibility
pub const SCREEN_OPTION_HEADER_SHOWN: &str = "headerShown";

// =============================================================================
// Modules
// =============================================================================

/// Registry identifier of the app menu module
pub const MODULE_APP_MENU: &str = "@modules/app-menu";

/// Option key for a module's display string
pub const MODULE_OPTION_COPY: &str = "copy";

/// Display string shown by the app menu
pub const APP_MENU_COPY: &str = "Routes available!";
