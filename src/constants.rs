//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "https://pisco.alwaysdata.net";

/// Driver listing endpoint (GET, JSON array)
pub const DRIVERS_PATH: &str = "/get_drivers.php";

/// Document approval endpoint (POST, form field `driver_id`)
pub const APPROVE_PATH: &str = "/approve_driver.php";

/// Balance update endpoint (POST, form fields `driver_id` + `solde`)
pub const BALANCE_PATH: &str = "/update_driver_solde.php";

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "deydem-admin.log";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Deydem Admin";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
