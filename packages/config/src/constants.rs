// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Storekeep

// Backend Configuration
pub const STOREKEEP_API_URL: &str = "STOREKEEP_API_URL";
pub const STOREKEEP_HTTP_TIMEOUT_SECS: &str = "STOREKEEP_HTTP_TIMEOUT_SECS";

// List View Configuration
pub const STOREKEEP_PAGE_SIZE: &str = "STOREKEEP_PAGE_SIZE";

// UI Configuration
pub const STOREKEEP_TOAST_DURATION_MS: &str = "STOREKEEP_TOAST_DURATION_MS";
pub const STOREKEEP_LANG: &str = "STOREKEEP_LANG";

// System Environment Variables
pub const HOME: &str = "HOME";
pub const USERPROFILE: &str = "USERPROFILE"; // Windows
